//! @acp:module "Catalog"
//! @acp:summary "Immutable trait catalog: records, vocabularies, loading and checks"
//! @acp:domain catalog
//! @acp:layer feature

pub mod loader;
pub mod types;
pub mod validate;

pub use loader::{load_builtin_catalog, load_catalog, load_catalog_file};
pub use types::*;
pub use validate::{check_catalog, CatalogIssue};
