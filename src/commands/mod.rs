//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command lives in its own submodule and exposes an options struct
//! plus an `execute_*` entry point.

pub mod find;
pub mod init;
pub mod interactive;
pub mod options;
pub mod validate;

pub use find::{build_selection, execute_find, run_find, FindOptions};
pub use init::{execute_init, InitOptions};
pub use interactive::{apply_picks, execute_interactive, InteractiveOptions};
pub use options::{execute_options, list_options, CategoryListing, OptionUsage, OptionsOptions};
pub use validate::{execute_validate, ValidateOptions};
