//! CLI command handlers.

pub mod concurrency;
pub mod defaults;
pub mod info;
pub mod validate;

pub use concurrency::run_concurrency;
pub use defaults::run_defaults;
pub use info::run_info;
pub use validate::{ValidateInput, run_validate};
