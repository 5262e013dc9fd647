//! Configuration for an installation check.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pheno_check::config::{load_config, VerifyConfig};
//!
//! let config = load_config(None).unwrap();
//! assert_eq!(config, VerifyConfig::default());
//! assert_eq!(config.cli.timeout_secs, 10);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{
    CliConfig, Dependency, DependencyConfig, ImportTarget, PackageConfig, VerifyConfig,
    MAX_TIMEOUT_SECS,
};
pub use validator::{is_identifier, is_module_path, validate, validate_config, ValidationError};
