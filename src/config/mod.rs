//! Configuration loading and schema.
//!
//! The optional `.envcheck.yml` file supplies project-specific validators
//! and probe settings:
//!
//! ```yaml
//! timeout: 30
//! validators:
//!   internal-cli:
//!     command: internal-cli --version
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, project_config_path, CONFIG_FILE_NAME};
pub use schema::{CustomValidator, EnvCheckConfig};
