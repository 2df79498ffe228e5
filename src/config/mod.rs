//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → lifecycle::startup attaches modules in file order
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at start-up; modules are never hot-swapped
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{GuardConfig, ModuleConfig, ObservabilityConfig, RegistryConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
