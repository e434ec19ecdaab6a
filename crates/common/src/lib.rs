pub mod config;
pub mod error;

pub use config::{AddressConfig, ConfigError};
pub use error::{AddressError, Result};
