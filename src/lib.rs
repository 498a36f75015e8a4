//! Botfile - typed service lookup over Bot Framework `.bot` files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error enum and Result alias
//! └── core/             # Core library components
//!     ├── cipher        # AES-192-CBC password-based field cipher
//!     ├── config        # .bot document root
//!     ├── loader        # .bot discovery and JSON parsing
//!     ├── registry      # Typed service lookup with one-time decryption
//!     ├── service       # Service records and the sensitive-field table
//!     └── views         # Per-kind typed views over resolved records
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use botfile::ServiceRegistry;
//!
//! # fn main() -> botfile::Result<()> {
//! let mut registry = ServiceRegistry::from_directory(
//!     std::path::Path::new("."),
//!     std::env::var("BOT_SECRET").ok(),
//! )?;
//!
//! // Sensitive fields are decrypted on first resolution.
//! let endpoint = registry.endpoint(None)?;
//! let password = endpoint.app_password();
//! # let _ = password;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::cipher::{DecryptOutcome, DecryptStatus};
pub use crate::core::config::BotConfiguration;
pub use crate::core::registry::ServiceRegistry;
pub use crate::core::service::{ServiceKind, ServiceRecord};
pub use crate::error::{BotfileError, Result};
