#![deny(rust_2018_idioms)]
#![warn(missing_docs)]

//! Detects and compares the version of the server implementation a plugin is running under.
//!
//! Server implementations name their internal packages after the revision they were built for,
//! such as `org.bukkit.craftbukkit.v1_16_R2`. This crate maps that revision token onto an ordered
//! [`ServerVersion`] so plugin code can branch on it without parsing version strings itself.
//!
//! ```
//! # use server_version::{ServerVersion, VersionCell};
//! let cell = VersionCell::new();
//! let version = cell.get_or_resolve("org.bukkit.craftbukkit.v1_12_R1");
//!
//! assert_eq!(version, ServerVersion::V1_12_R1);
//! assert!(version.is_legacy());
//! assert!(version.is_older_than(ServerVersion::V1_13_R1));
//! ```

/// Loads version detection settings from a JSON config file.
pub mod config;
mod current;
mod error;
/// Defines where the server package name comes from.
pub mod host;
mod version;

pub use config::{load_config, VersionConfig};
pub use current::{current, init_current, VersionCell};
pub use error::UnknownVersionError;
pub use host::{nms_version, EnvHost, ServerHost, PACKAGE_NAME_VAR};
pub use version::ServerVersion;
