//! Persisted session state.
//!
//! The session records which API endpoint the CLI talks to, the tokens it
//! authenticates with, and which organization and space are targeted.
//!
//! # Modules
//!
//! - [`configuration`] - The serialized session record
//! - [`persistor`] - Where the record is loaded from and flushed to
//! - [`store`] - [`SessionStore`], the single owner of the record during an invocation

pub mod configuration;
pub mod persistor;
pub mod store;

pub use configuration::Configuration;
pub use persistor::{default_config_path, FilePersistor, MemoryPersistor, Persistor};
pub use store::SessionStore;
