//! Cumulus - command-line client for a multi-tenant cloud platform.
//!
//! Cumulus talks to a Cloud Controller style API (organizations, spaces,
//! applications, service brokers) and keeps a small session on disk: the
//! API endpoint, tokens and the targeted organization and space. Every
//! command declares the preconditions it needs; the runner checks them in
//! order before the command touches the session or the API.
//!
//! # Modules
//!
//! - [`api`] - Repository traits, HTTP implementations and test fakes
//! - [`cli`] - Global flags, commands, registry and dispatcher
//! - [`config`] - The persisted session and its store
//! - [`error`] - Error types and result aliases
//! - [`models`] - Entity records and log lines
//! - [`requirements`] - Preconditions evaluated before a command runs
//! - [`runner`] - Per-invocation lifecycle
//! - [`ui`] - Terminal output, prompts and the test UI
//!
//! # Example
//!
//! ```
//! use cumulus::api::fake::{session_with_defaults, FakeRepositories};
//! use cumulus::cli::CommandDispatcher;
//! use cumulus::models::Organization;
//! use cumulus::ui::MockUI;
//!
//! let fakes = FakeRepositories::new();
//! fakes.organizations.add(Organization::new("org-guid", "old-org"));
//!
//! let mut ui = MockUI::new();
//! let mut session = session_with_defaults();
//! let args = vec!["old-org".to_string(), "-f".to_string()];
//! let outcome = CommandDispatcher::default().dispatch(
//!     Some("delete-org"),
//!     &args,
//!     &mut ui,
//!     &mut session,
//!     &fakes.repositories(),
//! );
//!
//! assert!(outcome.success());
//! assert!(ui.has_output("Deleting org old-org as my-user..."));
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod requirements;
pub mod runner;
pub mod ui;

pub use error::{CumulusError, Result};
