//! Roster - sequential id assignment for submitted users
//!
//! This crate provides a unified API over the core types and the HTTP server.
//!
//! # Example
//!
//! ```ignore
//! use roster::{CreationHandler, User};
//!
//! let handler = CreationHandler::default();
//! let user = handler.create(User::new("Ada", "Lovelace", "ada@example.com", "active"));
//! assert_eq!(user.id, Some(1));
//! ```

// Re-export server types
pub use roster_server::config::ServerConfig;
pub use roster_server::{router, serve, AppState};

// Re-export core types
pub use roster_core::errors::RosterError;
pub use roster_core::RosterResult;
pub use roster_core::{CreationHandler, IdAllocator, User};
