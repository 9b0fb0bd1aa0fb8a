//! Folio portfolio site server library.
//!
//! Exposes the building blocks (config, state, error handling, page
//! composers, views, routes) so integration tests, the static exporter and
//! the binary entrypoint share one code path.

pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
