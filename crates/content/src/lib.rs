//! Read-only access to the headless content store.
//!
//! - [`models`] -- the view models pages consume.
//! - [`queries`] -- the fixed GROQ queries issued against the store.
//! - [`source`] -- the [`ContentSource`] seam and the [`Fetched`] outcome.
//! - [`client`] -- the HTTP implementation of [`ContentSource`].
//! - [`repo`] -- typed reads combining a query with its view model.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod repo;
pub mod source;

pub use client::ContentClient;
pub use config::ContentConfig;
pub use error::ContentError;
pub use repo::ContentRepo;
pub use source::{ContentSource, Fetched, QueryParams};
