//! Async client for the GoTribe admin console API.
//!
//! One module per console resource under [`api`], each shaping its
//! operations into the exact method + path the server routes, dispatched
//! through a shared [`AdminClient`]. Schemas and status tables live in the
//! `contracts` crate; this crate owns the transport, the configuration
//! layer and the console utilities (spreadsheet export, page titles).

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod shared;

pub use client::AdminClient;
pub use config::{load_settings, Settings};
pub use error::ApiError;
