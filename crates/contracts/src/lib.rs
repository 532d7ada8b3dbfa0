//! Shared contracts for the GoTribe admin console API.
//!
//! Request/response schema types for every console resource, the static
//! status tables that translate wire codes into display labels, and the
//! form-level validation helpers. Pure data, no I/O.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
