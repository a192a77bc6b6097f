//! Multi-tenant clinic backend.
//!
//! Exposes the HTTP API (`server`) and its wire types (`model`) as a library so the
//! binary and the integration tests build the same router.

pub mod model;
pub mod server;
