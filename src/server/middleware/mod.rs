//! Request guards called at the top of each handler.
//!
//! - `auth` - Bearer token guard resolving the caller and their clinic
//! - `gateway` - Shared key guard for the bot relay routes

pub mod auth;
pub mod gateway;

#[cfg(test)]
mod test;
