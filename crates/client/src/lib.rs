//! HTTP client for the event-platform API.
//! - `http`: the raw transport — single-attempt JSON calls with bearer
//!   auth and normalized errors.
//! - `auth` / `categories`: typed wrappers over the fixed endpoint set,
//!   behind traits so screens can run against mocks.

pub mod errors;
pub mod http;
pub mod auth;
pub mod categories;
