//! Service layer: the pure form-validation engine and the durable session
//! store built on a small file-backed JSON document store.
//! - Validation is stateless; callers feed it a `FormData` + `RuleSet`.
//! - Session persistence hides behind the `SessionStore` trait so screens
//!   stay testable without touching the filesystem.

pub mod errors;
pub mod validation;
pub mod storage;
pub mod session;
