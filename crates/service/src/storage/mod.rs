//! Storage abstractions for the service layer
//!
//! A small file-backed document store for state that must survive process
//! restarts without reaching for a database.

pub mod json_doc_store;
