//! Common library for the Reservant client
//!
//! This crate provides shared infrastructure used by the client library,
//! currently the stored bearer-token slot and its error types.

pub mod error;
pub mod storage;
