//! HTTP-level handlers and error mapping

pub mod error;
