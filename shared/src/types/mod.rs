//! Shared type definitions

pub mod response;
