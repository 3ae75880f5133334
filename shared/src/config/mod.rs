//! Configuration modules loaded from the environment at startup

pub mod server;

pub use server::ServerConfig;
