pub mod client;
pub mod error;
pub mod format;
pub mod server;
pub mod tools;
pub mod types;
pub mod url;
pub mod validation;

pub use client::SearXNGClient;
pub use server::SearXNGServer;
pub use types::*;
