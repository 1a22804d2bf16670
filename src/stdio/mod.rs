// src/stdio/mod.rs
pub mod dispatch;
pub mod metadata;
pub mod server;

pub use dispatch::{ToolName, invoke};
pub use server::{ReasoningServer, SERVER_NAME, SERVER_VERSION};
