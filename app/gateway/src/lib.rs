//! Scout gateway: configuration, agent construction and the SSE server.

pub mod builder;
pub mod config;
pub mod router;
pub mod serve;
pub mod utils;

pub use builder::{GatewayAgent, build_agent};
pub use config::{Config, ConfigError};
pub use router::router;
pub use serve::{ServeHandle, serve};
