use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Command-line options, each falling back to an environment variable
/// (`.env` is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "social-circles")]
#[command(about = "Community meet-up events browsable by interest")]
pub struct ServerConfig {
    #[arg(long, env = "SOCIAL_CIRCLES_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "SOCIAL_CIRCLES_PORT", default_value_t = 8880)]
    pub port: u16,

    /// tracing-subscriber filter directive
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}
