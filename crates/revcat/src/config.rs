use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings, taken from flags or the environment.
#[derive(Clone, Debug, Parser)]
#[command(name = "revcat", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Config {
    /// Port to listen on. An empty `PORT` falls back to the default.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Address to bind. Only settable by flag; defaults to all interfaces.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}

fn parse_port(value: &str) -> Result<u16, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    value
        .parse()
        .map_err(|e| format!("invalid port {value:?}: {e}"))
}
