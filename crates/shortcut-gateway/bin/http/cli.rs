use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SHORTCUT_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "SHORTCUT_GATEWAY_PUBLIC_BASE_URL";
pub const CODE_LENGTH_ENV: &str = "SHORTCUT_GATEWAY_CODE_LENGTH";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CODE_LENGTH: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "shortcut-gateway-http-server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL that shortened links are advertised under.
    #[arg(
        long,
        env = PUBLIC_BASE_URL_ENV,
        default_value = DEFAULT_PUBLIC_BASE_URL,
    )]
    pub public_base_url: String,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value_t = DEFAULT_CODE_LENGTH,
    )]
    pub code_length: usize,
}
