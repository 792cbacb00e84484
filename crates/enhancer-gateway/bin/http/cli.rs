use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "ENHANCER_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "ENHANCER_PUBLIC_BASE_URL";
pub const KEY_LENGTH_ENV: &str = "ENHANCER_KEY_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "ENHANCER_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "ENHANCER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "enhancer-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Scheme and host that enhanced URLs are built on.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = KEY_LENGTH_ENV,
        default_value_t = enhancer_core::DEFAULT_KEY_LENGTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=enhancer_core::MAX_KEY_LENGTH as u64)
    )]
    pub key_length: usize,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = enhancer_shortener::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}
