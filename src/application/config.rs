use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "cardflow",
    version,
    about = "Cardflow: stateless chat webhook serving contact and ticket card flows"
)]
pub struct Args {
    #[arg(long, env = "CARDFLOW_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "CARDFLOW_MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    #[arg(long, env = "CARDFLOW_RUNTIME_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub runtime_version: String,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "CARDFLOW_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
    pub runtime_version: String,
    pub log_filter: String,
    pub json_logs: bool,
}

impl RuntimeConfig {
    pub fn from_args(args: Args) -> Result<Self, String> {
        if args.port == 0 {
            return Err("port must be greater than 0".to_owned());
        }
        if args.max_body_bytes == 0 {
            return Err("max_body_bytes must be greater than 0".to_owned());
        }

        let runtime_version = args.runtime_version.trim();
        let runtime_version = if runtime_version.is_empty() {
            env!("CARGO_PKG_VERSION").to_owned()
        } else {
            runtime_version.to_owned()
        };

        Ok(Self {
            host: args.host,
            port: args.port,
            max_body_bytes: args.max_body_bytes,
            runtime_version,
            log_filter: args.log_filter,
            json_logs: args.json_logs,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn for_test(host: IpAddr, port: u16) -> Self {
        Self {
            host,
            port,
            max_body_bytes: 64 * 1024,
            runtime_version: "test".to_owned(),
            log_filter: "warn".to_owned(),
            json_logs: false,
        }
    }
}
