use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::repositories::catalog_repo::{LatencyProfile, QuerySettings};

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    /// Comma separated list of allowed CORS origins.
    #[clap(env, long, default_value = "http://localhost:8081")]
    pub origin_urls: String,

    /// JSON file replacing the bundled restaurant catalog.
    #[clap(env, long)]
    pub catalog_path: Option<PathBuf>,

    /// Delay every call the way the mock mobile API did.
    #[clap(env, long)]
    pub simulate_latency: bool,

    #[clap(env, long, default_value_t = 5000)]
    pub request_timeout_ms: u64,
}

impl Config {
    pub fn query_settings(&self) -> QuerySettings {
        let latency = if self.simulate_latency {
            LatencyProfile::mock_api()
        } else {
            LatencyProfile::none()
        };

        QuerySettings {
            latency,
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }

    pub fn origins(&self) -> Vec<&str> {
        self.origin_urls
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}
