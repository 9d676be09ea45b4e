use std::{sync::Arc, time::Instant};

use serde_json::{Value, json};

use crate::application::config::RuntimeConfig;

/// Read-only process state shared by handlers. Nothing about an in-flight
/// flow is stored here.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: RuntimeConfig,
    started_at: Instant,
}

impl SharedState {
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            inner: Arc::new(InnerState {
                config,
                started_at: Instant::now(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn uptime_ms(&self) -> u64 {
        u64::try_from(self.inner.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn health_payload(&self) -> Value {
        json!({
            "ok": true,
            "service": env!("CARGO_PKG_NAME"),
            "version": self.config().runtime_version,
            "uptimeMs": self.uptime_ms(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::SharedState;
    use crate::application::config::RuntimeConfig;

    #[test]
    fn health_payload_reports_version() {
        let state = SharedState::new(RuntimeConfig::for_test(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            8080,
        ));

        let payload = state.health_payload();
        assert_eq!(payload["ok"], true);
        assert_eq!(payload["service"], "cardflow");
        assert_eq!(payload["version"], "test");
    }
}
