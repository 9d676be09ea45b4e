use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use cardflow::application::{config::RuntimeConfig, startup};
use serde_json::Value;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub(crate) struct ServerHandle {
    pub(crate) addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl ServerHandle {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub(crate) async fn post_event(&self, path: &str, event: &Value) -> (reqwest::StatusCode, Value) {
        let response = reqwest::Client::new()
            .post(self.url(path))
            .json(event)
            .send()
            .await
            .expect("webhook request should return");
        let status = response.status();
        let payload = response.json().await.expect("webhook should return json");
        (status, payload)
    }

    pub(crate) async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let _ = self.join.await;
    }
}

pub(crate) async fn spawn_server() -> ServerHandle {
    spawn_server_with(|_: &mut RuntimeConfig| {}).await
}

pub(crate) async fn spawn_server_with(configure: impl FnOnce(&mut RuntimeConfig)) -> ServerHandle {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("listener should bind");
    let addr = listener
        .local_addr()
        .expect("listener should expose local addr");

    let mut config = RuntimeConfig::for_test(IpAddr::V4(Ipv4Addr::LOCALHOST), addr.port());
    configure(&mut config);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        let _ = startup::run_with_listener(listener, config, async {
            let _ = shutdown_rx.await;
        })
        .await;
    });

    ServerHandle {
        addr,
        shutdown: Some(shutdown_tx),
        join,
    }
}
