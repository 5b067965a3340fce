//! Test fixtures for integration tests.

use std::time::Duration;

/// A relay server running on a background task for the duration of a test.
pub struct TestServer {
    port: u16,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start the server on `127.0.0.1:port` and wait until it accepts
    /// connections.
    pub async fn start(port: u16) -> Self {
        let handle = tokio::spawn(async move {
            if let Err(e) = danwa_server::run_server("127.0.0.1", port).await {
                eprintln!("test server error: {e}");
            }
        });

        for _ in 0..100 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port))
                .await
                .is_ok()
            {
                return Self { port, handle };
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("test server did not start on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
