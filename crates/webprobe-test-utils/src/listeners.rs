// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw TCP fixtures for failure modes a mock HTTP server cannot produce.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const PLAIN_HTTP_REPLY: &[u8] = b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n";

/// A port that speaks plain HTTP to whoever connects, so a TLS client's
/// handshake fails on the first record it reads.
pub struct NonTlsListener {
    host: String,
    task: JoinHandle<()>,
}

impl NonTlsListener {
    pub async fn spawn() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let host = listener.local_addr()?.to_string();

        let task = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    if stream.write_all(PLAIN_HTTP_REPLY).await.is_err() {
                        return;
                    }
                    // Hold the connection until the client gives up.
                    let mut buf = [0u8; 1024];
                    while matches!(stream.read(&mut buf).await, Ok(n) if n > 0) {}
                });
            }
        });

        Ok(Self { host, task })
    }

    /// `127.0.0.1:<port>`, without a scheme.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Drop for NonTlsListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A `127.0.0.1:<port>` that refuses connections.
///
/// The port is bound and released immediately.
pub async fn closed_port_host() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let host = listener.local_addr()?.to_string();
    drop(listener);
    Ok(host)
}
