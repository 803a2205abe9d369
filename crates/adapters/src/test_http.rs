// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot HTTP/1.1 server replaying a canned response

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub(crate) struct CannedServer {
    pub url: String,
    request: JoinHandle<String>,
}

impl CannedServer {
    /// Raw request head the server received
    pub async fn request(self) -> String {
        self.request.await.unwrap()
    }
}

/// Accept one connection, read the request head, then write `parts` in
/// order with a short pause between them so each arrives as its own read.
pub(crate) async fn serve(parts: Vec<Vec<u8>>) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        for part in parts {
            socket.write_all(&part).await.unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&head).into_owned()
    });

    CannedServer { url, request }
}

/// Complete response with a fixed-length body
pub(crate) fn response(status: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
    .into_bytes()
}

/// Head of a `200 OK` chunked response
pub(crate) fn chunked_head() -> Vec<u8> {
    b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ntransfer-encoding: chunked\r\nconnection: close\r\n\r\n"
        .to_vec()
}

/// One chunk of a chunked body; an empty `data` ends the body
pub(crate) fn chunk(data: &str) -> Vec<u8> {
    format!("{:x}\r\n{}\r\n", data.len(), data).into_bytes()
}
