//! Minimal HTTP/1.1 server for probe integration tests.
//!
//! Answers every request on a connection with the configured behavior and
//! keeps the head of each request it read. Connections that send nothing
//! (connect-only probes) are dropped after the read timeout.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Size of each body write, so the client sees the body in several pieces.
const CHUNK: usize = 1024;

#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 OK with the full body.
    Serve(Vec<u8>),
    /// Any status line with extra header lines (each ending in `\r\n`) and a body.
    Respond {
        status: &'static str,
        headers: &'static str,
        body: Vec<u8>,
    },
    /// Advertise the full body but send only `sent` bytes, then hold the
    /// connection open for `stall`.
    Stall {
        body: Vec<u8>,
        sent: usize,
        stall: Duration,
    },
    /// Read the request and close without answering.
    CloseWithoutReply,
}

/// A running server and the request heads it has received, oldest first.
pub struct Server {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Server {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Returns its base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(behavior: Behavior) -> String {
    start_server(behavior).url
}

/// Like `start` but keeps a handle for inspecting received requests.
pub fn start_server(behavior: Behavior) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let behavior = Arc::new(behavior);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let behavior = Arc::clone(&behavior);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &behavior, &seen));
        }
    });
    Server {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// A URL on a loopback port with nothing listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, behavior: &Behavior, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let head = request.split("\r\n\r\n").next().unwrap_or("").to_string();
    seen.lock().unwrap().push(head);

    match behavior {
        Behavior::Serve(body) => {
            write_head(&mut stream, "200 OK", "", body.len());
            write_body(&mut stream, body);
        }
        Behavior::Respond {
            status,
            headers,
            body,
        } => {
            write_head(&mut stream, status, headers, body.len());
            write_body(&mut stream, body);
        }
        Behavior::Stall { body, sent, stall } => {
            write_head(&mut stream, "200 OK", "", body.len());
            write_body(&mut stream, &body[..(*sent).min(body.len())]);
            thread::sleep(*stall);
        }
        Behavior::CloseWithoutReply => {}
    }
}

fn write_head(stream: &mut TcpStream, status: &str, headers: &str, len: usize) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\n{}Connection: close\r\n\r\n",
        status, len, headers
    );
    let _ = stream.write_all(head.as_bytes());
}

fn write_body(stream: &mut TcpStream, body: &[u8]) {
    for chunk in body.chunks(CHUNK) {
        if stream.write_all(chunk).is_err() {
            return;
        }
        let _ = stream.flush();
    }
}
