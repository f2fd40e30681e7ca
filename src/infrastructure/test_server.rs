//! Loopback HTTP responders for tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/activity/rank", listener.local_addr().unwrap());
    (listener, url)
}

fn respond(stream: &mut TcpStream, status: u16, body: &str) {
    read_request(stream);
    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Answers one request with `status` and a JSON `body`, returning the URL.
pub fn serve_once(status: u16, body: &'static str) -> String {
    let (listener, url) = bind();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            respond(&mut stream, status, body);
        }
    });
    url
}

/// Answers every request with the same response and counts connections.
pub fn serve_counting(status: u16, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let (listener, url) = bind();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            respond(&mut stream, status, body);
        }
    });
    (url, hits)
}

/// Accepts one request and never answers it within `hold`.
pub fn serve_stalled(hold: Duration) -> String {
    let (listener, url) = bind();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            thread::sleep(hold);
        }
    });
    url
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let (listener, url) = bind();
    drop(listener);
    url
}
