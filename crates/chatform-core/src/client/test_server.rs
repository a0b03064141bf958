//! Throwaway HTTP server for client tests
//!
//! Answers every request with the same canned reply and records what it
//! was sent. Runs on its own thread so tests can drive the client from any
//! runtime flavour.

use std::io::{Cursor, Read};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tiny_http::{Header, Response, Server, StatusCode};

/// Canned response
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    /// Empty body with the given status
    Status(u16),
    /// 200 with a body of unknown length, sent with chunked transfer encoding
    Chunked(Vec<Vec<u8>>),
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) struct TestServer {
    addr: SocketAddr,
    server: Arc<Server>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread: Option<JoinHandle<()>>,
}

impl TestServer {
    pub fn start(reply: Reply) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let thread = thread::spawn({
            let server = server.clone();
            let recorded = requests.clone();
            move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    recorded.lock().unwrap().push(RecordedRequest {
                        method: request.method().to_string(),
                        path: request.url().to_string(),
                        headers: request
                            .headers()
                            .iter()
                            .map(|h| (h.field.to_string(), h.value.to_string()))
                            .collect(),
                        body,
                    });

                    let _ = match &reply {
                        Reply::Status(code) => request.respond(Response::empty(StatusCode(*code))),
                        Reply::Chunked(chunks) => request.respond(streamed_body(chunks)),
                    };
                }
            }
        });

        Self {
            addr,
            server,
            requests,
            thread: Some(thread),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// No length is given, so the body goes out chunked
fn streamed_body(chunks: &[Vec<u8>]) -> Response<Cursor<Vec<u8>>> {
    let content_type =
        Header::from_bytes(&b"Content-Type"[..], &b"text/plain; charset=utf-8"[..]).unwrap();
    Response::new(
        StatusCode(200),
        vec![content_type],
        Cursor::new(chunks.concat()),
        None,
        None,
    )
}

/// URL of a local port with nothing listening
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
