use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// One-shot HTTP responder standing in for the vendor's raw-file
/// endpoint. Binds an ephemeral local port, answers exactly one request
/// with the canned status and body, then closes the connection.
pub struct ListServer {
    url: String,
    handle: Option<JoinHandle<()>>,
}

impl ListServer {
    pub fn serve(status: u16, reason: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture listener addr");
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };
            // Drain the request head before answering.
            let mut head = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        head.extend_from_slice(&buf[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });

        Self {
            url: format!("http://{addr}/transport_security_state_static.json"),
            handle: Some(handle),
        }
    }

    pub fn serve_list(body: &str) -> Self {
        Self::serve(200, "OK", body)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ListServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A URL nothing listens on: bind an ephemeral port to learn its number,
/// then release it before anyone connects.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);
    format!("http://{addr}/transport_security_state_static.json")
}
