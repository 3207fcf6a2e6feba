use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

/// A loopback stand-in for the analysis service answering one request.
pub struct StubBackend {
    pub base_url: String,
    requests: mpsc::Receiver<Vec<u8>>,
}

impl StubBackend {
    pub fn respond_json(status_line: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        Self::respond_raw(response.into_bytes())
    }

    pub fn respond_raw(response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, requests) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = stream.write_all(&response);
                let _ = tx.send(request);
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Raw bytes of the request the backend received.
    pub fn received(&self) -> String {
        let bytes = self
            .requests
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("backend received a request");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while let Ok(read) = stream.read(&mut buf) {
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
        let Some(body_start) = request
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .map(|pos| pos + 4)
        else {
            continue;
        };
        let head = String::from_utf8_lossy(&request[..body_start]).to_ascii_lowercase();
        let expected = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if request.len() - body_start >= expected {
            break;
        }
    }
    request
}
