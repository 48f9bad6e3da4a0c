// src/core/net.rs
// Blocking HTTPS GET through ureq. One request per run, no retry.

use std::time::Duration;

use log::{ debug, info };
use ureq::Agent;

use crate::config::consts::{ HTTP_TIMEOUT_SECS, USER_AGENT };
use crate::error::{ Error, Result };

/// Anything that can turn a URL into a page body.
/// The runner only talks to this, so tests can stand in for the network.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        // Status codes are checked by hand: only 200 proceeds.
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self { Self::new() }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        info!("GET {url}");
        let mut resp = self.agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::Status(status));
        }
        let body = resp.body_mut().read_to_string()?;
        debug!("{} bytes from {url}", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ Read, Write };
    use std::net::TcpListener;
    use std::thread::{ self, JoinHandle };

    /// Answer one request on a local port; the handle yields the raw request.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/dh", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 { break; }
                req.extend_from_slice(&buf[..n]);
            }
            let resp = format!(
                "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
            String::from_utf8_lossy(&req).to_ascii_lowercase()
        });
        (url, handle)
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::with_timeout(Duration::from_secs(5))
    }

    #[test]
    fn not_found_is_a_status_error() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found", "gone");
        let err = fetcher().get(&url).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, Error::Status(404)));
        assert_eq!(err.to_string(), "Failed to retrieve the page. Status code: 404");
    }

    #[test]
    fn other_success_codes_are_rejected_too() {
        let (url, server) = serve_once("HTTP/1.1 201 Created", "<table></table>");
        let res = fetcher().get(&url);
        server.join().unwrap();
        assert!(matches!(res, Err(Error::Status(201))));
    }

    #[test]
    fn ok_returns_body_unchanged() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "<table><tr><td>UR5</td></tr></table>");
        let body = fetcher().get(&url).unwrap();
        let request = server.join().unwrap();

        assert_eq!(body, "<table><tr><td>UR5</td></tr></table>");
        assert!(request.starts_with("get /dh "));
        assert!(request.contains("user-agent: dh_scrape/"));
    }
}
