#![allow(dead_code)]

use congress_contacts::prelude::*;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

pub const LEGISLATORS_YAML: &str = include_str!("../fixtures/legislators-current.yaml");
pub const SOCIAL_MEDIA_YAML: &str = include_str!("../fixtures/legislators-social-media.yaml");

/// Number of legislators in the fixture file
pub const FIXTURE_LEGISLATORS: usize = 14;

/// Serves documents from memory, keyed by URL
pub struct StaticSource(pub HashMap<String, String>);

impl StaticSource {
    /// Source serving both fixture documents at the given config's URLs
    pub fn fixtures(config: &Config) -> Self {
        let mut docs = HashMap::new();
        docs.insert(config.legislators_url.clone(), LEGISLATORS_YAML.to_string());
        docs.insert(config.social_media_url.clone(), SOCIAL_MEDIA_YAML.to_string());
        Self(docs)
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.0
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Config(format!("no fixture for {}", url)))
    }
}

/// Canned HTTP response for one path
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &'static str, body: &str) -> Self {
        Self {
            path,
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: String::new(),
        }
    }
}

/// Minimal HTTP/1.1 server on a random local port. Unknown paths get a 404.
/// The accept thread lives until the test process exits.
pub struct FixtureServer {
    addr: SocketAddr,
}

impl FixtureServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");

        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => handle(stream, &routes),
                    Err(_) => break,
                }
            }
        });

        Self { addr }
    }

    /// Server hosting both fixture datasets
    pub fn with_fixtures() -> Self {
        Self::start(vec![
            Route::ok("/legislators-current.yaml", LEGISLATORS_YAML),
            Route::ok("/legislators-social-media.yaml", SOCIAL_MEDIA_YAML),
        ])
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

fn handle(mut stream: TcpStream, routes: &[Route]) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers
    let mut line = String::new();
    while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
        if line == "\r\n" || line == "\n" {
            break;
        }
        line.clear();
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes
        .iter()
        .find(|route| route.path == path)
        .map(|route| (route.status, route.body.as_str()))
        .unwrap_or((404, ""));

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/yaml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// An address that refuses connections
pub fn closed_port_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}{}", addr, path)
}
