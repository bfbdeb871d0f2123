use bytes::Bytes;
use http::header::{CONTENT_TYPE, HOST};
use http::{Method, Request, StatusCode};
use http_body_util::Full;
use hyper_util::rt::TokioIo;
use std::fmt;
use tokio::net::TcpStream;
use url::Url;

use crate::payload::Payload;
use crate::Result;

/// A single HTTP call of an iteration together with the status it must answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRequest {
    pub name: &'static str,
    pub method: Method,
    /// Appended to the path of the base URL. Empty targets the base URL itself.
    pub path: &'static str,
    pub json_data: Option<Payload>,
    pub expected_status: StatusCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status(StatusCode),
    /// The call never produced a status: connect, write or encode failure.
    Failed(String),
}

/// Pass/fail record of one call. Produced for every call, failed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub method: Method,
    pub url: Url,
    pub expected: StatusCode,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.failure().is_none()
    }

    pub fn failure(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Status(status) if *status == self.expected => None,
            Outcome::Status(status) => Some(format!(
                "http status does not match expected {}, but got {status}",
                self.expected
            )),
            Outcome::Failed(err) => Some(format!("request failed: {err}")),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed() { "ok" } else { "FAILED" };
        write!(f, "[{mark}] {} ({} {})", self.name, self.method, self.url)?;
        if let Some(reason) = self.failure() {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

impl TestRequest {
    pub fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::GET,
            path,
            json_data: None,
            expected_status: StatusCode::OK,
        }
    }

    pub fn with_json(
        name: &'static str,
        method: Method,
        path: &'static str,
        payload: Payload,
        expected_status: StatusCode,
    ) -> Self {
        Self {
            name,
            method,
            path,
            json_data: Some(payload),
            expected_status,
        }
    }

    /// Issues the call and records the outcome. Never fails: every error
    /// becomes a failed check.
    pub async fn test(&self, base: &Url) -> CheckResult {
        let url = endpoint(base, self.path);

        let outcome = match self.fetch_res(&url).await {
            Ok(status) => Outcome::Status(status),
            Err(err) => Outcome::Failed(err.to_string()),
        };

        CheckResult {
            name: self.name,
            method: self.method.clone(),
            url,
            expected: self.expected_status,
            outcome,
        }
    }

    async fn fetch_res(&self, url: &Url) -> Result<StatusCode> {
        let host = url.host_str().ok_or("url has no host")?;
        let port = url
            .port_or_known_default()
            .ok_or("url has no port and no known default")?;
        let addr = format!("{}:{}", host, port);

        let stream = TcpStream::connect(addr).await?;

        let (mut sender, conn) =
            hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
        tokio::task::spawn(async move {
            if let Err(err) = conn.await {
                log::debug!("Connection failed: {:?}", err);
            }
        });

        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let target = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let mut req = Request::builder()
            .method(self.method.clone())
            .uri(target)
            .header(HOST, authority);

        let body = match &self.json_data {
            Some(payload) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Bytes::from(serde_json::to_vec(payload)?)
            }
            None => Bytes::new(),
        };

        log::debug!("{} {}", self.method, url);
        let res = sender.send_request(req.body(Full::new(body))?).await?;

        Ok(res.status())
    }
}

/// `{base}{path}` with the base path kept as a prefix.
pub fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!("{}{}", base.path().trim_end_matches('/'), path);
    if joined.is_empty() {
        url.set_path("/");
    } else {
        url.set_path(&joined);
    }
    url
}
