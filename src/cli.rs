use clap::Parser;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

#[derive(Parser, Debug)]
#[command(
    name = "thing-load-tester",
    version,
    about = "Runs the fixed read/write request sequence against a web thing and checks status codes"
)]
pub struct Cli {
    /// Base URL of the thing under test.
    #[arg(long, env = "url", default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub url: Url,

    /// Number of iterations to run, one after another.
    #[arg(long, default_value_t = 1)]
    pub iterations: u64,

    /// Index of the first iteration. Payloads are derived from the index.
    #[arg(long, default_value_t = 0)]
    pub start_iteration: u64,
}

fn parse_base_url(s: &str) -> Result<Url, String> {
    let url: Url = s.parse().map_err(|err| format!("{err}"))?;
    if url.scheme() != "http" {
        return Err(format!("unsupported scheme '{}', expected http", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("url has no host".to_string());
    }
    Ok(url)
}
