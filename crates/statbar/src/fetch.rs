use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Envelope, Item};

pub const USER_AGENT: &str = concat!("statbar/", env!("CARGO_PKG_VERSION"));

/// The transport default is unbounded; a stuck service must not wedge the
/// menu bar, so the client always carries a timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One fetch of widget items per menu section. Implemented over HTTP in
/// production; tests substitute an in-memory source.
pub trait ItemSource {
    fn fetch(&self, endpoint: &str) -> Result<Vec<Item>>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
    api: String,
    token: String,
}

impl HttpSource {
    pub fn new(api: &str, token: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api: api.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

impl ItemSource for HttpSource {
    fn fetch(&self, endpoint: &str) -> Result<Vec<Item>> {
        let url = format!("{}{endpoint}", self.api);
        fetch_items(&self.client, &url, &self.token)
    }
}

/// Single blocking GET, no retries. Non-2xx and transport failures map to
/// their own error variants so the assembler can show one inline error line
/// for the section.
pub fn fetch_items(
    client: &reqwest::blocking::Client,
    url: &str,
    token: &str,
) -> Result<Vec<Item>> {
    debug!(url, "fetching widget items");
    let res = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::AUTHORIZATION, format!("Token {token}"))
        .send()
        .map_err(|e| Error::transport(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::http_status(format!("{url} returned {status}")));
    }

    let envelope: Envelope = res
        .json()
        .map_err(|e| Error::decode(format!("malformed envelope from {url}: {e}")))?;
    debug!(url, count = envelope.results.len(), "fetched widget items");
    Ok(envelope.results)
}
