//! HTTP client to interact with the Instagram website.

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use std::io::Read;
use url::Url;

/// Instagram serves a stripped-down payload (or a login wall) to unknown
/// agents, so present a regular browser.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:92.0) Gecko/20100101 Firefox/92.0";

/// A simple HTTP client for the two GET requests of the pipeline.
///
/// No retries and no cookies: each failed request is reported as-is.
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    agent: ureq::Agent,
}

impl Client {
    /// Initialize a new client.
    pub fn new() -> Self {
        Self {
            agent: ureq::builder().user_agent(USER_AGENT).build(),
        }
    }

    /// Calls `url` and parses the JSON response.
    ///
    /// A non-2xx status fails before the body is looked at.
    pub fn get_json<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self
            .agent
            .request_url("GET", url)
            .set("accept", "application/json");
        let response = request.call().context("HTTP request failed")?;

        serde_json::from_reader(response.into_reader()).context("read JSON")
    }

    /// Downloads the image at `url` into the given buffer.
    pub fn get_image(&self, url: &Url, buf: &mut Vec<u8>) -> Result<()> {
        let request =
            self.agent.request_url("GET", url).set("accept", "image/*");

        let response = request.call().context("HTTP request failed")?;
        response
            .into_reader()
            .read_to_end(buf)
            .context("read image")?;

        Ok(())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
