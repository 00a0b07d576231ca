use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use url::Url;

use crate::error::ExtractError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const OFFERS_REFERER: &str = "https://www.royalcaribbean.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Pdf(Vec<u8>),
    /// The server answered with something other than a PDF; nothing was saved.
    Skipped { status: u16, content_type: String },
}

#[must_use]
pub fn is_pdf_response(status: u16, content_type: &str) -> bool {
    status == 200 && content_type.contains("application/pdf")
}

#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new() -> Result<Self, ExtractError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/pdf"));
        headers.insert(REFERER, HeaderValue::from_static(OFFERS_REFERER));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Returns an error on transport failures and timeouts.
    pub fn fetch_pdf(&self, url: &Url) -> Result<DownloadOutcome, ExtractError> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        tracing::debug!(%url, status, content_type = %content_type, "offer document response");

        if !is_pdf_response(status, &content_type) {
            return Ok(DownloadOutcome::Skipped {
                status,
                content_type,
            });
        }

        Ok(DownloadOutcome::Pdf(response.bytes()?.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::is_pdf_response;

    #[test]
    fn accepts_only_ok_pdf_responses() {
        assert!(is_pdf_response(200, "application/pdf"));
        assert!(is_pdf_response(200, "application/pdf; charset=binary"));
        assert!(!is_pdf_response(200, "text/html; charset=utf-8"));
        assert!(!is_pdf_response(404, "application/pdf"));
    }
}
