use std::time::Duration;

use futures_util::StreamExt;
use reader_logging::reader_debug;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{decode_text, ExtractError};

/// How the extraction service is reached. Both are equivalent to the caller:
/// one URL in, one text out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// `POST {endpoint}` with a JSON body; text read from `content`, then `data`.
    #[default]
    ScrapeJson,
    /// `GET {endpoint}?{query_param}={url}`; the response body is the text.
    TextQuery,
}

#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    pub transport: Transport,
    pub endpoint: String,
    pub query_param: String,
    pub extractor_format: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            transport: Transport::ScrapeJson,
            endpoint: "http://localhost:8787/scrape".to_string(),
            query_param: "url".to_string(),
            extractor_format: "markdown".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The external content-extraction collaborator: URL in, cleaned text out.
#[async_trait::async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    options: ScrapeOptions<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeOptions<'a> {
    extractor_format: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpExtractor {
    settings: ExtractorSettings,
}

impl HttpExtractor {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, ExtractError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ExtractError::Network(err.to_string()))
    }

    fn build_request(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> Result<reqwest::RequestBuilder, ExtractError> {
        let mut endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ExtractError::InvalidEndpoint(err.to_string()))?;

        let request = match self.settings.transport {
            Transport::ScrapeJson => client.post(endpoint).json(&ScrapeRequest {
                url,
                options: ScrapeOptions {
                    extractor_format: &self.settings.extractor_format,
                },
            }),
            Transport::TextQuery => {
                endpoint
                    .query_pairs_mut()
                    .append_pair(&self.settings.query_param, url);
                client.get(endpoint)
            }
        };
        Ok(request)
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> ExtractError {
        if err.is_timeout() {
            return ExtractError::Timeout(self.settings.request_timeout);
        }
        ExtractError::Network(err.to_string())
    }
}

#[async_trait::async_trait]
impl Extractor for HttpExtractor {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let client = self.build_client()?;
        let response = self
            .build_request(&client, url)?
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus(status.as_u16()));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ExtractError::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| self.map_reqwest_error(err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ExtractError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        reader_debug!("extraction response: {} bytes, content-type {:?}", bytes.len(), content_type);

        let text = match self.settings.transport {
            Transport::ScrapeJson => scrape_payload_text(&bytes)?,
            Transport::TextQuery => decode_text(&bytes, content_type.as_deref())?,
        };
        if text.is_empty() {
            return Err(ExtractError::EmptyPayload);
        }
        Ok(text)
    }
}

/// Picks the extracted text out of a scrape response: `content` first, then `data`.
fn scrape_payload_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let payload: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| ExtractError::MalformedPayload(err.to_string()))?;
    if !payload.is_object() {
        return Err(ExtractError::MalformedPayload(
            "expected a JSON object".to_string(),
        ));
    }

    ["content", "data"]
        .iter()
        .filter_map(|field| payload.get(*field).and_then(serde_json::Value::as_str))
        .find(|text| !text.is_empty())
        .map(ToOwned::to_owned)
        .ok_or(ExtractError::EmptyPayload)
}
