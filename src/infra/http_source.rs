use std::marker::PhantomData;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::app::ports::RecordSource;
use crate::error::{Dataset, FetchError, RetrievalError};
use crate::metrics::SourcesMetrics;

/// Reads one dataset from a JSON endpoint shaped `{ "data": [ ... ] }`.
pub struct HttpRecordSource<R> {
    client: reqwest::Client,
    dataset: Dataset,
    url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> HttpRecordSource<R> {
    /// Builds a source with its own client bounded by `timeout`.
    pub fn new(dataset: Dataset, url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, dataset, url))
    }

    pub fn with_client(client: reqwest::Client, dataset: Dataset, url: impl Into<String>) -> Self {
        Self {
            client,
            dataset,
            url: url.into(),
            _record: PhantomData,
        }
    }
}

impl<R: DeserializeOwned> HttpRecordSource<R> {
    async fn fetch_once(&self) -> Result<Vec<R>, RetrievalError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RetrievalError::new(self.dataset, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::new(self.dataset, FetchError::Status(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::new(self.dataset, e))?;
        debug!("Received {} bytes", body.len());

        decode_payload(self.dataset, &body)
    }
}

#[async_trait]
impl<R> RecordSource<R> for HttpRecordSource<R>
where
    R: DeserializeOwned + Send + 'static,
{
    #[instrument(skip(self), fields(dataset = %self.dataset, url = %self.url))]
    async fn fetch_all(&self) -> Result<Vec<R>, RetrievalError> {
        let started = Instant::now();
        let result = self.fetch_once().await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(records) => {
                SourcesMetrics::record_fetch_success(self.dataset, elapsed, records.len());
                info!("Fetched {} {} records", records.len(), self.dataset);
            }
            Err(e) => {
                SourcesMetrics::record_fetch_error(self.dataset, e.cause.kind());
                warn!("Fetch failed: {}", e);
            }
        }
        result
    }
}

/// Extracts and decodes the `data` array of an upstream response body.
pub fn decode_payload<R: DeserializeOwned>(dataset: Dataset, body: &[u8]) -> Result<Vec<R>, RetrievalError> {
    let mut payload: Value = serde_json::from_slice(body)
        .map_err(|e| RetrievalError::invalid_payload(dataset, format!("body is not JSON: {e}")))?;

    let data = match payload.get_mut("data").map(Value::take) {
        Some(data @ Value::Array(_)) => data,
        Some(_) => return Err(RetrievalError::invalid_payload(dataset, "`data` is not an array")),
        None => return Err(RetrievalError::invalid_payload(dataset, "missing `data` field")),
    };

    serde_json::from_value(data)
        .map_err(|e| RetrievalError::invalid_payload(dataset, format!("malformed record: {e}")))
}
