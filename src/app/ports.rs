use async_trait::async_trait;

use crate::error::RetrievalError;

/// One upstream dataset that can be read in full.
#[async_trait]
pub trait RecordSource<R: Send + 'static>: Send + Sync {
    /// Fetch every record. A single attempt, no retries.
    async fn fetch_all(&self) -> Result<Vec<R>, RetrievalError>;
}
