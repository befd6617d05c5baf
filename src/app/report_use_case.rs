use std::sync::Arc;

use crate::app::ports::RecordSource;
use crate::error::RetrievalError;
use crate::pipeline::build_report;
use crate::types::{Benefit, Ficha, Filter, YearGroup};

/// Fetches the three datasets and runs them through the pipeline.
pub struct ReportUseCase {
    benefits: Arc<dyn RecordSource<Benefit>>,
    filters: Arc<dyn RecordSource<Filter>>,
    fichas: Arc<dyn RecordSource<Ficha>>,
}

impl ReportUseCase {
    pub fn new(
        benefits: Arc<dyn RecordSource<Benefit>>,
        filters: Arc<dyn RecordSource<Filter>>,
        fichas: Arc<dyn RecordSource<Ficha>>,
    ) -> Self {
        Self {
            benefits,
            filters,
            fichas,
        }
    }

    /// Sources are read one after another; the first failure aborts the
    /// report and nothing partial is returned.
    pub async fn produce_report(&self) -> Result<Vec<YearGroup>, RetrievalError> {
        let benefits = self.benefits.fetch_all().await?;
        let filters = self.filters.fetch_all().await?;
        let fichas = self.fichas.fetch_all().await?;

        Ok(build_report(&benefits, &filters, &fichas))
    }
}
