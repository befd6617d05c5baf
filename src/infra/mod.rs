pub mod http_source;

pub use http_source::{decode_payload, HttpRecordSource};

use std::sync::Arc;

use crate::app::ReportUseCase;
use crate::config::SourcesConfig;
use crate::error::{Dataset, Result};
use crate::types::{Benefit, Ficha, Filter};

/// Wires the report use case to the configured HTTP feeds.
pub fn http_report_use_case(config: &SourcesConfig) -> Result<ReportUseCase> {
    let timeout = config.timeout();
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let benefits = HttpRecordSource::<Benefit>::with_client(
        client.clone(),
        Dataset::Benefits,
        &config.benefits_url,
    );
    let filters =
        HttpRecordSource::<Filter>::with_client(client.clone(), Dataset::Filters, &config.filters_url);
    let fichas = HttpRecordSource::<Ficha>::with_client(client, Dataset::Fichas, &config.fichas_url);

    Ok(ReportUseCase::new(Arc::new(benefits), Arc::new(filters), Arc::new(fichas)))
}
