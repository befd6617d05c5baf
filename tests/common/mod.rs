#![allow(dead_code)]

use async_trait::async_trait;
use benefit_report::app::ports::RecordSource;
use benefit_report::error::{Dataset, FetchError, RetrievalError};
use benefit_report::types::{Benefit, Ficha, Filter};

/// In-memory source returning a fixed snapshot, or failing with a fixed status.
pub struct StaticSource<R> {
    dataset: Dataset,
    outcome: Result<Vec<R>, u16>,
}

impl<R> StaticSource<R> {
    pub fn new(dataset: Dataset, records: Vec<R>) -> Self {
        Self { dataset, outcome: Ok(records) }
    }

    pub fn failing(dataset: Dataset, status: u16) -> Self {
        Self { dataset, outcome: Err(status) }
    }
}

#[async_trait]
impl<R: Clone + Send + Sync + 'static> RecordSource<R> for StaticSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, RetrievalError> {
        match &self.outcome {
            Ok(records) => Ok(records.clone()),
            Err(status) => Err(RetrievalError::new(self.dataset, FetchError::Status(*status))),
        }
    }
}

pub fn benefit(program_id: i64, amount: i64, date: &str) -> Benefit {
    let received = format!("{}/{}/{}", &date[8..10], &date[5..7], &date[..4]);
    Benefit::new(program_id, amount, received, date)
}

pub fn filter(program_id: i64, min: i64, max: i64, ficha_id: i64) -> Filter {
    Filter {
        program_id,
        procedure_name: format!("Program {program_id}"),
        min,
        max,
        ficha_id,
    }
}

pub fn emprende_ficha() -> Ficha {
    Ficha {
        id: 922,
        name: "Emprende".to_string(),
        program_id: 147,
        url: "emprende".to_string(),
        category: "trabajo".to_string(),
        description: "Fondos concursables para nuevos negocios".to_string(),
    }
}

pub fn suf_ficha() -> Ficha {
    Ficha {
        id: 2042,
        name: "Subsidio Familiar (SUF)".to_string(),
        program_id: 130,
        url: "subsidio_familiar_suf".to_string(),
        category: "bonos".to_string(),
        description: "Beneficio económico mensual entregado a madres, padres o tutores".to_string(),
    }
}
