use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format of `Benefit::event_date`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A monetary disbursement tied to a program, as returned by the benefits feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    #[serde(rename = "monto")]
    pub amount: i64,
    /// Display-formatted date (`dd/mm/yyyy`), passed through untouched.
    #[serde(rename = "fecha_recepcion")]
    pub received_date: String,
    #[serde(rename = "fecha")]
    pub event_date: String,
    #[serde(rename = "ano", default)]
    pub year: Option<String>,
    #[serde(rename = "view", default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub ficha: Option<Ficha>,
}

fn default_visible() -> bool {
    true
}

impl Benefit {
    pub fn new(
        program_id: i64,
        amount: i64,
        received_date: impl Into<String>,
        event_date: impl Into<String>,
    ) -> Self {
        Self {
            program_id,
            amount,
            received_date: received_date.into(),
            event_date: event_date.into(),
            year: None,
            visible: true,
            ficha: None,
        }
    }

    /// Calendar year of `event_date`, or `None` when it does not start with an
    /// ISO date. A trailing time part (`2023-11-09T10:00:00`,
    /// `2023-11-09 10:00:00Z`) is ignored.
    pub fn event_year(&self) -> Option<i32> {
        let (date, rest) = NaiveDate::parse_and_remainder(&self.event_date, ISO_DATE_FORMAT).ok()?;
        (rest.is_empty() || rest.starts_with(['T', ' '])).then(|| date.year())
    }

    pub fn with_year(self, year: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            ..self
        }
    }

    pub fn with_ficha(self, ficha: Ficha) -> Self {
        Self {
            ficha: Some(ficha),
            ..self
        }
    }
}

/// Admissible amount range for one program plus the sheet that describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    #[serde(rename = "tramite")]
    pub procedure_name: String,
    pub min: i64,
    pub max: i64,
    pub ficha_id: i64,
}

impl Filter {
    /// Inclusive on both bounds. `min <= max` is not checked; an inverted
    /// range admits nothing.
    pub fn admits(&self, amount: i64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Descriptive sheet for a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ficha {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    pub url: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// One bucket of the report: every enriched benefit sharing a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    #[serde(rename = "ano")]
    pub year: String,
    /// Widened so a year of large amounts cannot overflow.
    #[serde(rename = "total_monto")]
    pub total_amount: i128,
    #[serde(rename = "num")]
    pub count: usize,
    #[serde(rename = "beneficios")]
    pub benefits: Vec<Benefit>,
}
