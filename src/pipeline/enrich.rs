use crate::pipeline::index::{FichaIndex, FilterIndex};
use crate::types::Benefit;

/// Why a benefit was left out of the report. These are ordinary outcomes, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// No filter is registered for the benefit's program.
    NoFilter,
    /// The amount is outside the filter's `[min, max]` range.
    AmountOutOfRange,
    /// The filter points at a ficha that does not exist.
    MissingFicha,
    /// `event_date` is not an ISO date, so no year can be derived.
    InvalidDate,
}

/// Decides whether `benefit` survives and, if so, returns an enriched copy
/// carrying its year and resolved ficha.
pub fn classify(
    benefit: &Benefit,
    filters: &FilterIndex<'_>,
    fichas: &FichaIndex<'_>,
) -> Result<Benefit, Exclusion> {
    let filter = filters
        .get(&benefit.program_id)
        .ok_or(Exclusion::NoFilter)?;
    if !filter.admits(benefit.amount) {
        return Err(Exclusion::AmountOutOfRange);
    }
    let ficha = fichas.get(&filter.ficha_id).ok_or(Exclusion::MissingFicha)?;
    let year = benefit.event_year().ok_or(Exclusion::InvalidDate)?;

    Ok(benefit
        .clone()
        .with_year(format!("{year:04}"))
        .with_ficha((*ficha).clone()))
}

/// Keeps the benefits that pass [`classify`], in input order.
pub fn filter_and_enrich(
    benefits: &[Benefit],
    filters: &FilterIndex<'_>,
    fichas: &FichaIndex<'_>,
) -> Vec<Benefit> {
    benefits
        .iter()
        .filter_map(|b| classify(b, filters, fichas).ok())
        .collect()
}
