//! Pure join/filter/group pipeline: index → filter+enrich → group.
//!
//! Nothing here performs I/O or logs; every call builds fresh indices and
//! returns a fresh report.

pub mod aggregate;
pub mod enrich;
pub mod index;

pub use aggregate::group_by_year;
pub use enrich::{classify, filter_and_enrich, Exclusion};
pub use index::{index_by, index_fichas, index_filters};

use crate::types::{Benefit, Ficha, Filter, YearGroup};

/// Correlates the three snapshots into the year-grouped report.
pub fn build_report(benefits: &[Benefit], filters: &[Filter], fichas: &[Ficha]) -> Vec<YearGroup> {
    let filter_index = index_filters(filters);
    let ficha_index = index_fichas(fichas);
    let enriched = filter_and_enrich(benefits, &filter_index, &ficha_index);
    group_by_year(enriched)
}
