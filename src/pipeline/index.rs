use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{Ficha, Filter};

pub type FilterIndex<'a> = HashMap<i64, &'a Filter>;
pub type FichaIndex<'a> = HashMap<i64, &'a Ficha>;

/// Builds a lookup table keyed by `key` in a single pass.
///
/// When two records share a key the later one in iteration order wins.
/// Upstream keys are expected to be unique, so a collision usually points at
/// bad source data rather than something the report should rely on.
pub fn index_by<'a, T, K, F>(records: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.insert(key(record), record);
    }
    index
}

pub fn index_filters(filters: &[Filter]) -> FilterIndex<'_> {
    index_by(filters, |f| f.program_id)
}

pub fn index_fichas(fichas: &[Ficha]) -> FichaIndex<'_> {
    index_by(fichas, |f| f.id)
}
