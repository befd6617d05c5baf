use std::collections::BTreeMap;

use crate::types::{Benefit, YearGroup};

/// Partitions enriched benefits by their derived year.
///
/// Groups come out most recent year first (numeric comparison); benefits in a
/// group are sorted ascending by `event_date`, ties keep their input order.
/// Benefits that carry no numeric year are not grouped.
pub fn group_by_year(benefits: Vec<Benefit>) -> Vec<YearGroup> {
    let mut buckets: BTreeMap<i32, Vec<Benefit>> = BTreeMap::new();
    for benefit in benefits {
        let Some(year) = benefit.year.as_deref().and_then(|y| y.parse::<i32>().ok()) else {
            continue;
        };
        buckets.entry(year).or_default().push(benefit);
    }

    buckets
        .into_iter()
        .rev()
        .map(|(year, mut benefits)| {
            benefits.sort_by(|a, b| a.event_date.cmp(&b.event_date));
            YearGroup {
                year: format!("{year:04}"),
                total_amount: benefits.iter().map(|b| i128::from(b.amount)).sum(),
                count: benefits.len(),
                benefits,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(amount: i64, date: &str) -> Benefit {
        Benefit::new(147, amount, "", date).with_year(&date[..4])
    }

    #[test]
    fn test_groups_sorted_by_year_descending() {
        let groups = group_by_year(vec![
            enriched(10, "2021-03-01"),
            enriched(20, "2023-11-09"),
            enriched(30, "2022-11-09"),
        ]);

        let years: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, vec!["2023", "2022", "2021"]);
    }

    #[test]
    fn test_benefits_sorted_by_date_ascending_within_year() {
        let groups = group_by_year(vec![
            enriched(1, "2023-11-09"),
            enriched(2, "2023-01-15"),
            enriched(3, "2023-05-09"),
        ]);

        assert_eq!(groups.len(), 1);
        let dates: Vec<&str> = groups[0].benefits.iter().map(|b| b.event_date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-15", "2023-05-09", "2023-11-09"]);
    }

    #[test]
    fn test_totals_and_counts() {
        let groups = group_by_year(vec![
            enriched(40656, "2023-11-09"),
            enriched(10000, "2023-05-09"),
            enriched(500, "2022-01-01"),
        ]);

        assert_eq!(groups[0].year, "2023");
        assert_eq!(groups[0].total_amount, 50656);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].year, "2022");
        assert_eq!(groups[1].total_amount, 500);
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn test_total_does_not_overflow() {
        let groups = group_by_year(vec![
            enriched(i64::MAX, "2023-01-01"),
            enriched(1, "2023-02-01"),
            enriched(i64::MAX, "2023-03-01"),
        ]);

        assert_eq!(groups[0].total_amount, 2 * i128::from(i64::MAX) + 1);
        assert_eq!(groups[0].count, 3);
    }

    #[test]
    fn test_numeric_year_ordering() {
        let groups = group_by_year(vec![
            Benefit::new(1, 1, "", "0999-01-01").with_year("999"),
            Benefit::new(1, 1, "", "1000-01-01").with_year("1000"),
        ]);

        let years: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, vec!["1000", "0999"]);
    }

    #[test]
    fn test_same_date_keeps_input_order() {
        let groups = group_by_year(vec![enriched(1, "2023-01-01"), enriched(2, "2023-01-01")]);
        let amounts: Vec<i64> = groups[0].benefits.iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![1, 2]);
    }

    #[test]
    fn test_unenriched_benefits_are_skipped() {
        let groups = group_by_year(vec![Benefit::new(1, 1, "", "2023-01-01")]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_year(Vec::new()).is_empty());
    }
}
