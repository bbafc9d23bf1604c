use std::collections::BTreeMap;

use super::filter::FilterContext;

pub const TOTAL: &str = "total";

/// Named metrics derived from a fetched list. Missing metrics read as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    metrics: BTreeMap<&'static str, f64>,
}

impl StatisticsSummary {
    pub fn new(total: usize) -> Self {
        Self {
            metrics: BTreeMap::from([(TOTAL, total as f64)]),
        }
    }

    pub fn with(mut self, name: &'static str, value: f64) -> Self {
        self.metrics.insert(name, value);
        self
    }

    pub fn with_count(self, name: &'static str, value: usize) -> Self {
        self.with(name, value as f64)
    }

    pub fn get(&self, name: &str) -> f64 {
        self.metrics.get(name).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> usize {
        self.get(TOTAL) as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.metrics.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for StatisticsSummary {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Entity type with dashboard statistics.
///
/// Always computed from the unfiltered list.
pub trait Summarize: Sized {
    fn summarize(items: &[Self], ctx: &FilterContext) -> StatisticsSummary;
}

pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

pub fn sum_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(f).sum()
}

/// Mean of `f` over `items`; 0 for an empty list.
pub fn average_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        0.0
    } else {
        sum_by(items, f) / items.len() as f64
    }
}

/// `part / whole` as a percentage; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metric_reads_zero() {
        let s = StatisticsSummary::new(3).with("paid", 2.0);
        assert_eq!(s.total(), 3);
        assert_eq!(s.get("paid"), 2.0);
        assert_eq!(s.get("overdue"), 0.0);
    }

    #[test]
    fn test_helpers_on_empty_input() {
        let empty: Vec<f64> = vec![];
        assert_eq!(count_where(&empty, |_| true), 0);
        assert_eq!(sum_by(&empty, |v| *v), 0.0);
        assert_eq!(average_by(&empty, |v| *v), 0.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_helpers() {
        let values = vec![12.0, 15.5, 9.0, 17.5];
        assert_eq!(count_where(&values, |v| *v >= 12.0), 3);
        assert_eq!(sum_by(&values, |v| *v), 54.0);
        assert_eq!(average_by(&values, |v| *v), 13.5);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
