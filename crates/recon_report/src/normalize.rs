//! Normalization from tool-specific items to the canonical report.

use crate::finding::Finding;
use crate::report::Report;

/// Map decoded tool items into a report.
///
/// Total and pure: no item is dropped, merged, or reordered. Zero items
/// produce `Report::Empty`.
#[must_use]
pub fn normalize<I>(items: Vec<I>) -> Report
where
    I: Into<Finding>,
{
    Report::from_findings(items.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::report::ReportKind;
    use proptest::prelude::*;

    fn arb_finding() -> impl Strategy<Value = Finding> {
        (
            "[A-Za-z][A-Za-z .-]{0,16}",
            "[0-9.]{0,6}",
            any::<i64>(),
            prop::collection::vec(prop::sample::select(Category::ALL), 0..4),
        )
            .prop_map(|(name, version, confidence, categories)| {
                Finding::new(name, version, confidence).with_categories(categories)
            })
    }

    #[test]
    fn test_normalize_empty() {
        let report = normalize(Vec::<Finding>::new());
        assert_eq!(report, Report::Empty);
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        let item = Finding::new("jQuery", "1.11.1", 100);
        let report = normalize(vec![item.clone(), item]);
        assert_eq!(report.findings().len(), 2);
    }

    proptest! {
        #[test]
        fn prop_normalize_preserves_items(items in prop::collection::vec(arb_finding(), 0..12)) {
            let report = normalize(items.clone());
            if items.is_empty() {
                prop_assert_eq!(report.kind(), ReportKind::Empty);
            } else {
                prop_assert_eq!(report.kind(), ReportKind::TechnologyList);
                prop_assert_eq!(report.findings(), items.as_slice());
            }
        }

        #[test]
        fn prop_normalize_deterministic(items in prop::collection::vec(arb_finding(), 0..12)) {
            prop_assert_eq!(normalize(items.clone()), normalize(items));
        }
    }
}
