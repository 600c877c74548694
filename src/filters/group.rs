use super::types::AdHocFilter;

/// Filters sharing one key within one inclusion class.
#[derive(Debug, Clone)]
pub struct KeyGroup<'a> {
    pub key: &'a str,
    pub filters: Vec<&'a AdHocFilter>,
}

/// The result of splitting a filter list by inclusion class and grouping
/// by key. Key order is first-seen order within each class; member order
/// within a group is input order.
#[derive(Debug, Clone, Default)]
pub struct FilterGroups<'a> {
    pub positive: Vec<KeyGroup<'a>>,
    pub negative: Vec<KeyGroup<'a>>,
}

/// Partition `filters` into inclusive and exclusive classes, then group
/// each class by key.
///
/// Multiple same-class filters on one key are a logical OR within that
/// key; different keys combine with AND. This is the shared primitive
/// behind the label, metadata, and field renderers and the tag-value
/// join.
pub fn group_by_key_and_inclusion(filters: &[AdHocFilter]) -> FilterGroups<'_> {
    let mut groups = FilterGroups::default();

    for filter in filters {
        let class = if filter.operator.is_inclusive() {
            &mut groups.positive
        } else {
            &mut groups.negative
        };
        match class.iter().position(|group| group.key == filter.key) {
            Some(idx) => class[idx].filters.push(filter),
            None => class.push(KeyGroup {
                key: &filter.key,
                filters: vec![filter],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::operators::FilterOp;

    #[test]
    fn test_groups_split_by_inclusion() {
        let filters = vec![
            AdHocFilter::new("level", FilterOp::Equal, "info"),
            AdHocFilter::new("level", FilterOp::NotEqual, "debug"),
            AdHocFilter::new("cluster", FilterOp::Equal, "eu-west"),
        ];

        let groups = group_by_key_and_inclusion(&filters);
        assert_eq!(groups.positive.len(), 2);
        assert_eq!(groups.negative.len(), 1);
        assert_eq!(groups.positive[0].key, "level");
        assert_eq!(groups.positive[1].key, "cluster");
        assert_eq!(groups.negative[0].key, "level");
    }

    #[test]
    fn test_key_order_is_first_seen_not_sorted() {
        let filters = vec![
            AdHocFilter::new("zone", FilterOp::Equal, "a"),
            AdHocFilter::new("app", FilterOp::Equal, "api"),
            AdHocFilter::new("zone", FilterOp::Equal, "b"),
        ];

        let groups = group_by_key_and_inclusion(&filters);
        let keys: Vec<_> = groups.positive.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["zone", "app"]);
        assert_eq!(groups.positive[0].filters.len(), 2);
    }

    #[test]
    fn test_member_order_is_input_order() {
        let filters = vec![
            AdHocFilter::new("level", FilterOp::Equal, "warn"),
            AdHocFilter::new("level", FilterOp::Equal, "error"),
        ];

        let groups = group_by_key_and_inclusion(&filters);
        let values: Vec<_> = groups.positive[0]
            .filters
            .iter()
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(values, vec!["warn", "error"]);
    }

    #[test]
    fn test_numeric_operators_group_as_inclusive() {
        let filters = vec![AdHocFilter::new("bytes", FilterOp::Gt, "1024")];
        let groups = group_by_key_and_inclusion(&filters);
        assert_eq!(groups.positive.len(), 1);
        assert!(groups.negative.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_key_and_inclusion(&[]);
        assert!(groups.positive.is_empty());
        assert!(groups.negative.is_empty());
    }
}
