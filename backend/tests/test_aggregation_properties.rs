//! Property tests for aggregation and report layout
//!
//! Random priced-item trees (parts, purchased parts, nested assemblies)
//! checked against the aggregation and reporting invariants.

use std::sync::Arc;

use printcost_core::{
    CostCategory, CostQueries, CostQuery, CostReport, Filament, MultiPart, NonPrintedPart, Part,
    PricedItem, Printer,
};
use proptest::prelude::*;

fn printed_part() -> impl Strategy<Value = PricedItem> {
    (0.0..100.0f64, 0.0..1000.0f64, 0.0..0.1f64, any::<bool>()).prop_map(
        |(hours, grams, price_per_gram, big_printer)| {
            let printer = if big_printer {
                Printer::ender_5_plus()
            } else {
                Printer::ender_3_pro()
            };
            let filament = Filament::new("random", price_per_gram).unwrap();
            PricedItem::from(
                Part::new("printed", Arc::new(filament), Arc::new(printer), hours, grams).unwrap(),
            )
        },
    )
}

fn purchased_part() -> impl Strategy<Value = PricedItem> {
    (0.0..50.0f64).prop_map(|cost| PricedItem::from(NonPrintedPart::new("purchased", cost).unwrap()))
}

fn tree_from(leaf: BoxedStrategy<PricedItem>) -> impl Strategy<Value = PricedItem> {
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6)
            .prop_map(|parts| PricedItem::from(MultiPart::from_parts("assembly", parts)))
    })
}

fn any_item() -> impl Strategy<Value = PricedItem> {
    tree_from(prop_oneof![printed_part(), purchased_part()].boxed())
}

fn purchased_only_item() -> impl Strategy<Value = PricedItem> {
    tree_from(purchased_part().boxed())
}

fn category_lists() -> impl Strategy<Value = Vec<CostCategory>> {
    prop::collection::vec(prop::sample::select(CostQuery::ALL.to_vec()), 1..6)
        .prop_map(|queries| queries.into_iter().map(CostCategory::for_query).collect())
}

proptest! {
    #[test]
    fn assembly_queries_equal_sum_of_children(
        children in prop::collection::vec(any_item(), 0..8)
    ) {
        let assembly = MultiPart::from_parts("root", children.clone());

        for query in CostQuery::ALL {
            let expected: f64 = children.iter().map(|c| query.evaluate(c)).sum();
            prop_assert_eq!(query.evaluate(&assembly), expected);
        }
    }

    #[test]
    fn queries_are_non_negative_and_idempotent(item in any_item()) {
        for query in CostQuery::ALL {
            let first = query.evaluate(&item);
            prop_assert!(first >= 0.0);
            prop_assert!(first.is_finite());
            prop_assert_eq!(first, query.evaluate(&item));
        }
    }

    #[test]
    fn purchased_only_trees_add_up(item in purchased_only_item()) {
        let breakdown = item.breakdown();
        prop_assert_eq!(breakdown.material_cost, 0.0);
        prop_assert_eq!(breakdown.printing_time_cost, 0.0);
        prop_assert_eq!(breakdown.power_cost, 0.0);
        prop_assert_eq!(breakdown.sum(), item.total_cost());
    }

    #[test]
    fn report_matrices_are_items_by_categories(
        items in prop::collection::vec(any_item(), 0..6),
        categories in category_lists(),
    ) {
        let report = CostReport::build(&items, &categories).unwrap();

        prop_assert_eq!(report.labels().len(), items.len());
        prop_assert_eq!(report.partial_costs().len(), items.len());
        prop_assert_eq!(report.partial_sums().len(), items.len());
        for (costs, sums) in report.partial_costs().iter().zip(report.partial_sums()) {
            prop_assert_eq!(costs.len(), categories.len());
            prop_assert_eq!(sums.len(), categories.len());
            prop_assert_eq!(sums[0], 0.0);
        }
        prop_assert_eq!(report.series().len(), categories.len());
        prop_assert_eq!(report.value_annotations().len(), categories.len());
    }

    #[test]
    fn top_of_stack_is_sum_of_segments(
        items in prop::collection::vec(any_item(), 1..6),
    ) {
        let report = CostReport::build(&items, &CostCategory::defaults()).unwrap();
        for (item, (costs, sums)) in items
            .iter()
            .zip(report.partial_costs().iter().zip(report.partial_sums()))
        {
            let last = costs.len() - 1;
            let top = sums[last] + costs[last];
            prop_assert!((top - item.breakdown().sum()).abs() < 1e-6);
        }
    }
}
