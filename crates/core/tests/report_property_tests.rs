//! Property-based tests for month resolution, pagination, and the report
//! reducers.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tallyboard_core::months::{MonthOrdinal, MonthTable, ENGLISH_MONTH_NAMES};
use tallyboard_core::reports::{bucket_by_price, sum_by_category, summarize_sales, PriceBandTable};
use tallyboard_core::transactions::{PageRequest, Transaction, TransactionFilter};

// =============================================================================
// Generators
// =============================================================================

/// Prices in cents between 0 and 5000.00.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..=500_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("electronics".to_string()),
        Just("jewelery".to_string()),
        Just("men's clothing".to_string()),
        Just("women's clothing".to_string()),
    ]
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        1i64..100_000,
        "[A-Za-z ]{1,20}",
        arb_price(),
        arb_category(),
        any::<bool>(),
        2019i32..2024,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(id, title, price, category, sold, year, month, day)| Transaction {
            id,
            description: format!("About {}", title),
            title,
            price,
            category,
            sold,
            date_of_sale: Utc.with_ymd_and_hms(year, month, day, 8, 30, 0).unwrap(),
            image: String::new(),
        })
}

/// A name from the month table with each letter randomly upper- or lower-cased.
fn arb_cased_month() -> impl Strategy<Value = (usize, String)> {
    (0usize..12, proptest::collection::vec(any::<bool>(), 9)).prop_map(|(index, upper)| {
        let name: String = ENGLISH_MONTH_NAMES[index]
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        (index, name)
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn month_resolution_ignores_case((index, name) in arb_cased_month()) {
        let table = MonthTable::english();
        prop_assert_eq!(table.resolve(&name), Ok(MonthOrdinal::new(index as u32).unwrap()));
    }

    #[test]
    fn unknown_month_names_are_rejected(name in "[a-z0-9]{0,12}") {
        let table = MonthTable::english();
        prop_assume!(!ENGLISH_MONTH_NAMES.contains(&name.as_str()));
        prop_assert!(table.resolve(&name).is_err());
    }

    #[test]
    fn statistics_partition_matches(
        rows in proptest::collection::vec(arb_transaction(), 0..60),
        month in 0u32..12,
    ) {
        let filter = TransactionFilter::for_month(MonthOrdinal::new(month).unwrap());
        let matching: Vec<Transaction> = rows.into_iter().filter(|t| filter.matches(t)).collect();
        let stats = summarize_sales(&matching);

        prop_assert_eq!(
            stats.total_sold_items + stats.total_not_sold_items,
            matching.len() as u64
        );
        let total: Decimal = matching.iter().map(|t| t.price).sum();
        prop_assert_eq!(stats.total_sales_amount, total);
    }

    #[test]
    fn histogram_counts_every_cent_price(
        rows in proptest::collection::vec(arb_transaction(), 0..60),
    ) {
        let histogram = bucket_by_price(&rows, &PriceBandTable::default());
        prop_assert_eq!(histogram.len(), 7);

        let counted: u64 = histogram.iter().map(|entry| entry.count).sum();
        prop_assert_eq!(counted, rows.len() as u64);
    }

    #[test]
    fn histogram_counts_all_whole_prices(
        prices in proptest::collection::vec(0i64..=5000, 0..60),
    ) {
        let rows: Vec<Transaction> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Transaction {
                id: i as i64,
                title: "x".to_string(),
                description: String::new(),
                price: Decimal::from(p),
                category: "A".to_string(),
                sold: true,
                date_of_sale: Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap(),
                image: String::new(),
            })
            .collect();
        let counted: u64 = bucket_by_price(&rows, &PriceBandTable::default())
            .iter()
            .map(|entry| entry.count)
            .sum();
        prop_assert_eq!(counted, rows.len() as u64);
    }

    #[test]
    fn category_breakdown_is_sorted_and_stable(
        rows in proptest::collection::vec(arb_transaction(), 0..60),
    ) {
        let first = sum_by_category(&rows);
        prop_assert!(first.windows(2).all(|pair| pair[0].total_sales >= pair[1].total_sales));
        prop_assert_eq!(&first, &sum_by_category(&rows));

        let total: Decimal = first.iter().map(|c| c.total_sales).sum();
        let expected: Decimal = rows.iter().map(|t| t.price).sum();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn total_pages_covers_every_match(total in 0i64..10_000, per_page in 1i64..100) {
        let request = PageRequest::new(1, per_page).unwrap();
        let pages = request.total_pages(total);
        prop_assert!(pages >= 1);
        prop_assert!(pages * per_page >= total);
        prop_assert!(total == 0 || (pages - 1) * per_page < total);
    }
}
