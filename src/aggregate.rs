//! Dashboard Aggregation
//!
//! Pure derivations over the fetched item list. The monetary total, the
//! low-stock subset, and the movement series come from their own
//! endpoints and are not recomputed here; this module only reshapes.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::dates;
use crate::models::{CategoryShare, InventoryItem};

/// Tally of items grouped by category.
pub fn category_counts(items: &[InventoryItem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Counts converted to percentage-of-total, largest first (ties broken
/// by name). An empty tally yields an empty vec rather than dividing by
/// zero.
pub fn category_share(counts: &HashMap<String, usize>) -> Vec<CategoryShare> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<CategoryShare> = counts
        .iter()
        .map(|(category, &count)| CategoryShare {
            category: category.clone(),
            count,
            percent: count as f64 * 100.0 / total as f64,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    shares
}

/// Apply the dashboard filters: case-insensitive name substring, exact
/// category, and local-calendar-day of last update. All three are ANDed
/// and an empty filter always passes.
pub fn filter_items(
    items: &[InventoryItem],
    name_pattern: &str,
    category: &str,
    day: Option<NaiveDate>,
) -> Vec<InventoryItem> {
    let needle = name_pattern.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .filter(|item| category.is_empty() || item.category == category)
        .filter(|item| day.map_or(true, |d| dates::same_local_day(&item.updated_at, d)))
        .cloned()
        .collect()
}

/// Unique categories observed in the current list, sorted, for the
/// dashboard filter dropdown. The add/edit form uses the server's own
/// category enumeration instead.
pub fn distinct_categories(items: &[InventoryItem]) -> Vec<String> {
    let mut categories: Vec<String> = items.iter().map(|item| item.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn make_item(id: &str, name: &str, category: &str) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            quantity: 10,
            minimum_stock: 2,
            unit_price: 1.0,
            location: String::new(),
            updated_at: "2024-10-19T12:00:00+00:00".to_string(),
            created_at: None,
            created_by: None,
        }
    }

    #[test]
    fn counts_cover_every_item() {
        let items = vec![
            make_item("1", "Pen", "A"),
            make_item("2", "Pencil", "A"),
            make_item("3", "Desk", "B"),
        ];
        let counts = category_counts(&items);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), items.len());
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let items = vec![
            make_item("1", "Pen", "A"),
            make_item("2", "Pencil", "A"),
            make_item("3", "Desk", "B"),
        ];
        let shares = category_share(&category_counts(&items));
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "A");
        assert!((shares[0].percent - 66.7).abs() < 0.1);
        assert_eq!(shares[1].category, "B");
        assert!((shares[1].percent - 33.3).abs() < 0.1);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_list_yields_empty_shares() {
        assert!(category_share(&category_counts(&[])).is_empty());
    }

    #[test]
    fn tied_counts_order_by_name() {
        let items = vec![
            make_item("1", "Pen", "B"),
            make_item("2", "Desk", "A"),
        ];
        let shares = category_share(&category_counts(&items));
        assert_eq!(shares[0].category, "A");
        assert_eq!(shares[1].category, "B");
    }

    #[test]
    fn empty_filters_are_neutral() {
        let items = vec![
            make_item("1", "Pen", "A"),
            make_item("2", "Desk", "B"),
        ];
        assert_eq!(filter_items(&items, "", "", None), items);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let items = vec![
            make_item("1", "Blue Pen", "A"),
            make_item("2", "Desk", "B"),
        ];
        let filtered = filter_items(&items, "pEn", "", None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Blue Pen");
    }

    #[test]
    fn predicates_are_anded() {
        let items = vec![
            make_item("1", "Blue Pen", "A"),
            make_item("2", "Red Pen", "B"),
        ];
        let filtered = filter_items(&items, "pen", "B", None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn date_filter_matches_local_update_day() {
        let on_day = Local.with_ymd_and_hms(2024, 10, 19, 8, 0, 0).unwrap();
        let off_day = Local.with_ymd_and_hms(2024, 10, 21, 8, 0, 0).unwrap();
        let mut a = make_item("1", "Pen", "A");
        a.updated_at = on_day.to_rfc3339();
        let mut b = make_item("2", "Desk", "B");
        b.updated_at = off_day.to_rfc3339();

        let day = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        let filtered = filter_items(&[a, b], "", "", Some(day));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = vec![
            make_item("1", "Blue Pen", "A"),
            make_item("2", "Red Pen", "B"),
            make_item("3", "Desk", "B"),
        ];
        let once = filter_items(&items, "pen", "B", None);
        let twice = filter_items(&once, "pen", "B", None);
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_categories_dedups_and_sorts() {
        let items = vec![
            make_item("1", "Pen", "B"),
            make_item("2", "Pencil", "A"),
            make_item("3", "Desk", "B"),
        ];
        assert_eq!(distinct_categories(&items), vec!["A".to_string(), "B".to_string()]);
    }
}
