//! Derived table and dashboard data.
//!
//! Rebuilt from the full record list on every render. Nothing here is
//! retained between frames.

use chrono::NaiveDate;

use crate::domain::entities::{InventoryRecord, RecordId};
use crate::domain::freshness::{FreshnessStatus, days_label, days_left};

/// Label of the filter option that disables category filtering.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Category filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every record.
    #[default]
    All,
    /// Show records whose category matches exactly.
    Category(String),
}

impl CategoryFilter {
    /// Returns whether `record` passes the filter.
    #[must_use]
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category() == category,
        }
    }

    /// Returns the selector label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    /// Advances to the next option in `options`, wrapping back to `All`.
    #[must_use]
    pub fn cycled(&self, options: &[String]) -> Self {
        let next_index = match self {
            Self::All => 0,
            Self::Category(current) => options
                .iter()
                .position(|c| c == current)
                .map_or(0, |i| i + 1),
        };

        options
            .get(next_index)
            .map_or(Self::All, |c| Self::Category(c.clone()))
    }

    /// Keeps the selection if it is still offered, otherwise falls back to `All`.
    #[must_use]
    pub fn retained_in(self, options: &[String]) -> Self {
        match self {
            Self::Category(ref category) if !options.contains(category) => Self::All,
            other => other,
        }
    }
}

/// Expiry sort selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep insertion order.
    #[default]
    None,
    /// Soonest expiry first.
    Ascending,
    /// Latest expiry first.
    Descending,
}

impl SortOrder {
    /// Returns the next order: none, ascending, descending, none.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Returns the selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort by Expiry",
            Self::Ascending => "Expiry ↑",
            Self::Descending => "Expiry ↓",
        }
    }
}

/// Filter and sort selection applied to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    /// Active category filter.
    pub filter: CategoryFilter,
    /// Active sort order.
    pub sort: SortOrder,
}

impl InventoryQuery {
    /// Returns the visible records in display order.
    ///
    /// Sorting is stable, so records sharing an expiry keep list order.
    #[must_use]
    pub fn select<'a>(&self, records: &'a [InventoryRecord]) -> Vec<&'a InventoryRecord> {
        let mut visible: Vec<_> = records.iter().filter(|r| self.filter.matches(r)).collect();

        match self.sort {
            SortOrder::None => {}
            SortOrder::Ascending => visible.sort_by_key(|r| r.expiry()),
            SortOrder::Descending => visible.sort_by(|a, b| b.expiry().cmp(&a.expiry())),
        }

        visible
    }
}

/// Aggregate tallies over the whole inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    /// Number of records, ignoring any filter.
    pub total: usize,
    /// Records classified `Safe`.
    pub safe: usize,
    /// Records classified `Warning`.
    pub warning: usize,
    /// Records classified `Expired`.
    pub expired: usize,
}

impl DashboardCounts {
    /// Tallies every record by freshness status.
    #[must_use]
    pub fn tally(records: &[InventoryRecord], today: NaiveDate) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut counts, record| {
                match FreshnessStatus::of(record.expiry(), today) {
                    FreshnessStatus::Safe => counts.safe += 1,
                    FreshnessStatus::Warning => counts.warning += 1,
                    FreshnessStatus::Expired => counts.expired += 1,
                }
                counts
            },
        )
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Record the row's delete action targets.
    pub id: RecordId,
    /// Item name.
    pub name: String,
    /// Item category.
    pub category: String,
    /// Quantity as entered.
    pub quantity: String,
    /// Expiry formatted as `YYYY-MM-DD`.
    pub expiry: String,
    /// `Expired`, `Today` or `N days`.
    pub days_label: String,
    /// Freshness class used for row tinting.
    pub status: FreshnessStatus,
}

impl ViewRow {
    fn from_record(record: &InventoryRecord, today: NaiveDate) -> Self {
        let days = days_left(record.expiry(), today);
        Self {
            id: record.id(),
            name: record.name().to_string(),
            category: record.category().to_string(),
            quantity: record.quantity().to_string(),
            expiry: record.expiry().to_string(),
            days_label: days_label(days),
            status: FreshnessStatus::from_days(days),
        }
    }
}

/// Everything one frame shows, derived from the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    /// Filtered and sorted rows.
    pub rows: Vec<ViewRow>,
    /// Counts over the unfiltered list.
    pub counts: DashboardCounts,
}

impl InventoryView {
    /// Recomputes rows and counts from scratch.
    #[must_use]
    pub fn build(records: &[InventoryRecord], query: &InventoryQuery, today: NaiveDate) -> Self {
        let rows = query
            .select(records)
            .into_iter()
            .map(|record| ViewRow::from_record(record, today))
            .collect();

        Self {
            rows,
            counts: DashboardCounts::tally(records, today),
        }
    }
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn category_options(records: &[InventoryRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        if !options.iter().any(|c| c == record.category()) {
            options.push(record.category().to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    fn record(id: u64, name: &str, category: &str, offset: i64) -> InventoryRecord {
        let expiry = if offset >= 0 {
            today().checked_add_days(Days::new(offset.unsigned_abs()))
        } else {
            today().checked_sub_days(Days::new(offset.unsigned_abs()))
        }
        .unwrap();
        InventoryRecord::new(id, name, category, "1", expiry)
    }

    fn pantry() -> Vec<InventoryRecord> {
        vec![
            record(1, "Milk", "Dairy", 3),
            record(2, "Bread", "Bakery", -1),
            record(3, "Rice", "Grain", 30),
            record(4, "Cheese", "Dairy", 10),
        ]
    }

    fn names(view: &InventoryView) -> Vec<&str> {
        view.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_view_keeps_list_order() {
        let view = InventoryView::build(&pantry(), &InventoryQuery::default(), today());
        assert_eq!(names(&view), ["Milk", "Bread", "Rice", "Cheese"]);
    }

    #[test]
    fn test_filter_keeps_dashboard_totals() {
        let query = InventoryQuery {
            filter: CategoryFilter::Category("Dairy".to_string()),
            sort: SortOrder::None,
        };
        let view = InventoryView::build(&pantry(), &query, today());

        assert_eq!(names(&view), ["Milk", "Cheese"]);
        assert_eq!(
            view.counts,
            DashboardCounts {
                total: 4,
                safe: 2,
                warning: 1,
                expired: 1,
            }
        );
    }

    #[test]
    fn test_counts_sum_to_total_for_every_filter() {
        let records = pantry();
        let mut filters = vec![CategoryFilter::All];
        filters.extend(
            category_options(&records)
                .into_iter()
                .map(CategoryFilter::Category),
        );

        for filter in filters {
            let query = InventoryQuery {
                filter,
                sort: SortOrder::Descending,
            };
            let counts = InventoryView::build(&records, &query, today()).counts;
            assert_eq!(counts.safe + counts.warning + counts.expired, counts.total);
            assert_eq!(counts.total, records.len());
        }
    }

    #[test]
    fn test_sort_by_expiry() {
        let ascending = InventoryQuery {
            sort: SortOrder::Ascending,
            ..InventoryQuery::default()
        };
        let descending = InventoryQuery {
            sort: SortOrder::Descending,
            ..InventoryQuery::default()
        };

        let asc = InventoryView::build(&pantry(), &ascending, today());
        let desc = InventoryView::build(&pantry(), &descending, today());

        assert_eq!(names(&asc), ["Bread", "Milk", "Cheese", "Rice"]);
        assert_eq!(names(&desc), ["Rice", "Cheese", "Milk", "Bread"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_expiry() {
        let records = vec![
            record(1, "A", "X", 2),
            record(2, "B", "X", 1),
            record(3, "C", "X", 2),
        ];
        let query = InventoryQuery {
            sort: SortOrder::Descending,
            ..InventoryQuery::default()
        };

        let view = InventoryView::build(&records, &query, today());

        assert_eq!(names(&view), ["A", "C", "B"]);
    }

    #[test]
    fn test_row_fields() {
        let view = InventoryView::build(&pantry(), &InventoryQuery::default(), today());
        let milk = &view.rows[0];

        assert_eq!(milk.id, RecordId(1));
        assert_eq!(milk.expiry, "2024-03-01");
        assert_eq!(milk.days_label, "3 days");
        assert_eq!(milk.status, FreshnessStatus::Warning);
        assert_eq!(view.rows[1].days_label, "Expired");
        assert_eq!(view.rows[1].status.label(), "EXPIRED");
    }

    #[test]
    fn test_category_options_collapse_duplicates() {
        assert_eq!(category_options(&pantry()), ["Dairy", "Bakery", "Grain"]);
        assert!(category_options(&[]).is_empty());
    }

    #[test]
    fn test_filter_cycles_through_options_and_back_to_all() {
        let options = category_options(&pantry());
        let mut filter = CategoryFilter::All;
        let mut labels = Vec::new();
        for _ in 0..4 {
            filter = filter.cycled(&options);
            labels.push(filter.label().to_string());
        }

        assert_eq!(labels, ["Dairy", "Bakery", "Grain", ALL_CATEGORIES]);
    }

    #[test]
    fn test_filter_falls_back_when_category_disappears() {
        let options = vec!["Dairy".to_string()];

        let kept = CategoryFilter::Category("Dairy".to_string()).retained_in(&options);
        let dropped = CategoryFilter::Category("Bakery".to_string()).retained_in(&options);

        assert_eq!(kept, CategoryFilter::Category("Dairy".to_string()));
        assert_eq!(dropped, CategoryFilter::All);
    }

    #[test]
    fn test_sort_order_cycle() {
        assert_eq!(SortOrder::None.cycled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.cycled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.cycled(), SortOrder::None);
    }
}
