//! Report resources: basic statistics and per-day leads and sales.

use crate::traits::{Fetch, FetchByDate};

/// Filters shared by the per-day transaction reports.
///
/// `datetype` selects tracking_date (default), modified_date or
/// review_state_changed_date; `state` is one of confirmed, open, approved,
/// rejected.
const TRANSACTION_FILTERS: &[&str] = &["datetype", "program", "adspace", "state", "items", "page"];

/// Basic statistics of clicks, views, leads and sales.
///
/// `fromdate` and `todate` are both inclusive. `groupby` takes any of
/// CURRENCY, ADMEDIUM, PROGRAM, ADSPACE, LINK_FORMAT, MEDIA_SLOT, MONTH,
/// DAY, YEAR.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicReport;

impl Fetch for BasicReport {
    const PATH: &'static str = "/reports/basic";
    const FILTERS: &'static [&'static str] = &[
        "fromdate",
        "todate",
        "datetype",
        "currency",
        "program",
        "admedium",
        "adspace",
        "state",
        "groupby",
    ];
}

/// Lead transactions tracked on a given day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leads;

impl FetchByDate for Leads {
    const PATH: &'static str = "/reports/leads/date";
    const FILTERS: &'static [&'static str] = TRANSACTION_FILTERS;
}

/// Sales transactions tracked on a given day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sales;

impl FetchByDate for Sales {
    const PATH: &'static str = "/reports/sales/date";
    const FILTERS: &'static [&'static str] = TRANSACTION_FILTERS;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_dated_paths() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(Leads::path_for(day), "/reports/leads/date/2024-03-07");
        assert_eq!(Sales::path_for(day), "/reports/sales/date/2024-03-07");
    }
}
