// src/domain/stats.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::record::TestRecord;

/// Aggregates behind the dashboard overview cards and breakdown bars.
/// Computed from the period-filtered view; `today_count` alone is taken
/// over the full set so the "today" card stays fixed while the period
/// tabs change.
#[derive(Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub today_count: usize,
    pub vehicle_types: Vec<(String, usize)>,
    pub fuel_types: Vec<(String, usize)>,
}

pub fn compute_stats(
    view: &[&TestRecord],
    all: &[TestRecord],
    today: NaiveDate,
) -> DashboardStats {
    let mut stats = DashboardStats::default();
    let mut vehicle_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut fuel_counts: BTreeMap<String, usize> = BTreeMap::new();

    for record in view {
        stats.total += 1;
        match record.field_str("testResult") {
            Some("Pass") => stats.passed += 1,
            Some("Fail") => stats.failed += 1,
            _ => {}
        }

        let vehicle = record.field_str("vehicleType").unwrap_or("Unknown");
        let fuel = record.field_str("fuelType").unwrap_or("Unknown");
        *vehicle_counts.entry(vehicle.to_string()).or_default() += 1;
        *fuel_counts.entry(fuel.to_string()).or_default() += 1;
    }

    let today_str = today.format("%Y-%m-%d").to_string();
    stats.today_count = all.iter().filter(|r| r.day_string() == today_str).count();

    stats.vehicle_types = sorted_desc(vehicle_counts);
    stats.fuel_types = sorted_desc(fuel_counts);
    stats
}

/// Largest bucket first; name order breaks ties so output is stable.
fn sorted_desc(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
