// src/domain/filter.rs

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::record::TestRecord;

/// Quick-filter presets. Each one is sugar over the same date-range
/// predicate: it computes concrete start/end day strings from the
/// current date. `Custom` means the user edited the date inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Today,
    Month,
    Year,
    Custom,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Today => "today",
            Period::Month => "month",
            Period::Year => "year",
            Period::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Period> {
        match s {
            "all" => Some(Period::All),
            "today" => Some(Period::Today),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            "custom" => Some(Period::Custom),
            _ => None,
        }
    }

    /// Inclusive (start, end) day strings for this preset. Empty string
    /// means unbounded on that side.
    pub fn bounds(self, today: NaiveDate) -> (String, String) {
        let day = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        match self {
            Period::All | Period::Custom => (String::new(), String::new()),
            Period::Today => (day(today), day(today)),
            Period::Month => {
                let first = today.with_day(1).unwrap_or(today);
                (day(first), day(last_day_of_month(today)))
            }
            Period::Year => {
                let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                let dec31 = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
                (day(jan1), day(dec31))
            }
        }
    }
}

fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let (next_y, next_m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(d)
}

/// The full set of user-selected constraints. "all" or empty means the
/// constraint is inactive; active constraints combine with logical AND.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub status: String,
    pub vehicle_type: String,
    pub fuel_type: String,
    pub start_date: String,
    pub end_date: String,
    pub period: Period,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            status: "all".into(),
            vehicle_type: "all".into(),
            fuel_type: "all".into(),
            start_date: String::new(),
            end_date: String::new(),
            period: Period::All,
        }
    }
}

impl FilterState {
    /// Build a FilterState from request query parameters.
    ///
    /// A named preset overwrites any date inputs that were submitted
    /// alongside it; conversely, date inputs only take effect with
    /// `period=custom` (the form switches its indicator to "custom"
    /// whenever a date input is edited).
    pub fn from_params(params: &HashMap<String, String>, today: NaiveDate) -> FilterState {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

        let mut state = FilterState::default();
        if !get("status").is_empty() {
            state.status = get("status").to_string();
        }
        if !get("vehicle_type").is_empty() {
            state.vehicle_type = get("vehicle_type").to_string();
        }
        if !get("fuel_type").is_empty() {
            state.fuel_type = get("fuel_type").to_string();
        }

        state.period = Period::parse(get("period")).unwrap_or_default();
        match state.period {
            Period::Custom => {
                state.start_date = get("start_date").to_string();
                state.end_date = get("end_date").to_string();
            }
            preset => {
                let (start, end) = preset.bounds(today);
                state.start_date = start;
                state.end_date = end;
            }
        }
        state
    }

    /// True when every active constraint holds for the record.
    pub fn matches(&self, record: &TestRecord) -> bool {
        if !field_matches(&self.status, record.field_str("testResult")) {
            return false;
        }
        if !field_matches(&self.vehicle_type, record.field_str("vehicleType")) {
            return false;
        }
        if !field_matches(&self.fuel_type, record.field_str("fuelType")) {
            return false;
        }

        // Inclusive day-granularity bounds: lexicographic comparison of
        // YYYY-MM-DD strings orders the same as the dates themselves.
        let day = record.day_string();
        if !self.start_date.is_empty() && day < self.start_date {
            return false;
        }
        if !self.end_date.is_empty() && day > self.end_date {
            return false;
        }
        true
    }
}

fn field_matches(wanted: &str, actual: Option<&str>) -> bool {
    if wanted.is_empty() || wanted == "all" {
        return true;
    }
    actual == Some(wanted)
}

/// The derived projection: recomputed in full from the fetched set on
/// every filter change, never mutated in place.
pub fn derive_view<'a>(all: &'a [TestRecord], filter: &FilterState) -> Vec<&'a TestRecord> {
    all.iter().filter(|r| filter.matches(r)).collect()
}
