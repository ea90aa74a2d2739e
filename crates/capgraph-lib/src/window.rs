//! UTC time-window construction for historical metric queries

use chrono::{DateTime, Duration, NaiveTime, SecondsFormat, Utc};

/// An absolute half-open `[start, end)` query window, both ends UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `period_hours` starting `days_ago` days before today's UTC
    /// midnight.
    pub fn starting_days_ago(days_ago: u32, period_hours: u32) -> Self {
        Self::anchored_at(Utc::now(), days_ago, period_hours)
    }

    /// Deterministic form of [`TimeWindow::starting_days_ago`] anchored at an
    /// explicit instant.
    ///
    /// The anchor is truncated to the start of its UTC calendar day, so the
    /// boundaries only move when the day rolls over. A period longer than
    /// `days_ago * 24` hours produces an end past the anchor; that is
    /// accepted as-is and never clamped.
    pub fn anchored_at(now: DateTime<Utc>, days_ago: u32, period_hours: u32) -> Self {
        let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let start = today - Duration::hours(i64::from(days_ago) * 24);
        let end = start + Duration::hours(i64::from(period_hours));
        TimeWindow { start, end }
    }

    /// ISO-8601 start boundary with an explicit UTC designator.
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// ISO-8601 end boundary with an explicit UTC designator.
    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 15, 42, 7).unwrap()
    }

    #[test]
    fn window_is_day_aligned_and_exact() {
        let window = TimeWindow::anchored_at(anchor(), 3, 24);
        assert_eq!(window.start_iso(), "2024-01-07T00:00:00Z");
        assert_eq!(window.end_iso(), "2024-01-08T00:00:00Z");
    }

    #[test]
    fn duration_always_equals_the_requested_period() {
        for days_ago in [0u32, 1, 2, 7, 30] {
            for period_hours in [1u32, 8, 24, 72] {
                let window = TimeWindow::anchored_at(anchor(), days_ago, period_hours);
                assert_eq!(window.end - window.start, Duration::hours(i64::from(period_hours)));
            }
        }
    }

    #[test]
    fn long_periods_may_run_past_the_anchor() {
        // 48 hours sampled from today's midnight ends tomorrow; accepted
        // rather than clamped.
        let window = TimeWindow::anchored_at(anchor(), 0, 48);
        assert!(window.end > anchor());
        assert_eq!(window.end_iso(), "2024-01-12T00:00:00Z");
    }

    #[test]
    fn truncates_the_anchor_to_utc_midnight() {
        let window = TimeWindow::anchored_at(anchor(), 0, 1);
        assert_eq!(window.start_iso(), "2024-01-10T00:00:00Z");
        assert_eq!(window.end_iso(), "2024-01-10T01:00:00Z");
    }
}
