//! Synthetic data-usage snapshot and trend series.

use chrono::{DateTime, Datelike, Duration, Local, Timelike};
use rand::RngExt;

/// Plan allowance assumed when the profile carries no plan.
pub const DEFAULT_PLAN_GB: f64 = 100.0;

/// Synthesized point-in-time usage for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageSnapshot {
    pub used_gb: f64,
    pub limit_gb: f64,
    pub percent: f64,
    pub remaining_gb: f64,
}

/// Sample a usage snapshot: a random draw of 0–70% of the plan allowance.
pub fn sample_usage<R: RngExt>(rng: &mut R, plan_limit_gb: Option<f64>) -> UsageSnapshot {
    let limit = plan_limit_gb.filter(|gb| *gb > 0.0).unwrap_or(DEFAULT_PLAN_GB);
    let used = round1(rng.random_range(0.0..limit * 0.7));
    UsageSnapshot {
        used_gb: used,
        limit_gb: limit,
        percent: round1(used / limit * 100.0),
        remaining_gb: round1(limit - used),
    }
}

/// Trend window for the usage series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsagePeriod {
    /// Last 24 hours, hourly points.
    Daily,
    /// Last 7 days, daily points.
    Weekly,
    /// Last 30 days, daily points.
    Monthly,
}

impl std::str::FromStr for UsagePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!(
                "unknown period: {other} (expected daily, weekly, or monthly)"
            )),
        }
    }
}

/// One labeled sample of the usage trend.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePoint {
    pub label: String,
    pub gigabytes: f64,
}

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sample the usage-trend series for a period, oldest point first.
///
/// Per-point ranges: 0.5–2.5 GB hourly, 2–7 GB per weekday, 5–15 GB per
/// day of the month.
pub fn sample_usage_series<R: RngExt>(
    rng: &mut R,
    period: UsagePeriod,
    now: DateTime<Local>,
) -> Vec<UsagePoint> {
    match period {
        UsagePeriod::Daily => (0..24)
            .rev()
            .map(|i| {
                let hour = now - Duration::hours(i);
                UsagePoint {
                    label: format!("{}:00", hour.hour()),
                    gigabytes: round2(rng.random_range(0.5..2.5)),
                }
            })
            .collect(),
        UsagePeriod::Weekly => (0..7)
            .rev()
            .map(|i| {
                let day = now - Duration::days(i);
                let name = DAY_NAMES[day.weekday().num_days_from_sunday() as usize];
                UsagePoint {
                    label: name.to_string(),
                    gigabytes: round2(rng.random_range(2.0..7.0)),
                }
            })
            .collect(),
        UsagePeriod::Monthly => (0..30)
            .rev()
            .map(|i| {
                let day = now - Duration::days(i);
                UsagePoint {
                    label: format!("{}/{}", day.month(), day.day()),
                    gigabytes: round2(rng.random_range(5.0..15.0)),
                }
            })
            .collect(),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn snapshot_stays_under_seventy_percent() {
        let mut rng = rng();
        for _ in 0..100 {
            let snap = sample_usage(&mut rng, Some(100.0));
            assert!(snap.used_gb >= 0.0 && snap.used_gb <= 70.0);
            assert!(snap.percent <= 70.0);
            assert!((snap.remaining_gb - (100.0 - snap.used_gb)).abs() < 0.11);
        }
    }

    #[test]
    fn missing_plan_falls_back_to_default_allowance() {
        let mut rng = rng();
        let snap = sample_usage(&mut rng, None);
        assert_eq!(snap.limit_gb, DEFAULT_PLAN_GB);
        let snap = sample_usage(&mut rng, Some(0.0));
        assert_eq!(snap.limit_gb, DEFAULT_PLAN_GB);
    }

    #[test]
    fn period_parses() {
        assert_eq!("daily".parse::<UsagePeriod>().unwrap(), UsagePeriod::Daily);
        assert_eq!("WEEKLY".parse::<UsagePeriod>().unwrap(), UsagePeriod::Weekly);
        assert!("hourly".parse::<UsagePeriod>().is_err());
    }

    #[test]
    fn series_lengths_and_ranges() {
        let mut rng = rng();
        let now = chrono::Local.with_ymd_and_hms(2026, 3, 10, 15, 0, 0).unwrap();
        let daily = sample_usage_series(&mut rng, UsagePeriod::Daily, now);
        assert_eq!(daily.len(), 24);
        assert!(daily.iter().all(|p| p.gigabytes >= 0.5 && p.gigabytes <= 2.5));
        assert_eq!(daily.last().unwrap().label, "15:00");

        let weekly = sample_usage_series(&mut rng, UsagePeriod::Weekly, now);
        assert_eq!(weekly.len(), 7);
        assert!(weekly.iter().all(|p| p.gigabytes >= 2.0 && p.gigabytes <= 7.0));
        // 2026-03-10 is a Tuesday.
        assert_eq!(weekly.last().unwrap().label, "Tue");

        let monthly = sample_usage_series(&mut rng, UsagePeriod::Monthly, now);
        assert_eq!(monthly.len(), 30);
        assert!(monthly.iter().all(|p| p.gigabytes >= 5.0 && p.gigabytes <= 15.0));
        assert_eq!(monthly.last().unwrap().label, "3/10");
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = sample_usage(&mut StdRng::seed_from_u64(42), Some(100.0));
        let b = sample_usage(&mut StdRng::seed_from_u64(42), Some(100.0));
        assert_eq!(a, b);
    }
}
