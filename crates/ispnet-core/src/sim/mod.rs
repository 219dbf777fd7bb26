//! Simulated analytics.
//!
//! Usage percentages, speed tests, and revenue figures in the portal are
//! synthesized client-side: they are presentation placeholders, not
//! measurements or ledger queries. Everything random lives behind this
//! module so a real metering or billing source can replace it without
//! touching any command code. Entry points take the RNG as a parameter;
//! tests pass a seeded `StdRng`.

mod revenue;
mod speedtest;
mod usage;

pub use revenue::{
    InvoiceSummaryRow, MonthlyRevenueRow, OutstandingPayment, PaymentRecord, PlanRevenue,
    RevenueReport, YearlyRevenueRow, build_report, estimate_monthly_price,
};
pub use speedtest::{SpeedTestResult, sample_speed_test};
pub use usage::{
    DEFAULT_PLAN_GB, UsagePeriod, UsagePoint, UsageSnapshot, sample_usage, sample_usage_series,
};

/// Usage alert severity derived from the synthesized percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    None,
    /// Above 80% of the plan allowance.
    Warning,
    /// Above 90% of the plan allowance.
    Critical,
}

/// Band a usage percentage into an alert level (> 80 warn, > 90 critical).
pub fn usage_alert(percent: f64) -> AlertLevel {
    if percent > 90.0 {
        AlertLevel::Critical
    } else if percent > 80.0 {
        AlertLevel::Warning
    } else {
        AlertLevel::None
    }
}

/// Account balance banding for the dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceBand {
    /// Below $10.
    Critical,
    /// Below $50.
    Low,
    Healthy,
}

/// Band an account balance the way the dashboard colors its card.
pub fn balance_band(balance: f64) -> BalanceBand {
    if balance < 10.0 {
        BalanceBand::Critical
    } else if balance < 50.0 {
        BalanceBand::Low
    } else {
        BalanceBand::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_thresholds_are_exclusive_at_boundaries() {
        assert_eq!(usage_alert(80.0), AlertLevel::None);
        assert_eq!(usage_alert(80.1), AlertLevel::Warning);
        assert_eq!(usage_alert(90.0), AlertLevel::Warning);
        assert_eq!(usage_alert(90.1), AlertLevel::Critical);
        assert_eq!(usage_alert(12.0), AlertLevel::None);
    }

    #[test]
    fn balance_bands() {
        assert_eq!(balance_band(9.99), BalanceBand::Critical);
        assert_eq!(balance_band(10.0), BalanceBand::Low);
        assert_eq!(balance_band(49.99), BalanceBand::Low);
        assert_eq!(balance_band(50.0), BalanceBand::Healthy);
    }
}
