//! Simulated revenue reporting derived from the admin customer list.
//!
//! Nothing here queries a billing ledger: prices come from a fixed
//! heuristic and outstanding balances from random sampling. Callers must
//! present the output as non-authoritative.

use chrono::{DateTime, Duration, Local, Months, NaiveDate};
use rand::RngExt;

use crate::account::CustomerSummary;

/// Fallback monthly price when a plan has no data allowance to derive from.
pub const FALLBACK_MONTHLY_PRICE: f64 = 99.0;

const PAYMENT_METHODS: [&str; 5] =
    ["Credit Card", "Debit Card", "Bank Transfer", "UPI", "PayPal"];

/// Estimate a plan's monthly price from its data allowance
/// (`allowance * 0.1`, falling back to a flat rate).
pub fn estimate_monthly_price(data_limit_gb: f64) -> f64 {
    let price = data_limit_gb * 0.1;
    if price > 0.0 { price } else { FALLBACK_MONTHLY_PRICE }
}

/// Revenue attributed to one plan tier.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRevenue {
    pub plan: String,
    pub subscribers: u32,
    pub unit_price: f64,
    pub total: f64,
    /// Share of overall revenue, in percent.
    pub share_percent: f64,
}

/// A simulated outstanding balance for one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct OutstandingPayment {
    pub username: String,
    pub plan: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    /// More than 15 days past due.
    pub overdue: bool,
}

/// A simulated historical payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub username: String,
    pub invoice_id: String,
    pub amount: f64,
    pub method: String,
}

/// Month-over-month comparison row.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenueRow {
    pub month: String,
    pub revenue: f64,
    pub change_percent: f64,
}

/// Year-over-year comparison row.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRevenueRow {
    pub year: i32,
    pub revenue: f64,
    pub growth_percent: f64,
}

/// Invoice batch summary row for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummaryRow {
    pub month: String,
    pub total_invoices: u32,
    pub total_amount: f64,
    pub paid: u32,
    pub pending: u32,
    pub status: &'static str,
}

/// Complete simulated revenue report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevenueReport {
    pub total_revenue: f64,
    pub month_revenue: f64,
    pub outstanding_total: f64,
    pub invoice_count: u32,
    pub plans: Vec<PlanRevenue>,
    pub outstanding: Vec<OutstandingPayment>,
    pub payments: Vec<PaymentRecord>,
    pub monthly: Vec<MonthlyRevenueRow>,
    pub yearly: Vec<YearlyRevenueRow>,
    pub invoices: Vec<InvoiceSummaryRow>,
}

/// Build the simulated report from the customer list.
///
/// Each subscribed customer contributes the heuristic price to the totals
/// and has a 20% chance of carrying an outstanding balance (0–30 days
/// overdue). Payment history covers the first ten subscribed customers.
pub fn build_report<R: RngExt>(
    rng: &mut R,
    customers: &[CustomerSummary],
    now: DateTime<Local>,
) -> RevenueReport {
    let today = now.date_naive();
    let mut report = RevenueReport {
        invoice_count: u32::try_from(customers.len()).unwrap_or(u32::MAX),
        ..RevenueReport::default()
    };

    for customer in customers {
        let Some(plan) = customer.plan.as_deref().filter(|_| customer.has_plan()) else {
            continue;
        };
        let price = estimate_monthly_price(customer.data_limit);
        report.total_revenue += price;
        report.month_revenue += price;

        match report.plans.iter_mut().find(|p| p.plan == plan) {
            Some(entry) => {
                entry.subscribers += 1;
                entry.total += price;
            }
            None => report.plans.push(PlanRevenue {
                plan: plan.to_string(),
                subscribers: 1,
                unit_price: price,
                total: price,
                share_percent: 0.0,
            }),
        }

        // 20% of subscribed customers carry an outstanding balance.
        if rng.random_range(0.0..1.0) > 0.8 {
            let days_overdue = rng.random_range(0..30);
            report.outstanding_total += price;
            report.outstanding.push(OutstandingPayment {
                username: customer.username.clone(),
                plan: plan.to_string(),
                amount: price,
                due_date: today - Duration::days(days_overdue),
                overdue: days_overdue > 15,
            });
        }
    }

    for plan in &mut report.plans {
        plan.share_percent = if report.total_revenue > 0.0 {
            round1(plan.total / report.total_revenue * 100.0)
        } else {
            0.0
        };
    }

    report.payments = payment_history(rng, customers, today);
    report.monthly = monthly_comparison(rng, report.month_revenue, today);
    report.yearly = yearly_comparison(report.total_revenue, now);
    report.invoices = invoice_summary(rng, today);
    report
}

fn payment_history<R: RngExt>(
    rng: &mut R,
    customers: &[CustomerSummary],
    today: NaiveDate,
) -> Vec<PaymentRecord> {
    customers
        .iter()
        .take(10)
        .filter(|c| c.has_plan())
        .map(|c| PaymentRecord {
            date: today - Duration::days(rng.random_range(0..30)),
            username: c.username.clone(),
            invoice_id: invoice_id(rng),
            amount: estimate_monthly_price(c.data_limit),
            method: PAYMENT_METHODS[rng.random_range(0..PAYMENT_METHODS.len())].to_string(),
        })
        .collect()
}

fn monthly_comparison<R: RngExt>(
    rng: &mut R,
    month_revenue: f64,
    today: NaiveDate,
) -> Vec<MonthlyRevenueRow> {
    let mut rows = Vec::with_capacity(6);
    let mut previous = month_revenue * 0.75;
    for i in 0..6u32 {
        let month = today
            .checked_sub_months(Months::new(5 - i))
            .unwrap_or(today)
            .format("%B")
            .to_string();
        let revenue = previous + rng.random_range(0.0..1.0) * month_revenue * 0.3;
        let change = if i > 0 && previous > 0.0 {
            round1((revenue - previous) / previous * 100.0)
        } else {
            0.0
        };
        rows.push(MonthlyRevenueRow {
            month,
            revenue: round2(revenue),
            change_percent: change,
        });
        previous = revenue;
    }
    rows
}

fn yearly_comparison(total_revenue: f64, now: DateTime<Local>) -> Vec<YearlyRevenueRow> {
    use chrono::Datelike;
    (0..3)
        .map(|i| {
            let factor = if i == 2 { 1.0 } else { 0.6 + f64::from(i) * 0.2 };
            let revenue = total_revenue * factor;
            let growth = if i > 0 {
                let prev = total_revenue * (0.6 + f64::from(i - 1) * 0.2);
                if prev > 0.0 {
                    round1((revenue - prev) / prev * 100.0)
                } else {
                    0.0
                }
            } else {
                0.0
            };
            YearlyRevenueRow {
                year: now.year() - 2 + i,
                revenue: round2(revenue),
                growth_percent: growth,
            }
        })
        .collect()
}

fn invoice_summary<R: RngExt>(rng: &mut R, today: NaiveDate) -> Vec<InvoiceSummaryRow> {
    (0..5u32)
        .map(|i| {
            let month = today
                .checked_add_months(Months::new(i))
                .unwrap_or(today)
                .format("%B %Y")
                .to_string();
            let total_invoices = 10 + rng.random_range(0..20);
            let total_amount =
                f64::from(total_invoices) * (89.0 + rng.random_range(0.0..200.0));
            let paid_fraction = 0.7 + rng.random_range(0.0..0.2);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let paid = (f64::from(total_invoices) * paid_fraction).floor() as u32;
            let pending = total_invoices - paid;
            let status = if pending == 0 {
                "Complete"
            } else if pending > 5 {
                "Pending"
            } else {
                "In Progress"
            };
            InvoiceSummaryRow {
                month,
                total_invoices,
                total_amount: round2(total_amount),
                paid,
                pending,
                status,
            }
        })
        .collect()
}

fn invoice_id<R: RngExt>(rng: &mut R) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let suffix: String = (0..9)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("INV-{suffix}")
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
