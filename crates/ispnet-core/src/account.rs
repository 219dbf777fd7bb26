//! Customer-facing account snapshots shared between the REST client and
//! the simulated revenue reporting.

use serde::{Deserialize, Serialize};

/// Customer profile as returned by `/api/customer/profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Current plan name; `None` when no plan is selected.
    #[serde(default)]
    pub plan_name: Option<String>,
    /// Plan data allowance in GB; 0 when no plan.
    #[serde(default, rename = "dataGB")]
    pub data_gb: f64,
    /// Account balance in dollars.
    #[serde(default)]
    pub balance: f64,
}

/// One row of the admin customer list (read-only snapshot).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Plan name; absent or "No Plan" means unsubscribed.
    #[serde(default)]
    pub plan: Option<String>,
    /// Metered usage in GB as the backend reports it.
    #[serde(default)]
    pub data_used: f64,
    /// Plan allowance in GB.
    #[serde(default)]
    pub data_limit: f64,
    #[serde(default)]
    pub status: String,
}

impl CustomerSummary {
    /// Whether the customer has an active plan subscription.
    pub fn has_plan(&self) -> bool {
        self.plan.as_deref().is_some_and(|p| p != "No Plan")
    }
}

/// Subscription plan offer from `/api/customer/plans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOffer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_per_month: f64,
    #[serde(rename = "dataGB")]
    pub data_gb: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_with_missing_fields() {
        let p: CustomerProfile = serde_json::from_str("{}").unwrap();
        assert!(p.plan_name.is_none());
        assert_eq!(p.data_gb, 0.0);
        assert_eq!(p.balance, 0.0);
    }

    #[test]
    fn profile_reads_data_gb_field() {
        let p: CustomerProfile =
            serde_json::from_str(r#"{"planName":"Fiber 100","dataGB":100.0,"balance":42.5}"#)
                .unwrap();
        assert_eq!(p.plan_name.as_deref(), Some("Fiber 100"));
        assert_eq!(p.data_gb, 100.0);
    }

    #[test]
    fn no_plan_spelling_counts_as_unsubscribed() {
        let json = r#"{"id":"c1","username":"bob","email":"b@x.io","plan":"No Plan"}"#;
        let c: CustomerSummary = serde_json::from_str(json).unwrap();
        assert!(!c.has_plan());
    }

    #[test]
    fn subscribed_customer_has_plan() {
        let json =
            r#"{"id":"c1","username":"bob","email":"b@x.io","plan":"Fiber 100","dataLimit":100.0}"#;
        let c: CustomerSummary = serde_json::from_str(json).unwrap();
        assert!(c.has_plan());
        assert_eq!(c.data_limit, 100.0);
    }

    #[test]
    fn plan_offer_reads_backend_shape() {
        let json = r#"{"id":"p1","name":"Fiber 100","description":"Fast",
                       "pricePerMonth":49.0,"dataGB":100.0}"#;
        let p: PlanOffer = serde_json::from_str(json).unwrap();
        assert_eq!(p.price_per_month, 49.0);
        assert_eq!(p.data_gb, 100.0);
    }
}
