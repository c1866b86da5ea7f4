use serde::{Deserialize, Serialize};

// Configuration abstracts tenant-level defaults for the circulation system.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub tenant_id: String,
    pub loan_period_days: i64,
    pub max_renewals: Option<u32>,
    pub periodic_interval_secs: u64,
}

impl Configuration {
    pub fn new(tenant_id: &str) -> Self {
        Configuration {
            tenant_id: tenant_id.to_string(),
            loan_period_days: 21,
            max_renewals: Some(3),
            periodic_interval_secs: 3600,
        }
    }
}
