use std::sync::Arc;
use chrono::NaiveDateTime;
use tracing::warn;
use crate::core::results::{CirculationResult, ValidationError};
use crate::loans::model::Loan;
use crate::policy::period::Period;
use crate::policy::schedule::FixedDueDateSchedules;

// A missing schedule collection and a date outside every schedule report
// the same reason; callers cannot tell the two apart.
pub const OUTSIDE_DATE_RANGES_REASON: &str =
    "date falls outside of date ranges in fixed loan policy";

// Pure calendar hook supplied by the caller, e.g. moving a due date to the
// nearest service-point closing time.
pub type DueDateAdjustment = Arc<dyn Fn(NaiveDateTime) -> NaiveDateTime + Send + Sync>;

#[derive(Clone)]
pub struct FixedScheduleStrategy {
    policy_id: String,
    policy_name: String,
    schedules: Option<FixedDueDateSchedules>,
}

impl FixedScheduleStrategy {
    pub fn new(policy_id: &str, policy_name: &str,
               schedules: Option<FixedDueDateSchedules>) -> Self {
        Self {
            policy_id: policy_id.to_string(),
            policy_name: policy_name.to_string(),
            schedules,
        }
    }

    fn due_date_for(&self, reference_date: NaiveDateTime) -> CirculationResult<NaiveDateTime> {
        let due = self
            .schedules
            .as_ref()
            .and_then(|schedules| schedules.due_date_for(reference_date));
        match due {
            Some(due) => CirculationResult::succeeded(due),
            None => {
                warn!("no schedule of policy {} ({}) contains {}",
                      self.policy_name, self.policy_id, reference_date);
                CirculationResult::failed_validation(ValidationError::with_property(
                    OUTSIDE_DATE_RANGES_REASON, "loanPolicyId", self.policy_id.as_str()))
            }
        }
    }
}

#[derive(Clone)]
pub struct RollingStrategy {
    period: Period,
    due_date_limit: Option<FixedDueDateSchedules>,
    adjustment: Option<DueDateAdjustment>,
}

impl RollingStrategy {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            due_date_limit: None,
            adjustment: None,
        }
    }

    pub fn with_due_date_limit(mut self, limit: FixedDueDateSchedules) -> Self {
        self.due_date_limit = Some(limit);
        self
    }

    pub fn with_adjustment(mut self, adjustment: DueDateAdjustment) -> Self {
        self.adjustment = Some(adjustment);
        self
    }

    fn due_date_from(&self, base_date: NaiveDateTime) -> CirculationResult<NaiveDateTime> {
        let Some(mut due) = self.period.add_to(base_date) else {
            return CirculationResult::failed_internal(
                "due date is not representable for the configured period");
        };
        if let Some(limit) = &self.due_date_limit {
            if let Some(cap) = limit.due_date_for(base_date) {
                if due > cap {
                    due = cap;
                }
            }
        }
        if let Some(adjust) = &self.adjustment {
            due = adjust(due);
        }
        CirculationResult::succeeded(due)
    }
}

// The four due-date algorithms behind one capability. A policy picks its
// variants once, at construction, from its configuration.
#[derive(Clone)]
pub enum DueDateStrategy {
    FixedScheduleCheckout(FixedScheduleStrategy),
    FixedScheduleRenewal(FixedScheduleStrategy),
    RollingCheckout(RollingStrategy),
    RollingRenewal(RollingStrategy),
}

impl DueDateStrategy {
    // Checkout variants work from the loan date; renewal variants from the
    // supplied reference (renewal) date.
    pub fn calculate_due_date(&self, loan: &Loan,
                              reference_date: NaiveDateTime) -> CirculationResult<NaiveDateTime> {
        match self {
            DueDateStrategy::FixedScheduleCheckout(strategy) => {
                strategy.due_date_for(loan.loan_date)
            }
            DueDateStrategy::FixedScheduleRenewal(strategy) => {
                strategy.due_date_for(reference_date)
            }
            DueDateStrategy::RollingCheckout(strategy) => {
                strategy.due_date_from(loan.loan_date)
            }
            DueDateStrategy::RollingRenewal(strategy) => {
                strategy.due_date_from(reference_date)
            }
        }
    }
}
