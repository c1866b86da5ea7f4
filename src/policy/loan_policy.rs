use chrono::NaiveDateTime;
use uuid::Uuid;
use crate::core::domain::Configuration;
use crate::core::results::{CirculationResult, ValidationError};
use crate::loans::model::Loan;
use crate::policy::due_date::{DueDateStrategy, FixedScheduleStrategy, RollingStrategy};
use crate::policy::period::Period;
use crate::policy::schedule::FixedDueDateSchedules;
use crate::requests::queue::RequestQueue;

pub const MAX_RENEWALS_REASON: &str = "loan at maximum renewal number";
pub const OPEN_RECALL_REASON: &str =
    "items cannot be renewed when there is an active recall request";
pub const UNCHANGED_DUE_DATE_REASON: &str = "renewal would not change the due date";

// LoanPolicy owns the due-date strategies for checkout and renewal (picked
// at construction) together with the renewal-limit and recall-blocking
// rules. Renewal evaluates every rule and reports all violations together.
#[derive(Clone)]
pub struct LoanPolicy {
    policy_id: String,
    name: String,
    checkout_strategy: DueDateStrategy,
    renewal_strategy: DueDateStrategy,
    renewal_limit: Option<u32>,
    renewal_blocked_by_recall: bool,
}

impl LoanPolicy {
    pub fn fixed(policy_id: &str, name: &str,
                 schedules: Option<FixedDueDateSchedules>) -> Self {
        Self {
            policy_id: policy_id.to_string(),
            name: name.to_string(),
            checkout_strategy: DueDateStrategy::FixedScheduleCheckout(
                FixedScheduleStrategy::new(policy_id, name, schedules.clone())),
            renewal_strategy: DueDateStrategy::FixedScheduleRenewal(
                FixedScheduleStrategy::new(policy_id, name, schedules)),
            renewal_limit: None,
            renewal_blocked_by_recall: true,
        }
    }

    pub fn rolling(policy_id: &str, name: &str, period: Period) -> Self {
        Self {
            policy_id: policy_id.to_string(),
            name: name.to_string(),
            checkout_strategy: DueDateStrategy::RollingCheckout(RollingStrategy::new(period)),
            renewal_strategy: DueDateStrategy::RollingRenewal(RollingStrategy::new(period)),
            renewal_limit: None,
            renewal_blocked_by_recall: true,
        }
    }

    pub fn from_configuration(config: &Configuration) -> Self {
        let policy = Self::rolling(
            Uuid::new_v4().to_string().as_str(),
            format!("{} day rolling policy", config.loan_period_days).as_str(),
            Period::days(config.loan_period_days));
        match config.max_renewals {
            Some(limit) => policy.with_renewal_limit(limit),
            None => policy,
        }
    }

    // Renewals use these schedules instead of the checkout schedules.
    pub fn with_renewal_schedules(mut self, schedules: FixedDueDateSchedules) -> Self {
        self.renewal_strategy = DueDateStrategy::FixedScheduleRenewal(
            FixedScheduleStrategy::new(self.policy_id.as_str(), self.name.as_str(),
                                       Some(schedules)));
        self
    }

    // Renewals roll over this period instead of reusing the checkout rule.
    pub fn with_renewal_period(mut self, period: Period) -> Self {
        self.renewal_strategy = DueDateStrategy::RollingRenewal(RollingStrategy::new(period));
        self
    }

    pub fn with_renewal_strategy(mut self, strategy: DueDateStrategy) -> Self {
        self.renewal_strategy = strategy;
        self
    }

    pub fn with_checkout_strategy(mut self, strategy: DueDateStrategy) -> Self {
        self.checkout_strategy = strategy;
        self
    }

    pub fn with_renewal_limit(mut self, limit: u32) -> Self {
        self.renewal_limit = Some(limit);
        self
    }

    pub fn with_recall_blocking(mut self, blocked: bool) -> Self {
        self.renewal_blocked_by_recall = blocked;
        self
    }

    pub fn policy_id(&self) -> &str {
        self.policy_id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    // Sets the initial due date of a new loan; renewal-limit and recall
    // rules do not apply at checkout.
    pub fn checkout(&self, loan: &Loan) -> CirculationResult<Loan> {
        self.checkout_strategy
            .calculate_due_date(loan, loan.loan_date)
            .map(|due_date| loan.with_due_date(due_date))
    }

    pub fn renew(&self, loan: &Loan, renewal_date: NaiveDateTime,
                 queue: &RequestQueue) -> CirculationResult<Loan> {
        let proposed_due_date = self.renewal_strategy.calculate_due_date(loan, renewal_date);
        let limit_check = self.renewal_limit_check(loan);
        let recall_check = self.recall_check(queue);

        proposed_due_date
            .combine(limit_check, |due_date, _| due_date)
            .combine(recall_check, |due_date, _| due_date)
            .and_then(|due_date| {
                // Needs a concrete proposal, so this rule only runs once
                // every independent check has passed.
                if due_date <= loan.due_date {
                    CirculationResult::failed_validation(
                        ValidationError::new(UNCHANGED_DUE_DATE_REASON))
                } else {
                    CirculationResult::succeeded(loan.renew_to(due_date))
                }
            })
    }

    fn renewal_limit_check(&self, loan: &Loan) -> CirculationResult<()> {
        match self.renewal_limit {
            Some(limit) if loan.renewal_count >= limit => {
                CirculationResult::failed_validation(ValidationError::new(MAX_RENEWALS_REASON))
            }
            _ => CirculationResult::succeeded(()),
        }
    }

    fn recall_check(&self, queue: &RequestQueue) -> CirculationResult<()> {
        if self.renewal_blocked_by_recall && queue.has_open_recall() {
            CirculationResult::failed_validation(ValidationError::new(OPEN_RECALL_REASON))
        } else {
            CirculationResult::succeeded(())
        }
    }
}
