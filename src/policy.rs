pub mod due_date;
pub mod loan_policy;
pub mod period;
pub mod schedule;
