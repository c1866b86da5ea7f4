use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    Open,
    Closed,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Closed" => LoanStatus::Closed,
            _ => LoanStatus::Open,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Open => write!(f, "Open"),
            LoanStatus::Closed => write!(f, "Closed"),
        }
    }
}

// Loan abstracts one borrowing episode of an item. The engine never mutates
// a loan in place; renewal and check-in return a new value and leave the
// caller's copy untouched.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub item_id: String,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_date: NaiveDateTime,
    pub status: LoanStatus,
    pub renewal_count: u32,
}

impl Loan {
    pub fn open(item_id: &str, loan_date: NaiveDateTime, due_date: NaiveDateTime) -> Self {
        // A loan can never fall due before it starts.
        debug_assert!(due_date >= loan_date);
        Self {
            loan_id: Uuid::new_v4().to_string(),
            item_id: item_id.to_string(),
            loan_date,
            due_date,
            status: LoanStatus::Open,
            renewal_count: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == LoanStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == LoanStatus::Closed
    }

    // Returns the loan as renewed to the given due date.
    pub fn renew_to(&self, due_date: NaiveDateTime) -> Self {
        Self {
            due_date,
            renewal_count: self.renewal_count + 1,
            ..self.clone()
        }
    }

    // Returns the loan as checked in; the due date stays frozen.
    pub fn checked_in(&self) -> Self {
        Self {
            status: LoanStatus::Closed,
            ..self.clone()
        }
    }

    pub fn with_due_date(&self, due_date: NaiveDateTime) -> Self {
        Self {
            due_date,
            ..self.clone()
        }
    }
}
