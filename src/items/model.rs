use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemStatus {
    Available,
    CheckedOut,
    CheckedOutHeld,
    CheckedOutRecalled,
    AwaitingPickup,
    InTransit,
    Paged,
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Checked out" => ItemStatus::CheckedOut,
            "Checked out - Held" => ItemStatus::CheckedOutHeld,
            "Checked out - Recalled" => ItemStatus::CheckedOutRecalled,
            "Awaiting pickup" => ItemStatus::AwaitingPickup,
            "In transit" => ItemStatus::InTransit,
            "Paged" => ItemStatus::Paged,
            _ => ItemStatus::Available,
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::CheckedOut => write!(f, "Checked out"),
            ItemStatus::CheckedOutHeld => write!(f, "Checked out - Held"),
            ItemStatus::CheckedOutRecalled => write!(f, "Checked out - Recalled"),
            ItemStatus::AwaitingPickup => write!(f, "Awaiting pickup"),
            ItemStatus::InTransit => write!(f, "In transit"),
            ItemStatus::Paged => write!(f, "Paged"),
        }
    }
}

// Item carries the slice of the stored item record the engine cares about.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub status: ItemStatus,
}

impl Item {
    pub fn new(item_id: &str, status: ItemStatus) -> Self {
        Self {
            item_id: item_id.to_string(),
            status,
        }
    }

    pub fn is_not_same_status(&self, status: ItemStatus) -> bool {
        self.status != status
    }
}
