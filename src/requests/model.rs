use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::items::model::ItemStatus;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RequestType {
    Hold,
    Recall,
    Page,
}

impl RequestType {
    // The in-queue status an item carries while checked out with this
    // request outstanding against it.
    pub fn checked_out_status(&self) -> ItemStatus {
        match self {
            RequestType::Hold => ItemStatus::CheckedOutHeld,
            RequestType::Recall => ItemStatus::CheckedOutRecalled,
            RequestType::Page => ItemStatus::Paged,
        }
    }
}

impl From<String> for RequestType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Recall" => RequestType::Recall,
            "Page" => RequestType::Page,
            _ => RequestType::Hold,
        }
    }
}

impl Display for RequestType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RequestType::Hold => write!(f, "Hold"),
            RequestType::Recall => write!(f, "Recall"),
            RequestType::Page => write!(f, "Page"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum FulfilmentPreference {
    HoldShelf,
    Delivery,
    Unknown,
}

impl FulfilmentPreference {
    // The status an item takes when checked in with this request next in
    // line; an unrecognised preference resolves to no status and the
    // request is skipped for check-in purposes.
    pub fn checked_in_status(&self) -> Option<ItemStatus> {
        match self {
            FulfilmentPreference::HoldShelf => Some(ItemStatus::AwaitingPickup),
            FulfilmentPreference::Delivery => Some(ItemStatus::InTransit),
            FulfilmentPreference::Unknown => None,
        }
    }
}

impl From<String> for FulfilmentPreference {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Hold Shelf" => FulfilmentPreference::HoldShelf,
            "Delivery" => FulfilmentPreference::Delivery,
            _ => FulfilmentPreference::Unknown,
        }
    }
}

impl Display for FulfilmentPreference {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FulfilmentPreference::HoldShelf => write!(f, "Hold Shelf"),
            FulfilmentPreference::Delivery => write!(f, "Delivery"),
            FulfilmentPreference::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RequestStatus {
    Open,
    Closed,
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Closed" => RequestStatus::Closed,
            _ => RequestStatus::Open,
        }
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RequestStatus::Open => write!(f, "Open"),
            RequestStatus::Closed => write!(f, "Closed"),
        }
    }
}

// Request abstracts one pending claim against an item.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Request {
    pub request_id: String,
    pub request_type: RequestType,
    pub fulfilment_preference: FulfilmentPreference,
    pub status: RequestStatus,
}

impl Request {
    pub fn open(request_type: RequestType, fulfilment_preference: FulfilmentPreference) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            request_type,
            fulfilment_preference,
            status: RequestStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == RequestStatus::Open
    }

    pub fn is_fulfillable(&self) -> bool {
        self.fulfilment_preference.checked_in_status().is_some()
    }
}
