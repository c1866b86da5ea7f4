use crate::items::model::ItemStatus;
use crate::loans::model::Loan;
use crate::requests::model::RequestType;
use crate::requests::queue::RequestQueue;

// The operation whose outcome may change an item's status.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StatusTrigger {
    CheckOut,
    LoanUpdate,
    // Carries the type of the request that was just created; the new
    // request is not yet part of the queue snapshot.
    RequestCreated(RequestType),
}

// Derives the item's post-operation status from the loan state and the
// request queue. Pure and idempotent: persisting the outcome is the
// caller's responsibility.
pub fn resolve_status(loan: &Loan, queue: &RequestQueue, trigger: StatusTrigger) -> ItemStatus {
    match trigger {
        StatusTrigger::RequestCreated(new_request_type) => {
            // An existing outstanding request keeps governing the status;
            // the new request only counts when it is the only claim.
            match queue.highest_priority_request() {
                Some(request) => request.request_type.checked_out_status(),
                None => new_request_type.checked_out_status(),
            }
        }
        StatusTrigger::CheckOut | StatusTrigger::LoanUpdate => {
            if loan.is_closed() {
                queue
                    .highest_priority_fulfillable_request()
                    .and_then(|request| request.fulfilment_preference.checked_in_status())
                    .unwrap_or(ItemStatus::Available)
            } else {
                queue
                    .highest_priority_request()
                    .map(|request| request.request_type.checked_out_status())
                    .unwrap_or(ItemStatus::CheckedOut)
            }
        }
    }
}
