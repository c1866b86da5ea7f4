use crate::requests::model::{Request, RequestType};

// RequestQueue is an immutable snapshot of the pending requests against one
// item, in caller-supplied priority order (first entry = highest priority).
// The engine never re-sorts it and never persists it.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RequestQueue {
    requests: Vec<Request>,
}

impl RequestQueue {
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_outstanding_requests(&self) -> bool {
        self.highest_priority_request().is_some()
    }

    pub fn highest_priority_request(&self) -> Option<&Request> {
        self.requests.iter().find(|request| request.is_open())
    }

    pub fn has_outstanding_fulfillable_requests(&self) -> bool {
        self.highest_priority_fulfillable_request().is_some()
    }

    pub fn highest_priority_fulfillable_request(&self) -> Option<&Request> {
        self.requests
            .iter()
            .find(|request| request.is_open() && request.is_fulfillable())
    }

    pub fn has_open_recall(&self) -> bool {
        self.requests
            .iter()
            .any(|request| request.is_open() && request.request_type == RequestType::Recall)
    }
}

#[cfg(test)]
mod tests {
    use crate::requests::model::{FulfilmentPreference, Request, RequestStatus, RequestType};
    use crate::requests::queue::RequestQueue;

    fn closed(request_type: RequestType) -> Request {
        Request {
            status: RequestStatus::Closed,
            ..Request::open(request_type, FulfilmentPreference::HoldShelf)
        }
    }

    #[tokio::test]
    async fn test_should_have_no_outstanding_requests_when_empty() {
        let queue = RequestQueue::empty();
        assert!(!queue.has_outstanding_requests());
        assert!(queue.highest_priority_request().is_none());
        assert!(!queue.has_outstanding_fulfillable_requests());
    }

    #[tokio::test]
    async fn test_should_skip_closed_requests() {
        let open = Request::open(RequestType::Page, FulfilmentPreference::HoldShelf);
        let queue = RequestQueue::new(vec![closed(RequestType::Recall), open.clone()]);
        assert_eq!(Some(&open), queue.highest_priority_request());
    }

    #[tokio::test]
    async fn test_should_keep_caller_supplied_order() {
        let first = Request::open(RequestType::Hold, FulfilmentPreference::Delivery);
        let second = Request::open(RequestType::Recall, FulfilmentPreference::HoldShelf);
        let queue = RequestQueue::new(vec![first.clone(), second]);
        assert_eq!(Some(&first), queue.highest_priority_request());
    }

    #[tokio::test]
    async fn test_should_find_first_fulfillable_request() {
        let unfulfillable = Request::open(RequestType::Hold, FulfilmentPreference::Unknown);
        let fulfillable = Request::open(RequestType::Hold, FulfilmentPreference::HoldShelf);
        let queue = RequestQueue::new(vec![unfulfillable.clone(), fulfillable.clone()]);
        assert_eq!(Some(&unfulfillable), queue.highest_priority_request());
        assert_eq!(Some(&fulfillable), queue.highest_priority_fulfillable_request());
        assert!(queue.has_outstanding_fulfillable_requests());
    }

    #[tokio::test]
    async fn test_should_detect_open_recall() {
        let queue = RequestQueue::new(vec![
            Request::open(RequestType::Hold, FulfilmentPreference::HoldShelf),
            Request::open(RequestType::Recall, FulfilmentPreference::HoldShelf),
        ]);
        assert!(queue.has_open_recall());

        let queue = RequestQueue::new(vec![closed(RequestType::Recall)]);
        assert!(!queue.has_open_recall());
    }
}
