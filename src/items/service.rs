use async_trait::async_trait;
use tracing::info;
use crate::core::library::CirculationIoResult;
use crate::items::model::{Item, ItemStatus};
use crate::items::status::{resolve_status, StatusTrigger};
use crate::loans::model::Loan;
use crate::requests::model::RequestType;
use crate::requests::queue::RequestQueue;

#[async_trait]
pub trait ItemStore: Sync + Send {
    async fn find_item_by_id(&self, item_id: &str) -> CirculationIoResult<Item>;
    async fn update_status(&self, item_id: &str, status: ItemStatus) -> CirculationIoResult<()>;
}

// ItemStatusService applies the status resolver's decision to the stored
// item record, writing only when the status actually changed.
pub struct ItemStatusService {
    item_store: Box<dyn ItemStore>,
}

impl ItemStatusService {
    pub fn new(item_store: Box<dyn ItemStore>) -> Self {
        Self { item_store }
    }

    pub async fn on_check_out(&self, loan: &Loan,
                              queue: &RequestQueue) -> CirculationIoResult<ItemStatus> {
        self.apply(loan, queue, StatusTrigger::CheckOut).await
    }

    pub async fn on_loan_update(&self, loan: &Loan,
                                queue: &RequestQueue) -> CirculationIoResult<ItemStatus> {
        self.apply(loan, queue, StatusTrigger::LoanUpdate).await
    }

    pub async fn on_request_created(&self, loan: &Loan, queue: &RequestQueue,
                                    request_type: RequestType) -> CirculationIoResult<ItemStatus> {
        self.apply(loan, queue, StatusTrigger::RequestCreated(request_type)).await
    }

    async fn apply(&self, loan: &Loan, queue: &RequestQueue,
                   trigger: StatusTrigger) -> CirculationIoResult<ItemStatus> {
        let item = self.item_store.find_item_by_id(loan.item_id.as_str()).await?;
        let prospective_status = resolve_status(loan, queue, trigger);
        if item.is_not_same_status(prospective_status) {
            self.item_store.update_status(item.item_id.as_str(), prospective_status).await?;
            info!("item {} status changed from {} to {}",
                  item.item_id, item.status, prospective_status);
        }
        Ok(prospective_status)
    }
}
