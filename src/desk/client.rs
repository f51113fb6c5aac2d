use crate::desk::{DeskError, DeskRequest};
use crate::draft::OrderDraft;
use crate::model::OrderRecord;
use chrono::NaiveDate;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the [`ComandaDesk`](crate::desk::ComandaDesk).
#[derive(Clone)]
pub struct DeskClient {
    sender: mpsc::Sender<DeskRequest>,
}

impl DeskClient {
    pub fn new(sender: mpsc::Sender<DeskRequest>) -> Self {
        Self { sender }
    }

    /// Submits a snapshot of `draft`. The caller keeps the draft either way.
    #[instrument(skip(self, draft), fields(client = %draft.client_name(), order_type = %draft.order_type()))]
    pub async fn submit(&self, draft: &OrderDraft) -> Result<OrderRecord, DeskError> {
        debug!("Sending submit to desk");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DeskRequest::Submit {
                draft: Box::new(draft.clone()),
                respond_to,
            })
            .await
            .map_err(|_| DeskError::Closed)?;
        response.await.map_err(|_| DeskError::Dropped)?
    }

    #[instrument(skip(self))]
    pub async fn next_number(&self, date: NaiveDate) -> Result<u64, DeskError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DeskRequest::NextNumber { date, respond_to })
            .await
            .map_err(|_| DeskError::Closed)?;
        response.await.map_err(|_| DeskError::Dropped)?
    }

    #[instrument(skip(self))]
    pub async fn current(&self, date: NaiveDate) -> Result<u64, DeskError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DeskRequest::Current { date, respond_to })
            .await
            .map_err(|_| DeskError::Closed)?;
        response.await.map_err(|_| DeskError::Dropped)?
    }
}
