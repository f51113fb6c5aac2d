//! # Comanda Desk
//!
//! The in-process service that accepts finished drafts and hands out daily
//! comanda numbers.
//!
//! ## Why an actor
//!
//! The [`SequenceCounter`] does a plain read-modify-write. Several form
//! sessions in the same process (one per till, say) must not receive the
//! same number, so the counter lives inside a single task and every request
//! reaches it through a channel. The task processes messages one at a time,
//! which serializes numbering without a lock.
//!
//! This does not help across processes sharing one counter file; that race
//! is documented on [`crate::counter`].
//!
//! ## Key Types
//!
//! - [`ComandaDesk`]: the server half. Owns the counter, the configuration
//!   and the clock.
//! - [`DeskClient`]: the cloneable handle form sessions talk to.
//! - [`DeskError`]: what a client call can fail with.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use crate::counter::{KeyValueStore, SequenceCounter};
use crate::draft::OrderDraft;
use crate::model::OrderRecord;
use crate::runtime::ComandaConfig;
use chrono::{DateTime, Local, NaiveDate};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the desk.
pub type Response<T> = oneshot::Sender<Result<T, DeskError>>;

/// Messages understood by the desk.
#[derive(Debug)]
pub enum DeskRequest {
    /// Validate, number and record a draft.
    Submit {
        draft: Box<OrderDraft>,
        respond_to: Response<OrderRecord>,
    },
    /// Draw the next number for `date` outside of a submission.
    NextNumber {
        date: NaiveDate,
        respond_to: Response<u64>,
    },
    /// Read the last number issued for `date`.
    Current {
        date: NaiveDate,
        respond_to: Response<u64>,
    },
}

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// The desk actor.
pub struct ComandaDesk<S: KeyValueStore> {
    receiver: mpsc::Receiver<DeskRequest>,
    counter: SequenceCounter<S>,
    config: ComandaConfig,
    clock: Clock,
}

impl<S: KeyValueStore + Send + 'static> ComandaDesk<S> {
    /// Creates the desk and its client. Nothing runs until [`run`](Self::run)
    /// is spawned.
    pub fn new(buffer_size: usize, store: S, config: ComandaConfig) -> (Self, DeskClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let desk = Self {
            receiver,
            counter: SequenceCounter::new(store),
            config,
            clock: Box::new(Local::now),
        };
        (desk, DeskClient::new(sender))
    }

    /// Replaces the wall clock, e.g. to pin submissions to a date in tests.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Local> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Runs the message loop until every client is dropped, then hands the
    /// store back.
    pub async fn run(mut self) -> S {
        info!(ticket_numbering = ?self.config.ticket_numbering, "Desk started");
        let mut accepted = 0usize;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DeskRequest::Submit { draft, respond_to } => {
                    let now = (self.clock)();
                    match draft.submit(&mut self.counter, &self.config, now) {
                        Ok(record) => {
                            accepted += 1;
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(error = %e, "Submit rejected");
                            let _ = respond_to.send(Err(DeskError::Validation(e)));
                        }
                    }
                }
                DeskRequest::NextNumber { date, respond_to } => {
                    let number = self.counter.next_number(date);
                    info!(%date, number, "Issued number");
                    let _ = respond_to.send(Ok(number));
                }
                DeskRequest::Current { date, respond_to } => {
                    let number = self.counter.current(date);
                    debug!(%date, number, "Current");
                    let _ = respond_to.send(Ok(number));
                }
            }
        }

        info!(accepted, "Shutdown");
        self.counter.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::MemoryStore;
    use crate::model::{OrderType, PaymentMethod};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 19, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_desk_submit_and_numbering() {
        let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), ComandaConfig::default());
        let handle = tokio::spawn(desk.with_clock(fixed_clock).run());

        let mut draft = OrderDraft::new();
        draft.set_client_name("João");
        draft.set_payment_method(Some(PaymentMethod::Debit));
        draft.set_order_type(OrderType::Marmita);

        let first = client.submit(&draft).await.unwrap();
        assert_eq!(first.daily_sequence_number, Some(1));
        assert_eq!(first.timestamp, "18/10/2026, 19:00:00");

        let date = fixed_clock().date_naive();
        assert_eq!(client.next_number(date).await.unwrap(), 2);
        assert_eq!(client.current(date).await.unwrap(), 2);

        let second = client.submit(&draft).await.unwrap();
        assert_eq!(second.ticket_label().as_deref(), Some("Comanda 003"));

        drop(client);
        let store = handle.await.unwrap();
        assert_eq!(store.get("comanda-counter-2026-10-18").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_desk_reports_validation_error() {
        let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), ComandaConfig::default());
        let handle = tokio::spawn(desk.with_clock(fixed_clock).run());

        let err = client.submit(&OrderDraft::new()).await.unwrap_err();
        match err {
            DeskError::Validation(e) => {
                assert!(e.missing_client);
                assert!(e.missing_payment);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        drop(client);
        let store = handle.await.unwrap();
        assert!(store.is_empty());
    }
}
