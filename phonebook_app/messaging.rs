use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use phonebook_types::errors::ApplicationError;
use phonebook_types::events::ReportRequested;

use crate::worker::{ProcessOutcome, ReportCompletionWorker};

/// Emits a `ReportRequested` event onto the "report-requested" channel.
/// Publishing never blocks on the consumer.
#[async_trait::async_trait]
pub trait ReportRequestedPublisher: Send + Sync {
    async fn publish(&self, event: ReportRequested) -> Result<(), ApplicationError>;
}

/// One in-flight delivery of an event. The attempt counter belongs to the
/// channel, not to the event: redelivery re-enqueues the same event with the
/// counter bumped.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub event: ReportRequested,
    pub attempt: u32,
}

/// Creates the in-process "report-requested" channel: a publisher handle for
/// the request path and the receiving end for the consumer. At-least-once
/// semantics: the consumer re-enqueues failed deliveries, so an event may be
/// processed more than once but is only dropped after the attempt cap.
pub fn report_requested_channel() -> (ChannelPublisher, mpsc::UnboundedReceiver<Delivery>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelPublisher { tx }, rx)
}

#[derive(Clone)]
pub struct ChannelPublisher {
    tx: mpsc::UnboundedSender<Delivery>,
}

impl ChannelPublisher {
    fn send(&self, delivery: Delivery) -> Result<(), ApplicationError> {
        self.tx
            .send(delivery)
            .map_err(|_| ApplicationError::Messaging("report-requested channel closed".into()))
    }
}

#[async_trait::async_trait]
impl ReportRequestedPublisher for ChannelPublisher {
    async fn publish(&self, event: ReportRequested) -> Result<(), ApplicationError> {
        self.send(Delivery { event, attempt: 1 })
    }
}

/// Drives the completion worker from the channel. Inspects the worker's
/// outcome and decides between acknowledge (drop the delivery) and
/// redelivery after a delay, up to `max_delivery_attempts`.
pub struct ChannelConsumer {
    worker: Arc<ReportCompletionWorker>,
    publisher: ChannelPublisher,
    receiver: mpsc::UnboundedReceiver<Delivery>,
    redelivery_delay: Duration,
    max_delivery_attempts: u32,
}

impl ChannelConsumer {
    pub fn new(
        worker: Arc<ReportCompletionWorker>,
        publisher: ChannelPublisher,
        receiver: mpsc::UnboundedReceiver<Delivery>,
        redelivery_delay: Duration,
        max_delivery_attempts: u32,
    ) -> Self {
        Self {
            worker,
            publisher,
            receiver,
            redelivery_delay,
            max_delivery_attempts,
        }
    }

    /// Runs the consume loop inside a tokio task.
    pub fn run(mut self) {
        tokio::spawn(async move {
            tracing::info!("Report consumer started.");

            while let Some(delivery) = self.receiver.recv().await {
                self.consume(delivery).await;
            }
        });
    }

    async fn consume(&self, delivery: Delivery) {
        let report_id = delivery.event.report_id;

        match self.worker.process(&delivery.event).await {
            Ok(ProcessOutcome::Completed) => {
                tracing::debug!(%report_id, "Delivery acknowledged.");
            }
            Ok(ProcessOutcome::Skipped) => {
                tracing::debug!(%report_id, "Delivery acknowledged (no-op).");
            }
            Err(e) if delivery.attempt < self.max_delivery_attempts => {
                tracing::warn!(
                    %report_id,
                    attempt = delivery.attempt,
                    "Processing failed, scheduling redelivery: {e}"
                );
                self.redeliver(delivery);
            }
            Err(e) => {
                tracing::error!(
                    %report_id,
                    attempt = delivery.attempt,
                    "Processing failed, delivery attempts exhausted: {e}"
                );
            }
        }
    }

    fn redeliver(&self, delivery: Delivery) {
        debug_assert!(delivery.attempt < self.max_delivery_attempts);

        let publisher = self.publisher.clone();
        let delay = self.redelivery_delay;
        let next = Delivery {
            event: delivery.event,
            attempt: delivery.attempt + 1,
        };

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = publisher.send(next) {
                tracing::error!("Redelivery failed: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_event() -> ReportRequested {
        ReportRequested {
            report_id: Uuid::new_v4(),
            requested_location: "Ankara".to_string(),
            requested_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn publish_enqueues_a_first_attempt_delivery() {
        let (publisher, mut receiver) = report_requested_channel();
        let event = sample_event();

        publisher.publish(event.clone()).await.unwrap();

        let delivery = receiver.recv().await.unwrap();
        assert_eq!(delivery.event, event);
        assert_eq!(delivery.attempt, 1);
    }

    #[tokio::test]
    async fn publish_into_closed_channel_is_a_messaging_error() {
        let (publisher, receiver) = report_requested_channel();
        drop(receiver);

        let result = publisher.publish(sample_event()).await;

        assert!(matches!(result, Err(ApplicationError::Messaging(_))));
    }
}
