use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use tokio::task::JoinHandle;
use uuid::Uuid;

const REMINDER_TITLE: &str = "Your order is almost ready";
const REMINDER_BODY: &str = "Have a good meal (in about 10 minutes)!";

/// A one-shot, non-repeating reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

/// Where reminders go. The client core has no notification surface of its
/// own; a platform integration implements this seam.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Best-effort permission check. A denial silently cancels the reminder.
    async fn request_authorization(&self) -> bool;

    async fn deliver(&self, reminder: Reminder) -> Result<()>;
}

/// Default delivery: log the reminder.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn request_authorization(&self) -> bool {
        true
    }

    async fn deliver(&self, reminder: Reminder) -> Result<()> {
        info!("{}: {}", reminder.title, reminder.body);
        Ok(())
    }
}

/// Schedules the "order almost ready" reminder. Fire-and-forget: delivery
/// errors are logged and dropped, never surfaced to the caller.
pub struct ReminderScheduler {
    notifier: Arc<dyn Notifier>,
}

impl ReminderScheduler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        ReminderScheduler { notifier }
    }

    /// Deliver a reminder `minutes_from_now` minutes from now. The caller
    /// clamps the delay to zero before calling; zero fires immediately.
    ///
    /// The returned handle may be dropped, the task runs regardless.
    pub fn schedule_ready_reminder(&self, minutes_from_now: u64) -> JoinHandle<()> {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if !notifier.request_authorization().await {
                return;
            }
            tokio::time::sleep(Duration::from_secs(minutes_from_now * 60)).await;
            let reminder = Reminder {
                id: Uuid::new_v4(),
                title: String::from(REMINDER_TITLE),
                body: String::from(REMINDER_BODY),
            };
            if let Err(err) = notifier.deliver(reminder).await {
                warn!("dropping undeliverable reminder: {}", err);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Result;
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use super::{Notifier, Reminder, ReminderScheduler};

    struct ChannelNotifier {
        granted: bool,
        sender: mpsc::UnboundedSender<Reminder>,
    }

    #[async_trait]
    impl Notifier for ChannelNotifier {
        async fn request_authorization(&self) -> bool {
            self.granted
        }

        async fn deliver(&self, reminder: Reminder) -> Result<()> {
            self.sender.send(reminder)?;
            Ok(())
        }
    }

    fn scheduler(granted: bool) -> (ReminderScheduler, mpsc::UnboundedReceiver<Reminder>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = ReminderScheduler::new(Arc::new(ChannelNotifier { granted, sender }));
        (scheduler, receiver)
    }

    #[tokio::test(start_paused = true)]
    async fn zero_minutes_fires_immediately() {
        let (scheduler, mut receiver) = scheduler(true);
        let start = tokio::time::Instant::now();

        scheduler.schedule_ready_reminder(0);
        let reminder = receiver.recv().await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(reminder.title, "Your order is almost ready");
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_fires_after_the_given_delay() {
        let (scheduler, mut receiver) = scheduler(true);
        let start = tokio::time::Instant::now();

        scheduler.schedule_ready_reminder(27);
        receiver.recv().await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(27 * 60));
    }

    #[tokio::test(start_paused = true)]
    async fn denied_authorization_delivers_nothing() {
        let (scheduler, mut receiver) = scheduler(false);

        scheduler.schedule_ready_reminder(5);
        drop(scheduler);

        // The spawned task bails out before sleeping, closing the channel.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn each_reminder_gets_a_fresh_id() {
        let (scheduler, mut receiver) = scheduler(true);

        scheduler.schedule_ready_reminder(0);
        scheduler.schedule_ready_reminder(0);

        let first = receiver.recv().await.unwrap();
        let second = receiver.recv().await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
