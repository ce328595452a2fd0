use crate::domain::value_objects::MemberId;
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A notification accepted by the mock notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub message: String,
    pub member_id: MemberId,
}

/// Mock implementation of Notifier
///
/// Does not deliver anything. Logs each notification and keeps it
/// in memory so the job runner can report what would have been sent.
pub struct Notifier {
    sent: Mutex<Vec<SentNotification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Notifications sent so far, in send order
    pub fn sent(&self) -> Vec<SentNotification> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SentNotification>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierTrait for Notifier {
    fn send_notification(&self, message: &str, member_id: MemberId) -> Result<()> {
        tracing::info!(
            member_id = member_id.value(),
            notification = message,
            "notification sent"
        );
        self.lock().push(SentNotification {
            message: message.to_string(),
            member_id,
        });
        Ok(())
    }
}
