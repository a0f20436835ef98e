//! Transient user notifications
//!
//! Store mutations surface short informational messages that expire on their
//! own. The queue is informational only and not part of the data contract.

use std::time::Instant;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message
    Info,
    /// Success message
    Success,
}

/// A transient, auto-expiring notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub kind: NotificationKind,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// Duration to display (in seconds)
    pub duration_secs: u64,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration_secs: 3,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Set the duration for this notification
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_secs = seconds;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// A queue of pending notifications
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Take all pending notifications, leaving the queue empty
    ///
    /// Notifications past their display duration are dropped, not returned.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
            .into_iter()
            .filter(|n| !n.is_expired())
            .collect()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
