//! The notification side-channel ("toasts").
//!
//! Success confirmations and failures travel the same way: a fire-and-forget
//! [`Notifier::notify`] call. The presentation layer decides how to show them.

use log::{error, info};

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A title plus description, optionally styled as destructive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_owned(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Sink for notifications. Must never block the caller.
pub trait Notifier: Clone + Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications over an unbounded `flume` channel.
///
/// The receiving half is drained by whatever renders toasts. If it has been
/// dropped, notifications are discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: flume::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, flume::Receiver<Notification>) {
        let (sender, receiver) = flume::unbounded();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            log::debug!("ChannelNotifier: receiver dropped, notification discarded");
        }
    }
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => {
                info!("{}: {}", notification.title, notification.description);
            }
            NotificationVariant::Destructive => {
                error!("{}: {}", notification.title, notification.description);
            }
        }
    }
}
