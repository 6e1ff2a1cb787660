//! User-visible failure notifications.
//!
//! The facade writes one message per failed call to a `Notifier`. The sink
//! is handed to the facade at construction; nothing here is global.

use tokio::sync::mpsc;

/// Write-only sink for user-facing error messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Emits each message as an error-level log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::error!(target: "weather_admin::notify", "{}", message);
    }
}

/// Forwards each message to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver that observes its messages.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        // A dropped receiver means nobody is watching; the call result still carries the error.
        let _ = self.tx.send(message.to_string());
    }
}
