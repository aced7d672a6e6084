mod notifier;
mod slack;

pub use notifier::{NotifyOutcome, SignupNotifier};
pub use slack::{MessageSink, NotificationEvent, SlackWebhook};
