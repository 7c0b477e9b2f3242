// crates/patterns/src/notify.rs

/// One delivery capability, one method. The sender depends on this
/// abstraction only, so a new channel is a new impl, never an edit to
/// [`NotificationSender`].
pub trait Notifier {
    fn deliver(&self, message: &str);
}

#[derive(Debug, Default)]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn deliver(&self, message: &str) {
        log::info!("sms: {message}");
    }
}

#[derive(Debug, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn deliver(&self, message: &str) {
        log::info!("email: {message}");
    }
}

#[derive(Debug, Default)]
pub struct PushNotifier;

impl Notifier for PushNotifier {
    fn deliver(&self, message: &str) {
        log::info!("push: {message}");
    }
}

#[derive(Debug, Default)]
pub struct WhatsAppNotifier;

impl Notifier for WhatsAppNotifier {
    fn deliver(&self, message: &str) {
        log::info!("whatsapp: {message}");
    }
}

/// Fans a message out to every registered channel.
#[derive(Default)]
pub struct NotificationSender {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn broadcast(&self, message: &str) {
        for notifier in &self.notifiers {
            notifier.deliver(message);
        }
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.notifiers.len()
    }
}
