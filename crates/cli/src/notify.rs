use colored::Colorize;
use orchestrator::{Notification, NotificationLevel, Notifier};

/// Prints notifications to stderr so stdout carries only the result.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn render(notification: &Notification) -> String {
        let title = match notification.level {
            NotificationLevel::Success => notification.title.green().bold(),
            NotificationLevel::Error => notification.title.red().bold(),
            NotificationLevel::Info => notification.title.cyan().bold(),
        };

        if notification.description.is_empty() {
            title.to_string()
        } else {
            format!("{} {}", title, notification.description.dimmed())
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }
}
