/// Console adapters for user feedback
mod console_notifier;

pub use console_notifier::ConsoleNotifier;
