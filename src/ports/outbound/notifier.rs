/// Notifier port for user-facing feedback
///
/// Alerts carry localized text produced by the application layer; the
/// adapter only decides how to show them.
pub trait Notifier {
    /// Announces that a network operation has started
    fn begin(&self, message: &str);

    /// Ends the indication started by [`Notifier::begin`]
    fn end(&self);

    /// Shows a confirmation to the user
    fn alert(&self, message: &str);

    /// Shows an error to the user
    fn alert_error(&self, message: &str);
}
