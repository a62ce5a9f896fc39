//! User-facing notices for mints that cannot start.

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    /// The action failed.
    Destructive,
}

/// A toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Presentation of the notice.
    pub variant: NoticeVariant,
    /// Short headline.
    pub title: &'static str,
    /// One-line explanation.
    pub description: &'static str,
}

impl Notice {
    /// Creates a destructive notice.
    #[must_use]
    pub const fn destructive(title: &'static str, description: &'static str) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            title,
            description,
        }
    }
}

/// Receives the notices produced while minting.
pub trait Notifier: Send + Sync {
    /// Shows `notice` to the user.
    fn notify(&self, notice: &Notice);
}

/// A [`Notifier`] that emits notices as `warn` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(
            variant = ?notice.variant,
            description = notice.description,
            "{}",
            notice.title
        );
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}
