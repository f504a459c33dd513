/// Kind of feedback shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget user feedback channel.
pub trait NotificationChannel: Send + Sync {
    fn show(&self, message: &str, kind: NotificationKind);
}
