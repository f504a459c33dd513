use async_trait::async_trait;

/// User-in-the-loop gate for destructive or lossy actions.
///
/// Declining is a normal cancellation path, not an error.
#[async_trait]
pub trait Confirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

pub const CONFIRM_DELETE_COMBINATION: &str = "combination.confirm_delete";
pub const CONFIRM_DISCARD_CHANGES: &str = "wizard.confirm_discard_changes";
