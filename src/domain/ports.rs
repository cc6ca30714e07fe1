use crate::domain::model::Participant;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of externally-verifiable randomness. Given a count `n`, returns a
/// permutation of the indices `[0, n)` with no repeats. One network call per
/// invocation; a failed call yields no sequence at all, never a partial one.
#[async_trait]
pub trait RandomSource: Send + Sync {
    async fn permutation(&self, n: usize) -> Result<Vec<usize>>;
}

/// Delivery channel for the notification emails.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, to: &Participant, subject: &str, body_html: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn participants_file(&self) -> &str;
    fn template_file(&self) -> &str;
    fn event_date(&self) -> &str;
    fn expected_value(&self) -> &str;
    fn place(&self) -> &str;
    fn organizer_email(&self) -> &str;
}
