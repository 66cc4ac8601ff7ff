//! Delivery port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::mail::{errors::DeliveryError, MailMessage};

/// A backend that delivers finished mail messages.
///
/// Rendering never touches this; the caller decides whether and where a
/// result gets delivered.
#[async_trait]
pub trait MailSender: Clone + Send + Sync + 'static {
    /// Delivers `message`.
    ///
    /// # Arguments
    /// * `message` - The assembled message, with at least one body part and
    ///   a sender address.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn deliver(&self, message: &MailMessage) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mock! {
    pub MailSender {}

    impl Clone for MailSender {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailSender for MailSender {
        async fn deliver(&self, message: &MailMessage) -> Result<(), DeliveryError>;
    }
}
