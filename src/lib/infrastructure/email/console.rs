//! Console delivery backend for development
//!
//! Prints the assembled message to stdout instead of sending it. Message
//! bodies may contain tokens or personal data; keep this out of production
//! logging pipelines.

use async_trait::async_trait;

use crate::domain::mail::{errors::DeliveryError, MailMessage, MailSender};

/// A delivery backend that prints messages to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleMailer {
    prefix: String,
}

impl ConsoleMailer {
    /// A console mailer with the default `[MAIL]` prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[MAIL]".to_string(),
        }
    }

    /// A console mailer with a custom line prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for ConsoleMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailSender for ConsoleMailer {
    async fn deliver(&self, message: &MailMessage) -> Result<(), DeliveryError> {
        let from = message.from().ok_or(DeliveryError::MissingSender)?;

        println!("{} ========================================", self.prefix);
        println!("{} From:    {}", self.prefix, from);
        for address in message.to() {
            println!("{} To:      {}", self.prefix, address);
        }
        for address in message.cc() {
            println!("{} Cc:      {}", self.prefix, address);
        }
        for address in message.bcc() {
            println!("{} Bcc:     {}", self.prefix, address);
        }
        if let Some(reply_to) = message.reply_to() {
            println!("{} Reply-To: {}", self.prefix, reply_to);
        }
        println!("{} Subject: {}", self.prefix, message.subject());

        for view in message.alternate_views() {
            println!(
                "{} ---- {}; charset={} ----",
                self.prefix,
                view.content_type(),
                view.charset()
            );
            for line in view.body_text().lines() {
                println!("{} {}", self.prefix, line);
            }
        }

        println!("{} ========================================", self.prefix);

        tracing::debug!(subject = %message.subject(), "printed email to console");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::mail::{Charset, EmailAddress};

    use super::*;

    #[tokio::test]
    async fn test_console_mailer_requires_a_sender() {
        let mailer = ConsoleMailer::new();

        let result = mailer.deliver(&MailMessage::default()).await;

        assert!(matches!(result, Err(DeliveryError::MissingSender)));
    }

    #[tokio::test]
    async fn test_console_mailer_prints_a_complete_message() -> TestResult {
        let mut message = MailMessage::default();
        message.from = Some(EmailAddress::new("no-reply@mysite.com")?);
        message.to = vec![EmailAddress::new("user@example.com")?];
        message.subject = "Welcome".to_string();
        message.alternate_views = vec![crate::domain::mail::AlternateView::new(
            "text/plain",
            Charset::Utf8,
            Charset::Utf8.encode("hello"),
        )];

        ConsoleMailer::with_prefix("[TEST]").deliver(&message).await?;

        Ok(())
    }
}
