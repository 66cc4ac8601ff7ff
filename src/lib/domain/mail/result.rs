//! The finished product of a render call

use crate::domain::mail::{
    errors::DeliveryError, Charset, HostContext, MailMessage, MailSender,
};
use crate::domain::views::{Model, ViewData};

/// The outcome of rendering an email: the assembled message plus the
/// context it was rendered under.
///
/// The message is owned exclusively by the result; the model rides the same
/// shared handle the caller supplied, so the object visible here is the one
/// the views saw.
#[derive(Debug)]
pub struct EmailResult {
    view_name: String,
    master_name: Option<String>,
    encoding: Charset,
    model: Option<Model>,
    view_data: ViewData,
    host: HostContext,
    mail: MailMessage,
}

impl EmailResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        view_name: String,
        master_name: Option<String>,
        encoding: Charset,
        model: Option<Model>,
        view_data: ViewData,
        host: HostContext,
        mail: MailMessage,
    ) -> Self {
        Self {
            view_name,
            master_name,
            encoding,
            model,
            view_data,
            host,
            mail,
        }
    }

    /// The view name the render was asked for.
    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    /// The master name passed through resolution, if any.
    pub fn master_name(&self) -> Option<&str> {
        self.master_name.as_deref()
    }

    /// The charset every body part was encoded with.
    pub fn encoding(&self) -> Charset {
        self.encoding
    }

    /// The model the views rendered against, if any.
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The view data the views rendered against.
    pub fn view_data(&self) -> &ViewData {
        &self.view_data
    }

    /// The host execution context the render ran under.
    pub fn host(&self) -> &HostContext {
        &self.host
    }

    /// The assembled message.
    pub fn mail(&self) -> &MailMessage {
        &self.mail
    }

    /// Consumes the result, yielding the message for hand-off.
    pub fn into_mail(self) -> MailMessage {
        self.mail
    }

    /// Hands the message to a delivery backend.
    pub async fn deliver<S: MailSender>(&self, sender: &S) -> Result<(), DeliveryError> {
        sender.deliver(&self.mail).await
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::mail::tests::MockMailSender;

    use super::*;

    fn result_with_mail(mail: MailMessage) -> EmailResult {
        EmailResult::new(
            "TestView".to_string(),
            None,
            Charset::Utf8,
            None,
            ViewData::new(),
            HostContext::default(),
            mail,
        )
    }

    #[tokio::test]
    async fn test_deliver_hands_the_message_to_the_sender_once() -> TestResult {
        let mut sender = MockMailSender::new();

        sender
            .expect_deliver()
            .times(1)
            .withf(|message| message.subject() == "Welcome")
            .returning(|_| Ok(()));

        let mut mail = MailMessage::default();
        mail.subject = "Welcome".to_string();

        result_with_mail(mail).deliver(&sender).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_deliver_surfaces_sender_failures() {
        let mut sender = MockMailSender::new();

        sender
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::MissingSender));

        let result = result_with_mail(MailMessage::default())
            .deliver(&sender)
            .await;

        assert!(matches!(result, Err(DeliveryError::MissingSender)));
    }

    #[test]
    fn test_into_mail_yields_the_owned_message() {
        let mut mail = MailMessage::default();
        mail.subject = "Welcome".to_string();

        let mail = result_with_mail(mail).into_mail();

        assert_eq!(mail.subject(), "Welcome");
    }
}
