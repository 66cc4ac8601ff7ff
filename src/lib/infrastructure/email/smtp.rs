//! SMTP delivery backend

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::domain::mail::{errors::DeliveryError, AlternateView, MailMessage, MailSender};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// Delivers assembled messages over SMTP
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

/// Projects the assembled message into the wire representation.
pub(crate) fn build_message(message: &MailMessage) -> Result<Message, DeliveryError> {
    let from = message.from().ok_or(DeliveryError::MissingSender)?;

    let mut builder = Message::builder()
        .from(from.as_str().parse::<Mailbox>()?)
        .subject(message.subject());

    for address in message.to() {
        builder = builder.to(address.as_str().parse()?);
    }
    for address in message.cc() {
        builder = builder.cc(address.as_str().parse()?);
    }
    for address in message.bcc() {
        builder = builder.bcc(address.as_str().parse()?);
    }
    if let Some(reply_to) = message.reply_to() {
        builder = builder.reply_to(reply_to.as_str().parse()?);
    }

    let mut views = message.alternate_views().iter();
    let first = views.next().ok_or(DeliveryError::EmptyBody)?;

    let mut multipart = MultiPart::alternative().singlepart(body_part(first)?);
    for view in views {
        multipart = multipart.singlepart(body_part(view)?);
    }

    Ok(builder.multipart(multipart)?)
}

fn body_part(view: &AlternateView) -> Result<SinglePart, DeliveryError> {
    let content_type =
        ContentType::parse(&format!("{}; charset={}", view.content_type(), view.charset()))?;

    Ok(SinglePart::builder()
        .header(content_type)
        .body(view.content().to_vec()))
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn deliver(&self, message: &MailMessage) -> Result<(), DeliveryError> {
        let email = build_message(message)?;

        self.transport()?
            .send(email)
            .await
            .map_err(|err| DeliveryError::Transport(err.into()))?;

        tracing::debug!(subject = %message.subject(), "delivered email over smtp");

        Ok(())
    }
}
