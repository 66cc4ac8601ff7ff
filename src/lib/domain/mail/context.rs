//! The per-invocation mailer context

use crate::domain::mail::{Charset, EmailAddress};
use crate::domain::views::{Model, ViewBag, ViewData};

/// The host execution context a render is invoked under.
///
/// Carries only what view lookup needs: the request path and the active
/// area. It is supplied explicitly by the caller; nothing here is read from
/// ambient or global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostContext {
    request_path: String,
    area: Option<String>,
}

impl HostContext {
    /// A context rooted at `request_path` with no active area.
    pub fn new(request_path: impl Into<String>) -> Self {
        Self {
            request_path: request_path.into(),
            area: None,
        }
    }

    /// Scopes the context to `area`.
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// The request path the render runs under.
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    /// The active area, if any.
    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Everything an application author populates before asking for an email.
///
/// Created per call, consumed by [`crate::domain::mail::Mailer::email`], and
/// reusable afterwards for near-identical messages. A sender is not needed
/// to render, only to deliver.
#[derive(Clone, Debug, Default)]
pub struct MailerContext {
    /// The sender address; required before the message can be delivered
    pub from: Option<EmailAddress>,

    /// Primary recipients, in insertion order
    pub to: Vec<EmailAddress>,

    /// Carbon-copy recipients
    pub cc: Vec<EmailAddress>,

    /// Blind-carbon-copy recipients
    pub bcc: Vec<EmailAddress>,

    /// The reply-to address, if it differs from the sender
    pub reply_to: Option<EmailAddress>,

    /// The message subject
    pub subject: String,

    /// Charset override for every body part; UTF-8 when unset
    pub message_encoding: Option<Charset>,

    /// Ambient model, used when the render request supplies none
    pub model: Option<Model>,

    /// Key/value data visible to every rendered view
    pub view_data: ViewData,

    /// The host execution context, used for area-aware view lookup
    pub host: HostContext,
}

impl MailerContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender address.
    pub fn from(mut self, address: EmailAddress) -> Self {
        self.from = Some(address);
        self
    }

    /// Adds a primary recipient.
    pub fn to(mut self, address: EmailAddress) -> Self {
        self.to.push(address);
        self
    }

    /// Adds a carbon-copy recipient.
    pub fn cc(mut self, address: EmailAddress) -> Self {
        self.cc.push(address);
        self
    }

    /// Adds a blind-carbon-copy recipient.
    pub fn bcc(mut self, address: EmailAddress) -> Self {
        self.bcc.push(address);
        self
    }

    /// Sets the reply-to address.
    pub fn reply_to(mut self, address: EmailAddress) -> Self {
        self.reply_to = Some(address);
        self
    }

    /// Sets the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Overrides the charset used to encode every body part.
    pub fn message_encoding(mut self, charset: Charset) -> Self {
        self.message_encoding = Some(charset);
        self
    }

    /// Sets the ambient model.
    pub fn model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the host execution context.
    pub fn host(mut self, host: HostContext) -> Self {
        self.host = host;
        self
    }

    /// Dynamic-style access to the view data.
    ///
    /// The bag and [`MailerContext::view_data`] share one store; a key
    /// written through either is readable through both.
    pub fn bag(&mut self) -> ViewBag<'_> {
        ViewBag::new(&mut self.view_data)
    }

    /// The charset every body part will be encoded with.
    pub fn effective_encoding(&self) -> Charset {
        self.message_encoding.unwrap_or_default()
    }
}
