//! The assembled mail message and its encoded body parts

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::mail::EmailAddress;

/// A character set a message body can be encoded with.
///
/// UTF-8 is the default throughout; the others exist for callers whose
/// delivery path requires a legacy encoding. Characters a charset cannot
/// represent are replaced with `?` on encode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    /// UTF-8 (the default)
    #[default]
    Utf8,

    /// 7-bit US-ASCII
    Ascii,

    /// ISO-8859-1 (Latin-1)
    Latin1,
}

/// Error for charset names this crate does not know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown charset {0:?}")]
pub struct UnknownCharset(String);

impl Charset {
    /// The IANA name recorded next to each MIME part.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "us-ascii",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Encodes `text` into this charset's byte representation.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Self::Latin1 => text
                .chars()
                .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
                .collect(),
        }
    }

    /// Decodes bytes produced by [`Charset::encode`] back into text.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Ascii | Self::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "us-ascii" | "ascii" => Ok(Self::Ascii),
            "iso-8859-1" | "latin1" => Ok(Self::Latin1),
            other => Err(UnknownCharset(other.to_string())),
        }
    }
}

/// One MIME part of the message body: a content type plus the body text
/// encoded with the message's charset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternateView {
    content_type: &'static str,
    charset: Charset,
    content: Vec<u8>,
}

impl AlternateView {
    pub(crate) fn new(content_type: &'static str, charset: Charset, content: Vec<u8>) -> Self {
        Self {
            content_type,
            charset,
            content,
        }
    }

    /// The MIME content type of this part.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// The charset the body was encoded with.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// The encoded body bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The body decoded back to text.
    pub fn body_text(&self) -> String {
        self.charset.decode(&self.content)
    }
}

/// A finished mail message, ready to hand to a delivery backend.
///
/// Body parts keep a fixed order: the plain text part, when present, always
/// precedes the HTML part.
#[derive(Clone, Debug, Default)]
pub struct MailMessage {
    pub(crate) from: Option<EmailAddress>,
    pub(crate) to: Vec<EmailAddress>,
    pub(crate) cc: Vec<EmailAddress>,
    pub(crate) bcc: Vec<EmailAddress>,
    pub(crate) reply_to: Option<EmailAddress>,
    pub(crate) subject: String,
    pub(crate) alternate_views: Vec<AlternateView>,
}

impl MailMessage {
    /// The sender, if one was set on the context.
    pub fn from(&self) -> Option<&EmailAddress> {
        self.from.as_ref()
    }

    /// Primary recipients, in insertion order.
    pub fn to(&self) -> &[EmailAddress] {
        &self.to
    }

    /// Carbon-copy recipients.
    pub fn cc(&self) -> &[EmailAddress] {
        &self.cc
    }

    /// Blind-carbon-copy recipients.
    pub fn bcc(&self) -> &[EmailAddress] {
        &self.bcc
    }

    /// The reply-to address, if any.
    pub fn reply_to(&self) -> Option<&EmailAddress> {
        self.reply_to.as_ref()
    }

    /// The subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The body parts, plain text first.
    pub fn alternate_views(&self) -> &[AlternateView] {
        &self.alternate_views
    }
}
