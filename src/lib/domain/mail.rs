//! The mailer surface: per-call context, message assembly, and delivery port.

mod assembler;
mod context;
mod email_address;
mod message;
mod result;
mod sender;
mod service;

pub mod errors;

pub use context::{HostContext, MailerContext};
pub use email_address::{EmailAddress, EmailAddressError};
pub use message::{AlternateView, Charset, MailMessage, UnknownCharset};
pub use result::EmailResult;
pub use sender::MailSender;
pub use service::{EmailRequest, Mailer};

#[cfg(test)]
pub mod tests {
    pub use super::sender::MockMailSender;
}
