//! Error types for email rendering and delivery

use lettre::{address::AddressError, message::header::ContentTypeErr};
use thiserror::Error;

use crate::domain::views::errors::{BoxError, RenderError, ViewResolutionError};

/// Errors surfaced by the email rendering entry point.
///
/// A failure here means no result object was produced; there are no partial
/// messages.
#[derive(Debug, Error)]
pub enum EmailError {
    /// The view name was missing or no provider could resolve it
    #[error(transparent)]
    Resolution(#[from] ViewResolutionError),

    /// A resolved view failed while rendering; the view's own error is
    /// passed through unchanged
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors surfaced while handing a finished message to a delivery backend
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The message has no sender address
    #[error("a sender address is required before the message can be delivered")]
    MissingSender,

    /// The message has no body parts
    #[error("the message has no body parts")]
    EmptyBody,

    /// An address field could not be parsed by the mail backend
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// A body part carried a content type the mail backend rejected
    #[error("invalid content type on a body part")]
    ContentType(#[from] ContentTypeErr),

    /// The mail backend rejected the message structure
    #[error(transparent)]
    Message(#[from] lettre::error::Error),

    /// The transport failed to hand the message off
    #[error(transparent)]
    Transport(BoxError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for DeliveryError {
    fn from(err: anyhow::Error) -> Self {
        DeliveryError::UnknownError(err)
    }
}
