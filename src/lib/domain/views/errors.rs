//! Error types for view resolution and rendering

use thiserror::Error;

/// Boxed source error raised by a view implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// View resolution errors
#[derive(Debug, Error)]
pub enum ViewResolutionError {
    /// The caller asked to resolve a view without naming it
    #[error("view name must not be empty")]
    EmptyViewName,

    /// No registered provider had a view under the requested name
    #[error("no view named {view:?}{} (providers consulted: {})", area_suffix(.area), .providers.join(", "))]
    NotFound {
        /// The requested view name
        view: String,

        /// The area the lookup was scoped to, if any
        area: Option<String>,

        /// Names of every provider that was asked, in registration order
        providers: Vec<String>,
    },
}

fn area_suffix(area: &Option<String>) -> String {
    match area {
        Some(area) => format!(" in area {area:?}"),
        None => String::new(),
    }
}

/// An error raised by a view while rendering.
///
/// The underlying template failure is surfaced unchanged; this crate never
/// wraps, suppresses, or retries it.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RenderError(BoxError);

impl RenderError {
    /// Wraps a view implementation's own error type.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self(source.into())
    }

    /// Builds a render error from a bare message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}
