//! The renderable-view port and the provider port that locates views

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
use mockall::mock;

use crate::domain::views::{errors::RenderError, RenderContext};

/// The body format a view produces, and the MIME type it is tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewFormat {
    /// A plain text body (`text/plain`)
    Text,

    /// An HTML body (`text/html`)
    Html,
}

impl ViewFormat {
    /// The MIME content type for bodies of this format.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Html => "text/html",
        }
    }
}

/// A single renderable view.
///
/// Implementations execute whatever template machinery they wrap; this crate
/// only constructs the [`RenderContext`] and collects the output string.
pub trait View: Send + Sync {
    /// Renders the view against `ctx`, returning the raw body text.
    ///
    /// No encoding or whitespace handling is applied here; both happen at
    /// message-assembly time.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

/// The name-based lookup a provider answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewLookup {
    /// The logical view name to locate
    pub view_name: String,

    /// The area the lookup is scoped to, from the host execution context.
    ///
    /// Providers prefer a view registered under this area over a global one
    /// with the same name.
    pub area: Option<String>,

    /// The enclosing layout to compose with, if any.
    ///
    /// Passed through to every matching view; it never affects which views
    /// match, only how an engine that understands layouts composes output.
    pub master_name: Option<String>,
}

impl ViewLookup {
    /// Builds a lookup for `view_name` with no area or master scoping.
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            area: None,
            master_name: None,
        }
    }
}

/// One successful resolution: a view plus the format it renders.
#[derive(Clone)]
pub struct ResolvedView {
    /// The format the view produces
    pub format: ViewFormat,

    /// The view itself
    pub view: Arc<dyn View>,
}

impl ResolvedView {
    /// Pairs a view with the format it renders.
    pub fn new(format: ViewFormat, view: Arc<dyn View>) -> Self {
        Self { format, view }
    }
}

impl fmt::Debug for ResolvedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedView")
            .field("format", &self.format)
            .finish()
    }
}

/// A source of renderable views.
///
/// Providers are registered once at start-up and only read afterwards; a
/// provider may answer a lookup with at most one view per [`ViewFormat`]
/// it understands.
pub trait ViewProvider: Send + Sync {
    /// A short name used in resolution diagnostics.
    fn name(&self) -> &'static str;

    /// Returns every view this provider has for `lookup`, at most one per
    /// format.
    fn find_views(&self, lookup: &ViewLookup) -> Vec<ResolvedView>;
}

#[cfg(test)]
mock! {
    pub ViewProvider {}

    impl ViewProvider for ViewProvider {
        fn name(&self) -> &'static str;
        fn find_views(&self, lookup: &ViewLookup) -> Vec<ResolvedView>;
    }
}
