//! An in-memory view provider

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::views::errors::RenderError;
use crate::domain::views::{RenderContext, ResolvedView, View, ViewFormat, ViewLookup, ViewProvider};

type ViewKey = (Option<String>, String, ViewFormat);

struct FixedBody(String);

impl View for FixedBody {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(self.0.clone())
    }
}

struct FnView<F>(F);

impl<F> View for FnView<F>
where
    F: Fn(&RenderContext<'_>) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        (self.0)(ctx)
    }
}

/// A registry of views held in memory.
///
/// Views are registered under a logical name, a [`ViewFormat`], and
/// optionally an area. A lookup scoped to an area prefers the area's
/// registration and falls back to the global one with the same name. A view
/// is either a fixed body or a function of the [`RenderContext`].
///
/// Layouts are not composed here; a master name on the lookup is accepted
/// and ignored.
#[derive(Default)]
pub struct StaticViews {
    views: HashMap<ViewKey, Arc<dyn View>>,
}

impl StaticViews {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixed body under `name`, globally scoped.
    pub fn insert(&mut self, format: ViewFormat, name: impl Into<String>, body: impl Into<String>) {
        self.views
            .insert((None, name.into(), format), Arc::new(FixedBody(body.into())));
    }

    /// Registers a fixed body under `name`, scoped to `area`.
    pub fn insert_in_area(
        &mut self,
        area: impl Into<String>,
        format: ViewFormat,
        name: impl Into<String>,
        body: impl Into<String>,
    ) {
        self.views.insert(
            (Some(area.into()), name.into(), format),
            Arc::new(FixedBody(body.into())),
        );
    }

    /// Registers a view rendered by `render`, globally scoped.
    pub fn insert_fn<F>(&mut self, format: ViewFormat, name: impl Into<String>, render: F)
    where
        F: Fn(&RenderContext<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        self.views
            .insert((None, name.into(), format), Arc::new(FnView(render)));
    }

    /// Registers a view rendered by `render`, scoped to `area`.
    pub fn insert_fn_in_area<F>(
        &mut self,
        area: impl Into<String>,
        format: ViewFormat,
        name: impl Into<String>,
        render: F,
    ) where
        F: Fn(&RenderContext<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        self.views
            .insert((Some(area.into()), name.into(), format), Arc::new(FnView(render)));
    }

    fn find_one(&self, lookup: &ViewLookup, format: ViewFormat) -> Option<Arc<dyn View>> {
        if let Some(area) = &lookup.area {
            let key = (Some(area.clone()), lookup.view_name.clone(), format);
            if let Some(view) = self.views.get(&key) {
                return Some(Arc::clone(view));
            }
        }

        self.views
            .get(&(None, lookup.view_name.clone(), format))
            .map(Arc::clone)
    }
}

impl ViewProvider for StaticViews {
    fn name(&self) -> &'static str {
        "static"
    }

    fn find_views(&self, lookup: &ViewLookup) -> Vec<ResolvedView> {
        [ViewFormat::Text, ViewFormat::Html]
            .into_iter()
            .filter_map(|format| {
                self.find_one(lookup, format)
                    .map(|view| ResolvedView::new(format, view))
            })
            .collect()
    }
}

impl fmt::Debug for StaticViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticViews")
            .field("views", &self.views.len())
            .finish()
    }
}
