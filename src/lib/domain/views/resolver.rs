//! Locates renderable views through the registered providers

use std::sync::Arc;

use crate::domain::views::{
    errors::ViewResolutionError, ResolvedView, ViewFormat, ViewLookup, ViewProvider,
};

/// Resolves view names against a fixed list of providers.
///
/// The provider list is built once at start-up and shared read-only between
/// renders; cloning the resolver is cheap and never copies the providers.
#[derive(Clone)]
pub struct ViewResolver {
    providers: Arc<[Arc<dyn ViewProvider>]>,
}

impl ViewResolver {
    /// Builds a resolver over `providers`, queried in the given order.
    pub fn new(providers: Vec<Arc<dyn ViewProvider>>) -> Self {
        Self {
            providers: providers.into(),
        }
    }

    /// Resolves every view matching `lookup`.
    ///
    /// Each provider contributes at most one view per [`ViewFormat`]; when
    /// two providers both have a view of the same format, the one registered
    /// first wins. The result is ordered text view first, HTML view second.
    ///
    /// # Errors
    /// - [`ViewResolutionError::EmptyViewName`] if the lookup names no view;
    ///   no provider is consulted.
    /// - [`ViewResolutionError::NotFound`] if no provider has a view under
    ///   the requested name.
    pub fn resolve(&self, lookup: &ViewLookup) -> Result<Vec<ResolvedView>, ViewResolutionError> {
        if lookup.view_name.trim().is_empty() {
            return Err(ViewResolutionError::EmptyViewName);
        }

        let mut text: Option<ResolvedView> = None;
        let mut html: Option<ResolvedView> = None;

        for provider in self.providers.iter() {
            for resolved in provider.find_views(lookup) {
                let slot = match resolved.format {
                    ViewFormat::Text => &mut text,
                    ViewFormat::Html => &mut html,
                };

                if slot.is_none() {
                    *slot = Some(resolved);
                }
            }
        }

        let matches: Vec<ResolvedView> = text.into_iter().chain(html).collect();

        if matches.is_empty() {
            return Err(ViewResolutionError::NotFound {
                view: lookup.view_name.clone(),
                area: lookup.area.clone(),
                providers: self.providers.iter().map(|p| p.name().to_string()).collect(),
            });
        }

        Ok(matches)
    }
}

impl std::fmt::Debug for ViewResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewResolver")
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::views::errors::RenderError;
    use crate::domain::views::tests::MockViewProvider;
    use crate::domain::views::{RenderContext, View};

    use super::*;

    struct FixedView(&'static str);

    impl View for FixedView {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<String, RenderError> {
            Ok(self.0.to_string())
        }
    }

    fn resolved(format: ViewFormat, body: &'static str) -> ResolvedView {
        ResolvedView::new(format, Arc::new(FixedView(body)))
    }

    fn provider(
        name: &'static str,
        views: Vec<ResolvedView>,
    ) -> Arc<dyn ViewProvider> {
        let mut mock = MockViewProvider::new();
        mock.expect_name().return_const(name);
        mock.expect_find_views().returning(move |_| views.clone());
        Arc::new(mock)
    }

    #[test]
    fn test_empty_view_name_is_rejected_before_any_provider_runs() {
        let mut mock = MockViewProvider::new();
        mock.expect_find_views().times(0);
        let resolver = ViewResolver::new(vec![Arc::new(mock)]);

        let result = resolver.resolve(&ViewLookup::new(""));

        assert!(matches!(result, Err(ViewResolutionError::EmptyViewName)));
    }

    #[test]
    fn test_whitespace_view_name_is_rejected() {
        let resolver = ViewResolver::new(vec![]);

        let result = resolver.resolve(&ViewLookup::new("   "));

        assert!(matches!(result, Err(ViewResolutionError::EmptyViewName)));
    }

    #[test]
    fn test_no_match_reports_view_and_consulted_providers() {
        let resolver = ViewResolver::new(vec![
            provider("first", vec![]),
            provider("second", vec![]),
        ]);

        let result = resolver.resolve(&ViewLookup::new("Missing"));

        match result {
            Err(ViewResolutionError::NotFound {
                view,
                area,
                providers,
            }) => {
                assert_eq!(view, "Missing");
                assert!(area.is_none());
                assert_eq!(providers, vec!["first", "second"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_single_text_match_resolves() -> TestResult {
        let resolver = ViewResolver::new(vec![provider(
            "static",
            vec![resolved(ViewFormat::Text, "TextView")],
        )]);

        let matches = resolver.resolve(&ViewLookup::new("TestView"))?;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].format, ViewFormat::Text);

        Ok(())
    }

    #[test]
    fn test_text_and_html_variants_are_independent_matches() -> TestResult {
        let resolver = ViewResolver::new(vec![provider(
            "static",
            vec![
                resolved(ViewFormat::Html, "HtmlView"),
                resolved(ViewFormat::Text, "TextView"),
            ],
        )]);

        let matches = resolver.resolve(&ViewLookup::new("TestView"))?;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].format, ViewFormat::Text);
        assert_eq!(matches[1].format, ViewFormat::Html);

        Ok(())
    }

    #[test]
    fn test_first_registered_provider_wins_a_format() -> TestResult {
        let resolver = ViewResolver::new(vec![
            provider("first", vec![resolved(ViewFormat::Text, "from first")]),
            provider("second", vec![resolved(ViewFormat::Text, "from second")]),
        ]);

        let matches = resolver.resolve(&ViewLookup::new("TestView"))?;
        let host = crate::domain::mail::HostContext::default();
        let data = crate::domain::views::ViewData::new();
        let ctx = RenderContext::new(None, &data, &host);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].view.render(&ctx)?, "from first");

        Ok(())
    }

    #[test]
    fn test_later_provider_still_fills_a_missing_format() -> TestResult {
        let resolver = ViewResolver::new(vec![
            provider("text-only", vec![resolved(ViewFormat::Text, "TextView")]),
            provider("html-only", vec![resolved(ViewFormat::Html, "HtmlView")]),
        ]);

        let matches = resolver.resolve(&ViewLookup::new("TestView"))?;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].format, ViewFormat::Text);
        assert_eq!(matches[1].format, ViewFormat::Html);

        Ok(())
    }
}
