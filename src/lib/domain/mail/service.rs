//! The rendering entry point

use std::sync::Arc;

use crate::domain::mail::{
    assembler::{self, RenderedPart},
    errors::EmailError,
    EmailResult, MailerContext,
};
use crate::domain::views::{Model, RenderContext, ViewLookup, ViewProvider, ViewResolver};

/// One render invocation: the view to render and how.
#[derive(Debug)]
pub struct EmailRequest {
    view_name: String,
    model: Option<Model>,
    master_name: Option<String>,
    trim_body: bool,
}

impl EmailRequest {
    /// A request for `view_name` with no model, no master, and body
    /// trimming on.
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            model: None,
            master_name: None,
            trim_body: true,
        }
    }

    /// Supplies a model, overriding any ambient model on the context.
    pub fn model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Names a master/layout to compose the view with.
    pub fn master(mut self, master_name: impl Into<String>) -> Self {
        self.master_name = Some(master_name.into());
        self
    }

    /// Controls whether each rendered body is stripped of leading and
    /// trailing whitespace before encoding. Defaults to `true`.
    pub fn trim_body(mut self, trim: bool) -> Self {
        self.trim_body = trim;
        self
    }
}

/// Renders named views into mail messages.
///
/// Built once over the application's view providers and shared between
/// calls; each call supplies its own [`MailerContext`] and [`EmailRequest`].
#[derive(Clone, Debug)]
pub struct Mailer {
    resolver: ViewResolver,
}

impl Mailer {
    /// Builds a mailer over `providers`, consulted in the given order.
    pub fn new(providers: Vec<Arc<dyn ViewProvider>>) -> Self {
        Self {
            resolver: ViewResolver::new(providers),
        }
    }

    /// Renders `request` against `ctx` into a finished message.
    ///
    /// Runs straight through: validate the view name, resolve views, render
    /// each match, assemble the message. Any failure surfaces immediately
    /// with no partial result.
    ///
    /// # Errors
    /// - [`EmailError::Resolution`] if the view name is empty or no
    ///   provider has a matching view.
    /// - [`EmailError::Render`] with the view's own error if a view fails.
    pub fn email(
        &self,
        ctx: &MailerContext,
        request: EmailRequest,
    ) -> Result<EmailResult, EmailError> {
        let lookup = ViewLookup {
            view_name: request.view_name.clone(),
            area: ctx.host.area().map(str::to_string),
            master_name: request.master_name.clone(),
        };

        let views = self.resolver.resolve(&lookup)?;

        let model = request.model.or_else(|| ctx.model.clone());
        let render_ctx = RenderContext::new(model.clone(), &ctx.view_data, &ctx.host);

        let mut parts = Vec::with_capacity(views.len());
        for resolved in &views {
            let body = resolved.view.render(&render_ctx)?;
            parts.push(RenderedPart {
                format: resolved.format,
                body,
            });
        }

        tracing::debug!(
            view = %request.view_name,
            parts = parts.len(),
            "rendered email body"
        );

        let mail = assembler::assemble(ctx, parts, request.trim_body);

        Ok(EmailResult::new(
            request.view_name,
            request.master_name,
            ctx.effective_encoding(),
            model,
            ctx.view_data.clone(),
            ctx.host.clone(),
            mail,
        ))
    }
}
