#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Renders a sample email through the pipeline and prints it to stdout

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use letterpress::domain::mail::{
    Charset, EmailAddress, EmailRequest, HostContext, Mailer, MailerContext,
};
use letterpress::domain::views::{ViewFormat, ViewProvider};
use letterpress::infrastructure::{email::ConsoleMailer, views::StaticViews};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The sender address
    #[clap(long, env = "MAIL_FROM", default_value = "no-reply@example.com")]
    pub from: String,

    /// The recipient address
    #[clap(long, env = "MAIL_TO", default_value = "user@example.com")]
    pub to: String,

    /// The name greeted in the sample views
    #[clap(long, default_value = "Ada")]
    pub name: String,

    /// Charset override for the message bodies
    #[clap(long)]
    pub encoding: Option<Charset>,
}

fn sample_views() -> StaticViews {
    let mut views = StaticViews::new();

    views.insert_fn(ViewFormat::Text, "Welcome", |ctx| {
        Ok(format!(
            "Welcome aboard, {}!",
            ctx.view_data().get_str("name").unwrap_or("friend")
        ))
    });

    views.insert_fn(ViewFormat::Html, "Welcome", |ctx| {
        Ok(format!(
            "<p>Welcome aboard, <strong>{}</strong>!</p>",
            ctx.view_data().get_str("name").unwrap_or("friend")
        ))
    });

    views
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let providers: Vec<Arc<dyn ViewProvider>> = vec![Arc::new(sample_views())];
    let mailer = Mailer::new(providers);

    let mut ctx = MailerContext::new()
        .from(EmailAddress::new(&args.from)?)
        .to(EmailAddress::new(&args.to)?)
        .subject("Welcome aboard")
        .host(HostContext::new("/"));

    if let Some(encoding) = args.encoding {
        ctx = ctx.message_encoding(encoding);
    }

    ctx.view_data.insert("name", args.name.clone());

    let result = mailer.email(&ctx, EmailRequest::new("Welcome"))?;

    result.deliver(&ConsoleMailer::new()).await?;

    Ok(())
}
