//! Projects rendered view output into an ordered, encoded mail message

use crate::domain::mail::{AlternateView, MailerContext, MailMessage};
use crate::domain::views::ViewFormat;

/// One rendered view body, tagged with its format.
///
/// Lives only between rendering and assembly.
#[derive(Debug)]
pub(crate) struct RenderedPart {
    pub format: ViewFormat,
    pub body: String,
}

/// Builds the mail message from the context's address fields and the
/// rendered parts.
///
/// The plain text part always lands before the HTML part, whatever order
/// the parts arrive in. With `trim_body` set, leading and trailing
/// whitespace is stripped from each body before encoding; a body that trims
/// to nothing still becomes an (empty) part. Every part is encoded with the
/// context's effective charset and tagged with it.
pub(crate) fn assemble(
    ctx: &MailerContext,
    parts: Vec<RenderedPart>,
    trim_body: bool,
) -> MailMessage {
    let encoding = ctx.effective_encoding();

    let mut ordered: Vec<&RenderedPart> = Vec::with_capacity(parts.len());
    ordered.extend(parts.iter().filter(|p| p.format == ViewFormat::Text));
    ordered.extend(parts.iter().filter(|p| p.format == ViewFormat::Html));

    let alternate_views = ordered
        .into_iter()
        .map(|part| {
            let body = if trim_body {
                part.body.trim()
            } else {
                part.body.as_str()
            };

            AlternateView::new(part.format.content_type(), encoding, encoding.encode(body))
        })
        .collect();

    MailMessage {
        from: ctx.from.clone(),
        to: ctx.to.clone(),
        cc: ctx.cc.clone(),
        bcc: ctx.bcc.clone(),
        reply_to: ctx.reply_to.clone(),
        subject: ctx.subject.clone(),
        alternate_views,
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::mail::{Charset, EmailAddress};

    use super::*;

    fn part(format: ViewFormat, body: &str) -> RenderedPart {
        RenderedPart {
            format,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_text_part_precedes_html_part_regardless_of_input_order() {
        let ctx = MailerContext::new();

        let message = assemble(
            &ctx,
            vec![part(ViewFormat::Html, "HtmlView"), part(ViewFormat::Text, "TextView")],
            false,
        );

        assert_eq!(message.alternate_views().len(), 2);
        assert_eq!(message.alternate_views()[0].content_type(), "text/plain");
        assert_eq!(message.alternate_views()[0].body_text(), "TextView");
        assert_eq!(message.alternate_views()[1].content_type(), "text/html");
        assert_eq!(message.alternate_views()[1].body_text(), "HtmlView");
    }

    #[test]
    fn test_trim_strips_surrounding_whitespace() {
        let ctx = MailerContext::new();

        let message = assemble(&ctx, vec![part(ViewFormat::Text, "  X  ")], true);

        assert_eq!(message.alternate_views()[0].body_text(), "X");
    }

    #[test]
    fn test_untrimmed_body_is_preserved_verbatim() {
        let ctx = MailerContext::new();
        let body = "\nThis thing has leading and trailing whitespace.\n";

        let message = assemble(&ctx, vec![part(ViewFormat::Text, body)], false);

        assert_eq!(message.alternate_views()[0].body_text(), body);
    }

    #[test]
    fn test_whitespace_only_body_trims_to_an_empty_part() {
        let ctx = MailerContext::new();

        let message = assemble(&ctx, vec![part(ViewFormat::Text, "  \n  ")], true);

        assert_eq!(message.alternate_views().len(), 1);
        assert!(message.alternate_views()[0].content().is_empty());
    }

    #[test]
    fn test_every_part_is_tagged_with_the_effective_charset() {
        let ctx = MailerContext::new().message_encoding(Charset::Latin1);

        let message = assemble(
            &ctx,
            vec![part(ViewFormat::Text, "Über"), part(ViewFormat::Html, "<p>Über</p>")],
            false,
        );

        for view in message.alternate_views() {
            assert_eq!(view.charset(), Charset::Latin1);
        }
        assert_eq!(message.alternate_views()[0].content(), &[0xDC, b'b', b'e', b'r'][..]);
    }

    #[test]
    fn test_address_fields_carry_over_from_the_context() {
        let ctx = MailerContext::new()
            .from(EmailAddress::new_unchecked("no-reply@mysite.com"))
            .to(EmailAddress::new_unchecked("user@example.com"))
            .bcc(EmailAddress::new_unchecked("audit@example.com"))
            .subject("Welcome");

        let message = assemble(&ctx, vec![part(ViewFormat::Text, "body")], true);

        assert_eq!(message.from().map(EmailAddress::as_str), Some("no-reply@mysite.com"));
        assert_eq!(message.to()[0].as_str(), "user@example.com");
        assert_eq!(message.bcc()[0].as_str(), "audit@example.com");
        assert_eq!(message.subject(), "Welcome");
    }
}
