//! Page rendering for the visitor profile embed.

use crate::core::models::VisitorSummary;

/// Shown in place of the summary whenever it cannot be fetched.
pub const FALLBACK_MESSAGE: &str = "Unable to fetch visitor profile data at this time";

pub const PAGE_TITLE: &str = "Autochart Visitor Profile";

/// Text to embed, before any output encoding.
#[must_use]
pub fn summary_text(summary: &VisitorSummary) -> &str {
    match summary {
        VisitorSummary::Available(body) => body,
        VisitorSummary::Unavailable => FALLBACK_MESSAGE,
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full profile page.
#[must_use]
pub fn render_page(summary: &VisitorSummary) -> String {
    let title = escape_html(PAGE_TITLE);
    let body = escape_html(summary_text(summary));
    format!(
        "<!DOCTYPE html>\n\
         <html>\n \
         <head>\n  \
         <meta charset=\"utf-8\">\n  \
         <title>{title}</title>\n  \
         <style>\n      \
         html {{ font-family: 'Helvetica Neue', Helvetica, Arial }}\n  \
         </style>\n \
         </head>\n \
         <body>\n  \
         <h3>{title}</h3>\n  \
         {body}\n \
         <hr>\n \
         </body>\n\
         </html>\n"
    )
}

/// Plain-text fragment for substitution into e-mail templates.
#[must_use]
pub fn render_text(summary: &VisitorSummary) -> String {
    summary_text(summary).to_string()
}
