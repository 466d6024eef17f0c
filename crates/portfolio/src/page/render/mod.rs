//! HTML output. Every writer appends to a `String` and propagates `fmt::Error`.

mod document;
mod sections;

use std::fmt;

pub use document::{mount_error_document, render_document, DocumentShell, NavLink};
pub use sections::{CallToAction, HeroConfig};
pub(crate) use sections::{
    render_about, render_biography, render_certifications, render_contact, render_education,
    render_experience, render_hero, render_newsletter, render_projects, render_research,
    render_testimonials,
};

/// Displays the wrapped text with HTML metacharacters escaped.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(index) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..index])?;
            let replacement = match rest.as_bytes()[index] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(replacement)?;
            rest = &rest[index + 1..];
        }
        f.write_str(rest)
    }
}

pub fn escape_html(raw: &str) -> String {
    Escaped(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_unicode_untouched() {
        assert_eq!(escape_html("Researcher • Tomás"), "Researcher • Tomás");
    }
}
