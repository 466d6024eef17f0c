use std::fmt::{self, Write as _};

use super::Escaped;
use crate::assets;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Everything outside the sections themselves.
#[derive(Debug, Clone)]
pub struct DocumentShell<'a> {
    pub title: &'a str,
    pub root_id: &'a str,
    pub reveal_margin: &'a str,
    pub nav: &'a [NavLink],
    pub footer: &'a str,
}

pub fn render_document(out: &mut String, shell: &DocumentShell<'_>, body: &str) -> fmt::Result {
    write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><link rel=\"stylesheet\" href=\"{}\"></head>",
        Escaped(shell.title),
        assets::STYLESHEET_PATH
    )?;
    write!(
        out,
        "<body><div id=\"{}\" data-reveal-margin=\"{}\">",
        Escaped(shell.root_id),
        Escaped(shell.reveal_margin)
    )?;

    if !shell.nav.is_empty() {
        out.push_str("<nav class=\"site-nav\"><ul>");
        for link in shell.nav {
            write!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                Escaped(&link.href),
                Escaped(link.label)
            )?;
        }
        out.push_str("</ul></nav>");
    }

    write!(
        out,
        "<main>{body}</main><footer class=\"site-footer\"><p>{}</p></footer></div><script src=\"{}\" defer></script></body></html>\n",
        Escaped(shell.footer),
        assets::SCRIPT_PATH
    )
}

/// Full-page replacement shown when a page cannot be mounted at all.
///
/// Built with `format!` only, so producing it cannot itself fail.
pub fn mount_error_document(detail: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Mount Error</title></head><body style=\"margin:0\"><div style=\"color:red; padding:40px; text-align:center; background:#111; height:100vh; font-family:sans-serif;\"><h1>Mount Error</h1><p>The application failed to initialize.</p><pre style=\"margin-top:20px; color:#faa;\">{}</pre></div></body></html>\n",
        Escaped(detail)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_mounts_into_configured_root() {
        let nav = [NavLink {
            label: "Work",
            href: "#projects".to_string(),
        }];
        let shell = DocumentShell {
            title: "Lab <Home>",
            root_id: "app",
            reveal_margin: "-10%",
            nav: &nav,
            footer: "© 2025 Lab",
        };
        let mut html = String::new();
        render_document(&mut html, &shell, "<section></section>").expect("document renders");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Lab &lt;Home&gt;</title>"));
        assert!(html.contains("<div id=\"app\" data-reveal-margin=\"-10%\">"));
        assert!(html.contains("<a href=\"#projects\">Work</a>"));
        assert!(html.contains("<main><section></section></main>"));
    }

    #[test]
    fn mount_error_escapes_detail() {
        let html = mount_error_document("bad <root>");
        assert!(html.contains("<h1>Mount Error</h1>"));
        assert!(html.contains("bad &lt;root&gt;"));
    }
}
