use std::fmt::{self, Write as _};

use super::Escaped;
use crate::content::{
    BiographyChapter, CertificationRecord, Collection, EducationRecord, ExperienceRecord, Metric,
    Profile, ProjectRecord, PublicationRecord, PublicationStatus, ResearchPillar,
    TestimonialRecord, VerificationStatus,
};
use crate::filter::{Categorized, Category, FilterTab, FilterView};

#[derive(Debug, Clone)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: String,
    pub primary: bool,
}

/// The one hero, parameterised by content and decoration.
#[derive(Debug, Clone)]
pub struct HeroConfig {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub focus: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<CallToAction>,
    pub metrics: &'static [Metric],
    /// Canvas markup of the decorative widget, when one is mounted.
    pub widget: Option<String>,
}

impl HeroConfig {
    pub fn from_profile(profile: &'static Profile) -> Self {
        Self {
            eyebrow: profile.affiliation,
            heading: profile.name,
            focus: profile.focus,
            tagline: profile.tagline,
            actions: vec![
                CallToAction {
                    label: "View Work",
                    href: "#projects".to_string(),
                    primary: true,
                },
                CallToAction {
                    label: "CV / Resume",
                    href: "/assets/cv.pdf".to_string(),
                    primary: false,
                },
            ],
            metrics: profile.metrics,
            widget: None,
        }
    }
}

pub(crate) fn render_hero(out: &mut String, hero: &HeroConfig) -> fmt::Result {
    out.push_str("<div class=\"hero\"><div class=\"hero-copy\">");
    write!(
        out,
        "<p class=\"eyebrow\"><span class=\"pulse\"></span>{}</p>",
        Escaped(hero.eyebrow)
    )?;
    write!(out, "<h1>{}</h1>", Escaped(hero.heading))?;
    write!(
        out,
        "<h2 class=\"hero-focus\">Pioneering <span class=\"gradient-text\">{}</span></h2>",
        Escaped(hero.focus)
    )?;
    write!(out, "<p class=\"lede\">{}</p>", Escaped(hero.tagline))?;

    if !hero.actions.is_empty() {
        out.push_str("<div class=\"actions\">");
        for action in &hero.actions {
            let class = if action.primary {
                "button primary"
            } else {
                "button secondary"
            };
            write!(
                out,
                "<a class=\"{class}\" href=\"{}\">{}</a>",
                Escaped(&action.href),
                Escaped(action.label)
            )?;
        }
        out.push_str("</div>");
    }

    if !hero.metrics.is_empty() {
        out.push_str("<dl class=\"metrics\">");
        for metric in hero.metrics {
            write!(
                out,
                "<div><dt>{}</dt><dd>{}</dd></div>",
                Escaped(metric.value),
                Escaped(metric.label)
            )?;
        }
        out.push_str("</dl>");
    }
    out.push_str("</div>");

    if let Some(widget) = &hero.widget {
        write!(out, "<div class=\"hero-visual\">{widget}</div>")?;
    }
    out.push_str("</div>");
    Ok(())
}

/// Portrait with an initials placeholder that also covers failed loads.
fn render_avatar(out: &mut String, profile: &Profile) -> fmt::Result {
    let initials = profile.initials();
    match profile.avatar_url {
        Some(url) => write!(
            out,
            "<figure class=\"avatar\"><img src=\"{}\" alt=\"Portrait of {}\" loading=\"lazy\" onerror=\"this.remove()\"><span class=\"avatar-initials\" aria-hidden=\"true\">{}</span></figure>",
            Escaped(url),
            Escaped(profile.name),
            Escaped(&initials)
        ),
        None => write!(
            out,
            "<figure class=\"avatar avatar-fallback\"><span class=\"avatar-initials\" aria-label=\"{}\">{}</span></figure>",
            Escaped(profile.name),
            Escaped(&initials)
        ),
    }
}

pub(crate) fn render_about(out: &mut String, profile: &Profile) -> fmt::Result {
    out.push_str("<div class=\"about\">");
    render_avatar(out, profile)?;
    out.push_str("<div class=\"about-copy\"><h2>The Architect</h2>");
    for paragraph in profile.summary {
        write!(out, "<p>{}</p>", Escaped(paragraph))?;
    }
    out.push_str(
        "<a class=\"pill-link\" href=\"/about\">Explore Full Biography</a></div></div>",
    );
    Ok(())
}

fn render_filter_tabs(out: &mut String, collection: Collection, tabs: &[FilterTab]) -> fmt::Result {
    write!(
        out,
        "<div class=\"filter-tabs\" role=\"tablist\" data-collection=\"{}\">",
        collection.slug()
    )?;
    for tab in tabs {
        write!(
            out,
            "<button type=\"button\" role=\"tab\" class=\"tab{}\" data-category=\"{}\" aria-selected=\"{}\">{} <span class=\"count\">{}</span></button>",
            if tab.active { " active" } else { "" },
            tab.slug,
            tab.active,
            Escaped(tab.label),
            tab.count
        )?;
    }
    out.push_str("</div>");
    Ok(())
}

fn render_tags(out: &mut String, tags: &[&str], limit: usize) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    out.push_str("<ul class=\"tags\">");
    for tag in tags.iter().take(limit) {
        write!(out, "<li>{}</li>", Escaped(tag))?;
    }
    out.push_str("</ul>");
    Ok(())
}

/// Cards outside the active category are rendered `hidden` so tabs can
/// switch without another round trip.
fn hidden_unless(shown: bool) -> &'static str {
    if shown {
        ""
    } else {
        " hidden"
    }
}

/// Shown only while the active category matches nothing.
fn render_empty(out: &mut String, what: &str, any_shown: bool) -> fmt::Result {
    write!(
        out,
        "<p{} class=\"empty\">No {} in this category yet.</p>",
        hidden_unless(!any_shown),
        Escaped(what)
    )
}

pub(crate) fn render_projects(out: &mut String, view: &FilterView<'_, ProjectRecord>) -> fmt::Result {
    out.push_str("<header class=\"section-header\"><div><h2>Selected Projects</h2><p>Bridging enterprise engineering with cutting-edge research.</p></div>");
    render_filter_tabs(out, Collection::Projects, &view.tabs())?;
    out.push_str("</header>");

    let entries = view.entries();
    out.push_str("<div class=\"grid projects\" data-grid=\"projects\">");
    for &(project, shown) in &entries {
        write!(
            out,
            "<article{} class=\"card project{}\" data-id=\"{}\" data-category=\"{}\">",
            hidden_unless(shown),
            if project.featured { " featured" } else { "" },
            Escaped(project.id),
            project.category().slug()
        )?;
        write!(
            out,
            "<div class=\"card-visual {}\"></div><div class=\"card-body\"><h3>{}</h3>",
            project.accent.css_class(),
            Escaped(project.title)
        )?;
        if project.repository.is_some() || project.link.is_some() {
            out.push_str("<div class=\"links\">");
            if let Some(repository) = project.repository {
                write!(
                    out,
                    "<a href=\"{}\" aria-label=\"Source for {}\">Source</a>",
                    Escaped(repository),
                    Escaped(project.title)
                )?;
            }
            if let Some(link) = project.link {
                write!(
                    out,
                    "<a href=\"{}\" aria-label=\"Visit {}\">Visit</a>",
                    Escaped(link),
                    Escaped(project.title)
                )?;
            }
            out.push_str("</div>");
        }
        write!(out, "<p>{}</p>", Escaped(project.description))?;
        render_tags(out, project.tags, 3)?;
        out.push_str("</div></article>");
    }
    out.push_str("</div>");
    render_empty(out, "projects", entries.iter().any(|&(_, shown)| shown))
}

pub(crate) fn render_experience(out: &mut String, records: &[ExperienceRecord]) -> fmt::Result {
    out.push_str("<h2>Professional History</h2><ol class=\"timeline\">");
    for record in records {
        write!(
            out,
            "<li class=\"card\" data-id=\"{}\"><h3>{}</h3><p class=\"meta\"><span>{}</span> <time>{}</time></p><p>{}</p>",
            Escaped(record.id),
            Escaped(record.role),
            Escaped(record.organization),
            Escaped(record.period),
            Escaped(record.description)
        )?;
        render_tags(out, record.skills, usize::MAX)?;
        out.push_str("</li>");
    }
    out.push_str("</ol>");
    Ok(())
}

pub(crate) fn render_education(out: &mut String, records: &[EducationRecord]) -> fmt::Result {
    out.push_str("<h2>Academic Foundation</h2><div class=\"education\">");
    for (index, record) in records.iter().enumerate() {
        // the first entry starts expanded
        write!(
            out,
            "<details class=\"card\" data-id=\"{}\"{}><summary><h3>{}</h3><p class=\"meta\">{} · {}</p></summary><p>{}</p>",
            Escaped(record.id),
            if index == 0 { " open" } else { "" },
            Escaped(record.degree),
            Escaped(record.institution),
            Escaped(record.period),
            Escaped(record.description)
        )?;
        if !record.honors.is_empty() {
            out.push_str("<ul class=\"honors\">");
            for honor in record.honors {
                write!(out, "<li>{}</li>", Escaped(honor))?;
            }
            out.push_str("</ul>");
        }
        out.push_str("</details>");
    }
    out.push_str("</div>");
    Ok(())
}

fn render_certification(out: &mut String, cert: &CertificationRecord, shown: bool) -> fmt::Result {
    let status_class = match cert.status {
        VerificationStatus::Verified => "verified",
        VerificationStatus::Planned => "planned",
    };
    write!(
        out,
        "<article{} class=\"card certification\" data-id=\"{}\" data-category=\"{}\"><div><h3>{}</h3><p class=\"issuer\">{}</p><p class=\"meta\"><span>{}</span>",
        hidden_unless(shown),
        Escaped(cert.id),
        cert.category().slug(),
        Escaped(cert.title),
        Escaped(cert.issuer),
        Escaped(cert.date)
    )?;
    if let Some(credential) = cert.credential_id {
        write!(out, " <span>ID: {}</span>", Escaped(credential))?;
    }
    write!(
        out,
        "</p><p>{}</p></div><span class=\"badge {status_class}\">{}</span>",
        Escaped(cert.description),
        cert.status.label()
    )?;
    if let Some(link) = cert.verification_link {
        write!(
            out,
            "<a class=\"verify\" href=\"{}\" rel=\"noopener\">Verify</a>",
            Escaped(link)
        )?;
    }
    out.push_str("</article>");
    Ok(())
}

pub(crate) fn render_certifications(
    out: &mut String,
    view: &FilterView<'_, CertificationRecord>,
    widget: Option<&str>,
) -> fmt::Result {
    out.push_str("<header class=\"section-header\"><div><h2>Credentials &amp; Awards</h2><p>Industry-recognized certifications and academic honors.</p></div>");
    render_filter_tabs(out, Collection::Certifications, &view.tabs())?;
    out.push_str("</header><div class=\"split\">");
    if let Some(widget) = widget {
        write!(out, "<div class=\"split-visual\">{widget}</div>")?;
    }
    out.push_str("<div class=\"stack\" data-grid=\"certifications\">");
    let entries = view.entries();
    render_empty(out, "credentials", entries.iter().any(|&(_, shown)| shown))?;
    for (cert, shown) in entries {
        render_certification(out, cert, shown)?;
    }
    out.push_str("</div></div>");
    Ok(())
}

fn render_publication(out: &mut String, publication: &PublicationRecord) -> fmt::Result {
    write!(
        out,
        "<li class=\"publication\" data-id=\"{}\"><div><h4>{}</h4><p class=\"meta\">{} · {}</p>",
        Escaped(publication.id),
        Escaped(publication.title),
        Escaped(&publication.authors.join(", ")),
        Escaped(publication.venue)
    )?;
    if publication.status != PublicationStatus::Published {
        write!(
            out,
            "<span class=\"badge pending\">{}</span>",
            publication.status.label()
        )?;
    }
    if let Some(impact) = publication.impact {
        write!(out, "<span class=\"badge impact\">{}</span>", Escaped(impact))?;
    }
    write!(
        out,
        "</div><div class=\"actions\"><button type=\"button\" class=\"copy\" data-copy=\"{}\" title=\"Copy citation\">Copy citation</button><a href=\"{}\" aria-label=\"Open {}\">Open</a></div></li>",
        Escaped(publication.citation),
        Escaped(publication.link),
        Escaped(publication.title)
    )
}

pub(crate) fn render_research(
    out: &mut String,
    pillars: &[ResearchPillar],
    publications: &[PublicationRecord],
) -> fmt::Result {
    out.push_str("<header class=\"section-header\"><div><h2>Research Lab</h2><p>Investigating the fundamental nature of synthetic intelligence through rigorous experimentation and theoretical analysis.</p></div></header><div class=\"bento\">");
    for pillar in pillars {
        write!(
            out,
            "<article class=\"card pillar{}\"><h3>{}</h3><p>{}</p></article>",
            if pillar.primary { " primary" } else { "" },
            Escaped(pillar.title),
            Escaped(pillar.description)
        )?;
    }
    out.push_str("</div>");
    if !publications.is_empty() {
        out.push_str("<h3>Selected Publications</h3><ul class=\"publications\">");
        for publication in publications {
            render_publication(out, publication)?;
        }
        out.push_str("</ul>");
    }
    Ok(())
}

pub(crate) fn render_testimonials(
    out: &mut String,
    view: &FilterView<'_, TestimonialRecord>,
) -> fmt::Result {
    out.push_str("<header class=\"section-header\"><div><h2>Peer Review</h2></div>");
    render_filter_tabs(out, Collection::Testimonials, &view.tabs())?;
    out.push_str("</header>");
    let entries = view.entries();
    out.push_str("<div class=\"grid testimonials\" data-grid=\"testimonials\">");
    for &(testimonial, shown) in &entries {
        write!(
            out,
            "<figure{} class=\"card testimonial\" data-id=\"{}\" data-category=\"{}\"><blockquote>“{}”</blockquote><figcaption><strong>{}</strong><span>{} • {}</span></figcaption></figure>",
            hidden_unless(shown),
            Escaped(testimonial.id),
            testimonial.category().slug(),
            Escaped(testimonial.quote),
            Escaped(testimonial.author),
            Escaped(testimonial.role),
            Escaped(testimonial.organization)
        )?;
    }
    out.push_str("</div>");
    render_empty(out, "testimonials", entries.iter().any(|&(_, shown)| shown))
}

pub(crate) fn render_newsletter(out: &mut String) -> fmt::Result {
    out.push_str(concat!(
        "<div class=\"card newsletter\"><p class=\"eyebrow\">Weekly Insight</p>",
        "<h2>The Latent Space.</h2>",
        "<p>A weekly breakdown of papers, mechanistic interpretability, and the philosophy of AI.</p>",
        "<form class=\"subscribe\" data-newsletter>",
        "<label class=\"visually-hidden\" for=\"newsletter-email\">Email</label>",
        "<input id=\"newsletter-email\" type=\"email\" name=\"email\" placeholder=\"researcher@lab.edu\" required>",
        "<button type=\"submit\" class=\"button primary\">Join Waitlist</button>",
        "</form><p class=\"form-status\" role=\"status\" hidden></p></div>",
    ));
    Ok(())
}

pub(crate) fn render_contact(out: &mut String, profile: &Profile) -> fmt::Result {
    out.push_str("<header class=\"section-header centered\"><h2>Initiate Protocol</h2><p>Available for collaborations, speaking engagements, and research discussions.</p></header>");
    write!(
        out,
        "<div class=\"card contact\"><form action=\"mailto:{email}\" method=\"post\" enctype=\"text/plain\"><label>Name <input name=\"name\" type=\"text\"></label><label>Email <input name=\"email\" type=\"email\"></label><label>Message <textarea name=\"message\" rows=\"4\"></textarea></label><button type=\"submit\" class=\"button primary\">Send</button></form><div class=\"channels\"><h3>Direct Channel</h3><a href=\"mailto:{email}\">{email}</a>",
        email = Escaped(profile.email)
    )?;
    if !profile.socials.is_empty() {
        out.push_str("<ul class=\"socials\">");
        for social in profile.socials {
            write!(
                out,
                "<li><a href=\"{}\" rel=\"me noopener\">{}</a></li>",
                Escaped(social.url),
                Escaped(social.label)
            )?;
        }
        out.push_str("</ul>");
    }
    out.push_str("<blockquote class=\"quote\">“The best way to predict the future is to invent it.”<cite>Alan Kay</cite></blockquote></div></div>");
    Ok(())
}

pub(crate) fn render_biography(out: &mut String, chapters: &[BiographyChapter]) -> fmt::Result {
    out.push_str("<a class=\"back-link\" href=\"/\">Return to Portfolio</a><header class=\"section-header\"><p class=\"eyebrow\">The Origin Story</p><h1>From Silicon to <span class=\"gradient-text\">Sentience</span></h1><p class=\"lede\">A deep dive into the philosophy, the failures, and the pursuit of machine intelligence that mirrors our own.</p></header>");
    for chapter in chapters {
        write!(
            out,
            "<article class=\"card chapter\" id=\"{}\"><h2>{}</h2>",
            Escaped(chapter.id),
            Escaped(chapter.title)
        )?;
        for paragraph in chapter.paragraphs {
            write!(out, "<p>{}</p>", Escaped(paragraph))?;
        }
        if let Some(epigraph) = chapter.epigraph {
            write!(out, "<blockquote>“{}”</blockquote>", Escaped(epigraph))?;
        }
        out.push_str("</article>");
    }
    out.push_str("<p class=\"archive-end\">END OF ARCHIVE</p>");
    Ok(())
}
