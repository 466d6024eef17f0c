use std::fmt::Write as _;

use tracing::{debug, info};

use super::render::{
    render_about, render_biography, render_certifications, render_contact, render_document,
    render_education, render_experience, render_hero, render_newsletter, render_projects,
    render_research, render_testimonials, DocumentShell, Escaped, HeroConfig, NavLink,
};
use super::route::Route;
use super::section::{Loading, RevealPolicy, SectionKind, SectionPlan};
use super::{validate_root_id, ComposeContext, PageError};
use crate::config::SiteConfig;
use crate::content::catalog;
use crate::filter::{Categorized, CategoryFilter, FilterSelection, FilterView};
use crate::reveal::{RevealState, SectionId, ViewportObserver};
use crate::widgets::{DecorativeWidget, GlassShapes, ParticleField};

const HERO_PARTICLES: usize = 120;
const CERTIFICATION_SHAPES: usize = 3;

/// Decides which sections a page has and renders them.
#[derive(Debug, Clone, Copy)]
pub struct PageComposer {
    defer_sections: bool,
}

impl PageComposer {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            defer_sections: site.defer_sections,
        }
    }

    /// Ordered section plans for a route.
    pub fn sections(&self, route: Route) -> Vec<SectionPlan> {
        match route {
            Route::Home => vec![
                SectionPlan::immediate(SectionKind::Hero),
                SectionPlan::eager(SectionKind::About),
                SectionPlan::eager(SectionKind::Projects),
                SectionPlan::eager(SectionKind::Experience),
                SectionPlan::eager(SectionKind::Education),
                self.deferrable(SectionKind::Certifications, 480),
                self.deferrable(SectionKind::Research, 560),
                self.deferrable(SectionKind::Testimonials, 420),
                SectionPlan::eager(SectionKind::Newsletter),
                SectionPlan::eager(SectionKind::Contact),
            ],
            Route::About => vec![
                SectionPlan::immediate(SectionKind::Biography),
                SectionPlan::eager(SectionKind::Contact),
            ],
        }
    }

    fn deferrable(&self, kind: SectionKind, placeholder_height: u16) -> SectionPlan {
        if self.defer_sections {
            SectionPlan::deferred(kind, placeholder_height)
        } else {
            SectionPlan::eager(kind)
        }
    }

    /// Links for the navigation bar, relative to the page they appear on.
    pub fn navigation(&self, current: Option<Route>) -> Vec<NavLink> {
        let prefix = if current == Some(Route::Home) { "" } else { "/" };
        let mut links: Vec<NavLink> = self
            .sections(Route::Home)
            .into_iter()
            .filter_map(|plan| {
                plan.kind.nav_label().map(|label| NavLink {
                    label,
                    href: format!("{prefix}#{}", plan.kind.anchor()),
                })
            })
            .collect();
        links.push(NavLink {
            label: Route::About.label(),
            href: Route::About.path().to_string(),
        });
        links
    }

    pub fn compose(&self, route: Route, ctx: &ComposeContext) -> Result<ComposedPage, PageError> {
        validate_root_id(&ctx.site.root_id)?;

        let mut observer = ViewportObserver::new(ctx.observer_mode);
        let mut sections = Vec::new();
        for (index, plan) in self.sections(route).into_iter().enumerate() {
            let id = SectionId::new(plan.kind.anchor());
            let state = match plan.reveal {
                RevealPolicy::Immediate => observer.subscribe_revealed(id),
                RevealPolicy::OnScroll => observer.subscribe(id),
            };
            let body = match plan.loading {
                Loading::Eager => self.render_section(plan.kind, None)?,
                Loading::Deferred { placeholder_height } => {
                    placeholder(plan.kind, placeholder_height)
                }
            };
            sections.push(RenderedSection {
                plan,
                state,
                delay_ms: ctx.reveal.stagger_ms.saturating_mul(index as u32),
                body,
            });
        }

        let title = match route {
            Route::Home => ctx.site.title.clone(),
            other => format!("{} | {}", other.label(), ctx.site.title),
        };
        debug!(
            page = route.path(),
            sections = sections.len(),
            "page composed"
        );
        Ok(ComposedPage {
            kind: PageKind::Route(route),
            title,
            nav: self.navigation(Some(route)),
            sections,
            observer,
        })
    }

    /// The view shown for any path outside the route table.
    pub fn not_found(&self, path: &str, ctx: &ComposeContext) -> Result<ComposedPage, PageError> {
        validate_root_id(&ctx.site.root_id)?;
        info!(path, "no route for path");
        Ok(ComposedPage {
            kind: PageKind::NotFound {
                path: path.to_string(),
            },
            title: format!("Not Found | {}", ctx.site.title),
            nav: self.navigation(None),
            sections: Vec::new(),
            observer: ViewportObserver::new(ctx.observer_mode),
        })
    }

    /// Body of one section, used to fill deferred placeholders.
    pub fn fragment(&self, kind: SectionKind, category: Option<&str>) -> Result<String, PageError> {
        self.render_section(kind, category)
    }

    fn render_section(&self, kind: SectionKind, category: Option<&str>) -> Result<String, PageError> {
        let category = category.filter(|raw| !raw.trim().is_empty());
        if category.is_some() && kind.filterable().is_none() {
            return Err(PageError::NotFilterable {
                section: kind.anchor(),
            });
        }

        let profile = catalog::profile();
        let mut out = String::new();
        let written = match kind {
            SectionKind::Hero => {
                let mut hero = HeroConfig::from_profile(profile);
                hero.widget = Some(mount_widget(ParticleField::new(HERO_PARTICLES)));
                render_hero(&mut out, &hero)
            }
            SectionKind::About => render_about(&mut out, profile),
            SectionKind::Projects => {
                render_projects(&mut out, &view(catalog::projects(), category)?)
            }
            SectionKind::Experience => render_experience(&mut out, catalog::experiences()),
            SectionKind::Education => render_education(&mut out, catalog::education()),
            SectionKind::Certifications => {
                let widget = mount_widget(GlassShapes::new(CERTIFICATION_SHAPES));
                render_certifications(
                    &mut out,
                    &view(catalog::certifications(), category)?,
                    Some(&widget),
                )
            }
            SectionKind::Research => render_research(
                &mut out,
                catalog::research_pillars(),
                catalog::publications(),
            ),
            SectionKind::Testimonials => {
                render_testimonials(&mut out, &view(catalog::testimonials(), category)?)
            }
            SectionKind::Newsletter => render_newsletter(&mut out),
            SectionKind::Contact => render_contact(&mut out, profile),
            SectionKind::Biography => render_biography(&mut out, catalog::biography()),
        };
        written.map_err(|_| PageError::Render {
            section: kind.anchor(),
        })?;
        Ok(out)
    }
}

fn view<'a, T: Categorized>(
    items: &'a [T],
    category: Option<&str>,
) -> Result<FilterView<'a, T>, PageError> {
    let active = match category {
        Some(raw) => CategoryFilter::parse(raw)?,
        None => CategoryFilter::All,
    };
    Ok(FilterView::new(items, FilterSelection::new(active)))
}

fn mount_widget(mut widget: impl DecorativeWidget) -> String {
    widget.mount().markup
}

fn placeholder(kind: SectionKind, height: u16) -> String {
    format!(
        "<div class=\"placeholder\" data-fragment=\"{}\" style=\"min-height:{height}px\" aria-busy=\"true\"><span class=\"spinner\" aria-hidden=\"true\"></span></div>",
        kind.fragment_path()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Route(Route),
    NotFound { path: String },
}

#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub plan: SectionPlan,
    /// Reveal state at first paint.
    pub state: RevealState,
    pub delay_ms: u32,
    pub body: String,
}

/// A page with every section rendered, ready to be wrapped in the document.
#[derive(Debug)]
pub struct ComposedPage {
    pub kind: PageKind,
    pub title: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<RenderedSection>,
    pub observer: ViewportObserver,
}

impl ComposedPage {
    pub fn section(&self, kind: SectionKind) -> Option<&RenderedSection> {
        self.sections.iter().find(|section| section.plan.kind == kind)
    }

    pub fn render(&self, ctx: &ComposeContext) -> Result<String, PageError> {
        self.write_html(ctx).map_err(|_| PageError::Render { section: "document" })
    }

    fn write_html(&self, ctx: &ComposeContext) -> Result<String, std::fmt::Error> {
        let mut body = String::new();
        match &self.kind {
            PageKind::Route(_) => {
                for section in &self.sections {
                    let anchor = section.plan.kind.anchor();
                    write!(
                        body,
                        "<section id=\"{anchor}\" class=\"section section-{anchor}\"{}>{}</section>",
                        ctx.reveal.data_attributes(section.state, section.delay_ms),
                        section.body
                    )?;
                }
            }
            PageKind::NotFound { path } => write!(
                body,
                "<section id=\"not-found\" class=\"section not-found\"><h1>404</h1><p>Nothing lives at <code>{}</code>.</p><a class=\"button primary\" href=\"/\">Back to the portfolio</a></section>",
                Escaped(path)
            )?,
        }

        let footer = format!(
            "© {} {}. All rights reserved.",
            ctx.year,
            catalog::profile().lab_name
        );
        let shell = DocumentShell {
            title: &self.title,
            root_id: &ctx.site.root_id,
            reveal_margin: &ctx.reveal.root_margin,
            nav: &self.nav,
            footer: &footer,
        };
        let mut html = String::with_capacity(body.len() + 2048);
        render_document(&mut html, &shell, &body)?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::ObserverMode;

    fn ctx() -> ComposeContext {
        ComposeContext::new(&SiteConfig::default()).with_year(2025)
    }

    #[test]
    fn home_sections_follow_the_fixed_order() {
        let composer = PageComposer::new(&SiteConfig::default());
        let kinds: Vec<_> = composer
            .sections(Route::Home)
            .into_iter()
            .map(|plan| plan.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Hero,
                SectionKind::About,
                SectionKind::Projects,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Certifications,
                SectionKind::Research,
                SectionKind::Testimonials,
                SectionKind::Newsletter,
                SectionKind::Contact,
            ]
        );
    }

    #[test]
    fn deferral_can_be_switched_off() {
        let site = SiteConfig {
            defer_sections: false,
            ..SiteConfig::default()
        };
        let composer = PageComposer::new(&site);
        assert!(composer
            .sections(Route::Home)
            .iter()
            .all(|plan| !plan.is_deferred()));
    }

    #[test]
    fn deferred_sections_render_placeholders() {
        let composer = PageComposer::new(&SiteConfig::default());
        let page = composer.compose(Route::Home, &ctx()).expect("home composes");
        let research = page.section(SectionKind::Research).expect("research planned");
        assert!(research.body.contains("data-fragment=\"/fragments/research\""));
        assert!(research.body.contains("min-height:560px"));
        assert!(!research.body.contains("Selected Publications"));
    }

    #[test]
    fn hero_is_revealed_at_first_paint() {
        let composer = PageComposer::new(&SiteConfig::default());
        let page = composer.compose(Route::Home, &ctx()).expect("home composes");
        assert_eq!(
            page.section(SectionKind::Hero).map(|s| s.state),
            Some(RevealState::Revealed)
        );
        assert_eq!(
            page.section(SectionKind::About).map(|s| s.state),
            Some(RevealState::Unseen)
        );
    }

    #[test]
    fn unavailable_observer_reveals_every_section() {
        let composer = PageComposer::new(&SiteConfig::default());
        let ctx = ctx().with_observer_mode(ObserverMode::Unavailable);
        let page = composer.compose(Route::Home, &ctx).expect("home composes");
        assert!(page
            .sections
            .iter()
            .all(|section| section.state == RevealState::Revealed));
        let html = page.render(&ctx).expect("home renders");
        assert!(!html.contains("data-reveal=\"unseen\""));
    }

    #[test]
    fn invalid_root_id_is_a_mount_failure() {
        let site = SiteConfig {
            root_id: String::new(),
            ..SiteConfig::default()
        };
        let composer = PageComposer::new(&site);
        let err = composer
            .compose(Route::Home, &ComposeContext::new(&site))
            .expect_err("empty root id");
        assert!(err.is_mount_failure());
    }

    #[test]
    fn fragment_applies_category() {
        let composer = PageComposer::new(&SiteConfig::default());
        let html = composer
            .fragment(SectionKind::Projects, Some("salesforce"))
            .expect("projects fragment");
        assert_eq!(html.matches("<article class=\"card project").count(), 3);
        assert_eq!(
            html.matches("<article hidden class=\"card project").count(),
            catalog::projects().len() - 3
        );
        assert!(html.contains("data-category=\"salesforce\" aria-selected=\"true\""));
    }

    #[test]
    fn about_page_shows_the_biography_at_first_paint() {
        let composer = PageComposer::new(&SiteConfig::default());
        let page = composer.compose(Route::About, &ctx()).expect("about composes");
        assert_eq!(
            page.section(SectionKind::Biography).map(|s| s.state),
            Some(RevealState::Revealed)
        );
        assert_eq!(
            page.section(SectionKind::Contact).map(|s| s.state),
            Some(RevealState::Unseen)
        );
    }

    #[test]
    fn stagger_delays_later_sections() {
        let site = SiteConfig {
            reveal_stagger_ms: 100,
            ..SiteConfig::default()
        };
        let composer = PageComposer::new(&site);
        let ctx = ComposeContext::new(&site).with_year(2025);
        let page = composer.compose(Route::Home, &ctx).expect("home composes");
        let delays: Vec<u32> = page.sections.iter().map(|s| s.delay_ms).collect();
        assert_eq!(&delays[..3], &[0, 100, 200]);
        let html = page.render(&ctx).expect("home renders");
        assert!(html.contains("data-reveal-delay=\"100\""));
    }

    #[test]
    fn mounted_widgets_describe_their_motion() {
        let composer = PageComposer::new(&SiteConfig::default());
        let hero = composer.fragment(SectionKind::Hero, None).expect("hero renders");
        assert!(hero.contains(&format!("data-count=\"{HERO_PARTICLES}\"")));
        assert!(hero.contains("data-motion=\"orbit\""));
        let certs = composer
            .fragment(SectionKind::Certifications, None)
            .expect("certifications render");
        assert!(certs.contains(&format!("data-count=\"{CERTIFICATION_SHAPES}\"")));
        assert!(certs.contains("data-motion=\"bob\""));
    }

    #[test]
    fn fragment_rejects_category_on_plain_sections() {
        let composer = PageComposer::new(&SiteConfig::default());
        let err = composer
            .fragment(SectionKind::Education, Some("AI"))
            .expect_err("education has no tabs");
        assert!(matches!(err, PageError::NotFilterable { section: "education" }));
        assert!(composer.fragment(SectionKind::Education, Some(" ")).is_ok());
    }

    #[test]
    fn navigation_is_relative_to_the_current_page() {
        let composer = PageComposer::new(&SiteConfig::default());
        let home = composer.navigation(Some(Route::Home));
        assert_eq!(home[0].href, "#home");
        assert_eq!(home.last().map(|link| link.href.as_str()), Some("/about"));
        let about = composer.navigation(Some(Route::About));
        assert_eq!(about[2].href, "/#projects");
    }

    #[test]
    fn not_found_links_home() {
        let composer = PageComposer::new(&SiteConfig::default());
        let page = composer.not_found("/blog<x>", &ctx()).expect("not found composes");
        let html = page.render(&ctx()).expect("not found renders");
        assert!(html.contains("<code>/blog&lt;x&gt;</code>"));
        assert!(html.contains("href=\"/\">Back to the portfolio</a>"));
        assert!(html.contains("© 2025 Lab of Neural Dynamics."));
    }
}
