use portfolio::config::SiteConfig;
use portfolio::content::catalog;
use portfolio::page::render::escape_html;
use portfolio::page::{ComposeContext, PageComposer, PageKind, Route, SectionKind};
use portfolio::reveal::{RevealState, SectionId, Transition};

fn setup() -> (PageComposer, ComposeContext) {
    let site = SiteConfig::default();
    (
        PageComposer::new(&site),
        ComposeContext::new(&site).with_year(2025),
    )
}

#[test]
fn root_path_renders_home_and_about_path_renders_biography() {
    let (composer, ctx) = setup();

    let home_route = Route::resolve("/").expect("home route");
    let home = composer.compose(home_route, &ctx).expect("home composes");
    assert_eq!(home.kind, PageKind::Route(Route::Home));
    let html = home.render(&ctx).expect("home renders");
    assert!(html.contains("<title>Lab of Neural Dynamics</title>"));
    assert!(html.contains("id=\"projects\""));
    assert!(!html.contains("id=\"biography\""));

    let about_route = Route::resolve("/about").expect("about route");
    let about = composer.compose(about_route, &ctx).expect("about composes");
    let html = about.render(&ctx).expect("about renders");
    assert!(html.contains("<title>Biography | Lab of Neural Dynamics</title>"));
    for chapter in catalog::biography() {
        assert!(html.contains(&format!("id=\"{}\"", chapter.id)));
    }
    assert!(html.contains("href=\"/\">Return to Portfolio</a>"));
}

#[test]
fn composed_sections_reveal_once() {
    let (composer, ctx) = setup();
    let mut page = composer.compose(Route::Home, &ctx).expect("home composes");
    let projects = SectionId::new(SectionKind::Projects.anchor());

    assert_eq!(page.observer.state(&projects), Some(RevealState::Unseen));
    assert_eq!(page.observer.intersect(&projects, true), Transition::Started);
    assert_eq!(page.observer.animation_finished(&projects), Transition::Completed);
    assert_eq!(page.observer.intersect(&projects, false), Transition::Ignored);
    assert_eq!(page.observer.intersect(&projects, true), Transition::Ignored);
    assert_eq!(page.observer.state(&projects), Some(RevealState::Revealed));
}

#[test]
fn avatar_failure_leaves_the_about_section_readable() {
    let (composer, ctx) = setup();
    let page = composer.compose(Route::Home, &ctx).expect("home composes");
    let about = page.section(SectionKind::About).expect("about section");
    let profile = catalog::profile();

    // the image removes itself on error and the initials underneath remain
    assert!(about.body.contains("onerror=\"this.remove()\""));
    assert!(about
        .body
        .contains(&format!("aria-hidden=\"true\">{}</span>", profile.initials())));
    for paragraph in profile.summary {
        assert!(about.body.contains(&escape_html(paragraph)));
    }
}

#[test]
fn deferred_fragments_match_their_inline_rendering() {
    let (composer, ctx) = setup();
    let deferred = composer.compose(Route::Home, &ctx).expect("home composes");
    let placeholder = deferred
        .section(SectionKind::Testimonials)
        .expect("testimonials planned");
    assert!(placeholder.plan.is_deferred());
    assert!(placeholder.body.contains("aria-busy=\"true\""));

    let inline_site = SiteConfig {
        defer_sections: false,
        ..SiteConfig::default()
    };
    let inline = PageComposer::new(&inline_site)
        .compose(Route::Home, &ctx)
        .expect("inline home composes");
    let fragment = composer
        .fragment(SectionKind::Testimonials, None)
        .expect("fragment renders");
    assert_eq!(
        inline.section(SectionKind::Testimonials).map(|s| s.body.as_str()),
        Some(fragment.as_str())
    );
}

#[test]
fn certification_fragment_filters_to_ai() {
    let (composer, _) = setup();
    let html = composer
        .fragment(SectionKind::Certifications, Some("AI"))
        .expect("certifications fragment");
    let found: Vec<&str> = html
        .match_indices("<article class=\"card certification\" data-id=\"")
        .map(|(index, needle)| {
            let rest = &html[index + needle.len()..];
            &rest[..rest.find('"').expect("closing quote")]
        })
        .collect();
    assert_eq!(
        found,
        vec!["dl-specialization", "tensorflow-developer", "stanford-ai-safety"]
    );
    assert!(html.contains("data-widget=\"glass-shapes\""));
    // the other credentials stay in the markup so tabs switch in place
    assert_eq!(
        html.matches("<article hidden class=\"card certification\"").count(),
        catalog::certifications().len() - 3
    );
    assert!(html.contains("<p hidden class=\"empty\">"));
}

#[test]
fn first_render_carries_every_card_for_in_place_filtering() {
    let (composer, ctx) = setup();
    let page = composer.compose(Route::Home, &ctx).expect("home composes");
    let projects = &page
        .section(SectionKind::Projects)
        .expect("projects planned")
        .body;
    for project in catalog::projects() {
        assert!(projects.contains(&format!("data-id=\"{}\"", project.id)));
    }
    assert!(!projects.contains("<article hidden"));
    assert!(projects.contains("data-category=\"all\" aria-selected=\"true\""));
}
