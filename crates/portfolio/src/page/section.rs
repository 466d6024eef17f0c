use serde::Serialize;

use crate::content::Collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    Projects,
    Experience,
    Education,
    Certifications,
    Research,
    Testimonials,
    Newsletter,
    Contact,
    Biography,
}

impl SectionKind {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Hero,
            Self::About,
            Self::Projects,
            Self::Experience,
            Self::Education,
            Self::Certifications,
            Self::Research,
            Self::Testimonials,
            Self::Newsletter,
            Self::Contact,
            Self::Biography,
        ]
    }

    /// Element id, also the fragment path segment.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Research => "research",
            Self::Testimonials => "testimonials",
            Self::Newsletter => "newsletter",
            Self::Contact => "contact",
            Self::Biography => "biography",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.anchor().eq_ignore_ascii_case(raw))
    }

    /// Label in the home navigation bar; `None` keeps the section out of it.
    pub const fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Hero => Some("Home"),
            Self::About => Some("About"),
            Self::Projects => Some("Work"),
            Self::Experience => Some("Exp."),
            Self::Education => Some("Edu."),
            Self::Certifications => Some("Awards"),
            Self::Contact => Some("Contact"),
            Self::Research | Self::Testimonials | Self::Newsletter | Self::Biography => None,
        }
    }

    /// Collection a section narrows with category tabs, if any.
    pub const fn filterable(self) -> Option<Collection> {
        match self {
            Self::Projects => Some(Collection::Projects),
            Self::Certifications => Some(Collection::Certifications),
            Self::Testimonials => Some(Collection::Testimonials),
            _ => None,
        }
    }

    pub fn fragment_path(self) -> String {
        format!("/fragments/{}", self.anchor())
    }
}

/// How a section reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Loading {
    Eager,
    /// Rendered as a placeholder of the given height until the fragment arrives.
    Deferred { placeholder_height: u16 },
}

/// Whether the entrance animation waits for the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Above the fold; visible at first paint.
    Immediate,
    OnScroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    pub kind: SectionKind,
    pub loading: Loading,
    pub reveal: RevealPolicy,
}

impl SectionPlan {
    pub const fn eager(kind: SectionKind) -> Self {
        Self {
            kind,
            loading: Loading::Eager,
            reveal: RevealPolicy::OnScroll,
        }
    }

    pub const fn deferred(kind: SectionKind, placeholder_height: u16) -> Self {
        Self {
            kind,
            loading: Loading::Deferred { placeholder_height },
            reveal: RevealPolicy::OnScroll,
        }
    }

    pub const fn immediate(kind: SectionKind) -> Self {
        Self {
            kind,
            loading: Loading::Eager,
            reveal: RevealPolicy::Immediate,
        }
    }

    pub const fn is_deferred(&self) -> bool {
        matches!(self.loading, Loading::Deferred { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_anchor_case_insensitively() {
        assert_eq!(SectionKind::parse("Research"), Some(SectionKind::Research));
        assert_eq!(SectionKind::parse("home"), Some(SectionKind::Hero));
        assert_eq!(SectionKind::parse("footer"), None);
    }

    #[test]
    fn only_grids_with_categories_are_filterable() {
        assert_eq!(
            SectionKind::Testimonials.filterable(),
            Some(Collection::Testimonials)
        );
        assert_eq!(SectionKind::Experience.filterable(), None);
    }
}
