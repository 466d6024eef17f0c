use serde::Serialize;

use crate::filter::{Categorized, Category};

/// Records that carry an identifier unique within their collection.
pub trait Identified {
    fn id(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Published,
    UnderReview,
    Preprint,
}

impl PublicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::UnderReview => "Under Review",
            Self::Preprint => "Preprint",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicationRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub venue: &'static str,
    pub year: u16,
    pub authors: &'static [&'static str],
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<&'static str>,
    pub link: &'static str,
    pub citation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRecord {
    pub id: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationRecord {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub honors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationCategory {
    CloudVendor,
    Ai,
    EnterprisePlatform,
    Academic,
}

impl Category for CertificationCategory {
    fn ordered() -> &'static [Self] {
        &[
            Self::CloudVendor,
            Self::Ai,
            Self::EnterprisePlatform,
            Self::Academic,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::CloudVendor => "Cloud",
            Self::Ai => "AI",
            Self::EnterprisePlatform => "Enterprise",
            Self::Academic => "Academic",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::CloudVendor => "cloud-vendor",
            Self::Ai => "ai",
            Self::EnterprisePlatform => "enterprise-platform",
            Self::Academic => "academic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Planned,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub category: CertificationCategory,
    pub status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<&'static str>,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestimonialCategory {
    Research,
    Engineering,
    Leadership,
}

impl Category for TestimonialCategory {
    fn ordered() -> &'static [Self] {
        &[Self::Research, Self::Engineering, Self::Leadership]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Engineering => "Engineering",
            Self::Leadership => "Leadership",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Engineering => "engineering",
            Self::Leadership => "leadership",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialRecord {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub category: TestimonialCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Ai,
    Salesforce,
    Data,
}

impl Category for ProjectCategory {
    fn ordered() -> &'static [Self] {
        &[Self::Ai, Self::Salesforce, Self::Data]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Salesforce => "Salesforce",
            Self::Data => "Data",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Salesforce => "salesforce",
            Self::Data => "data",
        }
    }
}

/// Gradient used behind a project card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Indigo,
    Emerald,
    Amber,
    Violet,
    Sky,
    Fuchsia,
    Rose,
    Teal,
    Sunset,
}

impl Accent {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Indigo => "accent-indigo",
            Self::Emerald => "accent-emerald",
            Self::Amber => "accent-amber",
            Self::Violet => "accent-violet",
            Self::Sky => "accent-sky",
            Self::Fuchsia => "accent-fuchsia",
            Self::Rose => "accent-rose",
            Self::Teal => "accent-teal",
            Self::Sunset => "accent-sunset",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<&'static str>,
    pub featured: bool,
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchPillar {
    pub title: &'static str,
    pub description: &'static str,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BiographyChapter {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epigraph: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub affiliation: &'static str,
    pub focus: &'static str,
    pub tagline: &'static str,
    pub summary: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<&'static str>,
    pub email: &'static str,
    pub socials: &'static [SocialLink],
    pub metrics: &'static [Metric],
    pub lab_name: &'static str,
}

impl Profile {
    /// Up to two uppercase initials, used when the avatar is missing or fails to load.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

macro_rules! identified {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Identified for $record {
                fn id(&self) -> &'static str {
                    self.id
                }
            }
        )+
    };
}

identified!(
    PublicationRecord,
    ExperienceRecord,
    EducationRecord,
    CertificationRecord,
    TestimonialRecord,
    ProjectRecord,
    BiographyChapter,
);

impl Categorized for CertificationRecord {
    type Category = CertificationCategory;

    fn category(&self) -> CertificationCategory {
        self.category
    }
}

impl Categorized for TestimonialRecord {
    type Category = TestimonialCategory;

    fn category(&self) -> TestimonialCategory {
        self.category
    }
}

impl Categorized for ProjectRecord {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}
