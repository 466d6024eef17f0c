//! Compiled-in content modules.
//!
//! Every collection is a `'static` slice defined at build time and never mutated;
//! sections read only their own collection.

pub mod catalog;
pub mod domain;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub use domain::{
    Accent, BiographyChapter, CertificationCategory, CertificationRecord, EducationRecord,
    ExperienceRecord, Identified, Metric, Profile, ProjectCategory, ProjectRecord,
    PublicationRecord, PublicationStatus, ResearchPillar, SocialLink, TestimonialCategory,
    TestimonialRecord, VerificationStatus,
};

use crate::filter::{filter, Category, CategoryFilter, Categorized, FilterError};

/// Collections addressable from the CLI and the JSON content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Publications,
    Experience,
    Education,
    Certifications,
    Testimonials,
    Projects,
}

impl Collection {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Publications,
            Self::Experience,
            Self::Education,
            Self::Certifications,
            Self::Testimonials,
            Self::Projects,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Publications => "publications",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Testimonials => "testimonials",
            Self::Projects => "projects",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|collection| collection.slug().eq_ignore_ascii_case(raw))
    }

    pub const fn is_filterable(self) -> bool {
        matches!(
            self,
            Self::Certifications | Self::Testimonials | Self::Projects
        )
    }

    /// Category tab labels for filterable collections, "All" first.
    pub fn category_labels(self) -> Vec<&'static str> {
        fn labels<C: Category>() -> Vec<&'static str> {
            std::iter::once(CategoryFilter::<C>::ALL_LABEL)
                .chain(C::ordered().iter().map(|category| category.label()))
                .collect()
        }

        match self {
            Self::Certifications => labels::<CertificationCategory>(),
            Self::Testimonials => labels::<TestimonialCategory>(),
            Self::Projects => labels::<ProjectCategory>(),
            _ => Vec::new(),
        }
    }

    /// Records of this collection as JSON, narrowed by `category` when given.
    pub fn records(self, category: Option<&str>) -> Result<Vec<Value>, ContentError> {
        match (self, category) {
            (Self::Certifications, _) => select(catalog::certifications(), category),
            (Self::Testimonials, _) => select(catalog::testimonials(), category),
            (Self::Projects, _) => select(catalog::projects(), category),
            (_, Some(raw)) if !raw.trim().is_empty() => {
                Err(ContentError::NotFilterable { collection: self })
            }
            (Self::Publications, _) => to_values(catalog::publications().iter()),
            (Self::Experience, _) => to_values(catalog::experiences().iter()),
            (Self::Education, _) => to_values(catalog::education().iter()),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

fn select<T>(items: &'static [T], category: Option<&str>) -> Result<Vec<Value>, ContentError>
where
    T: Categorized + Serialize,
{
    let selected = match category {
        Some(raw) => CategoryFilter::parse(raw)?,
        None => CategoryFilter::All,
    };
    to_values(filter(items, selected).into_iter())
}

fn to_values<'a, T, I>(items: I) -> Result<Vec<Value>, ContentError>
where
    T: Serialize + 'a,
    I: Iterator<Item = &'a T>,
{
    items
        .map(|item| serde_json::to_value(item).map_err(ContentError::Serialize))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: &'static str,
    },
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),
    #[error("{collection} cannot be filtered by category")]
    NotFilterable { collection: Collection },
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("unable to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Startup checks over the compiled-in collections.
pub struct Catalog;

impl Catalog {
    pub fn validate() -> Result<(), ContentError> {
        ensure_unique("publications", catalog::publications())?;
        ensure_unique("experience", catalog::experiences())?;
        ensure_unique("education", catalog::education())?;
        ensure_unique("certifications", catalog::certifications())?;
        ensure_unique("testimonials", catalog::testimonials())?;
        ensure_unique("projects", catalog::projects())?;
        ensure_unique("biography", catalog::biography())?;
        Ok(())
    }
}

pub fn ensure_unique<T: Identified>(
    collection: &'static str,
    records: &[T],
) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ContentError::DuplicateId {
                collection,
                id: record.id(),
            });
        }
    }
    Ok(())
}
