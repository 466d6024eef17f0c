//! Category filtering for the project, certification, and testimonial grids.

use serde::Serialize;

/// Closed enumeration used to narrow a collection.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    fn ordered() -> &'static [Self];
    /// User-visible tab label, e.g. `"AI"`.
    fn label(self) -> &'static str;
    /// Stable lowercase token used in URLs and `data-category` attributes.
    fn slug(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(raw) || category.slug() == raw)
    }
}

pub trait Categorized {
    type Category: Category;

    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> CategoryFilter<C> {
    pub const ALL_LABEL: &'static str = "All";

    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        C::parse(trimmed)
            .map(Self::Only)
            .ok_or_else(|| FilterError::UnknownCategory(trimmed.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Order-preserving subset of `items` whose category matches `filter`.
pub fn filter<T, C>(items: &[T], filter: CategoryFilter<C>) -> Vec<&T>
where
    T: Categorized<Category = C>,
    C: Category,
{
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// The user's current category choice for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection<C> {
    active: CategoryFilter<C>,
}

impl<C> Default for FilterSelection<C> {
    fn default() -> Self {
        Self {
            active: CategoryFilter::All,
        }
    }
}

impl<C: Category> FilterSelection<C> {
    pub fn new(active: CategoryFilter<C>) -> Self {
        Self { active }
    }

    pub fn active(&self) -> CategoryFilter<C> {
        self.active
    }

    /// Returns `true` only when the selection actually changed.
    pub fn select(&mut self, next: CategoryFilter<C>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        true
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterTab {
    pub label: &'static str,
    pub slug: &'static str,
    pub active: bool,
    pub count: usize,
}

/// A static collection seen through a selection.
pub struct FilterView<'a, T: Categorized> {
    source: &'a [T],
    selection: FilterSelection<T::Category>,
}

impl<'a, T: Categorized> FilterView<'a, T> {
    pub fn new(source: &'a [T], selection: FilterSelection<T::Category>) -> Self {
        Self { source, selection }
    }

    pub fn selection(&self) -> FilterSelection<T::Category> {
        self.selection
    }

    pub fn visible(&self) -> Vec<&'a T> {
        filter(self.source, self.selection.active())
    }

    /// Every item in source order, paired with whether the selection shows it.
    pub fn entries(&self) -> Vec<(&'a T, bool)> {
        let active = self.selection.active();
        self.source
            .iter()
            .map(|item| (item, active.matches(item.category())))
            .collect()
    }

    /// "All" followed by every category, in declaration order.
    pub fn tabs(&self) -> Vec<FilterTab> {
        let active = self.selection.active();
        std::iter::once(CategoryFilter::All)
            .chain(
                T::Category::ordered()
                    .iter()
                    .copied()
                    .map(CategoryFilter::Only),
            )
            .map(|candidate| FilterTab {
                label: candidate.label(),
                slug: candidate.slug(),
                active: candidate == active,
                count: self
                    .source
                    .iter()
                    .filter(|item| candidate.matches(item.category()))
                    .count(),
            })
            .collect()
    }
}
