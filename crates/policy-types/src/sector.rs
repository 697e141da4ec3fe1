//! Sector templates and the catalog used to seed the identity step
//!
//! Templates arrive from storage with a free-text category. Anything that is
//! not one of the seven known categories lands in the `Other` bucket instead
//! of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization-type category a sector template belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum SectorCategory {
    MediaJournalism,
    AcademicResearch,
    GovernmentPublic,
    CorporateProfessional,
    PlatformTechnology,
    NonprofitAdvocacy,
    IndividualCreator,
    #[default]
    Other,
}

impl SectorCategory {
    /// The seven named categories in display order. `Other` is not listed.
    pub const NAMED: [SectorCategory; 7] = [
        SectorCategory::MediaJournalism,
        SectorCategory::AcademicResearch,
        SectorCategory::GovernmentPublic,
        SectorCategory::CorporateProfessional,
        SectorCategory::PlatformTechnology,
        SectorCategory::NonprofitAdvocacy,
        SectorCategory::IndividualCreator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectorCategory::MediaJournalism => "Media & Journalism",
            SectorCategory::AcademicResearch => "Academic & Research",
            SectorCategory::GovernmentPublic => "Government & Public",
            SectorCategory::CorporateProfessional => "Corporate & Professional",
            SectorCategory::PlatformTechnology => "Platform & Technology",
            SectorCategory::NonprofitAdvocacy => "Nonprofit & Advocacy",
            SectorCategory::IndividualCreator => "Individual & Creator",
            SectorCategory::Other => "Other",
        }
    }

    /// Short list of the kinds of publisher in this category
    pub fn examples(&self) -> &'static str {
        match self {
            SectorCategory::MediaJournalism => "Newsrooms, podcasts, newsletters",
            SectorCategory::AcademicResearch => "Journals, universities, think tanks",
            SectorCategory::GovernmentPublic => "Agencies, municipalities, libraries",
            SectorCategory::CorporateProfessional => "PR, internal comms, associations",
            SectorCategory::PlatformTechnology => "Social platforms, forums, AI content",
            SectorCategory::NonprofitAdvocacy => "Foundations, advocacy orgs",
            SectorCategory::IndividualCreator => "YouTubers, bloggers, Substacks",
            SectorCategory::Other => "Publishers outside the listed categories",
        }
    }

    /// Map stored category text to a category. Missing or unrecognized text
    /// becomes `Other`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return SectorCategory::Other;
        };
        SectorCategory::NAMED
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(SectorCategory::Other)
    }
}

impl From<Option<String>> for SectorCategory {
    fn from(raw: Option<String>) -> Self {
        SectorCategory::normalize(raw.as_deref())
    }
}

impl From<SectorCategory> for String {
    fn from(category: SectorCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for SectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predefined organization-type profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorTemplate {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub category: SectorCategory,
}

impl SectorTemplate {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        category: SectorCategory,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            category,
        }
    }
}

/// Templates of one category, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorGroup<'a> {
    pub category: SectorCategory,
    pub sectors: Vec<&'a SectorTemplate>,
}

/// The sector templates known at validation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorCatalog {
    templates: Vec<SectorTemplate>,
}

impl SectorCatalog {
    /// Keep templates in the order given (the gateway's listing order)
    pub fn new(templates: Vec<SectorTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[SectorTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&SectorTemplate> {
        self.templates.iter().find(|t| t.slug == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Display name for a slug. Unknown or stale slugs show as the raw slug.
    pub fn display_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.get(slug).map(|t| t.name.as_str()).unwrap_or(slug)
    }

    /// Templates grouped by category in display order. Empty groups are
    /// omitted and `Other` comes last.
    pub fn grouped(&self) -> Vec<SectorGroup<'_>> {
        SectorCategory::NAMED
            .into_iter()
            .chain(std::iter::once(SectorCategory::Other))
            .map(|category| SectorGroup {
                category,
                sectors: self
                    .templates
                    .iter()
                    .filter(|t| t.category == category)
                    .collect(),
            })
            .filter(|group| !group.sectors.is_empty())
            .collect()
    }
}

impl FromIterator<SectorTemplate> for SectorCatalog {
    fn from_iter<I: IntoIterator<Item = SectorTemplate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
