//! Default sector template catalog.

use policy_types::{SectorCategory, SectorTemplate};

const SEED: &[(&str, &str, SectorCategory)] = &[
    ("local-news", "Local News Outlet", SectorCategory::MediaJournalism),
    ("national-news", "National News Organization", SectorCategory::MediaJournalism),
    ("magazine", "Magazine", SectorCategory::MediaJournalism),
    ("newsletter", "Newsletter", SectorCategory::MediaJournalism),
    ("podcast", "Podcast", SectorCategory::MediaJournalism),
    ("broadcaster", "Broadcaster", SectorCategory::MediaJournalism),
    ("academic-journal", "Academic Journal", SectorCategory::AcademicResearch),
    ("university", "University", SectorCategory::AcademicResearch),
    ("think-tank", "Think Tank", SectorCategory::AcademicResearch),
    ("research-institute", "Research Institute", SectorCategory::AcademicResearch),
    ("preprint-server", "Preprint Server", SectorCategory::AcademicResearch),
    ("government-agency", "Government Agency", SectorCategory::GovernmentPublic),
    ("municipality", "Municipality", SectorCategory::GovernmentPublic),
    ("public-library", "Public Library", SectorCategory::GovernmentPublic),
    ("public-health", "Public Health Authority", SectorCategory::GovernmentPublic),
    ("pr-agency", "PR Agency", SectorCategory::CorporateProfessional),
    ("corporate-comms", "Corporate Communications", SectorCategory::CorporateProfessional),
    ("internal-comms", "Internal Communications", SectorCategory::CorporateProfessional),
    ("trade-association", "Trade Association", SectorCategory::CorporateProfessional),
    ("social-platform", "Social Platform", SectorCategory::PlatformTechnology),
    ("online-forum", "Online Forum", SectorCategory::PlatformTechnology),
    ("ai-content", "AI Content Service", SectorCategory::PlatformTechnology),
    ("aggregator", "News Aggregator", SectorCategory::PlatformTechnology),
    ("foundation", "Foundation", SectorCategory::NonprofitAdvocacy),
    ("advocacy-org", "Advocacy Organization", SectorCategory::NonprofitAdvocacy),
    ("community-org", "Community Organization", SectorCategory::NonprofitAdvocacy),
    ("youtuber", "YouTuber", SectorCategory::IndividualCreator),
    ("blogger", "Blogger", SectorCategory::IndividualCreator),
    ("substack-writer", "Substack Writer", SectorCategory::IndividualCreator),
    ("streamer", "Streamer", SectorCategory::IndividualCreator),
    ("independent-journalist", "Independent Journalist", SectorCategory::IndividualCreator),
];

/// Built-in sector templates, in listing order.
pub fn default_sector_templates() -> Vec<SectorTemplate> {
    let mut templates: Vec<SectorTemplate> = SEED
        .iter()
        .map(|(slug, name, category)| SectorTemplate::new(*slug, *name, *category))
        .collect();
    crate::sort_for_listing(&mut templates);
    templates
}
