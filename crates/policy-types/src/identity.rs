//! Publishing identity: who publishes, in which sector, for whom

use serde::{Deserialize, Serialize};

/// The identity section of a draft.
///
/// `sector` holds a sector template slug. An empty string means no sector
/// has been chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublishingIdentity {
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub primary_audience: String,
    #[serde(default)]
    pub publishing_mission: String,
}

impl PublishingIdentity {
    pub fn new(
        organization_name: impl Into<String>,
        sector: impl Into<String>,
        primary_audience: impl Into<String>,
    ) -> Self {
        Self {
            organization_name: organization_name.into(),
            sector: sector.into(),
            primary_audience: primary_audience.into(),
            publishing_mission: String::new(),
        }
    }

    pub fn with_mission(mut self, mission: impl Into<String>) -> Self {
        self.publishing_mission = mission.into();
        self
    }

    /// Mission statement, if one was given
    pub fn mission(&self) -> Option<&str> {
        let mission = self.publishing_mission.trim();
        (!mission.is_empty()).then_some(mission)
    }

    pub fn has_sector(&self) -> bool {
        !self.sector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity_is_empty() {
        let id = PublishingIdentity::default();
        assert!(id.organization_name.is_empty());
        assert!(!id.has_sector());
        assert_eq!(id.mission(), None);
    }

    #[test]
    fn test_mission_trimmed() {
        let id = PublishingIdentity::new("Acme News", "local-news", "residents")
            .with_mission("  To inform our community.  ");
        assert_eq!(id.mission(), Some("To inform our community."));
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let id: PublishingIdentity =
            serde_json::from_str(r#"{"organization_name": "Acme News"}"#).unwrap();
        assert_eq!(id.organization_name, "Acme News");
        assert!(id.sector.is_empty());
        assert!(id.publishing_mission.is_empty());
    }
}
