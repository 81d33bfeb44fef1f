use crate::shared::reveal::RevealConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tab item
// ============================================================================

/// One entry of a tabbed section: a certification or a skill group.
///
/// Certification entries carry `issuer`, `date_acquired`, `external_link`
/// and `file`; technical profile groups usually only have `name` and `skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    pub name: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub issuer: Option<String>,

    #[serde(default, rename = "dateAcquired", alias = "date_acquired")]
    pub date_acquired: Option<String>,

    #[serde(default, rename = "externalLink", alias = "external_link")]
    pub external_link: Option<String>,

    /// Image filename key, joined against the asset catalog.
    #[serde(default)]
    pub file: Option<String>,
}

impl TabItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: Vec::new(),
            issuer: None,
            date_acquired: None,
            external_link: None,
            file: None,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_date_acquired(mut self, date: impl Into<String>) -> Self {
        self.date_acquired = Some(date.into());
        self
    }

    /// Text of the tab button selecting this item.
    pub fn tab_label(&self) -> &str {
        &self.name
    }

    pub fn issuer(&self) -> Option<&str> {
        non_blank(&self.issuer)
    }

    pub fn date_acquired(&self) -> Option<&str> {
        non_blank(&self.date_acquired)
    }

    pub fn external_link(&self) -> Option<&str> {
        non_blank(&self.external_link)
    }

    pub fn file(&self) -> Option<&str> {
        non_blank(&self.file)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// Profile
// ============================================================================

/// Static site configuration: the two tabbed sections and their reveal animation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub certifications: Vec<TabItem>,

    #[serde(default, rename = "technicalProfile", alias = "technical_profile")]
    pub technical_profile: Vec<TabItem>,

    /// Reveal-on-scroll settings shared by both sections.
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_certification() {
        let item: TabItem = serde_json::from_value(json!({
            "name": "AWS SA",
            "issuer": "Amazon Web Services",
            "dateAcquired": "2023-05",
            "externalLink": "https://x",
            "file": "aws.png",
            "skills": ["EC2", "S3"]
        }))
        .unwrap();

        assert_eq!(item.tab_label(), "AWS SA");
        assert_eq!(item.skills, vec!["EC2", "S3"]);
        assert_eq!(item.external_link(), Some("https://x"));
        assert_eq!(item.file(), Some("aws.png"));
        assert_eq!(item.date_acquired(), Some("2023-05"));
    }

    #[test]
    fn test_snake_case_aliases() {
        let profile: Profile = serde_json::from_value(json!({
            "technical_profile": [{ "name": "Data", "skills": ["Python"] }],
            "certifications": [{ "name": "X", "external_link": "https://y" }]
        }))
        .unwrap();

        assert_eq!(profile.technical_profile.len(), 1);
        assert_eq!(profile.certifications[0].external_link(), Some("https://y"));
        assert_eq!(profile.reveal, RevealConfig::default());
    }

    #[test]
    fn test_reveal_block_overrides_defaults() {
        let profile: Profile = serde_json::from_value(json!({
            "reveal": { "origin": "left", "duration": 900, "delay": 50, "reset": true }
        }))
        .unwrap();

        assert_eq!(profile.reveal.duration, 900);
        assert_eq!(profile.reveal.delay, 50);
        assert!(profile.reveal.reset);
        assert_eq!(profile.reveal.distance, 20);
    }

    #[test]
    fn test_blank_optionals_read_as_none() {
        let item = TabItem::new("X")
            .with_external_link("  ")
            .with_issuer("");
        assert_eq!(item.external_link(), None);
        assert_eq!(item.issuer(), None);
        assert!(item.skills.is_empty());
    }
}
