pub mod aggregate;
pub mod cards;

pub use aggregate::{Profile, TabItem};
pub use cards::{CertificationCard, SkillTile};

use once_cell::sync::Lazy;

/// Site content shipped with the bundle.
const PROFILE_JSON: &str = include_str!("../../../data/profile.json");

/// Errors raised while reading the static profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to parse profile configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

static PROFILE: Lazy<Result<Profile, ProfileError>> = Lazy::new(|| parse_profile(PROFILE_JSON));

/// Parse a profile from its JSON text.
pub fn parse_profile(json: &str) -> Result<Profile, ProfileError> {
    Ok(serde_json::from_str(json)?)
}

/// The embedded profile, parsed once.
pub fn load_profile() -> Result<&'static Profile, &'static ProfileError> {
    PROFILE.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = load_profile().unwrap();
        assert!(!profile.certifications.is_empty());
        assert!(!profile.technical_profile.is_empty());
    }

    #[test]
    fn test_embedded_profile_carries_reveal_settings() {
        let reveal = &load_profile().unwrap().reveal;
        assert_eq!(reveal.duration, 500);
        assert_eq!(reveal.delay, 200);
        assert_eq!(reveal.view_factor, 0.25);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_profile("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse profile configuration"));
    }
}
