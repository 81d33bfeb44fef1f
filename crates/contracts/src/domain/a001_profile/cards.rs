//! Panel view models: what each tab panel shows, resolved from a [`TabItem`].

use super::aggregate::TabItem;
use crate::enums::icon_key::IconKey;
use crate::shared::assets::{AssetCatalog, AssetError, ImageHandle};
use crate::shared::date_utils::format_month_year;

/// Content of one certification panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationCard {
    pub title: String,
    pub image: ImageHandle,
    pub image_alt: String,
    pub issuer: Option<String>,
    pub date_acquired: Option<String>,
    /// Target of the title link and of the external-link button.
    pub external_link: Option<String>,
    pub skills: Vec<String>,
}

impl CertificationCard {
    pub fn build(item: &TabItem, catalog: &AssetCatalog) -> Result<Self, AssetError> {
        let image = catalog.join(&item.name, item.file())?;
        Ok(Self {
            title: item.name.clone(),
            image,
            image_alt: format!("{} certificate", item.name),
            issuer: item.issuer().map(str::to_string),
            date_acquired: item.date_acquired().map(format_month_year),
            external_link: item.external_link().map(str::to_string),
            skills: item.skills.clone(),
        })
    }

    /// Build every card, stopping at the first unresolved image.
    pub fn build_all(items: &[TabItem], catalog: &AssetCatalog) -> Result<Vec<Self>, AssetError> {
        items.iter().map(|item| Self::build(item, catalog)).collect()
    }

    pub fn has_external_link(&self) -> bool {
        self.external_link.is_some()
    }

    /// Text of the tab button selecting this card.
    pub fn tab_label(&self) -> &str {
        &self.title
    }
}

/// One icon + label entry of a skill panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTile {
    pub label: String,
    pub icon: IconKey,
}

impl SkillTile {
    pub fn from_name(name: &str) -> Self {
        Self {
            label: name.to_string(),
            icon: IconKey::from_name(name),
        }
    }

    pub fn for_item(item: &TabItem) -> Vec<Self> {
        item.skills.iter().map(|s| Self::from_name(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::assets::ImageAsset;
    use crate::shared::tab_controller::TabController;

    fn catalog(files: &[&str]) -> AssetCatalog {
        AssetCatalog::from_assets(files.iter().map(|f| ImageAsset {
            base: f.to_string(),
            width: 100,
            height: 80,
        }))
        .unwrap()
    }

    #[test]
    fn test_end_to_end_single_certification() {
        let items = vec![TabItem::new("AWS SA")
            .with_file("aws.png")
            .with_skills(["EC2", "S3"])
            .with_external_link("https://x")];
        let catalog = catalog(&["aws.png"]);

        let ctrl = TabController::new("certifications", items.len());
        let cards = CertificationCard::build_all(&items, &catalog).unwrap();

        assert_eq!(ctrl.len(), 1);
        assert_eq!(cards.len(), 1);
        assert!(ctrl.tab_attrs(0).selected);
        assert!(!ctrl.panel_attrs(0).hidden);

        let card = &cards[0];
        assert_eq!(card.tab_label(), "AWS SA");
        assert_eq!(card.title, "AWS SA");
        assert_eq!(card.image.src, "/static/certificates/aws.png");
        assert_eq!(card.external_link.as_deref(), Some("https://x"));
        assert_eq!(card.skills, vec!["EC2", "S3"]);
        assert_eq!(card.image_alt, "AWS SA certificate");
    }

    #[test]
    fn test_external_link_button_presence() {
        let catalog = catalog(&["a.png"]);
        let without = TabItem::new("A").with_file("a.png");
        let with = TabItem::new("A").with_file("a.png").with_external_link("https://a");

        assert!(!CertificationCard::build(&without, &catalog).unwrap().has_external_link());
        let card = CertificationCard::build(&with, &catalog).unwrap();
        assert!(card.has_external_link());
        assert_eq!(card.external_link.as_deref(), Some("https://a"));
    }

    #[test]
    fn test_all_three_images_resolve() {
        let items: Vec<_> = ["a.png", "b.png", "c.png"]
            .iter()
            .enumerate()
            .map(|(i, f)| TabItem::new(format!("Cert {}", i)).with_file(*f))
            .collect();
        let cards = CertificationCard::build_all(&items, &catalog(&["a.png", "b.png", "c.png"])).unwrap();
        assert_eq!(cards.len(), 3);
        for (card, item) in cards.iter().zip(&items) {
            assert_eq!(card.image.src, format!("/static/certificates/{}", item.file().unwrap()));
        }
    }

    #[test]
    fn test_missing_image_fails_fast() {
        let items = vec![
            TabItem::new("A").with_file("a.png"),
            TabItem::new("B").with_file("b.png"),
        ];
        let err = CertificationCard::build_all(&items, &catalog(&["a.png"])).unwrap_err();
        assert_eq!(
            err,
            AssetError::Missing {
                key: "b.png".into(),
                item: "B".into()
            }
        );
    }

    #[test]
    fn test_date_is_formatted() {
        let item = TabItem::new("A").with_file("a.png").with_date_acquired("2023-05");
        let card = CertificationCard::build(&item, &catalog(&["a.png"])).unwrap();
        assert_eq!(card.date_acquired.as_deref(), Some("May 2023"));
    }

    #[test]
    fn test_skill_tiles_keep_order_and_fallback() {
        let item = TabItem::new("Tooling").with_skills(["Git", "Airflow", "Docker"]);
        let tiles = SkillTile::for_item(&item);
        assert_eq!(
            tiles.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(),
            vec!["Git", "Airflow", "Docker"]
        );
        assert_eq!(tiles[0].icon, IconKey::Git);
        assert_eq!(tiles[1].icon, IconKey::Fallback);
    }
}
