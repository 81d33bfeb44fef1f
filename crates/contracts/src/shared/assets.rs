//! Certificate image catalog.
//!
//! The manifest is generated by `build.rs` from the frontend's
//! `static/certificates` directory (one entry per image file) and joined to
//! tab items by base filename.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/certificates_gen.rs"));
}

pub use generated::CERTIFICATE_ASSETS;

/// Public URL prefix of the certificate images.
pub const CERTIFICATES_DIR: &str = "/static/certificates";

/// Manifest entry: one image file and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Base filename, e.g. `aws.png`.
    pub base: String,
    pub width: u32,
    pub height: u32,
}

/// A resolved, renderable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("missing asset for key {key} (referenced by \"{item}\")")]
    Missing { key: String, item: String },

    #[error("\"{item}\" has no image file")]
    NoFile { item: String },

    #[error("duplicate asset for key {key}")]
    Duplicate { key: String },
}

/// Filename → image lookup.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    by_base: HashMap<String, ImageHandle>,
}

impl AssetCatalog {
    /// Build a catalog, rejecting filenames listed twice.
    pub fn from_assets<I>(assets: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = ImageAsset>,
    {
        let mut by_base = HashMap::new();
        for asset in assets {
            let handle = ImageHandle {
                src: format!("{}/{}", CERTIFICATES_DIR, asset.base),
                width: asset.width,
                height: asset.height,
            };
            if by_base.insert(asset.base.clone(), handle).is_some() {
                return Err(AssetError::Duplicate { key: asset.base });
            }
        }
        Ok(Self { by_base })
    }

    /// Build from `(base, width, height)` rows such as [`CERTIFICATE_ASSETS`].
    pub fn from_manifest(rows: &[(&str, u32, u32)]) -> Result<Self, AssetError> {
        Self::from_assets(rows.iter().map(|&(base, width, height)| ImageAsset {
            base: base.to_string(),
            width,
            height,
        }))
    }

    pub fn resolve(&self, key: &str) -> Option<&ImageHandle> {
        self.by_base.get(key)
    }

    /// Resolve the image of `item`, failing fast on a missing key.
    pub fn join(&self, item_name: &str, file: Option<&str>) -> Result<ImageHandle, AssetError> {
        let key = file.ok_or_else(|| AssetError::NoFile {
            item: item_name.to_string(),
        })?;
        self.resolve(key).cloned().ok_or_else(|| AssetError::Missing {
            key: key.to_string(),
            item: item_name.to_string(),
        })
    }

    pub fn handles(&self) -> impl Iterator<Item = &ImageHandle> {
        self.by_base.values()
    }

    pub fn len(&self) -> usize {
        self.by_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_base.is_empty()
    }
}

static CATALOG: Lazy<Result<AssetCatalog, AssetError>> =
    Lazy::new(|| AssetCatalog::from_manifest(CERTIFICATE_ASSETS));

/// The embedded certificate catalog, built once.
pub fn certificate_catalog() -> Result<&'static AssetCatalog, AssetError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(base: &str) -> ImageAsset {
        ImageAsset {
            base: base.to_string(),
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn test_resolve_builds_public_url() {
        let catalog = AssetCatalog::from_assets(vec![asset("aws.png")]).unwrap();
        let handle = catalog.resolve("aws.png").unwrap();
        assert_eq!(handle.src, "/static/certificates/aws.png");
        assert_eq!((handle.width, handle.height), (800, 600));
    }

    #[test]
    fn test_join_missing_key_names_it() {
        let catalog = AssetCatalog::from_assets(vec![asset("aws.png")]).unwrap();
        let err = catalog.join("GCP", Some("gcp.png")).unwrap_err();
        assert_eq!(
            err,
            AssetError::Missing {
                key: "gcp.png".into(),
                item: "GCP".into()
            }
        );
        assert!(err.to_string().contains("missing asset for key gcp.png"));
    }

    #[test]
    fn test_join_without_file() {
        let catalog = AssetCatalog::default();
        assert!(matches!(
            catalog.join("X", None),
            Err(AssetError::NoFile { .. })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = AssetCatalog::from_assets(vec![asset("a.png"), asset("a.png")]).unwrap_err();
        assert_eq!(err, AssetError::Duplicate { key: "a.png".into() });
    }

    #[test]
    fn test_embedded_manifest_covers_profile() {
        let catalog = certificate_catalog().unwrap();
        let profile = crate::domain::a001_profile::load_profile().unwrap();
        for cert in &profile.certifications {
            assert!(
                catalog.join(&cert.name, cert.file()).is_ok(),
                "no image for {}",
                cert.name
            );
        }
    }

    #[test]
    fn test_every_manifest_src_exists_on_disk() {
        let frontend = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend");
        let catalog = certificate_catalog().unwrap();
        assert_eq!(catalog.len(), CERTIFICATE_ASSETS.len());
        assert!(!catalog.is_empty());
        for handle in catalog.handles() {
            let path = frontend.join(handle.src.trim_start_matches('/'));
            assert!(path.is_file(), "{} not found", path.display());
            assert!(handle.width > 0 && handle.height > 0, "{} has no size", handle.src);
        }
    }

    #[test]
    fn test_manifest_rows_keep_sizes() {
        let catalog =
            AssetCatalog::from_manifest(&[("a.svg", 1200, 927), ("b.png", 640, 480)]).unwrap();
        let handle = catalog.resolve("a.svg").unwrap();
        assert_eq!((handle.width, handle.height), (1200, 927));
        assert!(AssetCatalog::from_manifest(&[("a.svg", 1, 1), ("a.svg", 2, 2)]).is_err());
    }
}
