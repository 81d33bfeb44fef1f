//! Build script for generating the certificate image manifest
//!
//! Scans the frontend's `static/certificates` directory and writes
//! `certificates_gen.rs` (base filename + pixel size per image) into OUT_DIR.
//! The build fails when a certification in `data/profile.json` names a file
//! that is not in the directory.

use serde::Deserialize;
use std::fs;
use std::path::Path;

const CERTIFICATES_DIR: &str = "../frontend/static/certificates";
const PROFILE_JSON: &str = "data/profile.json";

fn main() {
    println!("cargo:rerun-if-changed={}", CERTIFICATES_DIR);
    println!("cargo:rerun-if-changed={}", PROFILE_JSON);

    let assets = match scan_certificates(Path::new(CERTIFICATES_DIR)) {
        Ok(assets) => assets,
        Err(e) => panic!("Failed to scan {}: {}", CERTIFICATES_DIR, e),
    };

    if let Err(e) = check_profile_files(Path::new(PROFILE_JSON), &assets) {
        panic!("Certificate images do not match {}: {}", PROFILE_JSON, e);
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let output_rs = Path::new(&out_dir).join("certificates_gen.rs");
    fs::write(&output_rs, generate_rust_code(&assets)).expect("Failed to write certificates_gen.rs");
}

// ============================================================================
// Scanning
// ============================================================================

struct ScannedImage {
    base: String,
    width: u32,
    height: u32,
}

fn scan_certificates(dir: &Path) -> Result<Vec<ScannedImage>, Box<dyn std::error::Error>> {
    let mut assets = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        println!("cargo:rerun-if-changed={}", path.display());

        let base = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let (width, height) = match extension.as_deref() {
            Some("svg") => svg_size(&fs::read_to_string(&path)?)
                .ok_or_else(|| format!("{}: root <svg> needs numeric width and height", base))?,
            Some("png") => png_size(&fs::read(&path)?)
                .ok_or_else(|| format!("{}: not a valid PNG", base))?,
            _ => {
                println!("cargo:warning=Skipping non-image file: {}", base);
                continue;
            }
        };

        assets.push(ScannedImage { base, width, height });
    }

    assets.sort_by(|a, b| a.base.cmp(&b.base));
    Ok(assets)
}

/// Width and height attributes of the root `<svg>` element.
fn svg_size(content: &str) -> Option<(u32, u32)> {
    let start = content.find("<svg")?;
    let end = start + content[start..].find('>')?;
    let tag = &content[start..end];
    Some((svg_attr(tag, "width")?, svg_attr(tag, "height")?))
}

fn svg_attr(tag: &str, name: &str) -> Option<u32> {
    let needle = format!(" {}=\"", name);
    let from = tag.find(&needle)? + needle.len();
    let value = &tag[from..from + tag[from..].find('"')?];
    value.trim_end_matches("px").parse().ok()
}

/// Size from the IHDR chunk, which always directly follows the signature.
fn png_size(bytes: &[u8]) -> Option<(u32, u32)> {
    const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    if bytes.len() < 24 || bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

// ============================================================================
// Profile cross-check
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProfileJson {
    #[serde(default)]
    certifications: Vec<CertificationJson>,
}

#[derive(Debug, Deserialize)]
struct CertificationJson {
    name: String,
    file: Option<String>,
}

fn check_profile_files(
    profile_path: &Path,
    assets: &[ScannedImage],
) -> Result<(), Box<dyn std::error::Error>> {
    let profile: ProfileJson = serde_json::from_str(&fs::read_to_string(profile_path)?)?;

    let missing: Vec<String> = profile
        .certifications
        .iter()
        .filter_map(|cert| {
            let file = cert.file.as_deref()?;
            if assets.iter().any(|a| a.base == file) {
                None
            } else {
                Some(format!("{} (\"{}\")", file, cert.name))
            }
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing image files: {}", missing.join(", ")).into())
    }
}

// ============================================================================
// Code generation
// ============================================================================

fn generate_rust_code(assets: &[ScannedImage]) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM static/certificates - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str("/// (base filename, width, height) of every certificate image.\n");
    code.push_str("pub const CERTIFICATE_ASSETS: &[(&str, u32, u32)] = &[\n");
    for asset in assets {
        code.push_str(&format!(
            "    ({:?}, {}, {}),\n",
            asset.base, asset.width, asset.height
        ));
    }
    code.push_str("];\n");

    code
}
