use std::{borrow::Cow, sync::OnceLock};

use dioxus::logger::tracing::{info, warn};
use rust_embed::RustEmbed;

use crate::domain::{Catalog, CatalogError};

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const MAIN_CSS_PATH: &str = "/assets/main.css";
const CATALOG_PATH: &str = "/assets/catalog.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| match load_text(MAIN_CSS_PATH) {
            Some(css) => css,
            None => {
                warn!("Embedded stylesheet {MAIN_CSS_PATH} is missing or not UTF-8");
                String::new()
            }
        })
        .as_str()
}

/// Decodes the crop/pet/mutation catalog shipped in `assets/catalog.json`.
pub fn embedded_catalog() -> Result<Catalog, CatalogError> {
    let raw = load_text(CATALOG_PATH).ok_or(CatalogError::MissingAsset(CATALOG_PATH))?;
    let catalog = Catalog::from_json(&raw)?;
    info!(
        crops = catalog.crops.len(),
        pets = catalog.pets.len(),
        mutations = catalog.mutations.len(),
        "loaded embedded catalog"
    );
    Ok(catalog)
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).ok()
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
