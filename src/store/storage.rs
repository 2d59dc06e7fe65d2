use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use super::types::Store;
use crate::model::{Brand, BrandBrief, CreatorProfile};

/// Load creator records from a JSON array file
pub fn load_creators(path: &Path) -> Result<Vec<CreatorProfile>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open creators file at {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse creators: invalid JSON in {}", path.display()))
}

/// Load brand records from a JSON array file
pub fn load_brands(path: &Path) -> Result<Vec<Brand>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open brands file at {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse brands: invalid JSON in {}", path.display()))
}

/// Load a brief from a `.json` file, or from YAML for any other extension
pub fn load_brief(path: &Path) -> Result<BrandBrief> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read brief file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse brief: invalid JSON in {}", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse brief: invalid YAML in {}", path.display()))
    }
}

/// Build a store from seed files. Repeated handles and names keep the first record.
///
/// The brands file is optional; without it only ad-hoc briefs can be matched.
pub fn load_store(creators_path: &Path, brands_path: Option<&Path>) -> Result<Store> {
    let mut store = Store::new();

    let creators = load_creators(creators_path)?;
    let total = creators.len();
    let mut added = 0;
    for creator in creators {
        if store.insert_creator(creator) {
            added += 1;
        }
    }
    info!(added, skipped = total - added, "Loaded creators from {}", creators_path.display());

    if let Some(path) = brands_path {
        let brands = load_brands(path)?;
        let total = brands.len();
        let mut added = 0;
        for brand in brands {
            if store.insert_brand(brand) {
                added += 1;
            }
        }
        info!(added, skipped = total - added, "Loaded brands from {}", path.display());
    }

    Ok(store)
}
