use tracing::debug;

use crate::error::MatchError;
use crate::model::{Brand, BrandBrief, CreatorProfile};

/// Most creators handed to a single matching run.
pub const DEFAULT_LIMIT: usize = 1000;

/// In-memory records keyed by creator handle and brand name, in insert order.
#[derive(Debug, Clone)]
pub struct Store {
    creators: Vec<CreatorProfile>,
    brands: Vec<Brand>,
    next_creator_id: u64,
    next_brand_id: u64,
}

/// Pick an id for a new record: the requested one when set and free, otherwise
/// the next unused one. `next` always stays above every id handed out.
fn claim_id(requested: u64, next: &mut u64, taken: impl Fn(u64) -> bool) -> u64 {
    let id = if requested != 0 && !taken(requested) {
        requested
    } else if !taken(*next) {
        *next
    } else {
        // Only reachable once `next` has saturated at u64::MAX
        (1..u64::MAX).find(|id| !taken(*id)).unwrap_or(*next)
    };
    *next = (*next).max(id.saturating_add(1));
    id
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            creators: Vec::new(),
            brands: Vec::new(),
            next_creator_id: 1,
            next_brand_id: 1,
        }
    }

    /// Add a creator unless its handle is already stored.
    /// Returns true if the creator was added. Records without an id, or whose id
    /// is already taken, get the next free one.
    pub fn insert_creator(&mut self, mut creator: CreatorProfile) -> bool {
        if self.creator(&creator.handle).is_some() {
            debug!(handle = %creator.handle, "Skipped existing creator");
            return false;
        }
        let creators = &self.creators;
        let id = claim_id(creator.id, &mut self.next_creator_id, |id| {
            creators.iter().any(|c| c.id == id)
        });
        if creator.id != 0 && creator.id != id {
            debug!(handle = %creator.handle, requested = creator.id, assigned = id, "Reassigned taken creator id");
        }
        creator.id = id;
        self.creators.push(creator);
        true
    }

    /// Add a brand unless its name is already stored.
    /// Returns true if the brand was added.
    pub fn insert_brand(&mut self, mut brand: Brand) -> bool {
        if self.brand(&brand.name).is_some() {
            debug!(name = %brand.name, "Skipped existing brand");
            return false;
        }
        let brands = &self.brands;
        let id = claim_id(brand.id, &mut self.next_brand_id, |id| {
            brands.iter().any(|b| b.id == id)
        });
        if brand.id != 0 && brand.id != id {
            debug!(name = %brand.name, requested = brand.id, assigned = id, "Reassigned taken brand id");
        }
        brand.id = id;
        self.brands.push(brand);
        true
    }

    pub fn creator(&self, handle: &str) -> Option<&CreatorProfile> {
        self.creators.iter().find(|c| c.handle == handle)
    }

    pub fn brand(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.name == name)
    }

    /// The first `limit` creators in insert order
    pub fn creators(&self, limit: usize) -> &[CreatorProfile] {
        &self.creators[..self.creators.len().min(limit)]
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Brief for a stored brand, looked up by exact name
    pub fn brief_for(&self, name: &str) -> Result<BrandBrief, MatchError> {
        self.brand(name)
            .map(Brand::to_brief)
            .ok_or_else(|| MatchError::UnknownBrand(name.to_string()))
    }
}
