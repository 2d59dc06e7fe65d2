pub mod brief;
pub mod creator;

pub use brief::{Brand, BrandBrief, ConstraintValue};
pub use creator::CreatorProfile;
