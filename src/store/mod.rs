pub mod storage;
pub mod types;

pub use storage::{load_brands, load_brief, load_creators, load_store};
pub use types::{Store, DEFAULT_LIMIT};
