// crates/vnlocale-core/src/lib.rs

pub mod config;
pub mod enrich;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod ranking; // match-sorter style ranking primitive
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::config::{FieldConfig, SearchConfig, SearchConfigBuilder, SearchField};
pub use crate::error::{LocaleError, Result};
pub use crate::index::{Group, IndexBuilder, LocaleIndex};
pub use crate::model::{DbStats, District, Province, VietnamLocale, Ward};
pub use crate::raw::{Dataset, WardRaw};
pub use crate::search::{Category, DrillDown, SearchHit, SearchScope};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{LocaleSearch, NameMatch, Searchable};
// Export Text Utils
pub use crate::text::{equals_folded, remove_accents, to_lower_case_and_remove_accents};
