// crates/vnlocale-core/src/prelude.rs
//! `use vnlocale_core::prelude::*;` brings in the facade, its records and
//! the search traits.

pub use crate::config::{SearchConfig, SearchField};
pub use crate::error::{LocaleError, Result};
pub use crate::model::{District, Province, VietnamLocale, Ward};
pub use crate::raw::Dataset;
pub use crate::search::{Category, DrillDown, SearchHit, SearchScope};
pub use crate::traits::{LocaleSearch, NameMatch};
