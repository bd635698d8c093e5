// crates/vnlocale-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset, building the locale index or
/// interpreting caller input.
///
/// Search itself never fails on data: unknown scoping codes, queries without
/// matches and empty queries all produce an empty result list.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A foreign key in the dataset does not line up with its target.
    #[error("{entity} `{code}`: {field} `{target}` {problem}")]
    ReferentialIntegrity {
        entity: &'static str,
        code: String,
        field: &'static str,
        target: String,
        problem: &'static str,
    },

    /// A province or district code occurs more than once.
    #[error("duplicate {entity} code `{code}`")]
    DuplicateCode { entity: &'static str, code: String },

    /// Caller supplied something the API cannot interpret (unknown search
    /// category, empty field list in a config, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl LocaleError {
    pub(crate) fn unresolved(
        entity: &'static str,
        code: &str,
        field: &'static str,
        target: &str,
    ) -> Self {
        LocaleError::ReferentialIntegrity {
            entity,
            code: code.to_owned(),
            field,
            target: target.to_owned(),
            problem: "does not resolve",
        }
    }

    /// True for the dataset-consistency failures detected while building.
    pub fn is_referential(&self) -> bool {
        matches!(self, LocaleError::ReferentialIntegrity { .. })
    }
}

pub type Result<T> = std::result::Result<T, LocaleError>;
