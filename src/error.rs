use thiserror::Error;

use crate::models::SkinConcern;

/// Reference-data integrity violations.
///
/// Detected when a [`crate::reference::ReferenceDataStore`] is constructed,
/// never during analysis. A store that constructs successfully can be read
/// concurrently for the rest of the process lifetime without further checks.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("duplicate allergen definition id `{0}`")]
    DuplicateAllergenId(String),

    /// Every alias must belong to exactly one definition, or matching
    /// becomes non-deterministic.
    #[error("alias `{alias}` appears in both `{first}` and `{second}`")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("cross-reaction from `{source_id}` references unknown allergen `{target}`")]
    DanglingCrossReaction { source_id: String, target: String },

    #[error("allergen `{id}` has prevalence {value} outside [0, 1]")]
    PrevalenceOutOfRange { id: String, value: f64 },

    #[error("duplicate concern definition for `{0}`")]
    DuplicateConcern(SkinConcern),

    /// Primary and specialty lists are disjoint per concern so an
    /// ingredient cannot double-count within one concern.
    #[error("ingredient `{ingredient}` is both primary and specialty for `{concern}`")]
    OverlappingConcernIngredient {
        concern: SkinConcern,
        ingredient: String,
    },

    #[error("concern `{concern}` has baseline effectiveness {value} outside [0, 1]")]
    EffectivenessOutOfRange { concern: SkinConcern, value: f64 },

    #[error("duplicate conflict rule for `{a}` / `{b}`")]
    DuplicateConflictRule { a: String, b: String },

    #[error("conflict rule pairs `{0}` with itself")]
    SelfConflictRule(String),

    #[error("invalid reference data document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
