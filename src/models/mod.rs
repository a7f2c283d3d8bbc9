// Model exports
pub mod domain;
pub mod reports;

pub use domain::{
    AllergenCategory, AllergenDefinition, BudgetRange, ConcernDefinition, ConflictRule,
    ExperienceLevel, Product, RiskLevel, Severity, SkinConcern, SkinType, UnknownConcernError,
    UserSkinProfile,
};
pub use reports::{
    AllergenAlert, AllergenAnalysisResult, ConcernMatch, ConcernMatches, ConflictWarning,
    Recommendation, RecommendationResult,
};
