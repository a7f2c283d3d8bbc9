use serde::{Deserialize, Serialize};

use crate::models::domain::{AllergenCategory, RiskLevel, Severity, SkinConcern};

/// One flagged allergen in a product's ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenAlert {
    /// Definition id, or the user's declared term for user-specific alerts
    pub allergen: String,
    #[serde(rename = "matchedIngredients")]
    pub matched_ingredients: Vec<String>,
    pub severity: Severity,
    /// 0-100
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    pub category: AllergenCategory,
    pub description: String,
    #[serde(rename = "suggestedAlternative")]
    pub suggested_alternative: Option<String>,
    /// Allergen ids that commonly co-react with this one
    #[serde(rename = "crossReactions")]
    pub cross_reactions: Vec<String>,
}

impl AllergenAlert {
    pub fn is_user_specific(&self) -> bool {
        self.category == AllergenCategory::UserSpecific
    }
}

/// Full allergen risk report for one product against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenAnalysisResult {
    pub alerts: Vec<AllergenAlert>,
    /// 0-100
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    #[serde(rename = "overallLevel")]
    pub overall_level: RiskLevel,
    #[serde(rename = "patchTestRecommended")]
    pub patch_test_recommended: bool,
    pub recommendations: Vec<String>,
}

/// One concern-to-product match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernMatch {
    pub concern: SkinConcern,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub brand: String,
    pub category: String,
    /// 0-1
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    /// Active ingredients that contributed to the score
    #[serde(rename = "matchedIngredients")]
    pub matched_ingredients: Vec<String>,
    #[serde(rename = "expectedBenefits")]
    pub expected_benefits: Vec<String>,
    #[serde(rename = "timeToResults")]
    pub time_to_results: String,
}

/// Ranked matches for one requested concern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernMatches {
    pub concern: SkinConcern,
    pub matches: Vec<ConcernMatch>,
}

/// A rule-table hit between one ingredient from each input set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictWarning {
    #[serde(rename = "ingredientA")]
    pub ingredient_a: String,
    #[serde(rename = "ingredientB")]
    pub ingredient_b: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// One ranked product suggestion with its supporting evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub price: Option<f64>,
    /// Best concern match score before risk adjustment, 0-1
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    /// Score after allergen risk reduction, 0-1
    #[serde(rename = "adjustedScore")]
    pub adjusted_score: f64,
    #[serde(rename = "concernMatches")]
    pub concern_matches: Vec<ConcernMatch>,
    /// Conflicts against the user's routine; surfaced, never filtered on
    #[serde(rename = "conflictWarnings")]
    pub conflict_warnings: Vec<ConflictWarning>,
    #[serde(rename = "allergenAlerts")]
    pub allergen_alerts: Vec<AllergenAlert>,
}

/// Result of ranking a candidate set for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
