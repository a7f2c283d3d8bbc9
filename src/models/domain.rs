use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Skin type declared on a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
}

/// How experienced the user is with active ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Severity of an allergen definition or conflict rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Bump one level; `high` stays `high`.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Aggregate risk level of a full allergen analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Category of an allergen definition; `UserSpecific` appears only on
/// alerts raised from the user's own declared allergens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenCategory {
    Fragrance,
    Preservative,
    Surfactant,
    Botanical,
    Dye,
    SunscreenFilter,
    Lanolin,
    Solvent,
    UserSpecific,
}

/// A named skin goal with associated beneficial ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinConcern {
    Acne,
    Dryness,
    Aging,
    Hyperpigmentation,
    Redness,
    Oiliness,
    Dullness,
}

impl SkinConcern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acne => "acne",
            Self::Dryness => "dryness",
            Self::Aging => "aging",
            Self::Hyperpigmentation => "hyperpigmentation",
            Self::Redness => "redness",
            Self::Oiliness => "oiliness",
            Self::Dullness => "dullness",
        }
    }
}

impl fmt::Display for SkinConcern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skin concern `{0}`")]
pub struct UnknownConcernError(pub String);

impl FromStr for SkinConcern {
    type Err = UnknownConcernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acne" => Ok(Self::Acne),
            "dryness" => Ok(Self::Dryness),
            "aging" => Ok(Self::Aging),
            "hyperpigmentation" => Ok(Self::Hyperpigmentation),
            "redness" => Ok(Self::Redness),
            "oiliness" => Ok(Self::Oiliness),
            "dullness" => Ok(Self::Dullness),
            other => Err(UnknownConcernError(other.to_string())),
        }
    }
}

/// A named substance category flagged for allergy risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenDefinition {
    pub id: String,
    /// Lower-cased substrings matched against ingredient tokens
    pub aliases: Vec<String>,
    pub severity: Severity,
    pub category: AllergenCategory,
    pub description: String,
    #[serde(rename = "suggestedAlternative")]
    pub suggested_alternative: String,
    /// Fraction of the population sensitized, 0-1
    pub prevalence: f64,
}

/// Beneficial-ingredient tables for one skin concern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernDefinition {
    pub concern: SkinConcern,
    /// Broad, well-established actives
    #[serde(rename = "primaryIngredients")]
    pub primary_ingredients: Vec<String>,
    /// Narrower, regionally popular actives
    #[serde(rename = "specialtyIngredients")]
    pub specialty_ingredients: Vec<String>,
    /// Product categories where the concern is typically addressed
    pub categories: Vec<String>,
    /// Brands with a reputation for this concern, lower-cased
    #[serde(rename = "reputableBrands", default)]
    pub reputable_brands: Vec<String>,
    /// Active ingredient -> human-readable expected benefit
    #[serde(default)]
    pub benefits: HashMap<String, String>,
    #[serde(rename = "baselineEffectiveness")]
    pub baseline_effectiveness: f64,
    #[serde(rename = "timeToResults")]
    pub time_to_results: String,
}

/// A declared incompatibility between two specific ingredients.
/// The pair is unordered; lookup does not depend on field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRule {
    #[serde(rename = "ingredientA")]
    pub ingredient_a: String,
    #[serde(rename = "ingredientB")]
    pub ingredient_b: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Price band a user is willing to spend per product
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// User skin profile, supplied by the profile collaborator.
/// The engine reads it and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkinProfile {
    #[serde(rename = "skinType")]
    pub skin_type: SkinType,
    /// Free-text declared allergens, matched case-insensitively
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<SkinConcern>,
    #[serde(default)]
    pub budget: Option<BudgetRange>,
    /// Preferred product category (e.g. "serum"); soft preference only
    #[serde(rename = "texturePreference", default)]
    pub texture_preference: Option<String>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
}

/// Candidate product, supplied by the catalog collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Raw comma/semicolon-delimited ingredient list; missing text
    /// tokenizes to the empty list
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_escalate() {
        assert_eq!(Severity::Low.escalate(), Severity::Medium);
        assert_eq!(Severity::Medium.escalate(), Severity::High);
        assert_eq!(Severity::High.escalate(), Severity::High);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_concern_from_str() {
        assert_eq!("Acne".parse::<SkinConcern>().unwrap(), SkinConcern::Acne);
        assert_eq!(" dryness ".parse::<SkinConcern>().unwrap(), SkinConcern::Dryness);
        assert!("shininess".parse::<SkinConcern>().is_err());
    }

    #[test]
    fn test_budget_contains() {
        let budget = BudgetRange { min: 10.0, max: 40.0 };
        assert!(budget.contains(10.0));
        assert!(budget.contains(40.0));
        assert!(!budget.contains(40.01));
    }

    #[test]
    fn test_product_defaults() {
        let product: Product = serde_json::from_str(r#"{"name": "Bare Serum"}"#).unwrap();
        assert_eq!(product.ingredients, "");
        assert!(product.price.is_none());
    }

    #[test]
    fn test_profile_wire_names() {
        let profile: UserSkinProfile = serde_json::from_str(
            r#"{"skinType": "sensitive", "experienceLevel": "beginner", "concerns": ["acne"]}"#,
        )
        .unwrap();
        assert_eq!(profile.skin_type, SkinType::Sensitive);
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert!(profile.allergies.is_empty());
    }
}
