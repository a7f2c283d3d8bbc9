use serde::Deserialize;

/// Tunable constants for the allergen risk analyzer.
///
/// The defaults reproduce the shipped scoring behavior exactly. They are
/// heuristics, not empirically fitted values; treat them as calibration
/// knobs rather than fixed truths.
#[derive(Debug, Clone, Deserialize)]
pub struct AllergenParams {
    /// Base weight multiplied by severity and scaled prevalence.
    #[serde(default = "default_base_weight")]
    pub base_weight: f64,
    /// Added per matched ingredient beyond the first.
    #[serde(default = "default_occurrence_step")]
    pub occurrence_step: f64,
    /// Fixed risk score for a user-declared allergen hit.
    #[serde(default = "default_declared_score")]
    pub declared_score: f64,
    /// Score added to every reference alert for sensitive skin.
    #[serde(default = "default_sensitive_bonus")]
    pub sensitive_bonus: f64,
    /// Score added to every reference alert for beginners.
    #[serde(default = "default_beginner_bonus")]
    pub beginner_bonus: f64,
    /// Weight of the score sum in the overall formula `max + w * sum`.
    #[serde(default = "default_sum_weight")]
    pub sum_weight: f64,
    /// Overall score at or above which the risk level is `high`.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,
    /// Overall score at or above which the risk level is `medium`.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,
}

impl Default for AllergenParams {
    fn default() -> Self {
        Self {
            base_weight: default_base_weight(),
            occurrence_step: default_occurrence_step(),
            declared_score: default_declared_score(),
            sensitive_bonus: default_sensitive_bonus(),
            beginner_bonus: default_beginner_bonus(),
            sum_weight: default_sum_weight(),
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

fn default_base_weight() -> f64 { 30.0 }
fn default_occurrence_step() -> f64 { 10.0 }
fn default_declared_score() -> f64 { 95.0 }
fn default_sensitive_bonus() -> f64 { 20.0 }
fn default_beginner_bonus() -> f64 { 10.0 }
fn default_sum_weight() -> f64 { 0.1 }
fn default_high_threshold() -> f64 { 70.0 }
fn default_medium_threshold() -> f64 { 40.0 }

/// Tunable constants for the concern match analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchParams {
    /// Added per matched primary active.
    #[serde(default = "default_primary_weight")]
    pub primary_weight: f64,
    /// Added per matched specialty active.
    #[serde(default = "default_specialty_weight")]
    pub specialty_weight: f64,
    /// Added when the product category is associated with the concern.
    #[serde(default = "default_category_bonus")]
    pub category_bonus: f64,
    /// Added when the brand is on the concern's allowlist.
    #[serde(default = "default_brand_bonus")]
    pub brand_bonus: f64,
    /// Added per matched active beyond `synergy_threshold`.
    #[serde(default = "default_synergy_step")]
    pub synergy_step: f64,
    /// Matched-active count above which the synergy bonus accrues.
    #[serde(default = "default_synergy_threshold")]
    pub synergy_threshold: usize,
    /// Scores below this are noise, not matches.
    #[serde(default = "default_noise_floor")]
    pub noise_floor: f64,
    /// Multiplier for a texture/category preference mismatch.
    #[serde(default = "default_texture_penalty")]
    pub texture_penalty: f64,
    /// Multiplier when a beginner profile meets a complex active.
    #[serde(default = "default_beginner_penalty")]
    pub beginner_penalty: f64,
    /// Maximum matches returned per concern.
    #[serde(default = "default_max_per_concern")]
    pub max_per_concern: usize,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            primary_weight: default_primary_weight(),
            specialty_weight: default_specialty_weight(),
            category_bonus: default_category_bonus(),
            brand_bonus: default_brand_bonus(),
            synergy_step: default_synergy_step(),
            synergy_threshold: default_synergy_threshold(),
            noise_floor: default_noise_floor(),
            texture_penalty: default_texture_penalty(),
            beginner_penalty: default_beginner_penalty(),
            max_per_concern: default_max_per_concern(),
        }
    }
}

fn default_primary_weight() -> f64 { 0.25 }
fn default_specialty_weight() -> f64 { 0.15 }
fn default_category_bonus() -> f64 { 0.10 }
fn default_brand_bonus() -> f64 { 0.05 }
fn default_synergy_step() -> f64 { 0.05 }
fn default_synergy_threshold() -> usize { 2 }
fn default_noise_floor() -> f64 { 0.3 }
fn default_texture_penalty() -> f64 { 0.8 }
fn default_beginner_penalty() -> f64 { 0.7 }
fn default_max_per_concern() -> usize { 6 }

/// Tunable constants for the recommendation aggregator.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    /// Multiplier applied when a non-user-specific high-severity allergen
    /// alert fires on a candidate.
    #[serde(default = "default_high_risk_penalty")]
    pub high_risk_penalty: f64,
    /// Result cap when the caller does not supply one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Candidate count at which batch scoring fans out across the worker
    /// pool instead of running sequentially.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            high_risk_penalty: default_high_risk_penalty(),
            default_limit: default_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_high_risk_penalty() -> f64 { 0.5 }
fn default_limit() -> usize { 8 }
fn default_parallel_threshold() -> usize { 64 }

/// All engine tunables in one injectable value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineParams {
    #[serde(default)]
    pub allergen: AllergenParams,
    #[serde(default)]
    pub matching: MatchParams,
    #[serde(default)]
    pub recommend: RecommendParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allergen_params() {
        let params = AllergenParams::default();
        assert_eq!(params.base_weight, 30.0);
        assert_eq!(params.declared_score, 95.0);
        assert_eq!(params.sensitive_bonus, 20.0);
        assert_eq!(params.beginner_bonus, 10.0);
        assert_eq!(params.sum_weight, 0.1);
    }

    #[test]
    fn test_default_match_params() {
        let params = MatchParams::default();
        assert_eq!(params.primary_weight, 0.25);
        assert_eq!(params.specialty_weight, 0.15);
        assert_eq!(params.category_bonus, 0.10);
        assert_eq!(params.noise_floor, 0.3);
        assert_eq!(params.max_per_concern, 6);
    }

    #[test]
    fn test_params_deserialize_with_overrides() {
        let params: EngineParams =
            serde_json::from_str(r#"{"matching": {"noise_floor": 0.5}}"#).unwrap();
        assert_eq!(params.matching.noise_floor, 0.5);
        // Everything else falls back to the defaults
        assert_eq!(params.matching.primary_weight, 0.25);
        assert_eq!(params.allergen.declared_score, 95.0);
        assert_eq!(params.recommend.default_limit, 8);
    }
}
