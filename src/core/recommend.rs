use std::cmp::Ordering;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::config::EngineParams;
use crate::core::allergens::analyze_allergens;
use crate::core::concerns::match_concerns;
use crate::core::conflicts::find_conflicts;
use crate::core::parser::parse_ingredients;
use crate::models::{
    ConcernMatch, Product, Recommendation, RecommendationResult, Severity, UserSkinProfile,
};
use crate::reference::ReferenceDataStore;

/// Personalized recommendation pipeline over a candidate product set.
///
/// Composes the three analyzers: concern fit sets the base score, allergen
/// risk removes or discounts, conflicts against the user's routine are
/// surfaced but never filtered on (severity context is the user's call).
///
/// # Pipeline stages
/// 1. Concern match scoring per candidate
/// 2. Allergen risk gate (user-specific hit removes, high severity halves)
/// 3. Conflict annotation against the existing routine
/// 4. Global sort by adjusted score, truncate to the limit
#[derive(Debug, Clone)]
pub struct Recommender {
    store: Arc<ReferenceDataStore>,
    params: EngineParams,
}

impl Recommender {
    pub fn new(store: Arc<ReferenceDataStore>, params: EngineParams) -> Self {
        Self { store, params }
    }

    pub fn with_default_params(store: Arc<ReferenceDataStore>) -> Self {
        Self::new(store, EngineParams::default())
    }

    pub fn store(&self) -> &ReferenceDataStore {
        &self.store
    }

    /// Rank candidates for a profile against an existing routine.
    ///
    /// `routine_ingredients` is the combined ingredient text of products
    /// already in the user's routine; pass an empty string for none.
    /// `limit` falls back to the configured default when `None`.
    ///
    /// Per-candidate scoring is independent, so large batches fan out
    /// across the rayon worker pool; results are joined and sorted after
    /// all candidates complete, which keeps output identical to the
    /// sequential path.
    pub fn recommend(
        &self,
        profile: &UserSkinProfile,
        candidates: Vec<Product>,
        routine_ingredients: &str,
        limit: Option<usize>,
    ) -> RecommendationResult {
        let total_candidates = candidates.len();
        let limit = limit.unwrap_or(self.params.recommend.default_limit);
        let routine = parse_ingredients(routine_ingredients);

        let mut recommendations: Vec<Recommendation> =
            if candidates.len() >= self.params.recommend.parallel_threshold {
                candidates
                    .par_iter()
                    .filter_map(|product| self.score_candidate(product, profile, &routine))
                    .collect()
            } else {
                candidates
                    .iter()
                    .filter_map(|product| self.score_candidate(product, profile, &routine))
                    .collect()
            };

        // Stable: candidates tied on adjusted score keep input order
        recommendations.sort_by(|a, b| {
            b.adjusted_score
                .partial_cmp(&a.adjusted_score)
                .unwrap_or(Ordering::Equal)
        });
        recommendations.truncate(limit);

        debug!(
            total_candidates,
            returned = recommendations.len(),
            "recommendation ranking complete"
        );

        RecommendationResult {
            recommendations,
            total_candidates,
        }
    }

    fn score_candidate(
        &self,
        product: &Product,
        profile: &UserSkinProfile,
        routine: &[String],
    ) -> Option<Recommendation> {
        // Concern fit across the profile's concerns; no surviving match
        // means nothing to rank
        let concern_matches: Vec<ConcernMatch> = match_concerns(
            std::slice::from_ref(product),
            &profile.concerns,
            Some(profile),
            &self.store,
            &self.params.matching,
        )
        .into_iter()
        .flat_map(|set| set.matches)
        .collect();
        if concern_matches.is_empty() {
            return None;
        }
        let match_score = concern_matches
            .iter()
            .map(|m| m.match_score)
            .fold(0.0, f64::max);

        // Allergen gate: a user-specific hit removes the candidate
        // outright, any other high-severity hit halves it
        let analysis = analyze_allergens(
            &product.ingredients,
            profile,
            &self.store,
            &self.params.allergen,
        );
        if analysis.alerts.iter().any(|a| a.is_user_specific()) {
            return None;
        }
        let mut adjusted_score = match_score;
        if analysis.alerts.iter().any(|a| a.severity == Severity::High) {
            adjusted_score *= self.params.recommend.high_risk_penalty;
        }

        let tokens = parse_ingredients(&product.ingredients);
        let conflict_warnings = find_conflicts(&tokens, routine, &self.store);

        Some(Recommendation {
            product_name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price,
            match_score,
            adjusted_score,
            concern_matches,
            conflict_warnings,
            allergen_alerts: analysis.alerts,
        })
    }
}
