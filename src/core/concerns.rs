use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::config::MatchParams;
use crate::core::parser::parse_ingredients;
use crate::models::{
    ConcernDefinition, ConcernMatch, ConcernMatches, ExperienceLevel, Product, SkinConcern,
    UserSkinProfile,
};
use crate::reference::ReferenceDataStore;

/// Category pairs treated as equivalent when checking a texture
/// preference (e.g. a serum lover is happy with an essence).
const COMPATIBLE_CATEGORIES: &[(&str, &str)] = &[
    ("serum", "essence"),
    ("serum", "ampoule"),
    ("essence", "ampoule"),
    ("moisturizer", "cream"),
    ("cream", "lotion"),
    ("lotion", "emulsion"),
];

/// Actives a beginner routine should ramp into slowly: retinoids and the
/// alpha/beta-hydroxy acids.
const COMPLEX_ACTIVES: &[&str] = &[
    "retinol",
    "retinal",
    "tretinoin",
    "adapalene",
    "glycolic acid",
    "lactic acid",
    "mandelic acid",
    "malic acid",
    "tartaric acid",
    "salicylic acid",
    "betaine salicylate",
];

struct Scored<'a> {
    matched: ConcernMatch,
    product: &'a Product,
    tokens: Vec<String>,
}

/// Rank candidate products against each requested concern.
///
/// Scores are additive per matched active with category, brand, and
/// synergy bonuses, clamped to [0, 1]; anything under the noise floor is
/// not a match. Sorting is descending by score and stable, so ties keep
/// the candidate input order. A supplied profile post-filters the
/// ranking (hard budget exclusion, soft texture and beginner penalties)
/// but never removes a match for any other reason.
pub fn match_concerns(
    products: &[Product],
    concerns: &[SkinConcern],
    profile: Option<&UserSkinProfile>,
    store: &ReferenceDataStore,
    params: &MatchParams,
) -> Vec<ConcernMatches> {
    concerns
        .iter()
        .map(|&concern| {
            let Some(def) = store.concern(concern) else {
                // Unknown-to-the-table concern is a programmer error in
                // development and a quiet no-match in production
                debug_assert!(false, "no reference definition for concern {concern}");
                return ConcernMatches {
                    concern,
                    matches: Vec::new(),
                };
            };

            let mut scored: Vec<Scored<'_>> = products
                .iter()
                .filter_map(|product| score_product(product, def, params))
                .collect();
            sort_by_score(&mut scored);

            if let Some(profile) = profile {
                apply_profile_filters(&mut scored, profile, params);
                sort_by_score(&mut scored);
            }
            scored.truncate(params.max_per_concern);

            debug!(
                concern = %concern,
                candidates = products.len(),
                matches = scored.len(),
                "concern matching complete"
            );

            ConcernMatches {
                concern,
                matches: scored.into_iter().map(|s| s.matched).collect(),
            }
        })
        .collect()
}

/// Score one product against one concern definition. `None` when nothing
/// matched or the score stays under the noise floor.
fn score_product<'a>(
    product: &'a Product,
    def: &ConcernDefinition,
    params: &MatchParams,
) -> Option<Scored<'a>> {
    let tokens = parse_ingredients(&product.ingredients);
    if tokens.is_empty() {
        return None;
    }

    let mut matched = Vec::new();
    let mut score = 0.0;
    for active in &def.primary_ingredients {
        if tokens.iter().any(|token| token.contains(active.as_str())) {
            score += params.primary_weight;
            matched.push(active.clone());
        }
    }
    for active in &def.specialty_ingredients {
        if tokens.iter().any(|token| token.contains(active.as_str())) {
            score += params.specialty_weight;
            matched.push(active.clone());
        }
    }
    if matched.is_empty() {
        return None;
    }

    let category = product.category.trim().to_lowercase();
    if def.categories.iter().any(|c| *c == category) {
        score += params.category_bonus;
    }
    let brand = product.brand.trim().to_lowercase();
    if def.reputable_brands.iter().any(|b| *b == brand) {
        score += params.brand_bonus;
    }
    if matched.len() > params.synergy_threshold {
        score += params.synergy_step * (matched.len() - params.synergy_threshold) as f64;
    }

    let score = score.clamp(0.0, 1.0);
    if score < params.noise_floor {
        return None;
    }

    let expected_benefits = collect_benefits(&matched, def);
    Some(Scored {
        matched: ConcernMatch {
            concern: def.concern,
            product_name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            match_score: score,
            matched_ingredients: matched,
            expected_benefits,
            time_to_results: def.time_to_results.clone(),
        },
        product,
        tokens,
    })
}

/// Budget violations exclude; texture and beginner mismatches only
/// penalize.
fn apply_profile_filters(scored: &mut Vec<Scored<'_>>, profile: &UserSkinProfile, params: &MatchParams) {
    scored.retain(|s| within_budget(s.product, profile));
    for s in scored.iter_mut() {
        if texture_mismatch(s.product, profile) {
            s.matched.match_score *= params.texture_penalty;
        }
        if profile.experience_level == ExperienceLevel::Beginner && contains_complex_active(&s.tokens)
        {
            s.matched.match_score *= params.beginner_penalty;
        }
    }
}

fn sort_by_score(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| {
        b.matched
            .match_score
            .partial_cmp(&a.matched.match_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// An unknown price or an undeclared budget never excludes.
fn within_budget(product: &Product, profile: &UserSkinProfile) -> bool {
    match (profile.budget, product.price) {
        (Some(budget), Some(price)) => budget.contains(price),
        _ => true,
    }
}

fn texture_mismatch(product: &Product, profile: &UserSkinProfile) -> bool {
    let Some(preference) = &profile.texture_preference else {
        return false;
    };
    let preference = preference.trim().to_lowercase();
    let category = product.category.trim().to_lowercase();
    if preference.is_empty() || category.is_empty() {
        return false;
    }
    !categories_compatible(&preference, &category)
}

fn categories_compatible(a: &str, b: &str) -> bool {
    a == b
        || COMPATIBLE_CATEGORIES
            .iter()
            .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

fn contains_complex_active(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|token| COMPLEX_ACTIVES.iter().any(|active| token.contains(active)))
}

fn collect_benefits(matched: &[String], def: &ConcernDefinition) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut benefits = Vec::new();
    for active in matched {
        if let Some(benefit) = def.benefits.get(active) {
            if seen.insert(benefit.as_str()) {
                benefits.push(benefit.clone());
            }
        }
    }
    benefits
}
