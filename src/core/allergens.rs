use tracing::{debug, trace};

use crate::config::AllergenParams;
use crate::core::parser::parse_ingredients;
use crate::models::{
    AllergenAlert, AllergenAnalysisResult, AllergenCategory, ExperienceLevel, RiskLevel, Severity,
    SkinType, UserSkinProfile,
};
use crate::reference::ReferenceDataStore;

/// Suffix/prefix templates for the declared-allergen variant check.
/// `{}` stands for the declared term; the list is data so the matching
/// rule can be audited and tested on its own.
const VARIANT_TEMPLATES: &[&str] = &[
    "{} extract",
    "{} oil",
    "{} acid",
    "{} alcohol",
    "sodium {}",
    "potassium {}",
];

/// Shown when no other safety template fires.
const LOW_RISK_NOTE: &str =
    "No significant allergen risk found for your profile. Introduce any new product gradually.";

fn severity_multiplier(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 1.0,
        Severity::Medium => 1.5,
        Severity::High => 2.0,
    }
}

/// One named profile adjustment applied to reference-sweep alerts.
struct AdjustmentRule {
    name: &'static str,
    applies: fn(&UserSkinProfile, &AllergenAlert) -> bool,
    score_delta: f64,
    escalates: bool,
}

/// Applied top to bottom; the order is part of the scoring contract.
fn adjustment_rules(params: &AllergenParams) -> [AdjustmentRule; 3] {
    [
        AdjustmentRule {
            name: "sensitive-skin-risk",
            applies: |profile, _| profile.skin_type == SkinType::Sensitive,
            score_delta: params.sensitive_bonus,
            escalates: false,
        },
        AdjustmentRule {
            name: "beginner-risk",
            applies: |profile, _| profile.experience_level == ExperienceLevel::Beginner,
            score_delta: params.beginner_bonus,
            escalates: false,
        },
        AdjustmentRule {
            name: "sensitive-skin-escalation",
            applies: |profile, alert| {
                profile.skin_type == SkinType::Sensitive && alert.severity == Severity::Medium
            },
            score_delta: 0.0,
            escalates: true,
        },
    ]
}

/// Analyze a product's ingredient list for allergen risk against a profile.
///
/// Two independent passes: the user's declared allergens (fixed-score,
/// always `high`), then a sweep of every reference definition's aliases.
/// Pure: no side effects, no external calls; identical input always
/// produces identical output.
pub fn analyze_allergens(
    ingredient_text: &str,
    profile: &UserSkinProfile,
    store: &ReferenceDataStore,
    params: &AllergenParams,
) -> AllergenAnalysisResult {
    let tokens = parse_ingredients(ingredient_text);
    let mut alerts = Vec::new();

    // Pass 1: user-declared allergens take precedence at a fixed score,
    // regardless of what the reference table says about the same term.
    for declared in &profile.allergies {
        let term = declared.trim().to_lowercase();
        if term.is_empty() {
            continue;
        }
        let matched: Vec<String> = tokens
            .iter()
            .filter(|token| matches_declared_term(token, &term))
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }
        let cross_reactions = store
            .find_allergen_by_term(&term)
            .map(|def| store.cross_reactions(&def.id).to_vec())
            .unwrap_or_default();
        alerts.push(AllergenAlert {
            allergen: term.clone(),
            matched_ingredients: matched,
            severity: Severity::High,
            risk_score: params.declared_score,
            category: AllergenCategory::UserSpecific,
            description: format!("Contains \"{term}\", which you listed as an allergen"),
            suggested_alternative: None,
            cross_reactions,
        });
    }

    // Pass 2: reference sweep, independent of user declarations.
    let rules = adjustment_rules(params);
    for def in store.allergens() {
        let matched: Vec<String> = tokens
            .iter()
            .filter(|token| def.aliases.iter().any(|alias| token.contains(alias.as_str())))
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }
        let occurrences = matched.len() as f64;
        let base = params.base_weight
            * severity_multiplier(def.severity)
            * (def.prevalence * 100.0)
            + (occurrences - 1.0) * params.occurrence_step;

        let mut alert = AllergenAlert {
            allergen: def.id.clone(),
            matched_ingredients: matched,
            severity: def.severity,
            risk_score: base,
            category: def.category,
            description: def.description.clone(),
            suggested_alternative: Some(def.suggested_alternative.clone()),
            cross_reactions: store.cross_reactions(&def.id).to_vec(),
        };
        for rule in &rules {
            if (rule.applies)(profile, &alert) {
                alert.risk_score += rule.score_delta;
                if rule.escalates {
                    alert.severity = alert.severity.escalate();
                }
                trace!(rule = rule.name, allergen = %alert.allergen, "profile adjustment applied");
            }
        }
        alert.risk_score = alert.risk_score.clamp(0.0, 100.0);
        alerts.push(alert);
    }

    let (overall_score, overall_level) = aggregate_risk(&alerts, params);
    let patch_test_recommended = needs_patch_test(&alerts, profile);
    let recommendations = build_recommendations(&alerts, profile);

    debug!(
        tokens = tokens.len(),
        alerts = alerts.len(),
        overall_score,
        "allergen analysis complete"
    );

    AllergenAnalysisResult {
        alerts,
        overall_score,
        overall_level,
        patch_test_recommended,
        recommendations,
    }
}

/// Direct substring containment, or containment of any variant template
/// applied to the declared term.
fn matches_declared_term(token: &str, term: &str) -> bool {
    if token.contains(term) {
        return true;
    }
    VARIANT_TEMPLATES
        .iter()
        .any(|template| token.contains(&template.replace("{}", term)))
}

/// `min(100, max + w * sum)`: a single severe hit dominates, while many
/// simultaneous lower-risk hits still push the total up.
fn aggregate_risk(alerts: &[AllergenAlert], params: &AllergenParams) -> (f64, RiskLevel) {
    if alerts.is_empty() {
        return (0.0, RiskLevel::Low);
    }
    let max = alerts.iter().map(|a| a.risk_score).fold(0.0, f64::max);
    let sum: f64 = alerts.iter().map(|a| a.risk_score).sum();
    let score = (max + params.sum_weight * sum).min(100.0);
    let level = if score >= params.high_threshold {
        RiskLevel::High
    } else if score >= params.medium_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    (score, level)
}

fn needs_patch_test(alerts: &[AllergenAlert], profile: &UserSkinProfile) -> bool {
    alerts.iter().any(AllergenAlert::is_user_specific)
        || alerts.iter().any(|a| a.severity == Severity::High)
        || (profile.skin_type == SkinType::Sensitive
            && alerts.iter().any(|a| a.severity == Severity::Medium))
        || alerts.len() > 2
}

/// Fixed safety templates; the sensitive and beginner templates only fire
/// when at least one alert exists.
fn build_recommendations(alerts: &[AllergenAlert], profile: &UserSkinProfile) -> Vec<String> {
    let mut recommendations = Vec::new();
    if alerts.iter().any(AllergenAlert::is_user_specific) {
        recommendations.push(
            "This product contains ingredients you have reacted to before. Avoid it or consult a dermatologist first."
                .to_string(),
        );
    }
    if alerts
        .iter()
        .any(|a| a.severity == Severity::High && !a.is_user_specific())
    {
        recommendations.push(
            "High-risk allergens detected. Patch test on your inner forearm for 48 hours before full use."
                .to_string(),
        );
    }
    if profile.skin_type == SkinType::Sensitive && !alerts.is_empty() {
        recommendations.push(
            "With sensitive skin, introduce this product slowly and watch for redness or stinging."
                .to_string(),
        );
    }
    if profile.experience_level == ExperienceLevel::Beginner && !alerts.is_empty() {
        recommendations.push(
            "Start with a short contact time and build up use as your skin adjusts.".to_string(),
        );
    }
    if alerts.len() > 3 {
        recommendations.push(
            "Several flagged ingredients at once makes any reaction hard to trace. A simpler formula is easier to troubleshoot."
                .to_string(),
        );
    }
    if alerts
        .iter()
        .any(|a| a.category == AllergenCategory::Fragrance)
    {
        recommendations.push(
            "Fragrance is a leading cause of cosmetic reactions. A fragrance-free alternative is the safer pick."
                .to_string(),
        );
    }
    if recommendations.is_empty() {
        recommendations.push(LOW_RISK_NOTE.to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRange, ExperienceLevel};

    fn profile(skin_type: SkinType, allergies: &[&str]) -> UserSkinProfile {
        UserSkinProfile {
            skin_type,
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
            concerns: vec![],
            budget: Some(BudgetRange { min: 0.0, max: 100.0 }),
            texture_preference: None,
            experience_level: ExperienceLevel::Intermediate,
        }
    }

    fn store() -> ReferenceDataStore {
        ReferenceDataStore::builtin().unwrap()
    }

    #[test]
    fn test_declared_allergen_scores_95() {
        let result = analyze_allergens(
            "Water, Niacinamide, Fragrance",
            &profile(SkinType::Normal, &["fragrance"]),
            &store(),
            &AllergenParams::default(),
        );
        let user_alert = result
            .alerts
            .iter()
            .find(|a| a.is_user_specific())
            .expect("user-specific alert");
        assert_eq!(user_alert.risk_score, 95.0);
        assert_eq!(user_alert.severity, Severity::High);
        assert_eq!(user_alert.matched_ingredients, vec!["fragrance"]);
    }

    #[test]
    fn test_variant_templates_match() {
        // "almond" alone is not a token substring of nothing; "sweet almond oil"
        // matches via direct containment, "sodium almond" via the prefix template
        assert!(matches_declared_term("sweet almond oil", "almond"));
        assert!(matches_declared_term("sodium almondate", "almond"));
        assert!(matches_declared_term("almond extract", "almond"));
        assert!(!matches_declared_term("shea butter", "almond"));
    }

    #[test]
    fn test_spec_scenario_sensitive_fragrance() {
        let result = analyze_allergens(
            "Water, Niacinamide, Fragrance, Snail Secretion Filtrate",
            &profile(SkinType::Sensitive, &["fragrance"]),
            &store(),
            &AllergenParams::default(),
        );
        // One user-specific alert at 95 plus one reference alert for the
        // fragrances definition
        assert!(result.alerts.iter().any(|a| a.is_user_specific() && a.risk_score == 95.0));
        let reference = result
            .alerts
            .iter()
            .find(|a| a.allergen == "fragrances")
            .expect("reference fragrance alert");
        assert!(reference.severity >= Severity::Medium);
        assert_eq!(result.overall_level, RiskLevel::High);
        assert!(result.patch_test_recommended);
    }

    #[test]
    fn test_sensitive_skin_escalates_medium_to_high() {
        let calm = analyze_allergens(
            "water, lanolin",
            &profile(SkinType::Normal, &[]),
            &store(),
            &AllergenParams::default(),
        );
        let sensitive = analyze_allergens(
            "water, lanolin",
            &profile(SkinType::Sensitive, &[]),
            &store(),
            &AllergenParams::default(),
        );
        assert_eq!(calm.alerts[0].severity, Severity::Medium);
        assert_eq!(sensitive.alerts[0].severity, Severity::High);
        assert_eq!(
            sensitive.alerts[0].risk_score,
            calm.alerts[0].risk_score + 20.0
        );
    }

    #[test]
    fn test_beginner_bonus_applied() {
        let mut beginner = profile(SkinType::Normal, &[]);
        beginner.experience_level = ExperienceLevel::Beginner;
        let base = analyze_allergens("water, lanolin", &profile(SkinType::Normal, &[]), &store(), &AllergenParams::default());
        let boosted = analyze_allergens("water, lanolin", &beginner, &store(), &AllergenParams::default());
        assert_eq!(boosted.alerts[0].risk_score, base.alerts[0].risk_score + 10.0);
    }

    #[test]
    fn test_occurrence_step_and_formula() {
        // lanolin definition: medium severity, prevalence 0.006
        // one hit: 30 * 1.5 * 0.6 = 27.0; two hits add one occurrence step
        let one = analyze_allergens(
            "water, lanolin",
            &profile(SkinType::Normal, &[]),
            &store(),
            &AllergenParams::default(),
        );
        let two = analyze_allergens(
            "water, lanolin, wool wax",
            &profile(SkinType::Normal, &[]),
            &store(),
            &AllergenParams::default(),
        );
        assert!((one.alerts[0].risk_score - 27.0).abs() < 1e-9);
        assert!((two.alerts[0].risk_score - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_clamped_to_100() {
        // Sensitive + beginner stacked on a high-severity, high-prevalence
        // definition with several occurrences pushes past 100 before clamping
        let mut p = profile(SkinType::Sensitive, &[]);
        p.experience_level = ExperienceLevel::Beginner;
        let result = analyze_allergens(
            "fragrance, parfum, linalool, limonene, geraniol",
            &p,
            &store(),
            &AllergenParams::default(),
        );
        for alert in &result.alerts {
            assert!(alert.risk_score <= 100.0);
            assert!(alert.risk_score >= 0.0);
        }
    }

    #[test]
    fn test_empty_input_is_low_risk_not_error() {
        let result = analyze_allergens(
            "",
            &profile(SkinType::Sensitive, &["fragrance"]),
            &store(),
            &AllergenParams::default(),
        );
        assert!(result.alerts.is_empty());
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.overall_level, RiskLevel::Low);
        assert!(!result.patch_test_recommended);
        assert_eq!(result.recommendations, vec![LOW_RISK_NOTE.to_string()]);
    }

    #[test]
    fn test_patch_test_on_many_low_alerts() {
        // Three distinct low/medium alerts with nothing high still trip the
        // count > 2 patch-test condition
        let result = analyze_allergens(
            "propylene glycol, alcohol denat, ci 19140",
            &profile(SkinType::Normal, &[]),
            &store(),
            &AllergenParams::default(),
        );
        assert_eq!(result.alerts.len(), 3);
        assert!(result.alerts.iter().all(|a| a.severity < Severity::High));
        assert!(result.patch_test_recommended);
    }

    #[test]
    fn test_cross_reactions_carried_on_alerts() {
        let result = analyze_allergens(
            "water, fragrance",
            &profile(SkinType::Normal, &[]),
            &store(),
            &AllergenParams::default(),
        );
        let alert = result.alerts.iter().find(|a| a.allergen == "fragrances").unwrap();
        assert!(alert.cross_reactions.contains(&"balsam_of_peru".to_string()));
    }
}
