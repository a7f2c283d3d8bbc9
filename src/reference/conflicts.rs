//! Built-in pairwise ingredient conflict rules. One rule per unordered
//! pair; severity is reported verbatim by the conflict detector.

use crate::models::{ConflictRule, Severity};

fn rule(
    ingredient_a: &str,
    ingredient_b: &str,
    severity: Severity,
    description: &str,
    recommendation: &str,
) -> ConflictRule {
    ConflictRule {
        ingredient_a: ingredient_a.to_string(),
        ingredient_b: ingredient_b.to_string(),
        severity,
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

pub(super) fn rules() -> Vec<ConflictRule> {
    vec![
        rule(
            "retinol",
            "vitamin c",
            Severity::Medium,
            "Two potent actives competing at different pH ranges; layering them raises irritation risk",
            "Use vitamin C in the morning and retinol at night",
        ),
        rule(
            "retinol",
            "glycolic acid",
            Severity::High,
            "Retinoids layered with exfoliating acids compound barrier damage",
            "Alternate nights, and pause the acid if skin starts flaking",
        ),
        rule(
            "retinol",
            "lactic acid",
            Severity::High,
            "Retinoids layered with exfoliating acids compound barrier damage",
            "Alternate nights rather than stacking in one routine",
        ),
        rule(
            "retinol",
            "salicylic acid",
            Severity::High,
            "Retinoid plus bha in one routine over-exfoliates most skin",
            "Keep bha to the morning routine or alternate nights",
        ),
        rule(
            "retinol",
            "benzoyl peroxide",
            Severity::High,
            "Benzoyl peroxide can oxidize retinol and the combination is very drying",
            "Apply benzoyl peroxide in the morning and retinol at night",
        ),
        rule(
            "vitamin c",
            "benzoyl peroxide",
            Severity::Medium,
            "Benzoyl peroxide oxidizes vitamin C and blunts its benefit",
            "Separate them into different routines",
        ),
        rule(
            "vitamin c",
            "glycolic acid",
            Severity::Medium,
            "Stacked low-pH actives destabilize each other and sting",
            "Use on alternate mornings, or pick one and stay consistent",
        ),
        rule(
            "vitamin c",
            "niacinamide",
            Severity::Low,
            "A historic concern about niacin flush; modern formulas rarely interact",
            "Fine for most skin; separate the two if you notice flushing",
        ),
        rule(
            "vitamin c",
            "copper peptides",
            Severity::Medium,
            "Copper ions degrade ascorbic acid on contact",
            "Use copper peptides and vitamin C in different routines",
        ),
        rule(
            "glycolic acid",
            "salicylic acid",
            Severity::Medium,
            "Aha plus bha in one pass strips the moisture barrier",
            "Pick the acid your skin needs most, or alternate days",
        ),
        rule(
            "lactic acid",
            "salicylic acid",
            Severity::Medium,
            "Aha plus bha in one pass strips the moisture barrier",
            "Alternate days rather than layering",
        ),
        rule(
            "benzoyl peroxide",
            "salicylic acid",
            Severity::Low,
            "Both dry the skin; together they often cause peeling",
            "Buffer with a moisturizer, or use at opposite ends of the day",
        ),
    ]
}
