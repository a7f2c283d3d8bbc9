//! Built-in allergen definitions and cross-reaction edges.
//!
//! Prevalence figures are population sensitization fractions drawn from
//! published patch-test panel ranges; they feed the risk formula directly,
//! so keep them as fractions, never percentages.

use std::collections::HashMap;

use crate::models::{AllergenCategory, AllergenDefinition, Severity};

fn def(
    id: &str,
    aliases: &[&str],
    severity: Severity,
    category: AllergenCategory,
    description: &str,
    suggested_alternative: &str,
    prevalence: f64,
) -> AllergenDefinition {
    AllergenDefinition {
        id: id.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        severity,
        category,
        description: description.to_string(),
        suggested_alternative: suggested_alternative.to_string(),
        prevalence,
    }
}

pub(super) fn definitions() -> Vec<AllergenDefinition> {
    vec![
        def(
            "fragrances",
            &[
                "fragrance",
                "parfum",
                "perfume",
                "aroma",
                "linalool",
                "limonene",
                "citronellol",
                "geraniol",
                "eugenol",
            ],
            Severity::High,
            AllergenCategory::Fragrance,
            "Fragrance compounds are the most common cause of cosmetic contact dermatitis",
            "Fragrance-free formulations",
            0.016,
        ),
        def(
            "balsam_of_peru",
            &["balsam of peru", "myroxylon pereirae"],
            Severity::High,
            AllergenCategory::Fragrance,
            "A natural resin that cross-reacts widely with fragrance mixes and spices",
            "Products without botanical fragrance resins",
            0.014,
        ),
        def(
            "parabens",
            &[
                "paraben",
                "methylparaben",
                "ethylparaben",
                "propylparaben",
                "butylparaben",
            ],
            Severity::Medium,
            AllergenCategory::Preservative,
            "Preservative family; a less frequent sensitizer than its reputation suggests",
            "Phenoxyethanol-preserved products",
            0.008,
        ),
        def(
            "formaldehyde_releasers",
            &[
                "dmdm hydantoin",
                "quaternium-15",
                "imidazolidinyl urea",
                "diazolidinyl urea",
                "bronopol",
                "sodium hydroxymethylglycinate",
            ],
            Severity::High,
            AllergenCategory::Preservative,
            "Preservatives that release trace formaldehyde over a product's shelf life",
            "Formaldehyde-free preservative systems",
            0.013,
        ),
        def(
            "isothiazolinones",
            &[
                "methylisothiazolinone",
                "methylchloroisothiazolinone",
                "kathon",
                "benzisothiazolinone",
            ],
            Severity::High,
            AllergenCategory::Preservative,
            "Potent preservative sensitizers behind a well-documented allergy epidemic",
            "Leave-on products preserved without isothiazolinones",
            0.018,
        ),
        def(
            "sulfates",
            &[
                "sodium lauryl sulfate",
                "sodium laureth sulfate",
                "ammonium lauryl sulfate",
                "sls",
                "sles",
            ],
            Severity::Medium,
            AllergenCategory::Surfactant,
            "Harsh cleansing surfactants; more often an irritant than a true allergen",
            "Sulfate-free cleansers with glucoside surfactants",
            0.007,
        ),
        def(
            "cocamidopropyl_betaine",
            &["cocamidopropyl betaine", "capb", "coco-betaine"],
            Severity::Medium,
            AllergenCategory::Surfactant,
            "A mild-reputation surfactant whose manufacturing impurities sensitize",
            "Cleansers based on coco-glucoside",
            0.006,
        ),
        def(
            "lanolin",
            &["lanolin", "wool wax", "wool alcohol", "lanolin alcohol"],
            Severity::Medium,
            AllergenCategory::Lanolin,
            "Wool-derived emollient; a classic sensitizer on compromised skin barriers",
            "Plant-derived emollients such as shea butter",
            0.006,
        ),
        def(
            "essential_oils",
            &[
                "tea tree oil",
                "melaleuca",
                "peppermint oil",
                "eucalyptus oil",
                "ylang-ylang",
                "bergamot oil",
            ],
            Severity::Medium,
            AllergenCategory::Botanical,
            "Concentrated botanical oils; oxidation products are frequent sensitizers",
            "Formulas without added essential oils",
            0.009,
        ),
        def(
            "propylene_glycol",
            &["propylene glycol"],
            Severity::Low,
            AllergenCategory::Solvent,
            "Common humectant solvent; occasional sensitizer at high concentrations",
            "Butylene glycol or glycerin based formulas",
            0.004,
        ),
        def(
            "drying_alcohols",
            &["alcohol denat", "denatured alcohol", "sd alcohol", "isopropyl alcohol"],
            Severity::Low,
            AllergenCategory::Solvent,
            "Volatile alcohols that disrupt the lipid barrier with frequent use",
            "Alcohol-free toners and mists",
            0.003,
        ),
        def(
            "sunscreen_filters",
            &["oxybenzone", "benzophenone-3", "avobenzone", "octocrylene", "octinoxate"],
            Severity::Medium,
            AllergenCategory::SunscreenFilter,
            "Organic UV filters linked to photoallergic contact dermatitis",
            "Mineral sunscreens with zinc oxide or titanium dioxide",
            0.005,
        ),
        def(
            "synthetic_dyes",
            &["ci 19140", "tartrazine", "ci 42090", "ci 17200", "fd&c"],
            Severity::Low,
            AllergenCategory::Dye,
            "Colorants with no skincare function and a small sensitization risk",
            "Dye-free formulations",
            0.003,
        ),
    ]
}

pub(super) fn cross_reactions() -> HashMap<String, Vec<String>> {
    let edges: &[(&str, &[&str])] = &[
        ("fragrances", &["balsam_of_peru", "essential_oils"]),
        ("balsam_of_peru", &["fragrances", "essential_oils"]),
        ("essential_oils", &["fragrances", "balsam_of_peru"]),
        ("formaldehyde_releasers", &["isothiazolinones", "parabens"]),
        ("isothiazolinones", &["formaldehyde_releasers"]),
        ("parabens", &["formaldehyde_releasers"]),
        ("sulfates", &["cocamidopropyl_betaine"]),
        ("cocamidopropyl_betaine", &["sulfates"]),
        ("lanolin", &["balsam_of_peru"]),
    ];
    edges
        .iter()
        .map(|(source, targets)| {
            (
                source.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}
