//! Built-in concern definitions: primary and specialty actives, associated
//! product categories, brand allowlists, and benefit copy per active.

use std::collections::HashMap;

use crate::models::{ConcernDefinition, SkinConcern};

#[allow(clippy::too_many_arguments)]
fn def(
    concern: SkinConcern,
    primary: &[&str],
    specialty: &[&str],
    categories: &[&str],
    brands: &[&str],
    benefits: &[(&str, &str)],
    baseline_effectiveness: f64,
    time_to_results: &str,
) -> ConcernDefinition {
    ConcernDefinition {
        concern,
        primary_ingredients: primary.iter().map(|s| s.to_string()).collect(),
        specialty_ingredients: specialty.iter().map(|s| s.to_string()).collect(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        reputable_brands: brands.iter().map(|s| s.to_string()).collect(),
        benefits: benefits
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        baseline_effectiveness,
        time_to_results: time_to_results.to_string(),
    }
}

pub(super) fn definitions() -> Vec<ConcernDefinition> {
    vec![
        def(
            SkinConcern::Acne,
            &[
                "salicylic acid",
                "benzoyl peroxide",
                "niacinamide",
                "azelaic acid",
                "retinol",
                "zinc pca",
            ],
            &[
                "centella asiatica",
                "tea tree",
                "snail secretion filtrate",
                "propolis",
                "mugwort",
            ],
            &["cleanser", "toner", "serum", "spot treatment"],
            &["cosrx", "paula's choice", "the ordinary", "la roche-posay"],
            &[
                ("salicylic acid", "clears pores and reduces breakouts"),
                ("benzoyl peroxide", "kills acne-causing bacteria"),
                ("niacinamide", "regulates sebum and calms redness"),
                ("azelaic acid", "fades post-blemish marks"),
                ("retinol", "speeds cell turnover to keep pores clear"),
                ("zinc pca", "keeps oil production in check"),
                ("centella asiatica", "soothes inflamed blemishes"),
                ("tea tree", "calms active breakouts"),
                ("snail secretion filtrate", "supports healing of blemish damage"),
                ("propolis", "soothes while discouraging bacteria"),
                ("mugwort", "settles reactive, breakout-prone skin"),
            ],
            0.8,
            "4-8 weeks",
        ),
        def(
            SkinConcern::Dryness,
            &[
                "hyaluronic acid",
                "glycerin",
                "ceramide",
                "squalane",
                "panthenol",
                "urea",
            ],
            &["snail secretion filtrate", "beta-glucan", "birch sap", "honey extract"],
            &["moisturizer", "cream", "essence", "serum", "mask"],
            &["cerave", "illiyoon", "la roche-posay", "round lab"],
            &[
                ("hyaluronic acid", "draws water into the skin for lasting hydration"),
                ("glycerin", "binds moisture to the skin surface"),
                ("ceramide", "rebuilds the lipid barrier that locks moisture in"),
                ("squalane", "replenishes skin's own moisturizing lipids"),
                ("panthenol", "soothes and strengthens a dry, tight barrier"),
                ("urea", "softens rough, flaky patches"),
                ("beta-glucan", "deeply hydrates and calms"),
                ("birch sap", "lightweight hydration with soothing minerals"),
                ("honey extract", "humectant nourishment for parched skin"),
            ],
            0.85,
            "1-2 weeks",
        ),
        def(
            SkinConcern::Aging,
            &["retinol", "peptide", "vitamin c", "bakuchiol", "collagen"],
            &["ginseng", "galactomyces", "adenosine", "fermented"],
            &["serum", "cream", "eye cream", "essence"],
            &["sulwhasoo", "the ordinary", "missha", "beauty of joseon"],
            &[
                ("retinol", "smooths fine lines by accelerating renewal"),
                ("peptide", "signals skin to rebuild firmness"),
                ("vitamin c", "brightens and defends against collagen breakdown"),
                ("bakuchiol", "a gentler retinol-like smoothing effect"),
                ("collagen", "surface plumping and suppleness"),
                ("ginseng", "revitalizes tired, thinning skin"),
                ("galactomyces", "ferment filtrate that refines texture and glow"),
                ("adenosine", "softens the look of expression lines"),
            ],
            0.75,
            "8-12 weeks",
        ),
        def(
            SkinConcern::Hyperpigmentation,
            &[
                "vitamin c",
                "niacinamide",
                "alpha arbutin",
                "kojic acid",
                "tranexamic acid",
                "azelaic acid",
            ],
            &["licorice root", "rice extract", "galactomyces"],
            &["serum", "essence", "toner", "mask"],
            &["beauty of joseon", "the ordinary", "goodal", "skin1004"],
            &[
                ("vitamin c", "fades dark spots and evens tone"),
                ("niacinamide", "blocks pigment transfer to the surface"),
                ("alpha arbutin", "targets stubborn spots at the source"),
                ("kojic acid", "lightens existing discoloration"),
                ("tranexamic acid", "calms the triggers of melasma-type pigment"),
                ("azelaic acid", "fades marks while keeping skin clear"),
                ("licorice root", "gentle botanical brightening"),
                ("rice extract", "gradual tone-evening and glow"),
                ("galactomyces", "refines tone with fermented nutrients"),
            ],
            0.7,
            "6-10 weeks",
        ),
        def(
            SkinConcern::Redness,
            &[
                "centella asiatica",
                "panthenol",
                "allantoin",
                "madecassoside",
                "azelaic acid",
            ],
            &["mugwort", "houttuynia cordata", "green tea", "heartleaf"],
            &["toner", "serum", "cream", "mask"],
            &["skin1004", "anua", "purito", "dr.jart+"],
            &[
                ("centella asiatica", "calms visible redness and irritation"),
                ("panthenol", "soothes while repairing the barrier"),
                ("allantoin", "comforts reactive, itchy skin"),
                ("madecassoside", "concentrated centella calming"),
                ("azelaic acid", "reduces rosacea-type flushing"),
                ("mugwort", "settles heat and sensitivity"),
                ("houttuynia cordata", "cools and clarifies irritated skin"),
                ("green tea", "antioxidant calming for stressed skin"),
                ("heartleaf", "soothes easily-triggered redness"),
            ],
            0.75,
            "2-4 weeks",
        ),
        def(
            SkinConcern::Oiliness,
            &["niacinamide", "salicylic acid", "zinc pca", "kaolin", "witch hazel"],
            &["green tea", "willow bark", "volcanic ash"],
            &["cleanser", "toner", "mask", "serum"],
            &["innisfree", "cosrx", "the ordinary", "some by mi"],
            &[
                ("niacinamide", "visibly reduces excess shine over time"),
                ("salicylic acid", "dissolves the oil that clogs pores"),
                ("zinc pca", "normalizes sebum output"),
                ("kaolin", "absorbs surface oil without stripping"),
                ("witch hazel", "tightens the look of oily pores"),
                ("green tea", "tempers oil with antioxidant tannins"),
                ("willow bark", "a gentle natural source of bha"),
                ("volcanic ash", "deep-cleans oily congestion"),
            ],
            0.7,
            "2-4 weeks",
        ),
        def(
            SkinConcern::Dullness,
            &["vitamin c", "glycolic acid", "lactic acid", "niacinamide"],
            &["rice extract", "pearl extract", "yuzu", "fermented"],
            &["exfoliator", "serum", "toner", "essence", "mask"],
            &["beauty of joseon", "the ordinary", "goodal", "i'm from"],
            &[
                ("vitamin c", "restores radiance and glow"),
                ("glycolic acid", "lifts away the dull surface layer"),
                ("lactic acid", "gently resurfaces for brighter skin"),
                ("niacinamide", "evens tone for an overall luminous look"),
                ("rice extract", "the classic glow ferment base"),
                ("pearl extract", "soft-focus luminosity"),
                ("yuzu", "vitamin-rich citrus brightening"),
                ("fermented", "nutrient-dense ferments that revive glow"),
            ],
            0.7,
            "2-4 weeks",
        ),
    ]
}
