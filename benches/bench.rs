// Criterion benchmarks for the Skinwise engine

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skinwise_engine::{
    analyze_allergens, parse_ingredients, AllergenParams, BudgetRange, EngineParams,
    ExperienceLevel, Product, Recommender, ReferenceDataStore, SkinConcern, SkinType,
    UserSkinProfile,
};

const INGREDIENT_TEXT: &str = "Water, Niacinamide, Salicylic Acid, Centella Asiatica, \
    Glycerin, Fragrance, Snail Secretion Filtrate, Panthenol, Sodium Hyaluronate, \
    Butylene Glycol, Ceramide NP, Adenosine";

fn create_profile() -> UserSkinProfile {
    UserSkinProfile {
        skin_type: SkinType::Combination,
        allergies: vec!["lanolin".to_string(), "fragrance".to_string()],
        concerns: vec![SkinConcern::Acne, SkinConcern::Hyperpigmentation],
        budget: Some(BudgetRange { min: 5.0, max: 80.0 }),
        texture_preference: Some("serum".to_string()),
        experience_level: ExperienceLevel::Intermediate,
    }
}

fn create_candidate(id: usize) -> Product {
    let ingredients = match id % 4 {
        0 => "Water, Salicylic Acid, Niacinamide, Centella Asiatica",
        1 => "Water, Vitamin C, Alpha Arbutin, Rice Extract, Niacinamide",
        2 => "Water, Hyaluronic Acid, Ceramide, Glycerin, Panthenol",
        _ => "Water, Retinol, Squalane, Adenosine, Fragrance",
    };
    Product {
        name: format!("Product {id}"),
        brand: if id % 3 == 0 { "cosrx" } else { "other" }.to_string(),
        category: if id % 2 == 0 { "serum" } else { "cream" }.to_string(),
        ingredients: ingredients.to_string(),
        price: Some(10.0 + (id % 50) as f64),
    }
}

fn bench_parse_ingredients(c: &mut Criterion) {
    c.bench_function("parse_ingredients", |b| {
        b.iter(|| parse_ingredients(black_box(INGREDIENT_TEXT)));
    });
}

fn bench_analyze_allergens(c: &mut Criterion) {
    let store = ReferenceDataStore::builtin().unwrap();
    let profile = create_profile();
    let params = AllergenParams::default();

    c.bench_function("analyze_allergens", |b| {
        b.iter(|| {
            analyze_allergens(
                black_box(INGREDIENT_TEXT),
                black_box(&profile),
                &store,
                &params,
            )
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::new(
        Arc::new(ReferenceDataStore::builtin().unwrap()),
        EngineParams::default(),
    );
    let profile = create_profile();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Product> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&profile),
                        black_box(candidates.clone()),
                        black_box("Retinol, Vitamin C, Squalane"),
                        black_box(None),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_ingredients,
    bench_analyze_allergens,
    bench_recommend
);

criterion_main!(benches);
