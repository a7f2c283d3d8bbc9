//! Immutable reference tables: allergen definitions, cross-reaction edges,
//! concern definitions, and the pairwise conflict rule table.
//!
//! A [`ReferenceDataStore`] is constructed once at process start (from the
//! built-in tables or a JSON document), validated, and then only ever read.
//! Hot reload means building a new store and swapping the `Arc` callers
//! hold; an existing store is never mutated in place.

mod allergens;
mod concerns;
mod conflicts;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ReferenceDataError;
use crate::models::{AllergenDefinition, ConcernDefinition, ConflictRule, SkinConcern};

/// Raw reference tables, prior to validation and indexing.
///
/// This is the serde document shape accepted by
/// [`ReferenceDataStore::from_json`]; tests also use it to build minimal
/// fixture stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub allergens: Vec<AllergenDefinition>,
    /// Allergen id -> ids that commonly co-react. Stored directed.
    #[serde(rename = "crossReactions", default)]
    pub cross_reactions: HashMap<String, Vec<String>>,
    pub concerns: Vec<ConcernDefinition>,
    pub conflicts: Vec<ConflictRule>,
}

/// Validated, indexed reference tables. Safe for unbounded concurrent
/// reads; construction is the only fallible step.
#[derive(Debug, Clone)]
pub struct ReferenceDataStore {
    allergens: Vec<AllergenDefinition>,
    cross_reactions: HashMap<String, Vec<String>>,
    concerns: HashMap<SkinConcern, ConcernDefinition>,
    conflicts: HashMap<(String, String), ConflictRule>,
}

impl ReferenceDataStore {
    /// Validate and index a raw table set.
    ///
    /// Identifiers, aliases, active names, and conflict pair members are
    /// normalized to trimmed lower-case here so every later lookup can
    /// compare exactly.
    pub fn new(data: ReferenceData) -> Result<Self, ReferenceDataError> {
        let allergens = validate_allergens(data.allergens)?;
        let cross_reactions = validate_cross_reactions(data.cross_reactions, &allergens)?;
        let concerns = validate_concerns(data.concerns)?;
        let conflicts = validate_conflicts(data.conflicts)?;

        info!(
            allergens = allergens.len(),
            concerns = concerns.len(),
            conflict_rules = conflicts.len(),
            "reference data store initialized"
        );

        Ok(Self {
            allergens,
            cross_reactions,
            concerns,
            conflicts,
        })
    }

    /// The tables compiled into the crate.
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::new(ReferenceData {
            allergens: allergens::definitions(),
            cross_reactions: allergens::cross_reactions(),
            concerns: concerns::definitions(),
            conflicts: conflicts::rules(),
        })
    }

    /// Build a store from a JSON document, for deployments that swap
    /// tables without recompiling.
    pub fn from_json(doc: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = serde_json::from_str(doc)?;
        Self::new(data)
    }

    pub fn allergens(&self) -> &[AllergenDefinition] {
        &self.allergens
    }

    pub fn allergen(&self, id: &str) -> Option<&AllergenDefinition> {
        self.allergens.iter().find(|def| def.id == id)
    }

    /// Resolve a user-declared free-text term to a definition: exact id or
    /// alias match first, then substring containment either way.
    pub fn find_allergen_by_term(&self, term: &str) -> Option<&AllergenDefinition> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        self.allergens
            .iter()
            .find(|def| def.id == term || def.aliases.iter().any(|a| *a == term))
            .or_else(|| {
                self.allergens.iter().find(|def| {
                    def.aliases
                        .iter()
                        .any(|a| a.contains(&term) || term.contains(a.as_str()))
                })
            })
    }

    /// Ids that commonly co-react with the given allergen. Empty for
    /// unknown ids.
    pub fn cross_reactions(&self, id: &str) -> &[String] {
        self.cross_reactions.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn concern(&self, concern: SkinConcern) -> Option<&ConcernDefinition> {
        self.concerns.get(&concern)
    }

    /// Pair-order-independent conflict rule lookup:
    /// `conflict(x, y) == conflict(y, x)`.
    pub fn conflict(&self, a: &str, b: &str) -> Option<&ConflictRule> {
        self.conflicts.get(&pair_key(a, b))
    }
}

/// Canonical unordered-pair key: lexicographically smaller member first.
fn pair_key(a: &str, b: &str) -> (String, String) {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn validate_allergens(
    raw: Vec<AllergenDefinition>,
) -> Result<Vec<AllergenDefinition>, ReferenceDataError> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut alias_owner: HashMap<String, String> = HashMap::new();
    let mut allergens = Vec::with_capacity(raw.len());

    for mut def in raw {
        def.id = def.id.trim().to_lowercase();
        if !(0.0..=1.0).contains(&def.prevalence) {
            return Err(ReferenceDataError::PrevalenceOutOfRange {
                id: def.id,
                value: def.prevalence,
            });
        }
        if !seen_ids.insert(def.id.clone()) {
            return Err(ReferenceDataError::DuplicateAllergenId(def.id));
        }
        for alias in &mut def.aliases {
            *alias = alias.trim().to_lowercase();
            if let Some(owner) = alias_owner.insert(alias.clone(), def.id.clone()) {
                return Err(ReferenceDataError::DuplicateAlias {
                    alias: alias.clone(),
                    first: owner,
                    second: def.id,
                });
            }
        }
        allergens.push(def);
    }
    Ok(allergens)
}

fn validate_cross_reactions(
    raw: HashMap<String, Vec<String>>,
    allergens: &[AllergenDefinition],
) -> Result<HashMap<String, Vec<String>>, ReferenceDataError> {
    let known: HashSet<&str> = allergens.iter().map(|def| def.id.as_str()).collect();
    let mut edges = HashMap::with_capacity(raw.len());

    for (source, targets) in raw {
        let source = source.trim().to_lowercase();
        if !known.contains(source.as_str()) {
            // A source that is not a definition is itself dangling
            return Err(ReferenceDataError::DanglingCrossReaction {
                target: source.clone(),
                source_id: source,
            });
        }
        let targets: Vec<String> = targets
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .collect();
        if let Some(bad) = targets.iter().find(|t| !known.contains(t.as_str())) {
            return Err(ReferenceDataError::DanglingCrossReaction {
                source_id: source,
                target: bad.clone(),
            });
        }
        edges.insert(source, targets);
    }
    Ok(edges)
}

fn validate_concerns(
    raw: Vec<ConcernDefinition>,
) -> Result<HashMap<SkinConcern, ConcernDefinition>, ReferenceDataError> {
    let mut concerns = HashMap::with_capacity(raw.len());

    for mut def in raw {
        if !(0.0..=1.0).contains(&def.baseline_effectiveness) {
            return Err(ReferenceDataError::EffectivenessOutOfRange {
                concern: def.concern,
                value: def.baseline_effectiveness,
            });
        }
        for active in def
            .primary_ingredients
            .iter_mut()
            .chain(def.specialty_ingredients.iter_mut())
        {
            *active = active.trim().to_lowercase();
        }
        for category in &mut def.categories {
            *category = category.trim().to_lowercase();
        }
        for brand in &mut def.reputable_brands {
            *brand = brand.trim().to_lowercase();
        }
        let primary: HashSet<&str> = def.primary_ingredients.iter().map(String::as_str).collect();
        if let Some(dup) = def
            .specialty_ingredients
            .iter()
            .find(|s| primary.contains(s.as_str()))
        {
            return Err(ReferenceDataError::OverlappingConcernIngredient {
                concern: def.concern,
                ingredient: dup.clone(),
            });
        }
        if concerns.contains_key(&def.concern) {
            return Err(ReferenceDataError::DuplicateConcern(def.concern));
        }
        concerns.insert(def.concern, def);
    }
    Ok(concerns)
}

fn validate_conflicts(
    raw: Vec<ConflictRule>,
) -> Result<HashMap<(String, String), ConflictRule>, ReferenceDataError> {
    let mut conflicts = HashMap::with_capacity(raw.len());

    for mut rule in raw {
        rule.ingredient_a = rule.ingredient_a.trim().to_lowercase();
        rule.ingredient_b = rule.ingredient_b.trim().to_lowercase();
        if rule.ingredient_a == rule.ingredient_b {
            return Err(ReferenceDataError::SelfConflictRule(rule.ingredient_a));
        }
        let key = pair_key(&rule.ingredient_a, &rule.ingredient_b);
        if conflicts.contains_key(&key) {
            return Err(ReferenceDataError::DuplicateConflictRule {
                a: rule.ingredient_a,
                b: rule.ingredient_b,
            });
        }
        conflicts.insert(key, rule);
    }
    Ok(conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllergenCategory, Severity};

    fn minimal_allergen(id: &str, aliases: &[&str]) -> AllergenDefinition {
        AllergenDefinition {
            id: id.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            severity: Severity::Medium,
            category: AllergenCategory::Preservative,
            description: "test allergen".to_string(),
            suggested_alternative: "something else".to_string(),
            prevalence: 0.01,
        }
    }

    fn minimal_rule(a: &str, b: &str) -> ConflictRule {
        ConflictRule {
            ingredient_a: a.to_string(),
            ingredient_b: b.to_string(),
            severity: Severity::Medium,
            description: "test conflict".to_string(),
            recommendation: "separate them".to_string(),
        }
    }

    #[test]
    fn test_builtin_store_validates() {
        let store = ReferenceDataStore::builtin().unwrap();
        assert!(!store.allergens().is_empty());
        assert!(store.concern(SkinConcern::Acne).is_some());
        assert!(store.conflict("retinol", "vitamin c").is_some());
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let data = ReferenceData {
            allergens: vec![
                minimal_allergen("one", &["paraben"]),
                minimal_allergen("two", &["paraben"]),
            ],
            ..Default::default()
        };
        assert!(matches!(
            ReferenceDataStore::new(data),
            Err(ReferenceDataError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_dangling_cross_reaction_rejected() {
        let mut cross_reactions = HashMap::new();
        cross_reactions.insert("one".to_string(), vec!["ghost".to_string()]);
        let data = ReferenceData {
            allergens: vec![minimal_allergen("one", &["alias-one"])],
            cross_reactions,
            ..Default::default()
        };
        assert!(matches!(
            ReferenceDataStore::new(data),
            Err(ReferenceDataError::DanglingCrossReaction { .. })
        ));
    }

    #[test]
    fn test_prevalence_out_of_range_rejected() {
        let mut bad = minimal_allergen("one", &["alias-one"]);
        bad.prevalence = 1.5;
        let data = ReferenceData {
            allergens: vec![bad],
            ..Default::default()
        };
        assert!(matches!(
            ReferenceDataStore::new(data),
            Err(ReferenceDataError::PrevalenceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_duplicate_conflict_rule_rejected() {
        let data = ReferenceData {
            conflicts: vec![
                minimal_rule("retinol", "vitamin c"),
                // Same unordered pair, reversed
                minimal_rule("Vitamin C", "Retinol"),
            ],
            ..Default::default()
        };
        assert!(matches!(
            ReferenceDataStore::new(data),
            Err(ReferenceDataError::DuplicateConflictRule { .. })
        ));
    }

    #[test]
    fn test_self_conflict_rejected() {
        let data = ReferenceData {
            conflicts: vec![minimal_rule("retinol", "retinol")],
            ..Default::default()
        };
        assert!(matches!(
            ReferenceDataStore::new(data),
            Err(ReferenceDataError::SelfConflictRule(_))
        ));
    }

    #[test]
    fn test_conflict_lookup_symmetric() {
        let store = ReferenceDataStore::builtin().unwrap();
        let forward = store.conflict("retinol", "vitamin c").unwrap();
        let backward = store.conflict("vitamin c", "retinol").unwrap();
        assert_eq!(forward.description, backward.description);
    }

    #[test]
    fn test_find_allergen_by_term() {
        let store = ReferenceDataStore::builtin().unwrap();
        // Exact alias
        assert_eq!(store.find_allergen_by_term("parfum").unwrap().id, "fragrances");
        // Substring of an alias
        assert_eq!(
            store.find_allergen_by_term("fragrance").unwrap().id,
            "fragrances"
        );
        assert!(store.find_allergen_by_term("water").is_none());
    }
}
