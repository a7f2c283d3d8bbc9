use std::collections::HashSet;

use tracing::debug;

use crate::models::ConflictWarning;
use crate::reference::ReferenceDataStore;

/// Find rule-table conflicts between two ingredient sets.
///
/// Every unordered cross pair is looked up symmetrically; a rule fires at
/// most once however many times its pair occurs. Output is sorted by
/// severity descending; within a severity band, first-encountered order
/// is kept. Warnings carry the rule's own pair order, which makes
/// `find_conflicts(a, b)` and `find_conflicts(b, a)` identical.
pub fn find_conflicts(
    ingredients_a: &[String],
    ingredients_b: &[String],
    store: &ReferenceDataStore,
) -> Vec<ConflictWarning> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut warnings = Vec::new();

    for a in ingredients_a {
        let a = a.trim().to_lowercase();
        for b in ingredients_b {
            let b = b.trim().to_lowercase();
            // The same ingredient on both sides is not a conflict
            if a == b {
                continue;
            }
            if let Some(rule) = store.conflict(&a, &b) {
                let key = if rule.ingredient_a <= rule.ingredient_b {
                    (rule.ingredient_a.clone(), rule.ingredient_b.clone())
                } else {
                    (rule.ingredient_b.clone(), rule.ingredient_a.clone())
                };
                if seen.insert(key) {
                    warnings.push(ConflictWarning {
                        ingredient_a: rule.ingredient_a.clone(),
                        ingredient_b: rule.ingredient_b.clone(),
                        severity: rule.severity,
                        description: rule.description.clone(),
                        recommendation: rule.recommendation.clone(),
                    });
                }
            }
        }
    }

    // Stable by construction: ties keep first-encountered order
    warnings.sort_by(|x, y| y.severity.cmp(&x.severity));

    debug!(
        set_a = ingredients_a.len(),
        set_b = ingredients_b.len(),
        warnings = warnings.len(),
        "conflict detection complete"
    );

    warnings
}
