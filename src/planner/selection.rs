use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Protein, Recipe};

/// Constraints for picking one recipe out of the catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionCriteria<'a> {
    /// Soft preference: a candidate must carry at least one of these
    /// (OR semantics). Dropped when nothing matches.
    pub required_tags: &'a [&'a str],

    /// Hard rule: never pick a recipe with one of these proteins.
    pub excluded_proteins: &'a [Protein],

    /// Picked from exclusively when any remaining candidate has it.
    pub preferred_protein: Option<Protein>,
}

impl SelectionCriteria<'_> {
    fn allows_protein(&self, recipe: &Recipe) -> bool {
        !self.excluded_proteins.contains(&recipe.protein)
    }
}

/// Narrow the catalog to candidates for `criteria`.
///
/// Tag matching is relaxed when it leaves nothing; protein exclusion never is.
pub fn candidates<'a>(catalog: &'a [Recipe], criteria: &SelectionCriteria) -> Vec<&'a Recipe> {
    let allowed: Vec<&Recipe> = catalog.iter().filter(|r| criteria.allows_protein(r)).collect();

    if criteria.required_tags.is_empty() {
        return allowed;
    }

    let tagged: Vec<&Recipe> = allowed
        .iter()
        .copied()
        .filter(|r| r.has_any_tag(criteria.required_tags))
        .collect();

    if tagged.is_empty() {
        debug!(
            "No recipe tagged {:?}, relaxing tag requirement",
            criteria.required_tags
        );
        allowed
    } else {
        tagged
    }
}

/// Pick one recipe uniformly at random among the candidates.
///
/// Returns `None` only when protein exclusion empties the catalog.
pub fn select_recipe<'a, R: Rng + ?Sized>(
    catalog: &'a [Recipe],
    criteria: &SelectionCriteria,
    rng: &mut R,
) -> Option<&'a Recipe> {
    let pool = candidates(catalog, criteria);

    if let Some(preferred) = criteria.preferred_protein {
        let preferred_pool: Vec<&Recipe> =
            pool.iter().copied().filter(|r| r.protein == preferred).collect();
        if let Some(choice) = preferred_pool.choose(rng) {
            return Some(*choice);
        }
    }

    pool.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn recipe(id: &str, protein: Protein, tags: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            protein,
            servings: Default::default(),
            prep_time: "10 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            instructions: vec![],
            notes: None,
        }
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            recipe("chicken-curry", Protein::Chicken, &["batch-cooking"]),
            recipe("beef-stew", Protein::Beef, &["sunday-special"]),
            recipe("fish-tacos", Protein::Fish, &["weeknight"]),
            recipe("pork-chops", Protein::Pork, &["weeknight"]),
        ]
    }

    #[test]
    fn test_candidates_exclude_proteins() {
        let catalog = sample_recipes();
        let excluded = [Protein::Chicken, Protein::Beef];
        let criteria = SelectionCriteria {
            excluded_proteins: &excluded,
            ..Default::default()
        };
        let found = candidates(&catalog, &criteria);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| !excluded.contains(&r.protein)));
    }

    #[test]
    fn test_candidates_filter_by_any_tag() {
        let catalog = sample_recipes();
        let criteria = SelectionCriteria {
            required_tags: &["batch-cooking"],
            ..Default::default()
        };
        let found = candidates(&catalog, &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "chicken-curry");

        let criteria = SelectionCriteria {
            required_tags: &["batch-cooking", "sunday-special"],
            ..Default::default()
        };
        assert_eq!(candidates(&catalog, &criteria).len(), 2);
    }

    #[test]
    fn test_tags_relaxed_but_not_proteins() {
        let catalog = sample_recipes();
        let criteria = SelectionCriteria {
            required_tags: &["batch-cooking"],
            excluded_proteins: &[Protein::Chicken],
            preferred_protein: None,
        };
        let found = candidates(&catalog, &criteria);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|r| r.protein != Protein::Chicken));
    }

    #[test]
    fn test_preferred_protein_wins_when_available() {
        let catalog = sample_recipes();
        let mut rng = StdRng::seed_from_u64(7);
        let criteria = SelectionCriteria {
            preferred_protein: Some(Protein::Fish),
            ..Default::default()
        };
        for _ in 0..20 {
            let picked = select_recipe(&catalog, &criteria, &mut rng).unwrap();
            assert_eq!(picked.id, "fish-tacos");
        }
    }

    #[test]
    fn test_preferred_protein_ignored_when_excluded() {
        let catalog = sample_recipes();
        let mut rng = StdRng::seed_from_u64(7);
        let criteria = SelectionCriteria {
            excluded_proteins: &[Protein::Fish],
            preferred_protein: Some(Protein::Fish),
            ..Default::default()
        };
        let picked = select_recipe(&catalog, &criteria, &mut rng).unwrap();
        assert_ne!(picked.protein, Protein::Fish);
    }

    #[test]
    fn test_none_when_every_protein_excluded() {
        let catalog = sample_recipes();
        let mut rng = StdRng::seed_from_u64(1);
        let criteria = SelectionCriteria {
            required_tags: &["weeknight"],
            excluded_proteins: &[Protein::Chicken, Protein::Beef, Protein::Fish, Protein::Pork],
            preferred_protein: None,
        };
        assert!(select_recipe(&catalog, &criteria, &mut rng).is_none());
        assert!(select_recipe(&[], &SelectionCriteria::default(), &mut rng).is_none());
    }
}
