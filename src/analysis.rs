use crate::effectiveness::calculate_effectiveness;
use schema::{effectiveness_of, PokemonType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// Defensive score weights. Arbitrary heuristic; changing them changes
// every reported score, so treat them as part of the output contract.
const RESIST_WEIGHT: f64 = 1.0;
const IMMUNE_WEIGHT: f64 = 2.0;
const WEAK_WEIGHT: f64 = 1.5;

/// Aggregate type profile of a team, derived fresh from the members'
/// type combinations on every call to [`analyze_team`].
///
/// The count maps only hold entries with a count of at least one, and all
/// maps, sets, and lists iterate in canonical type order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTypeAnalysis {
    /// Attacking type -> number of members taking super-effective damage from it.
    pub weaknesses: BTreeMap<PokemonType, u8>,
    /// Attacking type -> number of members resisting it.
    pub resistances: BTreeMap<PokemonType, u8>,
    /// Attacking types at least one member is immune to.
    pub immunities: BTreeSet<PokemonType>,
    /// Type -> number of member own-types that threaten it super-effectively.
    pub coverage: BTreeMap<PokemonType, u8>,
    /// Net defensive health; positive is an advantage, negative a liability.
    pub defensive_score: f64,
    /// Types two or more members are weak to, in canonical order.
    pub critical_weaknesses: Vec<PokemonType>,
    /// Types with no resistance and no immunity anywhere, in canonical order.
    pub uncovered_types: Vec<PokemonType>,
}

/// Analyze a team's type matchups.
///
/// `profile` holds one type combination (one or two types) per occupied
/// team slot, up to six entries; empty slots are simply absent. The
/// computation is pure and never fails for a well-formed profile.
///
/// Offensive coverage reuses the defensive `weak_to` lists of each
/// member's own types: a member credits one coverage point per own type
/// per type that own type is weak to, so a dual-typed member can credit
/// the same type twice. Consumers rely on this exact accounting.
pub fn analyze_team(profile: &[Vec<PokemonType>]) -> TeamTypeAnalysis {
    let mut weaknesses: BTreeMap<PokemonType, u8> = BTreeMap::new();
    let mut resistances: BTreeMap<PokemonType, u8> = BTreeMap::new();
    let mut immunities: BTreeSet<PokemonType> = BTreeSet::new();
    let mut coverage: BTreeMap<PokemonType, u8> = BTreeMap::new();

    for member_types in profile {
        for attacking in PokemonType::ALL {
            let multiplier = calculate_effectiveness(attacking, member_types);

            if multiplier > 1.0 {
                *weaknesses.entry(attacking).or_insert(0) += 1;
            } else if multiplier > 0.0 && multiplier < 1.0 {
                *resistances.entry(attacking).or_insert(0) += 1;
            } else if multiplier == 0.0 {
                immunities.insert(attacking);
            }
            // Neutral matchups (exactly 1.0) are not tracked.
        }

        for own_type in member_types {
            for covered in effectiveness_of(*own_type).weak_to {
                *coverage.entry(*covered).or_insert(0) += 1;
            }
        }
    }

    let mut total_score = 0.0;
    let mut critical_weaknesses = Vec::new();
    let mut uncovered_types = Vec::new();

    for attacking in PokemonType::ALL {
        let weak_count = weaknesses.get(&attacking).copied().unwrap_or(0);
        let resist_count = resistances.get(&attacking).copied().unwrap_or(0);
        let is_immune = immunities.contains(&attacking);

        let immune_bonus = if is_immune { IMMUNE_WEIGHT } else { 0.0 };
        total_score += f64::from(resist_count) * RESIST_WEIGHT + immune_bonus
            - f64::from(weak_count) * WEAK_WEIGHT;

        if weak_count >= 2 {
            critical_weaknesses.push(attacking);
        }
        if resist_count == 0 && !is_immune {
            uncovered_types.push(attacking);
        }
    }

    TeamTypeAnalysis {
        weaknesses,
        resistances,
        immunities,
        coverage,
        defensive_score: total_score / PokemonType::COUNT as f64,
        critical_weaknesses,
        uncovered_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_profile() {
        let analysis = analyze_team(&[]);

        assert!(analysis.weaknesses.is_empty());
        assert!(analysis.resistances.is_empty());
        assert!(analysis.immunities.is_empty());
        assert!(analysis.coverage.is_empty());
        assert_eq!(analysis.defensive_score, 0.0);
        assert!(analysis.critical_weaknesses.is_empty());
        assert_eq!(analysis.uncovered_types, PokemonType::ALL.to_vec());
    }

    #[test]
    fn test_analysis_is_pure() {
        let profile = vec![
            vec![PokemonType::Fire, PokemonType::Flying],
            vec![PokemonType::Water],
            vec![PokemonType::Grass, PokemonType::Poison],
        ];
        assert_eq!(analyze_team(&profile), analyze_team(&profile));
    }

    #[test]
    fn test_ghost_member_grants_immunities() {
        let analysis = analyze_team(&[vec![PokemonType::Ghost]]);

        assert!(analysis.immunities.contains(&PokemonType::Normal));
        assert!(analysis.immunities.contains(&PokemonType::Fighting));
        // Immune matchups do not show up as weaknesses or resistances.
        assert!(!analysis.weaknesses.contains_key(&PokemonType::Normal));
        assert!(!analysis.resistances.contains_key(&PokemonType::Fighting));
    }

    #[test]
    fn test_shared_weakness_becomes_critical() {
        let profile = vec![vec![PokemonType::Water], vec![PokemonType::Water]];
        let analysis = analyze_team(&profile);

        assert_eq!(analysis.weaknesses.get(&PokemonType::Electric), Some(&2));
        assert_eq!(analysis.weaknesses.get(&PokemonType::Grass), Some(&2));
        assert_eq!(
            analysis.critical_weaknesses,
            vec![PokemonType::Electric, PokemonType::Grass]
        );
    }

    #[test]
    fn test_quadruple_weakness_counts_once_per_member() {
        // Fire/Flying takes 4x from Rock, still one weak member.
        let analysis = analyze_team(&[vec![PokemonType::Fire, PokemonType::Flying]]);

        assert_eq!(analysis.weaknesses.get(&PokemonType::Rock), Some(&1));
        assert!(!analysis
            .critical_weaknesses
            .contains(&PokemonType::Rock));
        // Nothing on this team resists or ignores Rock.
        assert!(analysis.uncovered_types.contains(&PokemonType::Rock));
    }

    #[test]
    fn test_coverage_counts_per_own_type() {
        // Six mono-Normal members each credit Fighting once.
        let profile = vec![vec![PokemonType::Normal]; 6];
        let analysis = analyze_team(&profile);
        assert_eq!(analysis.coverage.get(&PokemonType::Fighting), Some(&6));

        // A dual-typed member credits a shared threat twice: both Grass
        // and Ice are weak to Fire.
        let analysis = analyze_team(&[vec![PokemonType::Grass, PokemonType::Ice]]);
        assert_eq!(analysis.coverage.get(&PokemonType::Fire), Some(&2));
    }

    #[test]
    fn test_defensive_score_weights() {
        // Mono-Water: 4 resistances, 2 weaknesses, no immunities.
        let analysis = analyze_team(&[vec![PokemonType::Water]]);
        let expected = (4.0 * 1.0 - 2.0 * 1.5) / 18.0;
        assert!((analysis.defensive_score - expected).abs() < 1e-12);

        // Mono-Ghost: 2 resistances, 2 weaknesses, 2 immunities.
        let analysis = analyze_team(&[vec![PokemonType::Ghost]]);
        let expected = (2.0 * 1.0 + 2.0 * 2.0 - 2.0 * 1.5) / 18.0;
        assert!((analysis.defensive_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uncovered_types_exclude_resisted_and_immune() {
        let analysis = analyze_team(&[vec![PokemonType::Ghost]]);

        // Ghost resists Poison and Bug and ignores Normal and Fighting.
        for covered in [
            PokemonType::Normal,
            PokemonType::Fighting,
            PokemonType::Poison,
            PokemonType::Bug,
        ] {
            assert!(!analysis.uncovered_types.contains(&covered));
        }
        assert!(analysis.uncovered_types.contains(&PokemonType::Ghost));
        assert!(analysis.uncovered_types.contains(&PokemonType::Dark));
    }

    #[test]
    fn test_listings_follow_canonical_order() {
        // Grass and Electric weaknesses shared by two Water members must
        // come out in declaration order, not discovery order.
        let profile = vec![
            vec![PokemonType::Water, PokemonType::Flying],
            vec![PokemonType::Water],
        ];
        let analysis = analyze_team(&profile);

        let mut sorted = analysis.critical_weaknesses.clone();
        sorted.sort();
        assert_eq!(analysis.critical_weaknesses, sorted);

        let mut sorted = analysis.uncovered_types.clone();
        sorted.sort();
        assert_eq!(analysis.uncovered_types, sorted);
    }

    #[test]
    fn test_analysis_serializes_with_api_type_names() {
        let analysis = analyze_team(&[vec![PokemonType::Water]]);
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["weaknesses"]["electric"], 1);
        assert_eq!(json["resistances"]["fire"], 1);
        assert!(json["defensive_score"].is_number());
    }
}
