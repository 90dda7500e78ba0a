use schema::{effectiveness_of, PokemonType};

/// Calculate the damage multiplier of one attacking type against a
/// defending type combination (one or two types).
///
/// Each defending type contributes independently: double if it is weak to
/// the attacker, half if it resists, and zero if it is immune. Immunity is
/// absorbing, so the result is 0.0 no matter which defending type grants
/// it or what the other type contributes. For the standard chart the
/// result is one of 0, 0.25, 0.5, 1, 2, or 4.
pub fn calculate_effectiveness(attacking: PokemonType, defending: &[PokemonType]) -> f64 {
    let mut multiplier = 1.0;
    let mut immune = false;

    for def_type in defending {
        let entry = effectiveness_of(*def_type);
        if entry.weak_to.contains(&attacking) {
            multiplier *= 2.0;
        }
        if entry.resistant_to.contains(&attacking) {
            multiplier *= 0.5;
        }
        if entry.immune_to.contains(&attacking) {
            immune = true;
        }
    }

    if immune {
        0.0
    } else {
        multiplier
    }
}
