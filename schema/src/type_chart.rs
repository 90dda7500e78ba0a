use crate::pokemon_types::PokemonType;

/// Defensive matchup profile for a single type: the attacking types it
/// takes double, half, and zero damage from.
///
/// Invariant: the three lists are pairwise disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEffectiveness {
    /// Attacking types that deal double damage to this type.
    pub weak_to: &'static [PokemonType],
    /// Attacking types that deal half damage to this type.
    pub resistant_to: &'static [PokemonType],
    /// Attacking types that deal no damage to this type.
    pub immune_to: &'static [PokemonType],
}

/// Look up the defensive matchup entry for a type.
///
/// Total over the closed enum; the chart is a constant and never mutated.
pub fn effectiveness_of(defending: PokemonType) -> TypeEffectiveness {
    use PokemonType::*;

    match defending {
        Normal => TypeEffectiveness {
            weak_to: &[Fighting],
            resistant_to: &[],
            immune_to: &[Ghost],
        },
        Fire => TypeEffectiveness {
            weak_to: &[Water, Ground, Rock],
            resistant_to: &[Fire, Grass, Ice, Bug, Steel, Fairy],
            immune_to: &[],
        },
        Water => TypeEffectiveness {
            weak_to: &[Electric, Grass],
            resistant_to: &[Fire, Water, Ice, Steel],
            immune_to: &[],
        },
        Electric => TypeEffectiveness {
            weak_to: &[Ground],
            resistant_to: &[Electric, Flying, Steel],
            immune_to: &[],
        },
        Grass => TypeEffectiveness {
            weak_to: &[Fire, Ice, Poison, Flying, Bug],
            resistant_to: &[Water, Electric, Grass, Ground],
            immune_to: &[],
        },
        Ice => TypeEffectiveness {
            weak_to: &[Fire, Fighting, Rock, Steel],
            resistant_to: &[Ice],
            immune_to: &[],
        },
        Fighting => TypeEffectiveness {
            weak_to: &[Flying, Psychic, Fairy],
            resistant_to: &[Bug, Rock, Dark],
            immune_to: &[],
        },
        Poison => TypeEffectiveness {
            weak_to: &[Ground, Psychic],
            resistant_to: &[Grass, Fighting, Poison, Bug, Fairy],
            immune_to: &[],
        },
        Ground => TypeEffectiveness {
            weak_to: &[Water, Grass, Ice],
            resistant_to: &[Poison, Rock],
            immune_to: &[Electric],
        },
        Flying => TypeEffectiveness {
            weak_to: &[Electric, Ice, Rock],
            resistant_to: &[Grass, Fighting, Bug],
            immune_to: &[Ground],
        },
        Psychic => TypeEffectiveness {
            weak_to: &[Bug, Ghost, Dark],
            resistant_to: &[Fighting, Psychic],
            immune_to: &[],
        },
        Bug => TypeEffectiveness {
            weak_to: &[Fire, Flying, Rock],
            resistant_to: &[Grass, Fighting, Ground],
            immune_to: &[],
        },
        Rock => TypeEffectiveness {
            weak_to: &[Water, Grass, Fighting, Ground, Steel],
            resistant_to: &[Normal, Fire, Poison, Flying],
            immune_to: &[],
        },
        Ghost => TypeEffectiveness {
            weak_to: &[Ghost, Dark],
            resistant_to: &[Poison, Bug],
            immune_to: &[Normal, Fighting],
        },
        Dragon => TypeEffectiveness {
            weak_to: &[Ice, Dragon, Fairy],
            resistant_to: &[Fire, Water, Electric, Grass],
            immune_to: &[],
        },
        Dark => TypeEffectiveness {
            weak_to: &[Fighting, Bug, Fairy],
            resistant_to: &[Ghost, Dark],
            immune_to: &[Psychic],
        },
        Steel => TypeEffectiveness {
            weak_to: &[Fire, Fighting, Ground],
            resistant_to: &[
                Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
            ],
            immune_to: &[Poison],
        },
        Fairy => TypeEffectiveness {
            weak_to: &[Poison, Steel],
            resistant_to: &[Fighting, Bug, Dark],
            immune_to: &[Dragon],
        },
    }
}
