//! Echo roll generation.
//!
//! A roll draws `stats_count` distinct substats from the table without
//! replacement, then picks one candidate value for each.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, index};

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::stat::{RollRecord, RolledStat, StatDefinition};

/// Roll one Echo.
///
/// Returns `min(stats_count, substats.len())` stats, each from a different
/// table entry. `is_max` is set when the picked value equals the largest
/// candidate of its entry.
pub fn generate_roll(config: &Config, rng: &mut StdRng) -> CoreResult<RollRecord> {
    let table = &config.substats;
    let picks = index::sample(rng, table.len(), config.stats_per_roll());

    let stats = picks
        .into_iter()
        .map(|i| roll_stat(&table[i], rng))
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(RollRecord::new(stats))
}

/// Roll `count` Echoes. Fails without partial output if any roll fails.
pub fn generate_rolls(
    config: &Config,
    count: u32,
    rng: &mut StdRng,
) -> CoreResult<Vec<RollRecord>> {
    (0..count).map(|_| generate_roll(config, rng)).collect()
}

fn roll_stat(def: &StatDefinition, rng: &mut StdRng) -> CoreResult<RolledStat> {
    let (Some(&value), Some(max)) = (def.values.choose(rng), def.max_value()) else {
        return Err(CoreError::InvalidConfig(format!(
            "substat '{}' has no values",
            def.name
        )));
    };

    Ok(RolledStat {
        name: def.name.clone(),
        icon: def.icon.clone(),
        value,
        is_percent: def.is_percent,
        is_max: value == max,
    })
}

/// Chance that a uniformly rolled value of `def` is its maximum.
pub fn max_chance(def: &StatDefinition) -> f64 {
    let Some(max) = def.max_value() else {
        return 0.0;
    };
    let hits = def.values.iter().filter(|&&v| v == max).count();
    hits as f64 / def.values.len() as f64
}

/// Returns true with the given probability.
pub fn chance(rng: &mut StdRng, probability: f64) -> bool {
    probability > 0.0 && rng.random::<f64>() < probability
}
