// Score tiers: units grouped by identical score.

use hashbrown::HashMap;
use wordscore_core::CharUnit;

/// All units sharing one score, ordered by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier<'a> {
    pub score: i32,
    pub units: Vec<&'a CharUnit>,
}

impl Tier<'_> {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Group the eligible units (score > 0) into tiers, highest score first.
///
/// Units within a tier are sorted by index, whatever order the input slice
/// is in.
pub fn group_tiers(units: &[CharUnit]) -> Vec<Tier<'_>> {
    let mut by_score: HashMap<i32, Vec<&CharUnit>> = HashMap::new();
    for unit in units.iter().filter(|u| u.is_eligible()) {
        by_score.entry(unit.score).or_default().push(unit);
    }

    let mut tiers: Vec<Tier<'_>> = by_score
        .into_iter()
        .map(|(score, mut units)| {
            units.sort_by_key(|u| u.index);
            Tier { score, units }
        })
        .collect();
    tiers.sort_unstable_by(|a, b| b.score.cmp(&a.score));
    tiers
}
