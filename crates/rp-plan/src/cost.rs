//! Pipeline cost model.
//!
//! A route of `L` hops delivers its first train on turn `L` and one more on
//! every turn after that, so by turn `T` it has delivered
//! `max(0, T - L + 1)` trains.  A combination needs the smallest `T` at
//! which its routes have delivered all `N` trains together.

use crate::Combination;

/// Trains delivered by `turn` across routes of the given lengths.
pub fn delivered_by(lengths: &[usize], turn: u64) -> u64 {
    lengths
        .iter()
        .map(|&len| (turn + 1).saturating_sub(len as u64))
        .sum()
}

/// Smallest turn by which `trains` trains have arrived.
///
/// `None` if `lengths` is empty.  Zero trains need zero turns.
pub fn turns_required(lengths: &[usize], trains: u32) -> Option<u64> {
    if trains == 0 {
        return Some(0);
    }
    let mut turn = *lengths.iter().min()? as u64;
    while delivered_by(lengths, turn) < u64::from(trains) {
        turn += 1;
    }
    Some(turn)
}

/// The chosen combination and its cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position in the slice given to [`select_optimal`].
    pub index: usize,
    pub lengths: Vec<usize>,
    pub turns: u64,
}

/// Pick the combination that moves `trains` trains in the fewest turns.
///
/// The first combination wins ties.  `None` only if `combinations` is empty
/// or every combination is.
pub fn select_optimal(combinations: &[Combination], trains: u32) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for (index, combo) in combinations.iter().enumerate() {
        let Some(turns) = turns_required(&combo.lengths, trains) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| turns < b.turns) {
            best = Some(Selection { index, lengths: combo.lengths.clone(), turns });
        }
    }
    best
}
