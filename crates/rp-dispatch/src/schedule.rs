//! The movement log produced by a dispatch run.

use rp_core::{StationId, TrainId, Turn};
use rp_network::RailNetwork;

/// A train's position at the end of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    pub train:   TrainId,
    pub station: StationId,
}

impl Movement {
    /// `T<k>-<station name>`.
    pub fn render(&self, network: &RailNetwork) -> String {
        format!("{}-{}", self.train, network.name(self.station))
    }
}

/// Everything that was out on the network after one turn, in ascending
/// train order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn:  Turn,
    pub moves: Vec<Movement>,
}

impl TurnRecord {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Space-separated movement tokens.
    pub fn render(&self, network: &RailNetwork) -> String {
        self.moves
            .iter()
            .map(|m| m.render(network))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All non-empty turn records of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub turns: Vec<TurnRecord>,
    /// Turn on which the last train arrived.
    pub final_turn: Turn,
}

impl Schedule {
    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// One output line per recorded turn.
    pub fn lines(&self, network: &RailNetwork) -> Vec<String> {
        self.turns.iter().map(|t| t.render(network)).collect()
    }
}
