//! Structural validation of a parsed map.
//!
//! Checks run in this order and the first violation wins:
//!
//! 1. station names are unique;
//! 2. no two stations share a coordinate pair;
//! 3. per connection, in declaration order: both ends exist, the ends
//!    differ, and the unordered pair has not been declared before.

use rustc_hash::{FxHashMap, FxHashSet};

use rp_core::{GridPoint, ValidationError};

use crate::NetworkMap;

pub fn validate_map(map: &NetworkMap) -> Result<(), ValidationError> {
    let mut names: FxHashSet<&str> = FxHashSet::default();
    for s in &map.stations {
        if !names.insert(s.name.as_str()) {
            return Err(ValidationError::DuplicateStation(s.name.clone()));
        }
    }

    let mut positions: FxHashMap<GridPoint, &str> = FxHashMap::default();
    for s in &map.stations {
        if let Some(first) = positions.insert(s.pos, s.name.as_str()) {
            return Err(ValidationError::DuplicateCoordinates {
                pos:    s.pos,
                first:  first.to_owned(),
                second: s.name.clone(),
            });
        }
    }

    let mut pairs: FxHashSet<(&str, &str)> = FxHashSet::default();
    for c in &map.connections {
        for end in [&c.from, &c.to] {
            if !names.contains(end.as_str()) {
                return Err(ValidationError::UnknownStation(end.clone()));
            }
        }
        if c.from == c.to {
            return Err(ValidationError::SelfConnection(c.from.clone()));
        }
        // Normalize so a-b and b-a collide.
        let key = if c.from <= c.to {
            (c.from.as_str(), c.to.as_str())
        } else {
            (c.to.as_str(), c.from.as_str())
        };
        if !pairs.insert(key) {
            return Err(ValidationError::DuplicateConnection(c.from.clone(), c.to.clone()));
        }
    }

    Ok(())
}
