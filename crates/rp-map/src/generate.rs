//! Synthetic stress map: a long chain with spokes back to its head.
//!
//! ```text
//!   st1 ── st2 ── … ── st100 ── st101 ── … ── st200 ── … ── st10000
//!    ▲                   │        │             │               │
//!    └───────────────────┘        ▼             ▼               ▼
//!                                st2           st1        st1, st5000
//! ```
//!
//! Station `i` sits at `(i, i)` and connects to `i + 1` and to
//! `i % SPOKE + 1`.  The last station closes the loop to the first and to the
//! middle one.  Pairs already present (in either orientation) are skipped,
//! so the output always passes [`validate_map`](crate::validate_map).
//!
//! The number of simple paths between the ends grows without bound, which
//! makes this map the reference load for the enumeration ceilings.

use std::io::Write;

use rustc_hash::FxHashSet;

use crate::{MAX_STATIONS, MapResult, ParseError};

/// Stations `1..=SPOKE` receive the spokes.
pub const SPOKE: usize = 100;

/// Station name used by the generator, 1-based.
pub fn station_name(i: usize) -> String {
    format!("st{i}")
}

/// Write a stress map with `stations` stations to `out`.
///
/// Fails with [`ParseError::TooManyStations`] above [`MAX_STATIONS`], since
/// the result could not be loaded back.
pub fn write_stress_map<W: Write>(mut out: W, stations: usize) -> MapResult<()> {
    if stations > MAX_STATIONS {
        return Err(ParseError::TooManyStations { limit: MAX_STATIONS }.into());
    }

    writeln!(out, "stations:")?;
    for i in 1..=stations {
        writeln!(out, "{},{i},{i}", station_name(i))?;
    }

    writeln!(out)?;
    writeln!(out, "connections:")?;
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut connect = |out: &mut W, a: usize, b: usize| -> MapResult<()> {
        if a != b && seen.insert((a.min(b), a.max(b))) {
            writeln!(out, "{}-{}", station_name(a), station_name(b))?;
        }
        Ok(())
    };

    for i in 1..stations {
        connect(&mut out, i, i + 1)?;
        connect(&mut out, i, i % SPOKE + 1)?;
    }
    if stations >= 2 {
        connect(&mut out, stations, 1)?;
        connect(&mut out, stations, stations / 2)?;
    }

    out.flush()?;
    Ok(())
}

/// [`write_stress_map`] into a `String`.
pub fn stress_map_text(stations: usize) -> MapResult<String> {
    let mut buf = Vec::new();
    write_stress_map(&mut buf, stations)?;
    // Only ASCII is ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
