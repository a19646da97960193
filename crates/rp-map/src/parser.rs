//! Network-description parser.
//!
//! # Format
//!
//! Two sections, in this order.  `#` starts a comment that runs to the end
//! of the line; blank lines and surrounding whitespace are ignored.
//!
//! ```text
//! stations:
//! # name,x,y   (x, y: non-negative integers)
//! waterloo,3,1
//! victoria,6,7
//!
//! connections:
//! # name1-name2   (undirected)
//! waterloo-victoria
//! ```
//!
//! Missing sections are reported before any line-level error, so a file
//! without a `stations:` header fails with `MissingSection` rather than on
//! its first station line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;

use rp_core::{GridPoint, StationId, ValidationError};
use rp_network::{RailNetwork, RailNetworkBuilder};

use crate::{MapResult, ParseError, validate_map};

/// Hard ceiling on the number of stations in one map.
pub const MAX_STATIONS: usize = 10_000;

const STATIONS_HEADER: &str = "stations:";
const CONNECTIONS_HEADER: &str = "connections:";

// ── Parsed records ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    pub name: String,
    pub pos:  GridPoint,
    /// 1-based source line.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub from: String,
    pub to:   String,
    pub line: usize,
}

/// A parsed network description, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkMap {
    pub stations:    Vec<StationRecord>,
    pub connections: Vec<ConnectionRecord>,
}

impl NetworkMap {
    /// Build the station graph.  Station ids follow declaration order.
    ///
    /// Fails only if a connection names an undeclared station, which
    /// [`validate_map`] already rules out for maps from [`parse_map`].
    pub fn into_network(&self) -> MapResult<RailNetwork> {
        let mut b = RailNetworkBuilder::with_capacity(self.stations.len(), self.connections.len());
        let mut ids: FxHashMap<&str, StationId> = FxHashMap::default();
        for s in &self.stations {
            ids.insert(s.name.as_str(), b.add_station(s.name.clone(), s.pos));
        }

        let resolve = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| ValidationError::UnknownStation(name.to_owned()))
        };
        for c in &self.connections {
            let from = resolve(&c.from)?;
            let to = resolve(&c.to)?;
            b.add_connection(from, to);
        }
        Ok(b.build())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load, parse and validate a network description file.
pub fn load_map(path: &Path) -> MapResult<NetworkMap> {
    let file = File::open(path)?;
    let map = parse_map(BufReader::new(file))?;
    debug!(
        "loaded {}: {} stations, {} connections",
        path.display(),
        map.stations.len(),
        map.connections.len()
    );
    Ok(map)
}

/// Like [`load_map`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn parse_map<R: BufRead>(reader: R) -> MapResult<NetworkMap> {
    let map = parse_raw(reader)?;
    validate_map(&map)?;
    Ok(map)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Stations,
    Connections,
}

/// Strip the comment and surrounding whitespace.
fn clean(line: &str) -> &str {
    match line.find('#') {
        Some(i) => line[..i].trim(),
        None => line.trim(),
    }
}

/// Parse without structural validation.
pub(crate) fn parse_raw<R: BufRead>(reader: R) -> MapResult<NetworkMap> {
    // (1-based line number, cleaned content) for every non-blank line.
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let text = clean(&line);
        if !text.is_empty() {
            lines.push((i + 1, text.to_owned()));
        }
    }

    if !lines.iter().any(|(_, t)| t == STATIONS_HEADER) {
        return Err(ParseError::MissingSection(STATIONS_HEADER).into());
    }
    if !lines.iter().any(|(_, t)| t == CONNECTIONS_HEADER) {
        return Err(ParseError::MissingSection(CONNECTIONS_HEADER).into());
    }

    let mut map = NetworkMap::default();
    let mut section = Section::None;
    let mut stations_seen = false;
    let mut connections_seen = false;

    for (line, text) in lines {
        match text.as_str() {
            STATIONS_HEADER => {
                if stations_seen {
                    return Err(ParseError::DuplicateSection { line, section: STATIONS_HEADER }.into());
                }
                if connections_seen {
                    return Err(ParseError::SectionOrder { line }.into());
                }
                stations_seen = true;
                section = Section::Stations;
            }
            CONNECTIONS_HEADER => {
                if connections_seen {
                    return Err(ParseError::DuplicateSection { line, section: CONNECTIONS_HEADER }.into());
                }
                if !stations_seen {
                    return Err(ParseError::SectionOrder { line }.into());
                }
                connections_seen = true;
                section = Section::Connections;
            }
            _ => match section {
                Section::None => {
                    return Err(ParseError::OutsideSection { line, text }.into());
                }
                Section::Stations => {
                    if map.stations.len() >= MAX_STATIONS {
                        return Err(ParseError::TooManyStations { limit: MAX_STATIONS }.into());
                    }
                    map.stations.push(parse_station(line, &text)?);
                }
                Section::Connections => {
                    map.connections.push(parse_connection(line, &text)?);
                }
            },
        }
    }

    Ok(map)
}

fn parse_station(line: usize, text: &str) -> Result<StationRecord, ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [name, x, y] = parts.as_slice() else {
        return Err(ParseError::InvalidStation { line, text: text.to_owned() });
    };
    if name.is_empty() {
        return Err(ParseError::InvalidStation { line, text: text.to_owned() });
    }
    // u32 parsing rejects negative and non-numeric coordinates alike.
    let (Ok(x), Ok(y)) = (x.parse::<u32>(), y.parse::<u32>()) else {
        return Err(ParseError::InvalidCoordinates { line, text: text.to_owned() });
    };
    Ok(StationRecord {
        name: (*name).to_owned(),
        pos: GridPoint::new(x, y),
        line,
    })
}

fn parse_connection(line: usize, text: &str) -> Result<ConnectionRecord, ParseError> {
    let parts: Vec<&str> = text.split('-').map(str::trim).collect();
    match parts.as_slice() {
        [from, to] if !from.is_empty() && !to.is_empty() => Ok(ConnectionRecord {
            from: (*from).to_owned(),
            to:   (*to).to_owned(),
            line,
        }),
        _ => Err(ParseError::InvalidConnection { line, text: text.to_owned() }),
    }
}
