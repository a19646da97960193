//! Station graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** adjacency.  Given a
//! `StationId s`, its neighbours occupy the slice:
//!
//! ```text
//! adj_to[ adj_start[s] .. adj_start[s+1] ]
//! ```
//!
//! Every undirected connection is stored as two directed entries.  Entries
//! are grouped by source with a **stable** sort, so a station's neighbours
//! appear in connection declaration order.  Route enumeration walks
//! neighbours in this order, which makes discovery order (and therefore
//! every tie-break downstream) reproducible from the map file alone.
//!
//! # Name index
//!
//! Station names are resolved to ids through an `FxHashMap`; names are only
//! looked up at the boundary (CLI arguments, map loading), never on hot
//! paths.

use rustc_hash::FxHashMap;

use rp_core::{GridPoint, StationId};

use crate::{NetworkError, NetworkResult};

// ── Station view ──────────────────────────────────────────────────────────────

/// Borrowed view of one station record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Station<'a> {
    pub id:   StationId,
    pub name: &'a str,
    pub pos:  GridPoint,
}

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// Undirected station graph in CSR format plus a name index.
///
/// Do not construct directly; use [`RailNetworkBuilder`].  Read-only once
/// built.
#[derive(Debug, Clone)]
pub struct RailNetwork {
    // ── Station data (indexed by StationId) ───────────────────────────────
    names: Vec<String>,
    positions: Vec<GridPoint>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Row pointer.  Length = `station_count + 1`.
    adj_start: Vec<u32>,
    /// Neighbour of each directed entry, grouped by source.
    adj_to: Vec<StationId>,

    name_index: FxHashMap<String, StationId>,
}

impl RailNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Station lookup ────────────────────────────────────────────────────

    pub fn station(&self, id: StationId) -> Station<'_> {
        Station {
            id,
            name: &self.names[id.index()],
            pos:  self.positions[id.index()],
        }
    }

    #[inline]
    pub fn name(&self, id: StationId) -> &str {
        &self.names[id.index()]
    }

    #[inline]
    pub fn pos(&self, id: StationId) -> GridPoint {
        self.positions[id.index()]
    }

    /// Resolve a station name.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.name_index.get(name).copied()
    }

    /// Resolve a station name, failing with [`NetworkError::StationNotFound`].
    pub fn require(&self, name: &str) -> NetworkResult<StationId> {
        self.lookup(name)
            .ok_or_else(|| NetworkError::StationNotFound(name.to_owned()))
    }

    pub fn stations(&self) -> impl Iterator<Item = Station<'_>> + '_ {
        StationId::range(self.station_count()).map(|id| self.station(id))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `station` in connection declaration order.
    #[inline]
    pub fn neighbors(&self, station: StationId) -> &[StationId] {
        let start = self.adj_start[station.index()] as usize;
        let end   = self.adj_start[station.index() + 1] as usize;
        &self.adj_to[start..end]
    }

    pub fn is_adjacent(&self, a: StationId, b: StationId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── RailNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RailNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder performs no validation: duplicate names, duplicate positions
/// and duplicate connections must be rejected beforehand (see `rp-map`).
///
/// # Example
///
/// ```
/// use rp_core::GridPoint;
/// use rp_network::RailNetworkBuilder;
///
/// let mut b = RailNetworkBuilder::new();
/// let a = b.add_station("a", GridPoint::new(0, 0));
/// let c = b.add_station("c", GridPoint::new(1, 0));
/// b.add_connection(a, c);
/// let net = b.build();
/// assert_eq!(net.station_count(), 2);
/// assert_eq!(net.connection_count(), 1);
/// assert!(net.is_adjacent(c, a));
/// ```
#[derive(Default)]
pub struct RailNetworkBuilder {
    names:     Vec<String>,
    positions: Vec<GridPoint>,
    raw_edges: Vec<(StationId, StationId)>,
}

impl RailNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of stations and connections.
    pub fn with_capacity(stations: usize, connections: usize) -> Self {
        Self {
            names:     Vec::with_capacity(stations),
            positions: Vec::with_capacity(stations),
            raw_edges: Vec::with_capacity(connections * 2),
        }
    }

    /// Add a station and return its `StationId` (sequential from 0).
    pub fn add_station(&mut self, name: impl Into<String>, pos: GridPoint) -> StationId {
        let id = StationId(self.names.len() as u32);
        self.names.push(name.into());
        self.positions.push(pos);
        id
    }

    /// Add an undirected connection between `a` and `b`.
    pub fn add_connection(&mut self, a: StationId, b: StationId) {
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
    }

    pub fn station_count(&self) -> usize { self.names.len() }
    pub fn connection_count(&self) -> usize { self.raw_edges.len() / 2 }

    /// Consume the builder and produce a [`RailNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort.
    pub fn build(self) -> RailNetwork {
        let station_count = self.names.len();

        // Stable: keeps declaration order within each source's row.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|&(from, _)| from.0);

        let adj_to: Vec<StationId> = raw.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; station_count + 1];
        for &(from, _) in &raw {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=station_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[station_count] as usize, adj_to.len());

        let name_index = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), StationId(i as u32)))
            .collect();

        RailNetwork {
            names: self.names,
            positions: self.positions,
            adj_start,
            adj_to,
            name_index,
        }
    }
}
