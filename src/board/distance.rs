//! All-pairs shortest distances between rooms.
//!
//! Computed once from a `RoomGraph` by running Dijkstra from every room,
//! then read-only for the rest of the game.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use super::graph::RoomGraph;
use crate::cards::Room;

/// Minimum step cost between two rooms.
///
/// `Distance::INFINITE` stands in for an unreachable pair so lookups never
/// fail; it compares greater than every finite distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITE: Distance = Distance(u32::MAX);

    #[must_use]
    pub const fn new(steps: u32) -> Self {
        Self(steps)
    }

    /// Step count, or `None` when unreachable.
    #[must_use]
    pub fn steps(self) -> Option<u32> {
        self.is_finite().then_some(self.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self != Self::INFINITE
    }

    /// Check if a dice roll covers this distance.
    #[must_use]
    pub fn within(self, roll: u8) -> bool {
        self.is_finite() && self.0 <= u32::from(roll)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.steps() {
            Some(steps) => write!(f, "{steps}"),
            None => write!(f, "inf"),
        }
    }
}

/// Distance oracle over every pair of rooms.
///
/// Rooms absent from the graph are unreachable from everywhere else but
/// still have distance zero to themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    table: [[Distance; Room::COUNT]; Room::COUNT],
}

impl DistanceTable {
    /// Run single-source shortest paths from every room in the graph.
    #[must_use]
    pub fn compute(graph: &RoomGraph) -> Self {
        let mut table = [[Distance::INFINITE; Room::COUNT]; Room::COUNT];
        for room in Room::iter() {
            table[room.index()][room.index()] = Distance::ZERO;
        }
        for source in graph.rooms() {
            table[source.index()] = shortest_from(graph, source);
        }

        let oracle = Self { table };
        if !oracle.is_fully_connected(graph) {
            tracing::warn!("room graph is not fully connected; some moves are impossible");
        }
        oracle
    }

    /// Minimum cost from `from` to `to`.
    #[must_use]
    pub fn get(&self, from: Room, to: Room) -> Distance {
        self.table[from.index()][to.index()]
    }

    /// Every room other than `from` within `roll` steps, in card order.
    #[must_use]
    pub fn reachable(&self, from: Room, roll: u8) -> Vec<Room> {
        Room::iter()
            .filter(|to| *to != from && self.get(from, *to).within(roll))
            .collect()
    }

    /// Check that every board room reaches every other board room.
    #[must_use]
    pub fn is_fully_connected(&self, graph: &RoomGraph) -> bool {
        let rooms = graph.rooms();
        rooms
            .iter()
            .all(|a| rooms.iter().all(|b| self.get(*a, *b).is_finite()))
    }
}

/// Dijkstra from a single source.
fn shortest_from(graph: &RoomGraph, source: Room) -> [Distance; Room::COUNT] {
    let mut dist = [u32::MAX; Room::COUNT];
    dist[source.index()] = 0;

    let mut heap: BinaryHeap<Reverse<(u32, Room)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, room))) = heap.pop() {
        if cost != dist[room.index()] {
            continue;
        }
        for &(neighbor, step) in graph.neighbors(room) {
            let next = cost.saturating_add(step);
            if next < dist[neighbor.index()] {
                dist[neighbor.index()] = next;
                heap.push(Reverse((next, neighbor)));
            }
        }
    }

    dist.map(Distance)
}
