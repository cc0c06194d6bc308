//! Weighted room graph.
//!
//! Each edge is a directed passage from one room to another with a positive
//! step cost. Ordinary hallways cost around six steps; secret passages cost
//! one.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::Room;

/// Static board configuration.
///
/// ```
/// use clue_engine::board::RoomGraph;
/// use clue_engine::cards::Room;
///
/// let mut graph = RoomGraph::new();
/// graph.connect_both(Room::Kitchen, Room::Study, 1);
/// assert_eq!(graph.cost(Room::Study, Room::Kitchen), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    edges: FxHashMap<Room, SmallVec<[(Room, u32); 4]>>,
}

/// Passages of the standard mansion, each usable in both directions.
const MANSION_PASSAGES: [(Room, Room, u32); 14] = [
    (Room::Kitchen, Room::Ballroom, 6),
    (Room::Kitchen, Room::DiningRoom, 6),
    (Room::Kitchen, Room::Study, 1),
    (Room::Ballroom, Room::Conservatory, 6),
    (Room::Ballroom, Room::BilliardRoom, 6),
    (Room::Conservatory, Room::Lounge, 1),
    (Room::Conservatory, Room::Library, 6),
    (Room::DiningRoom, Room::Lounge, 6),
    (Room::DiningRoom, Room::Hall, 6),
    (Room::Lounge, Room::Hall, 6),
    (Room::Hall, Room::Study, 6),
    (Room::Hall, Room::BilliardRoom, 8),
    (Room::Study, Room::Library, 6),
    (Room::Library, Room::BilliardRoom, 6),
];

impl RoomGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard nine-room mansion, with secret passages between
    /// Kitchen and Study and between Conservatory and Lounge.
    #[must_use]
    pub fn mansion() -> Self {
        let mut graph = Self::new();
        for (a, b, cost) in MANSION_PASSAGES {
            graph.connect_both(a, b, cost);
        }
        graph
    }

    /// Add or replace the directed passage `from -> to`.
    ///
    /// Panics on a zero cost or a self-loop.
    pub fn connect(&mut self, from: Room, to: Room, cost: u32) -> &mut Self {
        assert!(cost > 0, "Passage {from} -> {to} must have a positive cost");
        assert!(from != to, "Passage from {from} to itself");

        let neighbors = self.edges.entry(from).or_default();
        match neighbors.iter().position(|(room, _)| *room == to) {
            Some(i) => neighbors[i].1 = cost,
            None => neighbors.push((to, cost)),
        }
        self.edges.entry(to).or_default();
        self
    }

    /// Add the passage in both directions with the same cost.
    pub fn connect_both(&mut self, a: Room, b: Room, cost: u32) -> &mut Self {
        self.connect(a, b, cost);
        self.connect(b, a, cost)
    }

    /// Outgoing passages from `room`.
    #[must_use]
    pub fn neighbors(&self, room: Room) -> &[(Room, u32)] {
        self.edges.get(&room).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Cost of the direct passage `from -> to`, if there is one.
    #[must_use]
    pub fn cost(&self, from: Room, to: Room) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .find(|(room, _)| *room == to)
            .map(|(_, cost)| *cost)
    }

    /// Check if a room is on the board.
    #[must_use]
    pub fn contains(&self, room: Room) -> bool {
        self.edges.contains_key(&room)
    }

    /// Rooms on the board, in card order.
    #[must_use]
    pub fn rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<_> = self.edges.keys().copied().collect();
        rooms.sort();
        rooms
    }

    /// Directed passages whose reverse is missing or has a different cost,
    /// as `(from, to, cost, reverse_cost)`.
    #[must_use]
    pub fn asymmetric_edges(&self) -> Vec<(Room, Room, u32, Option<u32>)> {
        let mut found = Vec::new();
        for from in self.rooms() {
            for &(to, cost) in self.neighbors(from) {
                let reverse = self.cost(to, from);
                if reverse != Some(cost) {
                    found.push((from, to, cost, reverse));
                }
            }
        }
        found
    }
}
