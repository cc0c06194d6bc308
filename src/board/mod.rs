//! The board: rooms, passages and the distance oracle.
//!
//! - `RoomGraph`: weighted, directed passages between rooms
//! - `DistanceTable`: all-pairs shortest distances, computed once

pub mod distance;
pub mod graph;

pub use distance::{Distance, DistanceTable};
pub use graph::RoomGraph;
