//! Reasons a move can be turned down.

use serde::{Deserialize, Serialize};

/// Why a requested move was not applied.
///
/// A rejection leaves the game untouched. Front ends are free to
/// ignore it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// Someone has already won.
    #[display("Game is already over")]
    GameDecided,
}

impl std::error::Error for MoveRejection {}
