//! Engine error type.

/// Errors surfaced by the engine.
///
/// Spawning onto a full board is deliberately absent: it is a silent no-op,
/// not a failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A textual direction that is not one of up/down/left/right.
    #[error("invalid direction {0:?}: expected up, down, left or right")]
    InvalidDirection(String),

    /// Boards must have at least one row.
    #[error("invalid board size {0}: must be at least 1")]
    InvalidSize(usize),

    /// A row in supplied grid data has the wrong length.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell value that is neither 0 nor a power of two >= 2.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Spawn probability outside `[0, 1]`.
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDirection("north".to_string());
        assert_eq!(
            err.to_string(),
            "invalid direction \"north\": expected up, down, left or right"
        );

        let err = EngineError::InvalidTile { row: 1, col: 2, value: 3 };
        assert_eq!(err.to_string(), "cell (1, 2) holds 3, which is not a tile value");

        let err = EngineError::NotSquare { row: 0, expected: 4, found: 3 };
        assert_eq!(err.to_string(), "row 0 has 3 cells, expected 4");
    }
}
