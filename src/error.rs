//! Crate-wide error and result types.

use embassy_executor::SpawnError;

/// Errors that can occur while bringing the panel up.
///
/// The simulation itself is total over fixed-size buffers and cannot fail;
/// errors only arise at startup seams such as task spawning.
#[derive(Debug, defmt::Format)]
#[non_exhaustive]
pub enum Error {
    /// Failed to spawn a background task.
    TaskSpawn(SpawnError),
}

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

impl From<SpawnError> for Error {
    fn from(spawn_error: SpawnError) -> Self {
        Self::TaskSpawn(spawn_error)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TaskSpawn(spawn_error) => {
                write!(formatter, "failed to spawn task: {spawn_error:?}")
            }
        }
    }
}

impl core::error::Error for Error {}
