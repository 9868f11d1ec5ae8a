//! In-memory adapters for tests and embedding.

mod clock;
mod navigator;
mod task_source;

pub use clock::FixedClock;
pub use navigator::RecordingNavigator;
pub use task_source::InMemoryTaskSource;
