//! RL environment core: goal catalog, validator, episode state, observation.
//!
//! Everything here is a pure computation over a task snapshot plus a small
//! injectable episode-state record. The HTTP layer fetches a fresh snapshot
//! from the store for every call; nothing in this module caches tasks or
//! touches the store.

pub mod episode;
pub mod goal;
pub mod observation;
pub mod validate;

pub use episode::{ActionRecord, EpisodeState};
pub use goal::{Difficulty, EnvError, Goal, GoalSummary};
pub use observation::{summarize, Observation};
pub use validate::{evaluate, Verdict};
