//! # Taskboard RL
//!
//! A task-board CRUD server instrumented as a reinforcement-learning
//! environment. Agents manipulate task records over REST and are scored by a
//! fixed catalog of 24 programmatic goal checkers.
//!
//! ## Flow
//! 1. The agent mutates tasks via the CRUD endpoints (each mutation is
//!    recorded as an episode action)
//! 2. `GET /api/rl/state` returns a compact observation of the board
//! 3. `POST /api/rl/validate/{goal}` evaluates one goal against a fresh
//!    snapshot and folds the reward into the episode total
//! 4. `POST /api/rl/reset` reseeds the board and starts a new episode
//!
//! ## Modules
//! - `task`: the task record data model
//! - `store`: task storage (in-memory) and the seed dataset
//! - `env`: goal catalog, validator, episode state, observation
//! - `api`: axum routes and wire types
//! - `config`: environment-variable configuration

pub mod api;
pub mod config;
pub mod env;
pub mod store;
pub mod task;

pub use config::Config;
