//! HTTP API for the task-board RL environment.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/tasks` - List tasks (optional `status`/`priority` filters)
//! - `POST /api/tasks` - Create a task
//! - `GET /api/tasks/{id}` - Get a task
//! - `PUT /api/tasks/{id}` - Partially update a task
//! - `DELETE /api/tasks/{id}` - Delete a task
//! - `GET /api/rl/state` - Environment observation
//! - `GET /api/rl/goals` - Goal catalog
//! - `POST /api/rl/validate/{goal}` - Evaluate one goal, accumulate reward
//! - `POST /api/rl/reset` - Start a new episode

mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
