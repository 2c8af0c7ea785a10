//! In-memory employee attendance engine: clock-in/out mutations, monthly
//! aggregation, and role-scoped team visibility over a flat record list.
//! Deterministic and synchronous; the presentation layer supplies actions
//! and renders what comes back.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{EngineError, Result};
pub use store::AttendanceStore;
