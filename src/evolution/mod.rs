//! Evolution module - Crank-Nicolson time stepping and snapshot collection.

mod traits;
mod snapshot;
mod crank_nicolson;

pub use traits::StepObserver;
pub use snapshot::{Snapshot, SnapshotRecorder};
pub use crank_nicolson::{CrankNicolson, crank_nicolson_operators, gaussian_packet, probability_norm, renormalize};
