//! Sense HAT column-drop game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `sense_stetris::{core,device,engine,input,term,types}`
//! and builds the `sense-stetris` binary.

pub use sense_stetris_core as core;
pub use sense_stetris_device as device;
pub use sense_stetris_engine as engine;
pub use sense_stetris_input as input;
pub use sense_stetris_term as term;
pub use sense_stetris_types as types;
