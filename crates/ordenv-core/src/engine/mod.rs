//! # Engine Module
//!
//! The configured analysis layer: the order-parameter engine, its motif
//! catalog, and the builder that assembles both into an immutable scoring
//! pipeline.
//!
//! Engines are cheap to construct, hold no mutable state, and borrow nothing
//! from the structures they analyze, so a single engine can be shared across
//! threads and applied to any number of sites or trajectory frames.

pub mod order;

pub use order::{
    MotifCatalog, MotifKind, MotifParams, OrderParameterEngine, OrderParameterEngineBuilder,
    OrderParameterError, OrderParameterSpec,
};
