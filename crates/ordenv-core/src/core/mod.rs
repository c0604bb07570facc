//! # Core Module
//!
//! The stateless foundation of the library: structure/lattice models, geometry
//! primitives, periodic neighbor enumeration, and Voronoi-cell analysis.
//!
//! ## Overview
//!
//! The core module owns everything that is a pure function of a structure and
//! a handful of numeric tolerances:
//!
//! - **Structure Representation** ([`models`]) - Immutable lattices, sites, and structures
//! - **Geometry Primitives** ([`geometry`]) - Solid angles, polygon areas, pyramid volumes
//! - **Neighbor Enumeration** ([`neighbors`]) - Cutoff queries across periodic images
//! - **Voronoi Analysis** ([`voronoi`]) - Per-site cells, facet-weighted coordination,
//!   cell-shape signatures, and facet-area connectivity
//! - **Bond-Length Coordination** ([`bonding`]) - Coordination from tabulated bonding radii
//! - **Numeric Tolerances** ([`config`]) - The shared tolerance set used by every component
//!
//! All derived artifacts (neighbor candidates, cells, facets) are values that
//! are recomputed per call; the input `Structure` is never mutated.

pub mod bonding;
pub mod config;
pub mod geometry;
pub mod models;
pub mod neighbors;
pub mod voronoi;
