//! # ordenv Core Library
//!
//! A library for analyzing the local atomic environments of periodic crystal
//! structures: Voronoi-tessellation-based neighbor finding, coordination-number
//! estimation under periodic boundary conditions, and a catalog of continuous
//! order parameters that score how closely a site's neighbor geometry matches
//! canonical motifs (tetrahedral, octahedral, square-planar, bipyramidal, ...).
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Lattice`, `Structure`),
//!   pure computational geometry (solid angles, half-space-clipped Voronoi cells),
//!   periodic neighbor enumeration, and the Voronoi-based coordination and
//!   cell-signature analyzers.
//!
//! - **[`engine`]: The Analysis Core.** The configured order-parameter engine:
//!   an immutable catalog of motif descriptors built at construction, neighbor
//!   resolution (fixed cutoff, Voronoi-weighted, or caller-supplied), and the
//!   per-motif scoring dispatch.
//!
//! Every analysis call is a pure function of its inputs plus the immutable
//! engine configuration; nothing is cached across calls, so callers may freely
//! parallelize over sites or trajectory frames.

pub mod core;
pub mod engine;
