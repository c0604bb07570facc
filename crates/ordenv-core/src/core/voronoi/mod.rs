//! Per-site Voronoi analysis.
//!
//! The cell of a site is built by clipping a bounding cube against the
//! perpendicular bisector planes of its neighbor candidates ([`cell`]). On
//! top of that sit three consumers: facet-weighted coordination numbers
//! ([`coordination`]), face-vertex-count cell signatures ([`indices`]), and
//! facet-area connectivity records ([`connectivity`]).

pub(crate) mod cell;
mod connectivity;
mod coordination;
mod indices;

pub use connectivity::{SiteConnection, VoronoiConnectivity};
pub use coordination::{
    FacetWeight, VoronoiCoordinationFinder, VoronoiFacet, VoronoiPolyhedron,
};
pub use indices::{VoronoiIndexAnalyzer, VoronoiIndexSignature};

use super::geometry::GeometryError;
use super::neighbors::NeighborError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoronoiError {
    #[error(
        "found {found} neighbor candidates within {cutoff} Å, need at least {required} for a Voronoi cell"
    )]
    InsufficientNeighbors {
        found: usize,
        required: usize,
        cutoff: f64,
    },
    #[error("the Voronoi cell is not closed by the candidates within {cutoff} Å")]
    UnboundedCell { cutoff: f64 },
    #[error(transparent)]
    Neighbors(#[from] NeighborError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
