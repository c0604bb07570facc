//! Immutable structure and lattice models.
//!
//! These types form the read-only input boundary of the analysis pipeline:
//! a [`Structure`] owns a [`Lattice`] and a list of [`Site`]s and exposes
//! species labels plus fractional and Cartesian coordinates. Periodic images
//! are never stored here; they are generated on demand by the neighbor
//! enumerator.

mod lattice;
mod site;
mod structure;

pub use lattice::Lattice;
pub use site::Site;
pub use structure::Structure;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("lattice basis vectors are linearly dependent")]
    SingularLattice,
    #[error("got {species} species labels for {coords} coordinates")]
    LengthMismatch { species: usize, coords: usize },
}
