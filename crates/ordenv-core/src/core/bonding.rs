//! Coordination from tabulated bonding radii.
//!
//! A cheap, Voronoi-free coordination estimator: two atoms count as bonded
//! when their distance does not exceed the sum of their bonding radii plus a
//! tolerance. Useful as a sanity cross-check against the facet-weighted
//! coordination numbers, and for species whose radii the caller wants to
//! override.

use super::config::Tolerances;
use super::models::Structure;
use super::neighbors::{neighbors_within, NeighborCandidate, NeighborError};
use phf::phf_map;
use std::collections::HashMap;
use tracing::debug;

/// Single-bond covalent radii (Å), Cordero et al., Dalton Trans. 2008.
static BONDING_RADII: phf::Map<&'static str, f64> = phf_map! {
    "H" => 0.31, "He" => 0.28,
    "Li" => 1.28, "Be" => 0.96, "B" => 0.84, "C" => 0.76, "N" => 0.71,
    "O" => 0.66, "F" => 0.57, "Ne" => 0.58,
    "Na" => 1.66, "Mg" => 1.41, "Al" => 1.21, "Si" => 1.11, "P" => 1.07,
    "S" => 1.05, "Cl" => 1.02, "Ar" => 1.06,
    "K" => 2.03, "Ca" => 1.76, "Sc" => 1.70, "Ti" => 1.60, "V" => 1.53,
    "Cr" => 1.39, "Mn" => 1.39, "Fe" => 1.32, "Co" => 1.26, "Ni" => 1.24,
    "Cu" => 1.32, "Zn" => 1.22, "Ga" => 1.22, "Ge" => 1.20, "As" => 1.19,
    "Se" => 1.20, "Br" => 1.20, "Kr" => 1.16,
    "Rb" => 2.20, "Sr" => 1.95, "Y" => 1.90, "Zr" => 1.75, "Nb" => 1.64,
    "Mo" => 1.54, "Ru" => 1.46, "Rh" => 1.42, "Pd" => 1.39, "Ag" => 1.45,
    "Cd" => 1.44, "In" => 1.42, "Sn" => 1.39, "Sb" => 1.39, "Te" => 1.38,
    "I" => 1.39, "Xe" => 1.40,
    "Cs" => 2.44, "Ba" => 2.15, "La" => 2.07, "W" => 1.62, "Pt" => 1.36,
    "Au" => 1.36, "Hg" => 1.32, "Tl" => 1.45, "Pb" => 1.46, "Bi" => 1.48,
};

/// Coordination finder based on bonding-radius sums.
#[derive(Debug, Clone)]
pub struct BondRadiusCoordFinder {
    overrides: HashMap<String, f64>,
    tolerance: f64,
    tolerances: Tolerances,
}

impl Default for BondRadiusCoordFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondRadiusCoordFinder {
    /// Extra slack (Å) added on top of the radius sum.
    pub const DEFAULT_BOND_TOLERANCE: f64 = 0.45;

    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            tolerance: Self::DEFAULT_BOND_TOLERANCE,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the tabulated radius for one species.
    pub fn with_radius(mut self, species: &str, radius: f64) -> Self {
        self.overrides.insert(species.to_string(), radius);
        self
    }

    pub fn with_bond_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The effective bonding radius of a species, if known.
    pub fn radius(&self, species: &str) -> Option<f64> {
        self.overrides
            .get(species)
            .copied()
            .or_else(|| BONDING_RADII.get(species).copied())
    }

    /// The neighbors of `site_index` within bonding distance, nearest first.
    ///
    /// Species without a tabulated or overridden radius never bond and are
    /// skipped.
    pub fn get_coordinated_sites(
        &self,
        structure: &Structure,
        site_index: usize,
    ) -> Result<Vec<NeighborCandidate>, NeighborError> {
        let species = structure
            .site(site_index)
            .ok_or(NeighborError::SiteOutOfRange {
                index: site_index,
                len: structure.len(),
            })?
            .species()
            .to_string();
        let Some(own_radius) = self.radius(&species) else {
            debug!(%species, "no bonding radius; site bonds to nothing");
            return Ok(Vec::new());
        };
        let max_radius = structure
            .sites()
            .iter()
            .filter_map(|s| self.radius(s.species()))
            .fold(0.0, f64::max);
        let cutoff = own_radius + max_radius + self.tolerance;
        let candidates = neighbors_within(structure, site_index, cutoff, &self.tolerances)?;
        Ok(candidates
            .into_iter()
            .filter(|c| {
                self.radius(&c.species)
                    .is_some_and(|r| c.distance <= own_radius + r + self.tolerance)
            })
            .collect())
    }

    pub fn get_coordination_number(
        &self,
        structure: &Structure,
        site_index: usize,
    ) -> Result<usize, NeighborError> {
        Ok(self.get_coordinated_sites(structure, site_index)?.len())
    }
}
