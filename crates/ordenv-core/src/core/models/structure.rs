use super::{Lattice, ModelError, Site};
use nalgebra::{Point3, Vector3};

/// An immutable periodic crystal structure: a lattice plus a list of sites.
///
/// The structure owns no neighbor state; periodic images of its sites are
/// generated on demand by the neighbor enumerator. Analysis code treats a
/// `Structure` as a read-only input and indexes sites positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    lattice: Lattice,
    sites: Vec<Site>,
}

impl Structure {
    /// Builds a structure from fractional coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LengthMismatch`] if `species` and `coords`
    /// disagree in length.
    pub fn from_fractional(
        lattice: Lattice,
        species: &[&str],
        coords: &[Vector3<f64>],
    ) -> Result<Self, ModelError> {
        if species.len() != coords.len() {
            return Err(ModelError::LengthMismatch {
                species: species.len(),
                coords: coords.len(),
            });
        }
        let sites = species
            .iter()
            .zip(coords)
            .map(|(sp, frac)| Site::new(sp, *frac))
            .collect();
        Ok(Self { lattice, sites })
    }

    /// Builds a structure from Cartesian coordinates (Å).
    pub fn from_cartesian(
        lattice: Lattice,
        species: &[&str],
        coords: &[Point3<f64>],
    ) -> Result<Self, ModelError> {
        let fracs: Vec<Vector3<f64>> = coords.iter().map(|p| lattice.fractional(p)).collect();
        Self::from_fractional(lattice, species, &fracs)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn site(&self, index: usize) -> Option<&Site> {
        self.sites.get(index)
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// The Cartesian position of site `index` in the home cell.
    pub fn cartesian(&self, index: usize) -> Option<Point3<f64>> {
        self.sites
            .get(index)
            .map(|s| self.lattice.cartesian(s.frac_coords()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_construction_round_trips() {
        let structure = Structure::from_cartesian(
            Lattice::cubic(10.0),
            &["H", "He"],
            &[Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)],
        )
        .unwrap();
        assert_eq!(structure.len(), 2);
        assert_eq!(structure.site(1).unwrap().species(), "He");
        let cart = structure.cartesian(0).unwrap();
        assert!((cart - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
        assert!(structure.cartesian(2).is_none());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = Structure::from_fractional(
            Lattice::cubic(1.0),
            &["H"],
            &[Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)],
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::LengthMismatch {
                species: 1,
                coords: 2
            }
        );
    }
}
