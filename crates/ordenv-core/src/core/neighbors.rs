//! Periodic neighbor enumeration.
//!
//! Produces, for a reference site and a Euclidean cutoff, every atom (home
//! cell and periodic images) within the cutoff. Candidates are transient
//! values: created per query, discarded after use.

use super::config::Tolerances;
use super::models::Structure;
use nalgebra::Point3;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum NeighborError {
    #[error("site index {index} is out of range for a structure with {len} sites")]
    SiteOutOfRange { index: usize, len: usize },
}

/// One candidate neighbor: a site in some periodic image, already shifted to
/// its Cartesian position.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborCandidate {
    /// Index of the originating site in the structure.
    pub site_index: usize,
    pub species: String,
    /// Cartesian position of this periodic image.
    pub position: Point3<f64>,
    /// Distance to the reference site.
    pub distance: f64,
    /// The periodic image the candidate was generated from.
    pub image: [i32; 3],
}

/// Enumerates all atoms within `cutoff` of site `site_index`, across periodic
/// images.
///
/// The image search starts at the 27 nearest cells and expands shell by shell
/// until one more shell could not possibly reach the cutoff sphere: shell `s`
/// is guaranteed to cover a ball of radius `s` times the smallest
/// perpendicular cell width, which guards against missed neighbors in skewed
/// or very small lattices. The reference atom itself is excluded; its
/// periodic images are kept. Candidates mapping to the same position within
/// `tolerances.image_dedup_tol` are deduplicated, and the result is sorted by
/// (distance, site index, image) so downstream arithmetic is deterministic.
pub fn neighbors_within(
    structure: &Structure,
    site_index: usize,
    cutoff: f64,
    tolerances: &Tolerances,
) -> Result<Vec<NeighborCandidate>, NeighborError> {
    let center = structure
        .cartesian(site_index)
        .ok_or(NeighborError::SiteOutOfRange {
            index: site_index,
            len: structure.len(),
        })?;

    let widths = structure.lattice().perpendicular_widths();
    let min_width = widths.iter().fold(f64::INFINITY, |acc, w| acc.min(*w));
    let mut shells: i32 = 1;
    while (f64::from(shells)) * min_width < cutoff {
        shells += 1;
    }
    if shells > 1 {
        debug!(shells, cutoff, min_width, "expanded periodic image search");
    }

    let mut candidates = Vec::new();
    for (index, site) in structure.sites().iter().enumerate() {
        let base = structure.lattice().cartesian(site.frac_coords());
        for ia in -shells..=shells {
            for ib in -shells..=shells {
                for ic in -shells..=shells {
                    let image = [ia, ib, ic];
                    let position = base + structure.lattice().image_shift(image);
                    let distance = (position - center).norm();
                    if distance < tolerances.site_merge_tol || distance > cutoff {
                        continue;
                    }
                    candidates.push(NeighborCandidate {
                        site_index: index,
                        species: site.species().to_string(),
                        position,
                        distance,
                        image,
                    });
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.site_index.cmp(&b.site_index))
            .then(a.image.cmp(&b.image))
    });

    // Near-equal distances sit adjacent after sorting, so deduplication only
    // needs to look back while distances stay within tolerance.
    let mut result: Vec<NeighborCandidate> = Vec::with_capacity(candidates.len());
    'candidates: for candidate in candidates {
        for kept in result.iter().rev() {
            if candidate.distance - kept.distance > tolerances.image_dedup_tol {
                break;
            }
            if (candidate.position - kept.position).norm() < tolerances.image_dedup_tol {
                continue 'candidates;
            }
        }
        result.push(candidate);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Lattice;
    use nalgebra::Vector3;

    fn simple_cubic() -> Structure {
        Structure::from_fractional(Lattice::cubic(1.0), &["H"], &[Vector3::zeros()]).unwrap()
    }

    #[test]
    fn simple_cubic_first_shell_has_six_neighbors() {
        let structure = simple_cubic();
        let neighbors =
            neighbors_within(&structure, 0, 1.01, &Tolerances::default()).unwrap();
        assert_eq!(neighbors.len(), 6);
        for n in &neighbors {
            assert!((n.distance - 1.0).abs() < 1e-12);
            assert_eq!(n.site_index, 0);
        }
    }

    #[test]
    fn cutoff_below_first_shell_yields_nothing() {
        let structure = simple_cubic();
        let neighbors =
            neighbors_within(&structure, 0, 0.99, &Tolerances::default()).unwrap();
        assert!(neighbors.is_empty());
    }

    #[test]
    fn shell_expansion_reaches_beyond_27_images() {
        let structure = simple_cubic();
        let neighbors =
            neighbors_within(&structure, 0, 2.01, &Tolerances::default()).unwrap();
        // 6 at 1.0, 12 at sqrt(2), 8 at sqrt(3), 6 at 2.0.
        assert_eq!(neighbors.len(), 32);
        assert!((neighbors.last().unwrap().distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn hexagonal_close_packing_has_twelve_nearest_neighbors() {
        let structure = Structure::from_fractional(
            Lattice::hexagonal(1.0, 1.633).unwrap(),
            &["H", "H"],
            &[
                Vector3::new(0.3333, 0.6667, 0.25),
                Vector3::new(0.6667, 0.3333, 0.75),
            ],
        )
        .unwrap();
        let neighbors =
            neighbors_within(&structure, 0, 1.01, &Tolerances::default()).unwrap();
        assert_eq!(neighbors.len(), 12);
    }

    #[test]
    fn results_are_sorted_by_distance() {
        let structure = Structure::from_fractional(
            Lattice::cubic(1.0),
            &["A", "B"],
            &[Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)],
        )
        .unwrap();
        let neighbors =
            neighbors_within(&structure, 0, 1.2, &Tolerances::default()).unwrap();
        for pair in neighbors.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        // 8 body-center images first, then the 6 cube corners.
        assert_eq!(neighbors[0].species, "B");
        assert_eq!(neighbors.len(), 14);
    }

    #[test]
    fn out_of_range_site_is_an_error() {
        let structure = simple_cubic();
        let err = neighbors_within(&structure, 3, 1.0, &Tolerances::default()).unwrap_err();
        assert_eq!(err, NeighborError::SiteOutOfRange { index: 3, len: 1 });
    }
}
