use super::{VoronoiCoordinationFinder, VoronoiError};
use crate::core::config::Tolerances;
use crate::core::models::Structure;

/// A facet-mediated connection from a reference site to a neighboring site.
///
/// The shared Voronoi facet area acts as a bonding-strength proxy: large
/// facets connect close, well-coordinated pairs, slivers connect marginal
/// contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConnection {
    pub site_index: usize,
    pub image: [i32; 3],
    pub area: f64,
    pub distance: f64,
}

/// Lists which sites share a Voronoi facet with a given site, and how much
/// area they share.
#[derive(Debug, Clone)]
pub struct VoronoiConnectivity<'a> {
    finder: VoronoiCoordinationFinder<'a>,
}

impl<'a> VoronoiConnectivity<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Self {
            finder: VoronoiCoordinationFinder::new(structure),
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.finder = self.finder.with_cutoff(cutoff);
        self
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.finder = self.finder.with_tolerances(tolerances);
        self
    }

    /// All facet-mediated connections of `site_index`, ordered by shared area
    /// descending.
    pub fn get_connections(
        &self,
        site_index: usize,
    ) -> Result<Vec<SiteConnection>, VoronoiError> {
        let polyhedron = self.finder.get_voronoi_polyhedra(site_index)?;
        let mut connections: Vec<SiteConnection> = polyhedron
            .facets()
            .iter()
            .map(|f| SiteConnection {
                site_index: f.neighbor.site_index,
                image: f.neighbor.image,
                area: f.area,
                distance: f.neighbor.distance,
            })
            .collect();
        connections.sort_by(|a, b| b.area.total_cmp(&a.area));
        Ok(connections)
    }
}
