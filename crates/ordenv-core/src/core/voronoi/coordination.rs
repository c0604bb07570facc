use super::cell::clip_cell;
use super::VoronoiError;
use crate::core::config::Tolerances;
use crate::core::geometry::{polygon_area, pyramid_volume, solid_angle};
use crate::core::models::Structure;
use crate::core::neighbors::{neighbors_within, NeighborCandidate};
use nalgebra::Point3;

/// Voronoi construction is under-determined below this many candidates.
const MIN_CANDIDATES: usize = 4;

/// Which facet metric drives weights and coordination numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetWeight {
    /// Solid angle subtended by the facet at the site (default).
    #[default]
    SolidAngle,
    /// Facet surface area.
    Area,
}

/// One facet of a site's Voronoi cell, tied to the neighbor that generated it.
#[derive(Debug, Clone)]
pub struct VoronoiFacet {
    pub neighbor: NeighborCandidate,
    /// Facet polygon, ordered, relative to the reference site at the origin.
    pub vertices: Vec<Point3<f64>>,
    /// Solid angle subtended at the reference site, in steradians.
    pub solid_angle: f64,
    pub area: f64,
    /// This facet's pyramidal contribution to the cell volume.
    pub volume: f64,
    /// Facet metric normalized so the dominant facet weighs 1.0.
    pub weight: f64,
}

/// A site's Voronoi cell as a weighted facet list, sorted nearest neighbor
/// first.
#[derive(Debug, Clone)]
pub struct VoronoiPolyhedron {
    facets: Vec<VoronoiFacet>,
}

impl VoronoiPolyhedron {
    pub fn facets(&self) -> &[VoronoiFacet] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Total cell volume (sum of facet pyramid contributions).
    pub fn volume(&self) -> f64 {
        self.facets.iter().map(|f| f.volume).sum()
    }
}

/// Derives coordination environments from the Voronoi cell of a site against
/// its periodic neighbor candidates.
///
/// Facet weights are normalized to the dominant facet, and a facet counts as
/// coordinating when its weight passes the ratio-to-maximum filter
/// (`Tolerances::facet_weight_ratio`, default 1/3). A raw face count is far
/// more sensitive to tiny facets than the weighted sum.
#[derive(Debug, Clone)]
pub struct VoronoiCoordinationFinder<'a> {
    structure: &'a Structure,
    cutoff: f64,
    weight: FacetWeight,
    tolerances: Tolerances,
}

impl<'a> VoronoiCoordinationFinder<'a> {
    /// Default candidate cutoff in Å; generous enough that first-shell cells
    /// close for ordinary inorganic structures.
    pub const DEFAULT_CUTOFF: f64 = 10.0;

    pub fn new(structure: &'a Structure) -> Self {
        Self {
            structure,
            cutoff: Self::DEFAULT_CUTOFF,
            weight: FacetWeight::default(),
            tolerances: Tolerances::default(),
        }
    }

    /// Replaces the candidate cutoff (Å). Widen it when a sparse structure
    /// reports an unbounded cell or too few candidates.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_weight(mut self, weight: FacetWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Builds the Voronoi cell of `site_index` and weights each facet.
    ///
    /// # Errors
    ///
    /// [`VoronoiError::InsufficientNeighbors`] when fewer than 4 candidates
    /// exist within the cutoff, [`VoronoiError::UnboundedCell`] when the
    /// candidates do not close the cell.
    pub fn get_voronoi_polyhedra(
        &self,
        site_index: usize,
    ) -> Result<VoronoiPolyhedron, VoronoiError> {
        let candidates =
            neighbors_within(self.structure, site_index, self.cutoff, &self.tolerances)?;
        if candidates.len() < MIN_CANDIDATES {
            return Err(VoronoiError::InsufficientNeighbors {
                found: candidates.len(),
                required: MIN_CANDIDATES,
                cutoff: self.cutoff,
            });
        }
        let center = self
            .structure
            .cartesian(site_index)
            .expect("site bounds checked by neighbor enumeration");

        let relative: Vec<_> = candidates.iter().map(|c| c.position - center).collect();
        let faces = clip_cell(&relative, self.cutoff, &self.tolerances);

        let origin = Point3::origin();
        let mut facets = Vec::with_capacity(faces.len());
        for face in faces {
            let Some(owner) = face.owner else {
                return Err(VoronoiError::UnboundedCell {
                    cutoff: self.cutoff,
                });
            };
            let angle = solid_angle(&origin, &face.vertices)?;
            facets.push(VoronoiFacet {
                neighbor: candidates[owner].clone(),
                solid_angle: angle,
                area: polygon_area(&face.vertices),
                volume: pyramid_volume(&origin, &face.vertices),
                weight: 0.0,
                vertices: face.vertices,
            });
        }
        facets.sort_by(|a, b| {
            a.neighbor
                .distance
                .total_cmp(&b.neighbor.distance)
                .then(a.neighbor.site_index.cmp(&b.neighbor.site_index))
                .then(a.neighbor.image.cmp(&b.neighbor.image))
        });

        let metric = |f: &VoronoiFacet| match self.weight {
            FacetWeight::SolidAngle => f.solid_angle,
            FacetWeight::Area => f.area,
        };
        let max = facets.iter().map(metric).fold(0.0, f64::max);
        for facet in &mut facets {
            facet.weight = metric(facet) / max;
        }
        Ok(VoronoiPolyhedron { facets })
    }

    /// The facet-weighted coordination number of `site_index`: the sum of
    /// normalized weights passing the ratio-to-maximum filter.
    pub fn get_coordination_number(&self, site_index: usize) -> Result<f64, VoronoiError> {
        let polyhedron = self.get_voronoi_polyhedra(site_index)?;
        Ok(polyhedron
            .facets()
            .iter()
            .filter(|f| f.weight >= self.tolerances.facet_weight_ratio)
            .map(|f| f.weight)
            .sum())
    }

    /// The facets passing the coordination filter, sorted by weight
    /// descending.
    pub fn get_coordinated_sites(
        &self,
        site_index: usize,
    ) -> Result<Vec<VoronoiFacet>, VoronoiError> {
        let polyhedron = self.get_voronoi_polyhedra(site_index)?;
        let mut selected: Vec<VoronoiFacet> = polyhedron
            .facets
            .into_iter()
            .filter(|f| f.weight >= self.tolerances.facet_weight_ratio)
            .collect();
        selected.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Ok(selected)
    }
}
