//! The order-parameter engine.
//!
//! Holds an immutable, ordered list of motif descriptors and scores a site
//! against every one of them in a single pass: resolve the neighbor set
//! (explicit indices, cutoff enumeration, or Voronoi-weighted), derive the
//! shared geometry, then dispatch each spec to its scoring function.

mod catalog;
mod motifs;
mod steinhardt;

pub use catalog::{
    CatalogError, MotifCatalog, MotifKind, MotifParams, NeighborRequirement, OrderParameterSpec,
};

use crate::core::config::Tolerances;
use crate::core::models::Structure;
use crate::core::neighbors::{neighbors_within, NeighborError};
use crate::core::voronoi::{VoronoiCoordinationFinder, VoronoiError};
use nalgebra::{Point3, Vector3};
use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderParameterError {
    #[error("unknown order parameter type '{tag}'")]
    UnknownMotif { tag: String },
    #[error("got {got} parameter entries for {expected} order parameter types")]
    MismatchedParameters { got: usize, expected: usize },
    #[error("site index {index} is out of range for a structure with {len} sites")]
    InvalidSiteIndex { index: usize, len: usize },
    #[error("neighbor index {index} is out of range for a structure with {len} sites")]
    InvalidNeighborIndex { index: usize, len: usize },
    #[error("neighbor index {index} duplicates the reference site or another neighbor")]
    DuplicateNeighborIndex { index: usize },
    #[error(transparent)]
    Neighbors(#[from] NeighborError),
    #[error(transparent)]
    Voronoi(#[from] VoronoiError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// The neighbor geometry shared by all motif evaluations of one call.
pub(crate) struct NeighborGeometry {
    positions: Vec<Point3<f64>>,
    distances: Vec<f64>,
    /// Unit bond vectors; absent when any neighbor coincides with the
    /// reference site, in which case every angular motif is undefined.
    units: Option<Vec<Vector3<f64>>>,
}

impl NeighborGeometry {
    fn new(relative: Vec<Vector3<f64>>, tolerances: &Tolerances) -> Self {
        let distances: Vec<f64> = relative.iter().map(|r| r.norm()).collect();
        let degenerate = distances
            .iter()
            .any(|d| *d < tolerances.site_merge_tol);
        let units = (!degenerate)
            .then(|| relative.iter().zip(&distances).map(|(r, d)| r / *d).collect());
        Self {
            positions: relative.iter().map(|r| Point3::origin() + r).collect(),
            distances,
            units,
        }
    }

    fn len(&self) -> usize {
        self.distances.len()
    }
}

impl OrderParameterSpec {
    /// Scores this motif against a resolved neighbor geometry.
    ///
    /// `None` means the motif is undefined for this geometry (wrong neighbor
    /// count or a degenerate bond); it is a normal outcome, distinct from a
    /// score of 0.0.
    pub(crate) fn evaluate(&self, geometry: &NeighborGeometry) -> Option<f64> {
        if !self.kind().neighbor_requirement().accepts(geometry.len()) {
            return None;
        }
        if self.kind() == MotifKind::CoordinationNumber {
            return Some(geometry.len() as f64);
        }
        let units = geometry.units.as_deref()?;
        let width = self.inverse_gaussian_width();
        match self.kind() {
            MotifKind::SingleBond => motifs::score_single_bond(&geometry.distances),
            MotifKind::Bent => {
                motifs::score_bent(units, self.target_angle().unwrap_or(1.0), width)
            }
            MotifKind::Tetrahedral => {
                motifs::score_nearest_angle(units, &[(-1.0_f64 / 3.0).acos()], width)
            }
            MotifKind::Octahedral => motifs::score_nearest_angle(units, &[FRAC_PI_2, PI], width),
            MotifKind::BodyCenteredCubic => motifs::score_nearest_angle(
                units,
                &[(1.0_f64 / 3.0).acos(), (-1.0_f64 / 3.0).acos(), PI],
                width,
            ),
            MotifKind::Q2 => steinhardt::steinhardt(2, units),
            MotifKind::Q4 => steinhardt::steinhardt(4, units),
            MotifKind::Q6 => steinhardt::steinhardt(6, units),
            MotifKind::RegularTriangle => motifs::score_vertex_shape(
                &geometry.positions,
                self.target_angle().unwrap_or(1.0 / 3.0),
                width,
            ),
            MotifKind::Square => motifs::score_vertex_shape(
                &geometry.positions,
                self.target_angle().unwrap_or(0.5),
                width,
            ),
            MotifKind::SquarePyramidLegacy => {
                motifs::score_apex_mean(units, self.target_angle().unwrap_or(0.5), width)
            }
            _ => motifs::score_angle_set(units, self.ideal_angles(), width),
        }
    }
}

/// The configured order-parameter engine.
///
/// Construction fixes the motif list, per-motif parameters, and the neighbor
/// selection mode: a cutoff distance in Å, or the Voronoi-weighted
/// coordinated sites of the reference site when no cutoff is given. The engine
/// is immutable and holds no per-call state, so identical inputs always
/// produce identical outputs.
#[derive(Debug, Clone)]
pub struct OrderParameterEngine {
    specs: Vec<OrderParameterSpec>,
    cutoff: Option<f64>,
    tolerances: Tolerances,
}

impl OrderParameterEngine {
    /// An engine over the given motif tags with catalog defaults and
    /// Voronoi-weighted neighbor selection.
    pub fn new(types: &[&str]) -> Result<Self, OrderParameterError> {
        Self::builder().types(types).build()
    }

    pub fn builder() -> OrderParameterEngineBuilder {
        OrderParameterEngineBuilder::default()
    }

    pub fn specs(&self) -> &[OrderParameterSpec] {
        &self.specs
    }

    pub fn cutoff(&self) -> Option<f64> {
        self.cutoff
    }

    /// Scores site `site_index` of `structure` against every configured
    /// motif, in spec order.
    ///
    /// When `indices_neighs` is given it is used verbatim for every spec;
    /// indices that are out of range, repeat, or name the reference site are
    /// caller misuse and fail the whole call. Otherwise neighbors come from
    /// the configured cutoff or the Voronoi finder.
    ///
    /// Each returned entry is `Some(score)` or `None` when that motif is
    /// geometrically undefined for the resolved neighbors.
    pub fn get_order_parameters(
        &self,
        structure: &Structure,
        site_index: usize,
        indices_neighs: Option<&[usize]>,
    ) -> Result<Vec<Option<f64>>, OrderParameterError> {
        let center = structure
            .cartesian(site_index)
            .ok_or(OrderParameterError::InvalidSiteIndex {
                index: site_index,
                len: structure.len(),
            })?;

        let relative: Vec<Vector3<f64>> = match indices_neighs {
            Some(indices) => {
                let mut seen = HashSet::with_capacity(indices.len());
                let mut relative = Vec::with_capacity(indices.len());
                for &index in indices {
                    let position = structure.cartesian(index).ok_or(
                        OrderParameterError::InvalidNeighborIndex {
                            index,
                            len: structure.len(),
                        },
                    )?;
                    if index == site_index || !seen.insert(index) {
                        return Err(OrderParameterError::DuplicateNeighborIndex { index });
                    }
                    relative.push(position - center);
                }
                relative
            }
            None => match self.cutoff {
                Some(cutoff) => {
                    neighbors_within(structure, site_index, cutoff, &self.tolerances)?
                        .into_iter()
                        .map(|c| c.position - center)
                        .collect()
                }
                None => VoronoiCoordinationFinder::new(structure)
                    .with_tolerances(self.tolerances.clone())
                    .get_coordinated_sites(site_index)?
                    .into_iter()
                    .map(|f| f.neighbor.position - center)
                    .collect(),
            },
        };

        let geometry = NeighborGeometry::new(relative, &self.tolerances);
        Ok(self.specs.iter().map(|s| s.evaluate(&geometry)).collect())
    }
}

/// Builder for [`OrderParameterEngine`].
#[derive(Debug, Default)]
pub struct OrderParameterEngineBuilder {
    types: Vec<String>,
    parameters: Option<Vec<Option<MotifParams>>>,
    cutoff: Option<f64>,
    tolerances: Option<Tolerances>,
    catalog: Option<MotifCatalog>,
}

impl OrderParameterEngineBuilder {
    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Per-type parameter overrides, parallel to the type list. `None`
    /// entries keep the catalog defaults.
    pub fn parameters(mut self, parameters: Vec<Option<MotifParams>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Neighbor cutoff in Å. Leaving it unset selects Voronoi-weighted
    /// neighbor resolution.
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = Some(tolerances);
        self
    }

    /// Replaces the embedded default-parameter catalog.
    pub fn catalog(mut self, catalog: MotifCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> Result<OrderParameterEngine, OrderParameterError> {
        if let Some(parameters) = &self.parameters {
            if parameters.len() != self.types.len() {
                return Err(OrderParameterError::MismatchedParameters {
                    got: parameters.len(),
                    expected: self.types.len(),
                });
            }
        }
        let catalog = self
            .catalog
            .as_ref()
            .unwrap_or_else(|| MotifCatalog::embedded());
        let mut specs = Vec::with_capacity(self.types.len());
        for (i, tag) in self.types.iter().enumerate() {
            let kind =
                MotifKind::from_tag(tag).ok_or_else(|| OrderParameterError::UnknownMotif {
                    tag: tag.clone(),
                })?;
            let defaults = catalog.defaults_for(kind);
            let params = self
                .parameters
                .as_ref()
                .and_then(|p| p[i])
                .map(|caller| caller.merged_over(defaults))
                .unwrap_or(defaults);
            specs.push(OrderParameterSpec::new(kind, params));
        }
        Ok(OrderParameterEngine {
            specs,
            cutoff: self.cutoff,
            tolerances: self.tolerances.unwrap_or_default(),
        })
    }
}
