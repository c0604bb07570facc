use super::{VoronoiCoordinationFinder, VoronoiError};
use crate::core::config::Tolerances;
use crate::core::models::Structure;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// The face-vertex-count signature of a Voronoi cell.
///
/// Entry `i` counts the cell's faces with `i + 3` vertices, so a perfect bcc
/// cell (6 squares, 8 hexagons) reads `[0, 6, 0, 8, 0, 0, 0, 0]`. Signatures
/// compare and hash exactly, which makes them usable as tally keys across an
/// ensemble.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoronoiIndexSignature(Vec<u32>);

impl VoronoiIndexSignature {
    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    /// Total number of counted faces.
    pub fn face_count(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for VoronoiIndexSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Classifies Voronoi cells by shape and tallies shape frequencies across
/// structure ensembles.
#[derive(Debug, Clone)]
pub struct VoronoiIndexAnalyzer {
    cutoff: f64,
    max_face_vertices: usize,
    tolerances: Tolerances,
}

impl Default for VoronoiIndexAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiIndexAnalyzer {
    pub const DEFAULT_CUTOFF: f64 = 5.0;
    pub const DEFAULT_MAX_FACE_VERTICES: usize = 10;

    pub fn new() -> Self {
        Self {
            cutoff: Self::DEFAULT_CUTOFF,
            max_face_vertices: Self::DEFAULT_MAX_FACE_VERTICES,
            tolerances: Tolerances::default(),
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_max_face_vertices(mut self, max: usize) -> Self {
        self.max_face_vertices = max;
        self
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// The face-vertex-count signature of the Voronoi cell of `site_index`.
    ///
    /// Faces with more than `max_face_vertices` vertices are dropped from the
    /// histogram with a warning.
    pub fn analyze(
        &self,
        structure: &Structure,
        site_index: usize,
    ) -> Result<VoronoiIndexSignature, VoronoiError> {
        let finder = VoronoiCoordinationFinder::new(structure)
            .with_cutoff(self.cutoff)
            .with_tolerances(self.tolerances.clone());
        let polyhedron = finder.get_voronoi_polyhedra(site_index)?;
        let mut counts = vec![0u32; self.max_face_vertices.saturating_sub(2)];
        for facet in polyhedron.facets() {
            let vertices = facet.vertices.len();
            match counts.get_mut(vertices - 3) {
                Some(slot) => *slot += 1,
                None => warn!(
                    vertices,
                    max = self.max_face_vertices,
                    "dropping Voronoi face beyond the signature range"
                ),
            }
        }
        Ok(VoronoiIndexSignature(counts))
    }

    /// Tallies cell signatures over a trajectory sample.
    ///
    /// Every `step_freq`-th structure is analyzed (a step of 0 is treated as
    /// 1), each of its sites contributes one signature, and the
    /// `most_frequent_polyhedra` most common signatures are returned as
    /// `(signature, count)` pairs, descending by count with ties broken by
    /// first appearance.
    pub fn analyze_structures(
        &self,
        structures: &[Structure],
        step_freq: usize,
        most_frequent_polyhedra: usize,
    ) -> Result<Vec<(VoronoiIndexSignature, usize)>, VoronoiError> {
        let step = step_freq.max(1);
        let mut order: Vec<VoronoiIndexSignature> = Vec::new();
        let mut tally: HashMap<VoronoiIndexSignature, usize> = HashMap::new();
        for structure in structures.iter().step_by(step) {
            for site_index in 0..structure.len() {
                let signature = self.analyze(structure, site_index)?;
                if !tally.contains_key(&signature) {
                    order.push(signature.clone());
                }
                *tally.entry(signature).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<(VoronoiIndexSignature, usize)> = order
            .into_iter()
            .map(|sig| {
                let count = tally[&sig];
                (sig, count)
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(most_frequent_polyhedra);
        Ok(ranked)
    }
}
