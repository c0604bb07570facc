//! The motif catalog: every supported order-parameter kind, its neighbor
//! requirement, its canonical geometry, and its default numeric parameters.
//!
//! The catalog is data plus pure functions: adding a motif means adding an
//! enum variant, a tag, a requirement, and (for the fixed-count kinds) a
//! canonical direction set; the dispatch logic never changes.

use super::motifs::{pair_angles, DEFAULT_INVERSE_GAUSSIAN_WIDTH};
use nalgebra::Vector3;
use phf::phf_map;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Every motif the order-parameter engine can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotifKind {
    CoordinationNumber,
    SingleBond,
    Bent,
    Tetrahedral,
    Octahedral,
    BodyCenteredCubic,
    Q2,
    Q4,
    Q6,
    RegularTriangle,
    Square,
    SquarePyramidLegacy,
    TrigonalPlanar,
    SquarePlanar,
    PentagonalPlanar,
    TShaped,
    SeeSaw,
    TrigonalPyramidal,
    SquarePyramidal,
    TrigonalBipyramidal,
    PentagonalPyramidal,
    HexagonalPyramidal,
    PentagonalBipyramidal,
    HexagonalBipyramidal,
    Cuboctahedral,
}

static MOTIF_TAGS: phf::Map<&'static str, MotifKind> = phf_map! {
    "cn" => MotifKind::CoordinationNumber,
    "sgl_bd" => MotifKind::SingleBond,
    "bent" => MotifKind::Bent,
    "tet" => MotifKind::Tetrahedral,
    "oct" => MotifKind::Octahedral,
    "bcc" => MotifKind::BodyCenteredCubic,
    "q2" => MotifKind::Q2,
    "q4" => MotifKind::Q4,
    "q6" => MotifKind::Q6,
    "reg_tri" => MotifKind::RegularTriangle,
    "sq" => MotifKind::Square,
    "sq_pyr_legacy" => MotifKind::SquarePyramidLegacy,
    "tri_plan" => MotifKind::TrigonalPlanar,
    "sq_plan" => MotifKind::SquarePlanar,
    "pent_plan" => MotifKind::PentagonalPlanar,
    "T" => MotifKind::TShaped,
    "see_saw" => MotifKind::SeeSaw,
    "tri_pyr" => MotifKind::TrigonalPyramidal,
    "sq_pyr" => MotifKind::SquarePyramidal,
    "tri_bipyr" => MotifKind::TrigonalBipyramidal,
    "pent_pyr" => MotifKind::PentagonalPyramidal,
    "hex_pyr" => MotifKind::HexagonalPyramidal,
    "pent_bipyr" => MotifKind::PentagonalBipyramidal,
    "hex_bipyr" => MotifKind::HexagonalBipyramidal,
    "cuboct" => MotifKind::Cuboctahedral,
};

/// How many neighbors a motif needs before its score is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborRequirement {
    Any,
    AtLeast(usize),
    Exactly(usize),
}

impl NeighborRequirement {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(min) => count >= *min,
            Self::Exactly(exact) => count == *exact,
        }
    }
}

impl MotifKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        MOTIF_TAGS.get(tag).copied()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::CoordinationNumber => "cn",
            Self::SingleBond => "sgl_bd",
            Self::Bent => "bent",
            Self::Tetrahedral => "tet",
            Self::Octahedral => "oct",
            Self::BodyCenteredCubic => "bcc",
            Self::Q2 => "q2",
            Self::Q4 => "q4",
            Self::Q6 => "q6",
            Self::RegularTriangle => "reg_tri",
            Self::Square => "sq",
            Self::SquarePyramidLegacy => "sq_pyr_legacy",
            Self::TrigonalPlanar => "tri_plan",
            Self::SquarePlanar => "sq_plan",
            Self::PentagonalPlanar => "pent_plan",
            Self::TShaped => "T",
            Self::SeeSaw => "see_saw",
            Self::TrigonalPyramidal => "tri_pyr",
            Self::SquarePyramidal => "sq_pyr",
            Self::TrigonalBipyramidal => "tri_bipyr",
            Self::PentagonalPyramidal => "pent_pyr",
            Self::HexagonalPyramidal => "hex_pyr",
            Self::PentagonalBipyramidal => "pent_bipyr",
            Self::HexagonalBipyramidal => "hex_bipyr",
            Self::Cuboctahedral => "cuboct",
        }
    }

    /// The neighbor-count precondition of this motif. Unmet preconditions
    /// yield an undefined score (`None`), never an error.
    pub fn neighbor_requirement(&self) -> NeighborRequirement {
        match self {
            Self::CoordinationNumber => NeighborRequirement::Any,
            Self::SingleBond => NeighborRequirement::AtLeast(1),
            Self::Bent => NeighborRequirement::Exactly(2),
            Self::Tetrahedral | Self::Octahedral | Self::BodyCenteredCubic => {
                NeighborRequirement::AtLeast(2)
            }
            Self::Q2 | Self::Q4 | Self::Q6 => NeighborRequirement::AtLeast(1),
            Self::SquarePyramidLegacy => NeighborRequirement::AtLeast(2),
            Self::RegularTriangle | Self::TrigonalPlanar | Self::TShaped => {
                NeighborRequirement::Exactly(3)
            }
            Self::Square | Self::SquarePlanar | Self::SeeSaw | Self::TrigonalPyramidal => {
                NeighborRequirement::Exactly(4)
            }
            Self::PentagonalPlanar | Self::SquarePyramidal | Self::TrigonalBipyramidal => {
                NeighborRequirement::Exactly(5)
            }
            Self::PentagonalPyramidal => NeighborRequirement::Exactly(6),
            Self::HexagonalPyramidal | Self::PentagonalBipyramidal => {
                NeighborRequirement::Exactly(7)
            }
            Self::HexagonalBipyramidal => NeighborRequirement::Exactly(8),
            Self::Cuboctahedral => NeighborRequirement::Exactly(12),
        }
    }

    /// Unit directions of the idealized motif, for the kinds scored by
    /// matching against a canonical pair-angle set.
    pub(crate) fn canonical_directions(&self) -> Option<Vec<Vector3<f64>>> {
        let apex = Vector3::new(0.0, 0.0, 1.0);
        let bottom = Vector3::new(0.0, 0.0, -1.0);
        let dirs = match self {
            Self::TrigonalPlanar => ring(3),
            Self::SquarePlanar => ring(4),
            Self::PentagonalPlanar => ring(5),
            Self::TShaped => vec![apex, Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)],
            Self::SeeSaw => vec![
                apex,
                bottom,
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
            ],
            Self::TrigonalPyramidal => with_apices(&[apex], ring(3)),
            Self::SquarePyramidal => with_apices(&[apex], ring(4)),
            Self::TrigonalBipyramidal => with_apices(&[apex, bottom], ring(3)),
            Self::PentagonalPyramidal => with_apices(&[apex], ring(5)),
            Self::HexagonalPyramidal => with_apices(&[apex], ring(6)),
            Self::PentagonalBipyramidal => with_apices(&[apex, bottom], ring(5)),
            Self::HexagonalBipyramidal => with_apices(&[apex, bottom], ring(6)),
            Self::Cuboctahedral => {
                let mut dirs = Vec::with_capacity(12);
                for (u, v) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
                    dirs.push(Vector3::new(u, v, 0.0).normalize());
                    dirs.push(Vector3::new(u, 0.0, v).normalize());
                    dirs.push(Vector3::new(0.0, u, v).normalize());
                }
                dirs
            }
            _ => return None,
        };
        Some(dirs)
    }
}

fn ring(count: usize) -> Vec<Vector3<f64>> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / count as f64;
            Vector3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect()
}

fn with_apices(apices: &[Vector3<f64>], mut equatorial: Vec<Vector3<f64>>) -> Vec<Vector3<f64>> {
    let mut dirs = apices.to_vec();
    dirs.append(&mut equatorial);
    dirs
}

/// Caller-facing numeric options of one motif.
///
/// `target_angle` and the inverse-Gaussian width are both expressed as
/// fractions of 180°; fields left `None` fall back to the catalog defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotifParams {
    #[serde(alias = "TA")]
    pub target_angle: Option<f64>,
    #[serde(alias = "IGW_TA")]
    pub inverse_gaussian_width: Option<f64>,
}

impl MotifParams {
    /// Field-wise merge: `self` wins, `defaults` fills the gaps.
    pub(crate) fn merged_over(self, defaults: MotifParams) -> MotifParams {
        MotifParams {
            target_angle: self.target_angle.or(defaults.target_angle),
            inverse_gaussian_width: self
                .inverse_gaussian_width
                .or(defaults.inverse_gaussian_width),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {source}")]
    Toml { source: toml::de::Error },
    #[error("catalog is missing the '{tag}' motif")]
    MissingMotif { tag: &'static str },
}

/// The default-parameter table for every motif kind.
#[derive(Debug, Clone)]
pub struct MotifCatalog {
    defaults: HashMap<String, MotifParams>,
}

static EMBEDDED_CATALOG: OnceLock<MotifCatalog> = OnceLock::new();

impl MotifCatalog {
    /// The catalog shipped with the crate.
    pub fn embedded() -> &'static MotifCatalog {
        EMBEDDED_CATALOG.get_or_init(|| {
            const DEFAULT_MOTIFS_TOML: &str = include_str!("../../../resources/motifs.toml");
            MotifCatalog::load_from_str(DEFAULT_MOTIFS_TOML)
                .expect("failed to parse the embedded motif catalog; this is a library bug")
        })
    }

    /// Parses a catalog from TOML, requiring a table for every supported tag.
    pub fn load_from_str(content: &str) -> Result<Self, CatalogError> {
        let defaults: HashMap<String, MotifParams> =
            toml::from_str(content).map_err(|e| CatalogError::Toml { source: e })?;
        for (tag, _) in MOTIF_TAGS.entries() {
            if !defaults.contains_key(*tag) {
                return Err(CatalogError::MissingMotif { tag: *tag });
            }
        }
        Ok(Self { defaults })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::load_from_str(&content)
    }

    pub fn defaults_for(&self, kind: MotifKind) -> MotifParams {
        self.defaults.get(kind.tag()).copied().unwrap_or_default()
    }
}

/// One configured, immutable order-parameter descriptor.
///
/// Built once at engine construction; the ideal pair-angle list of the
/// fixed-count kinds is derived here from the canonical geometry so scoring
/// only ever compares sorted angle lists.
#[derive(Debug, Clone)]
pub struct OrderParameterSpec {
    kind: MotifKind,
    target_angle: Option<f64>,
    inverse_gaussian_width: f64,
    ideal_angles: Vec<f64>,
}

impl OrderParameterSpec {
    pub(crate) fn new(kind: MotifKind, params: MotifParams) -> Self {
        let ideal_angles = kind
            .canonical_directions()
            .map(|dirs| pair_angles(&dirs))
            .unwrap_or_default();
        Self {
            kind,
            target_angle: params.target_angle,
            inverse_gaussian_width: params
                .inverse_gaussian_width
                .unwrap_or(DEFAULT_INVERSE_GAUSSIAN_WIDTH),
            ideal_angles,
        }
    }

    pub fn kind(&self) -> MotifKind {
        self.kind
    }

    pub fn target_angle(&self) -> Option<f64> {
        self.target_angle
    }

    pub fn inverse_gaussian_width(&self) -> f64 {
        self.inverse_gaussian_width
    }

    pub(crate) fn ideal_angles(&self) -> &[f64] {
        &self.ideal_angles
    }
}
