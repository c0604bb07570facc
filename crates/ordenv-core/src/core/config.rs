/// The shared numeric tolerances of the analysis pipeline.
///
/// Every component receives this struct explicitly instead of hiding its own
/// literals, so the neighbor enumerator and the Voronoi finder can never
/// silently disagree about what counts as "the same position" or "a real
/// facet".
#[derive(Debug, Clone, PartialEq)]
pub struct Tolerances {
    /// A Voronoi facet survives the coordination filter when its normalized
    /// weight is at least this fraction of the dominant facet's weight.
    pub facet_weight_ratio: f64,
    /// Two neighbor candidates closer than this (in Å) are the same periodic
    /// image.
    pub image_dedup_tol: f64,
    /// Below this distance (in Å) a candidate is the reference site itself.
    pub site_merge_tol: f64,
    /// Voronoi cell vertices closer than this collapse into one.
    pub vertex_merge_tol: f64,
    /// Facets with an area below this are clipping debris, not real faces.
    pub degenerate_face_area: f64,
    /// Signed-distance band around a clipping plane inside which a vertex is
    /// treated as lying on the plane.
    pub plane_thickness: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            facet_weight_ratio: 1.0 / 3.0,
            image_dedup_tol: 1e-5,
            site_merge_tol: 1e-8,
            vertex_merge_tol: 1e-5,
            degenerate_face_area: 1e-10,
            plane_thickness: 1e-9,
        }
    }
}
