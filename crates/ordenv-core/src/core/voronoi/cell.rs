//! Convex-cell construction by iterative half-space clipping.
//!
//! The Voronoi cell of a site against a candidate set is the intersection of
//! the half-spaces bounded by the perpendicular bisector planes between the
//! site and each candidate. Starting from a bounding cube, every bisector
//! plane that actually cuts the cell replaces the clipped region with a new
//! facet owned by that candidate.

use crate::core::config::Tolerances;
use crate::core::geometry::{polygon_area, polygon_centroid};
use nalgebra::{Point3, Vector3};
use tracing::warn;

/// One face of a clipped cell. `owner` is the index of the candidate whose
/// bisector created the face; `None` marks a remnant of the bounding cube.
#[derive(Debug, Clone)]
pub(crate) struct ClippedFace {
    pub owner: Option<usize>,
    pub vertices: Vec<Point3<f64>>,
}

/// Clips the bounding cube `[-half_width, half_width]^3` by the perpendicular
/// bisector plane of every relative candidate position.
///
/// `relative_positions` must be sorted nearest-first: once a bisector lies
/// beyond every cell vertex, all later ones do too and clipping stops early.
pub(crate) fn clip_cell(
    relative_positions: &[Vector3<f64>],
    half_width: f64,
    tolerances: &Tolerances,
) -> Vec<ClippedFace> {
    let mut faces = bounding_cube(half_width);
    let mut max_radius_sq = 3.0 * half_width * half_width;

    for (candidate, relative) in relative_positions.iter().enumerate() {
        let distance = relative.norm();
        let offset = 0.5 * distance;
        if offset * offset > max_radius_sq {
            break;
        }
        let normal = relative / distance;

        let mut new_faces = Vec::with_capacity(faces.len() + 1);
        let mut section = Vec::new();
        let mut cut = false;
        for face in &faces {
            let (kept, crossings, face_cut) =
                clip_polygon(&face.vertices, &normal, offset, tolerances.plane_thickness);
            cut |= face_cut;
            section.extend(crossings);
            let kept = merge_ring(kept, tolerances.vertex_merge_tol);
            if kept.len() >= 3 && polygon_area(&kept) > tolerances.degenerate_face_area {
                new_faces.push(ClippedFace {
                    owner: face.owner,
                    vertices: kept,
                });
            }
        }
        if !cut {
            continue;
        }
        let section = dedup_points(section, tolerances.vertex_merge_tol);
        if section.len() >= 3 {
            let ring = order_in_plane(section, &normal);
            if polygon_area(&ring) > tolerances.degenerate_face_area {
                new_faces.push(ClippedFace {
                    owner: Some(candidate),
                    vertices: ring,
                });
            } else {
                warn!(candidate, "dropping degenerate Voronoi facet");
            }
        }
        faces = new_faces;
        max_radius_sq = faces
            .iter()
            .flat_map(|f| f.vertices.iter())
            .map(|v| v.coords.norm_squared())
            .fold(0.0, f64::max);
    }
    faces
}

fn bounding_cube(h: f64) -> Vec<ClippedFace> {
    let v = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
    let quads = [
        [v(h, -h, -h), v(h, h, -h), v(h, h, h), v(h, -h, h)],
        [v(-h, -h, -h), v(-h, -h, h), v(-h, h, h), v(-h, h, -h)],
        [v(-h, h, -h), v(-h, h, h), v(h, h, h), v(h, h, -h)],
        [v(-h, -h, -h), v(h, -h, -h), v(h, -h, h), v(-h, -h, h)],
        [v(-h, -h, h), v(h, -h, h), v(h, h, h), v(-h, h, h)],
        [v(-h, -h, -h), v(-h, h, -h), v(h, h, -h), v(h, -h, -h)],
    ];
    quads
        .into_iter()
        .map(|q| ClippedFace {
            owner: None,
            vertices: q.to_vec(),
        })
        .collect()
}

/// Sutherland-Hodgman clipping of one polygon against `normal · x <= offset`.
///
/// Returns the kept polygon, the points lying on the clipping plane (section
/// candidates for the new facet), and whether the plane strictly cut the
/// polygon. Vertices within `plane_eps` of the plane count as inside and as
/// section points, which keeps degenerate corners (four or more planes
/// meeting at a vertex) from splitting into slivers.
fn clip_polygon(
    vertices: &[Point3<f64>],
    normal: &Vector3<f64>,
    offset: f64,
    plane_eps: f64,
) -> (Vec<Point3<f64>>, Vec<Point3<f64>>, bool) {
    let signed: Vec<f64> = vertices
        .iter()
        .map(|v| normal.dot(&v.coords) - offset)
        .collect();
    let any_outside = signed.iter().any(|d| *d > plane_eps);
    if !any_outside {
        let on_plane = vertices
            .iter()
            .zip(&signed)
            .filter(|(_, d)| d.abs() <= plane_eps)
            .map(|(v, _)| *v)
            .collect();
        return (vertices.to_vec(), on_plane, false);
    }

    let mut kept = Vec::with_capacity(vertices.len() + 2);
    let mut section = Vec::new();
    let count = vertices.len();
    for i in 0..count {
        let j = (i + 1) % count;
        let (vi, vj) = (vertices[i], vertices[j]);
        let (di, dj) = (signed[i], signed[j]);
        if di <= plane_eps {
            kept.push(vi);
            if di.abs() <= plane_eps {
                section.push(vi);
            }
        }
        if (di > plane_eps) != (dj > plane_eps) {
            let t = di / (di - dj);
            let crossing = vi + (vj - vi) * t;
            kept.push(crossing);
            section.push(crossing);
        }
    }
    (kept, section, true)
}

/// Collapses consecutive near-duplicate vertices of a closed ring.
fn merge_ring(vertices: Vec<Point3<f64>>, tol: f64) -> Vec<Point3<f64>> {
    let mut out: Vec<Point3<f64>> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if out.last().is_none_or(|last| (v - last).norm() > tol) {
            out.push(v);
        }
    }
    if out.len() > 1 && (out[0] - out[out.len() - 1]).norm() <= tol {
        out.pop();
    }
    out
}

fn dedup_points(points: Vec<Point3<f64>>, tol: f64) -> Vec<Point3<f64>> {
    let mut out: Vec<Point3<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if out.iter().all(|q| (p - q).norm() > tol) {
            out.push(p);
        }
    }
    out
}

/// Orders coplanar points azimuthally around their centroid.
fn order_in_plane(mut points: Vec<Point3<f64>>, normal: &Vector3<f64>) -> Vec<Point3<f64>> {
    let centroid = polygon_centroid(&points);
    let seed = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = (seed - normal * normal.dot(&seed)).normalize();
    let v = normal.cross(&u);
    points.sort_by(|p, q| {
        let (rp, rq) = (p - centroid, q - centroid);
        let ap = rp.dot(&v).atan2(rp.dot(&u));
        let aq = rq.dot(&v).atan2(rq.dot(&u));
        ap.total_cmp(&aq)
    });
    points
}
