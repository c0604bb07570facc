//! Geometry primitives: solid angles and polygon/polyhedron measures.

use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    InsufficientVertices { count: usize },
}

/// Triangles whose tangent numerator and denominator both fall below this are
/// treated as having zero solid angle.
const DEGENERATE_TRIANGLE: f64 = 1e-14;

/// The solid angle (in steradians) subtended by a planar polygon as seen from
/// `viewpoint`.
///
/// The polygon is fanned into triangles from its first vertex and each
/// triangle contributes via the spherical-triangle tangent formula
/// (Van Oosterom & Strackee). Near-zero-area triangles contribute nothing.
/// The result is an unsigned magnitude in `[0, 4π]`, invariant under cyclic
/// rotation or reversal of the vertex list.
///
/// # Errors
///
/// Returns [`GeometryError::InsufficientVertices`] for polygons with fewer
/// than 3 vertices.
pub fn solid_angle(viewpoint: &Point3<f64>, polygon: &[Point3<f64>]) -> Result<f64, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::InsufficientVertices {
            count: polygon.len(),
        });
    }
    let r0 = polygon[0] - viewpoint;
    let n0 = r0.norm();
    let mut total = 0.0;
    for window in polygon[1..].windows(2) {
        let r1 = window[0] - viewpoint;
        let r2 = window[1] - viewpoint;
        let (n1, n2) = (r1.norm(), r2.norm());
        let numerator = r0.dot(&r1.cross(&r2));
        let denominator =
            n0 * n1 * n2 + r0.dot(&r1) * n2 + r0.dot(&r2) * n1 + r1.dot(&r2) * n0;
        if numerator.abs() < DEGENERATE_TRIANGLE && denominator.abs() < DEGENERATE_TRIANGLE {
            continue;
        }
        total += 2.0 * numerator.atan2(denominator);
    }
    Ok(total.abs())
}

/// The area of a planar polygon embedded in 3-space.
pub fn polygon_area(polygon: &[Point3<f64>]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let v0 = polygon[0];
    let mut acc = nalgebra::Vector3::zeros();
    for window in polygon[1..].windows(2) {
        acc += (window[0] - v0).cross(&(window[1] - v0));
    }
    0.5 * acc.norm()
}

/// The arithmetic centroid of a vertex set.
pub fn polygon_centroid(polygon: &[Point3<f64>]) -> Point3<f64> {
    let mut acc = nalgebra::Vector3::zeros();
    for p in polygon {
        acc += p.coords;
    }
    Point3::from(acc / polygon.len().max(1) as f64)
}

/// The volume of the pyramid with the given apex over a planar polygon base.
pub fn pyramid_volume(apex: &Point3<f64>, base: &[Point3<f64>]) -> f64 {
    if base.len() < 3 {
        return 0.0;
    }
    let v0 = base[0] - apex;
    let mut volume = 0.0;
    for window in base[1..].windows(2) {
        let v1 = window[0] - apex;
        let v2 = window[1] - apex;
        volume += v0.dot(&v1.cross(&v2)) / 6.0;
    }
    volume.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn reference_pentagon() -> (Point3<f64>, Vec<Point3<f64>>) {
        let center = Point3::new(2.294508207929496, 4.4078057081404, 2.299997773791287);
        let coords = vec![
            Point3::new(1.627286218099362, 3.081185538926995, 3.278749383217061),
            Point3::new(1.776793751092763, 2.93741167455471, 3.058701096568852),
            Point3::new(3.318412187495734, 2.997331084033472, 2.022167590167672),
            Point3::new(3.874524708023352, 4.425301459451914, 2.771990305592935),
            Point3::new(2.055778446743566, 4.437449313863041, 4.061046832034642),
        ];
        (center, coords)
    }

    #[test]
    fn solid_angle_matches_reference_value() {
        let (center, coords) = reference_pentagon();
        let omega = solid_angle(&center, &coords).unwrap();
        assert!((omega - 1.8357096593821346).abs() < 1e-7);
    }

    #[test]
    fn solid_angle_is_invariant_under_cyclic_rotation() {
        let (center, coords) = reference_pentagon();
        let omega = solid_angle(&center, &coords).unwrap();
        for shift in 1..coords.len() {
            let mut rotated = coords.clone();
            rotated.rotate_left(shift);
            let rotated_omega = solid_angle(&center, &rotated).unwrap();
            assert!((omega - rotated_omega).abs() < 1e-9);
        }
    }

    #[test]
    fn solid_angle_magnitude_survives_reversal() {
        let (center, coords) = reference_pentagon();
        let omega = solid_angle(&center, &coords).unwrap();
        let reversed: Vec<_> = coords.into_iter().rev().collect();
        let reversed_omega = solid_angle(&center, &reversed).unwrap();
        assert!((omega - reversed_omega).abs() < 1e-9);
    }

    #[test]
    fn octant_triangle_subtends_half_pi() {
        let octant = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let omega = solid_angle(&Point3::origin(), &octant).unwrap();
        assert!((omega - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn cube_faces_close_the_sphere() {
        // Six unit-cube faces seen from the cube center must sum to 4π.
        let h = 0.5;
        let faces: [[Point3<f64>; 4]; 6] = [
            [
                Point3::new(h, -h, -h),
                Point3::new(h, h, -h),
                Point3::new(h, h, h),
                Point3::new(h, -h, h),
            ],
            [
                Point3::new(-h, -h, -h),
                Point3::new(-h, -h, h),
                Point3::new(-h, h, h),
                Point3::new(-h, h, -h),
            ],
            [
                Point3::new(-h, h, -h),
                Point3::new(-h, h, h),
                Point3::new(h, h, h),
                Point3::new(h, h, -h),
            ],
            [
                Point3::new(-h, -h, -h),
                Point3::new(h, -h, -h),
                Point3::new(h, -h, h),
                Point3::new(-h, -h, h),
            ],
            [
                Point3::new(-h, -h, h),
                Point3::new(h, -h, h),
                Point3::new(h, h, h),
                Point3::new(-h, h, h),
            ],
            [
                Point3::new(-h, -h, -h),
                Point3::new(-h, h, -h),
                Point3::new(h, h, -h),
                Point3::new(h, -h, -h),
            ],
        ];
        let total: f64 = faces
            .iter()
            .map(|f| solid_angle(&Point3::origin(), f).unwrap())
            .sum();
        assert!((total - 4.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        let two = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        assert_eq!(
            solid_angle(&Point3::origin(), &two).unwrap_err(),
            GeometryError::InsufficientVertices { count: 2 }
        );
    }

    #[test]
    fn collinear_fan_triangles_contribute_nothing() {
        // A "polygon" collapsed onto a line has zero solid angle.
        let flat = [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
        ];
        let omega = solid_angle(&Point3::new(0.0, 0.0, 1.0), &flat).unwrap();
        assert!(omega < 1e-9);
    }

    #[test]
    fn polygon_area_of_unit_square() {
        let square = [
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(1.0, 1.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
        ];
        assert!((polygon_area(&square) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pyramid_volume_of_unit_cube_face() {
        // Apex at the cube center over a unit face: V = (1/3) · 1 · 0.5.
        let base = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let apex = Point3::new(0.5, 0.5, 0.5);
        assert!((pyramid_volume(&apex, &base) - 1.0 / 6.0).abs() < 1e-12);
    }
}
