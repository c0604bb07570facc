//! Pure motif-scoring functions.
//!
//! Every function maps a resolved neighbor geometry to a score in `[0, 1]`
//! (or `None` when the motif is undefined for that geometry) through
//! inverse-Gaussian penalties on angular deviations. Angles are handled as
//! fractions of 180° throughout, so a width of `1/0.0667` corresponds to the
//! canonical ~12° tolerance band.

use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

pub(crate) const DEFAULT_INVERSE_GAUSSIAN_WIDTH: f64 = 1.0 / 0.0667;

const INV_PI: f64 = 1.0 / PI;

/// `exp(-((x - target) · width)² / 2)` with both arguments as fractions of π.
#[inline]
pub(crate) fn inverse_gaussian(angle_over_pi: f64, target_over_pi: f64, width: f64) -> f64 {
    let t = width * (angle_over_pi - target_over_pi);
    (-0.5 * t * t).exp()
}

fn clamped_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// All pairwise angles of a unit-direction set, sorted ascending.
pub(crate) fn pair_angles(units: &[Vector3<f64>]) -> Vec<f64> {
    let mut angles = Vec::with_capacity(units.len() * units.len().saturating_sub(1) / 2);
    for (i, u) in units.iter().enumerate() {
        for v in &units[i + 1..] {
            angles.push(clamped_angle(u, v));
        }
    }
    angles.sort_by(f64::total_cmp);
    angles
}

/// Mean inverse-Gaussian agreement between the observed pair angles and an
/// ideal sorted angle list of the same length.
pub(crate) fn score_angle_set(
    units: &[Vector3<f64>],
    ideal_sorted: &[f64],
    width: f64,
) -> Option<f64> {
    let observed = pair_angles(units);
    if observed.len() != ideal_sorted.len() || observed.is_empty() {
        return None;
    }
    let sum: f64 = observed
        .iter()
        .zip(ideal_sorted)
        .map(|(o, t)| inverse_gaussian(o * INV_PI, t * INV_PI, width))
        .sum();
    Some(sum / observed.len() as f64)
}

/// Mean inverse-Gaussian penalty against the nearest member of a target
/// angle set, over all neighbor pairs. Used by the variable-count motifs
/// (tetrahedral, octahedral, body-centered-cubic).
pub(crate) fn score_nearest_angle(
    units: &[Vector3<f64>],
    targets: &[f64],
    width: f64,
) -> Option<f64> {
    if units.len() < 2 {
        return None;
    }
    let mut sum = 0.0;
    let mut count = 0usize;
    for (i, u) in units.iter().enumerate() {
        for v in &units[i + 1..] {
            let angle = clamped_angle(u, v) * INV_PI;
            let best = targets
                .iter()
                .map(|t| inverse_gaussian(angle, t * INV_PI, width))
                .fold(0.0, f64::max);
            sum += best;
            count += 1;
        }
    }
    Some(sum / count as f64)
}

/// Single-angle score against a configurable target, for 2-coordinated sites.
pub(crate) fn score_bent(units: &[Vector3<f64>], target_over_pi: f64, width: f64) -> Option<f64> {
    if units.len() != 2 {
        return None;
    }
    let angle = clamped_angle(&units[0], &units[1]);
    Some(inverse_gaussian(angle * INV_PI, target_over_pi, width))
}

/// Single-bond character: how much shorter the nearest bond is than the next
/// one. 1.0 for a lone neighbor, 0.0 when the two nearest are equidistant.
pub(crate) fn score_single_bond(distances: &[f64]) -> Option<f64> {
    match distances.len() {
        0 => None,
        1 => Some(1.0),
        _ => {
            let mut sorted = distances.to_vec();
            sorted.sort_by(f64::total_cmp);
            Some(1.0 - sorted[0] / sorted[1])
        }
    }
}

/// Legacy square-pyramid score: the best mean pair agreement obtained by
/// treating each neighbor in turn as the apex.
pub(crate) fn score_apex_mean(
    units: &[Vector3<f64>],
    target_over_pi: f64,
    width: f64,
) -> Option<f64> {
    if units.len() < 2 {
        return None;
    }
    let mut best: f64 = 0.0;
    for (j, apex) in units.iter().enumerate() {
        let mut sum = 0.0;
        for (k, other) in units.iter().enumerate() {
            if j == k {
                continue;
            }
            let angle = clamped_angle(apex, other) * INV_PI;
            sum += inverse_gaussian(angle, target_over_pi, width);
        }
        best = best.max(sum / (units.len() - 1) as f64);
    }
    Some(best)
}

/// Neighbor-shape score for the regular triangle and square motifs.
///
/// Unlike the center-angle motifs this one only looks at the polygon the
/// neighbors form among themselves: at every neighbor vertex, the angle
/// subtended by its two nearest peers is compared against the interior angle
/// of the regular polygon (60° or 90°), so the position of the central site
/// does not matter.
pub(crate) fn score_vertex_shape(
    positions: &[Point3<f64>],
    target_over_pi: f64,
    width: f64,
) -> Option<f64> {
    if positions.len() < 3 {
        return None;
    }
    let mut sum = 0.0;
    for (i, p) in positions.iter().enumerate() {
        let mut peers: Vec<(f64, usize)> = positions
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != i)
            .map(|(k, q)| ((q - p).norm(), k))
            .collect();
        peers.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let a = (positions[peers[0].1] - p).normalize();
        let b = (positions[peers[1].1] - p).normalize();
        let angle = a.dot(&b).clamp(-1.0, 1.0).acos();
        sum += inverse_gaussian(angle * INV_PI, target_over_pi, width);
    }
    Some(sum / positions.len() as f64)
}
