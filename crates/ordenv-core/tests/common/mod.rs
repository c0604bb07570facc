//! Canonical fixture structures shared by the integration tests.
//!
//! Each constructor builds an idealized local environment around site 0
//! (lattices are large enough that periodic images stay out of reach unless
//! a test asks for them).
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use ordenv::core::models::{Lattice, Structure};

pub fn cart(lattice: Lattice, species: &[&str], coords: &[[f64; 3]]) -> Structure {
    let points: Vec<Point3<f64>> = coords
        .iter()
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect();
    Structure::from_cartesian(lattice, species, &points).unwrap()
}

pub fn frac(lattice: Lattice, species: &[&str], coords: &[[f64; 3]]) -> Structure {
    let vectors: Vec<Vector3<f64>> = coords
        .iter()
        .map(|c| Vector3::new(c[0], c[1], c[2]))
        .collect();
    Structure::from_fractional(lattice, species, &vectors).unwrap()
}

pub fn single_bond() -> Structure {
    cart(
        Lattice::cubic(10.0),
        &["H"; 3],
        &[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [6.0, 0.0, 0.0]],
    )
}

pub fn linear() -> Structure {
    cart(
        Lattice::cubic(10.0),
        &["H"; 3],
        &[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
    )
}

pub fn bent45() -> Structure {
    cart(
        Lattice::cubic(10.0),
        &["H"; 3],
        &[[0.0, 0.0, 0.0], [0.707, 0.707, 0.0], [0.707, 0.0, 0.0]],
    )
}

pub fn simple_cubic() -> Structure {
    frac(Lattice::cubic(1.0), &["H"], &[[0.0, 0.0, 0.0]])
}

pub fn body_centered_cubic() -> Structure {
    frac(
        Lattice::cubic(1.0),
        &["H"; 2],
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
    )
}

pub fn face_centered_cubic() -> Structure {
    frac(
        Lattice::cubic(1.0),
        &["H"; 4],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.5, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.5, 0.0],
        ],
    )
}

pub fn hexagonal_close_packed() -> Structure {
    frac(
        Lattice::hexagonal(1.0, 1.633).unwrap(),
        &["H"; 2],
        &[[0.3333, 0.6667, 0.25], [0.6667, 0.3333, 0.75]],
    )
}

pub fn diamond() -> Structure {
    frac(
        Lattice::cubic(1.0),
        &["H"; 8],
        &[
            [0.0, 0.0, 0.5],
            [0.75, 0.75, 0.75],
            [0.0, 0.5, 0.0],
            [0.75, 0.25, 0.25],
            [0.5, 0.0, 0.0],
            [0.25, 0.75, 0.25],
            [0.5, 0.5, 0.5],
            [0.25, 0.25, 0.75],
        ],
    )
}

pub fn trigonal_off_plane() -> Structure {
    cart(
        Lattice::cubic(100.0),
        &["H"; 4],
        &[
            [0.50, 0.50, 0.50],
            [0.25, 0.75, 0.25],
            [0.25, 0.25, 0.75],
            [0.75, 0.25, 0.25],
        ],
    )
}

pub fn regular_triangle() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 4],
        &[
            [15.0, 15.28867, 15.65],
            [14.5, 15.0, 15.0],
            [15.5, 15.0, 15.0],
            [15.0, 15.866, 15.0],
        ],
    )
}

pub fn trigonal_planar() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 4],
        &[
            [15.0, 15.28867, 15.0],
            [14.5, 15.0, 15.0],
            [15.5, 15.0, 15.0],
            [15.0, 15.866, 15.0],
        ],
    )
}

pub fn square_planar() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 5],
        &[
            [15.0, 15.0, 15.0],
            [14.75, 14.75, 15.0],
            [14.75, 15.25, 15.0],
            [15.25, 14.75, 15.0],
            [15.25, 15.25, 15.0],
        ],
    )
}

pub fn square() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 5],
        &[
            [15.0, 15.0, 15.707],
            [14.75, 14.75, 15.0],
            [14.75, 15.25, 15.0],
            [15.25, 14.75, 15.0],
            [15.25, 15.25, 15.0],
        ],
    )
}

pub fn t_shape() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 4],
        &[
            [15.0, 15.0, 15.0],
            [15.0, 15.0, 15.5],
            [15.0, 15.5, 15.0],
            [15.0, 14.5, 15.0],
        ],
    )
}

pub fn square_pyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 6],
        &[
            [15.0, 15.0, 15.0],
            [15.0, 15.0, 15.3535],
            [14.75, 14.75, 15.0],
            [14.75, 15.25, 15.0],
            [15.25, 14.75, 15.0],
            [15.25, 15.25, 15.0],
        ],
    )
}

pub fn pentagonal_planar() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["Xe", "F", "F", "F", "F", "F"],
        &[
            [0.0, -1.6237, 0.0],
            [1.17969, 0.0, 0.0],
            [-1.17969, 0.0, 0.0],
            [1.90877, -2.24389, 0.0],
            [-1.90877, -2.24389, 0.0],
            [0.0, -3.6307, 0.0],
        ],
    )
}

pub fn pentagonal_pyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["Xe", "F", "F", "F", "F", "F", "F"],
        &[
            [0.0, -1.6237, 0.0],
            [0.0, -1.6237, 1.17969],
            [1.17969, 0.0, 0.0],
            [-1.17969, 0.0, 0.0],
            [1.90877, -2.24389, 0.0],
            [-1.90877, -2.24389, 0.0],
            [0.0, -3.6307, 0.0],
        ],
    )
}

pub fn pentagonal_bipyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["Xe", "F", "F", "F", "F", "F", "F", "F"],
        &[
            [0.0, -1.6237, 0.0],
            [0.0, -1.6237, -1.17969],
            [0.0, -1.6237, 1.17969],
            [1.17969, 0.0, 0.0],
            [-1.17969, 0.0, 0.0],
            [1.90877, -2.24389, 0.0],
            [-1.90877, -2.24389, 0.0],
            [0.0, -3.6307, 0.0],
        ],
    )
}

pub fn hexagonal_pyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H", "Li", "C", "C", "C", "C", "C", "C"],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.675],
            [0.71, 1.2298, 0.0],
            [-0.71, 1.2298, 0.0],
            [0.71, -1.2298, 0.0],
            [-0.71, -1.2298, 0.0],
            [1.4199, 0.0, 0.0],
            [-1.4199, 0.0, 0.0],
        ],
    )
}

pub fn hexagonal_bipyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H", "Li", "Li", "C", "C", "C", "C", "C", "C"],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.675],
            [0.0, 0.0, -1.675],
            [0.71, 1.2298, 0.0],
            [-0.71, 1.2298, 0.0],
            [0.71, -1.2298, 0.0],
            [-0.71, -1.2298, 0.0],
            [1.4199, 0.0, 0.0],
            [-1.4199, 0.0, 0.0],
        ],
    )
}

pub fn trigonal_pyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["P", "Cl", "Cl", "Cl", "Cl"],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 2.14],
            [0.0, 2.02, 0.0],
            [1.74937, -1.01, 0.0],
            [-1.74937, -1.01, 0.0],
        ],
    )
}

pub fn trigonal_bipyramid() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["P", "Cl", "Cl", "Cl", "Cl", "Cl"],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 2.14],
            [0.0, 2.02, 0.0],
            [1.74937, -1.01, 0.0],
            [-1.74937, -1.01, 0.0],
            [0.0, 0.0, -2.14],
        ],
    )
}

pub fn cuboctahedron() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 13],
        &[
            [15.0, 15.0, 15.0],
            [15.0, 14.5, 14.5],
            [15.0, 14.5, 15.5],
            [15.0, 15.5, 14.5],
            [15.0, 15.5, 15.5],
            [14.5, 15.0, 14.5],
            [14.5, 15.0, 15.5],
            [15.5, 15.0, 14.5],
            [15.5, 15.0, 15.5],
            [14.5, 14.5, 15.0],
            [14.5, 15.5, 15.0],
            [15.5, 14.5, 15.0],
            [15.5, 15.5, 15.0],
        ],
    )
}

pub fn see_saw() -> Structure {
    cart(
        Lattice::cubic(30.0),
        &["H"; 5],
        &[
            [15.0, 15.0, 15.0],
            [15.0, 15.0, 14.0],
            [15.0, 15.0, 16.0],
            [15.0, 14.0, 15.0],
            [14.0, 15.0, 15.0],
        ],
    )
}
