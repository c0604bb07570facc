use super::ModelError;
use nalgebra::{Matrix3, Point3, Vector3};

/// A 3-D periodic lattice defined by three basis vectors.
///
/// The basis is stored row-wise (rows are the lattice vectors **a**, **b**,
/// **c**), matching the usual crystallographic convention where a fractional
/// coordinate row vector is multiplied by the basis matrix to obtain a
/// Cartesian position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    matrix: Matrix3<f64>,
    /// Columns are a, b, c; maps fractional to Cartesian.
    cart_map: Matrix3<f64>,
    /// Inverse of `cart_map`; maps Cartesian back to fractional.
    frac_map: Matrix3<f64>,
}

impl Lattice {
    /// Creates a lattice from a row-wise basis matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SingularLattice`] if the basis vectors are
    /// linearly dependent.
    pub fn new(matrix: Matrix3<f64>) -> Result<Self, ModelError> {
        let cart_map = matrix.transpose();
        let frac_map = cart_map
            .try_inverse()
            .ok_or(ModelError::SingularLattice)?;
        Ok(Self {
            matrix,
            cart_map,
            frac_map,
        })
    }

    /// Creates a lattice from three basis vectors.
    pub fn from_vectors(
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
    ) -> Result<Self, ModelError> {
        Self::new(Matrix3::from_rows(&[a.transpose(), b.transpose(), c.transpose()]))
    }

    /// A cubic lattice with edge length `a`.
    pub fn cubic(a: f64) -> Self {
        Self::orthorhombic(a, a, a)
    }

    /// An orthorhombic lattice with edge lengths `a`, `b`, `c`.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        let matrix = Matrix3::from_diagonal(&Vector3::new(a, b, c));
        Self {
            matrix,
            cart_map: matrix,
            frac_map: Matrix3::from_diagonal(&Vector3::new(1.0 / a, 1.0 / b, 1.0 / c)),
        }
    }

    /// A hexagonal lattice with basal edge `a` and height `c`.
    pub fn hexagonal(a: f64, c: f64) -> Result<Self, ModelError> {
        Self::from_parameters(a, a, c, 90.0, 90.0, 120.0)
    }

    /// Creates a lattice from cell lengths (Å) and angles (degrees).
    ///
    /// Uses the standard construction placing **c** along z and **a** in the
    /// x-z plane.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, ModelError> {
        let (ar, br, gr) = (alpha.to_radians(), beta.to_radians(), gamma.to_radians());
        let val = (ar.cos() * br.cos() - gr.cos()) / (ar.sin() * br.sin());
        let gamma_star = val.clamp(-1.0, 1.0).acos();
        let va = Vector3::new(a * br.sin(), 0.0, a * br.cos());
        let vb = Vector3::new(
            -b * ar.sin() * gamma_star.cos(),
            b * ar.sin() * gamma_star.sin(),
            b * ar.cos(),
        );
        let vc = Vector3::new(0.0, 0.0, c);
        Self::from_vectors(va, vb, vc)
    }

    /// The row-wise basis matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// The unit cell volume.
    pub fn volume(&self) -> f64 {
        self.cart_map.determinant().abs()
    }

    /// Converts a fractional coordinate to a Cartesian position.
    pub fn cartesian(&self, frac: &Vector3<f64>) -> Point3<f64> {
        Point3::from(self.cart_map * frac)
    }

    /// Converts a Cartesian position to a fractional coordinate.
    pub fn fractional(&self, cart: &Point3<f64>) -> Vector3<f64> {
        self.frac_map * cart.coords
    }

    /// The Cartesian translation of the periodic image `(i, j, k)`.
    pub fn image_shift(&self, image: [i32; 3]) -> Vector3<f64> {
        self.cart_map
            * Vector3::new(
                f64::from(image[0]),
                f64::from(image[1]),
                f64::from(image[2]),
            )
    }

    /// Perpendicular distances between opposite faces of the unit cell.
    ///
    /// The minimum of the three bounds how far a single shell of periodic
    /// images is guaranteed to reach; the neighbor enumerator uses it to size
    /// its image search.
    pub fn perpendicular_widths(&self) -> [f64; 3] {
        let a = self.matrix.row(0).transpose();
        let b = self.matrix.row(1).transpose();
        let c = self.matrix.row(2).transpose();
        let volume = self.volume();
        [
            volume / b.cross(&c).norm(),
            volume / c.cross(&a).norm(),
            volume / a.cross(&b).norm(),
        ]
    }
}
