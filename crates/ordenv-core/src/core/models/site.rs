use nalgebra::Vector3;

/// A single periodic site: a species label at a fractional coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    species: String,
    frac: Vector3<f64>,
}

impl Site {
    pub fn new(species: &str, frac: Vector3<f64>) -> Self {
        Self {
            species: species.to_string(),
            frac,
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn frac_coords(&self) -> &Vector3<f64> {
        &self.frac
    }
}
