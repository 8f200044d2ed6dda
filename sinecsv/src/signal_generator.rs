use nalgebra::DVector;

use crate::variant::Variant;

pub fn angles(variant: Variant) -> DVector<f64> {
    DVector::from_iterator(
        variant.sample_count(),
        variant.indices().map(|t| variant.angle(t)),
    )
}

pub fn generate_sine_wave(x: &DVector<f64>) -> DVector<f64> {
    x.map(|e| e.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SineSamples {
    pub angles: DVector<f64>,
    pub values: DVector<f64>,
}

impl SineSamples {
    pub fn new(angles: DVector<f64>) -> Self {
        let values = generate_sine_wave(&angles);
        Self { angles, values }
    }

    pub fn generate(variant: Variant) -> Self {
        Self::new(angles(variant))
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angles.iter().copied().zip(self.values.iter().copied())
    }
}
