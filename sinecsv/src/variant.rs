use std::f64::consts::PI;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    FullPeriod,
    CentiStep,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::FullPeriod, Variant::CentiStep];

    pub fn sample_count(&self) -> usize {
        match self {
            Variant::FullPeriod => 1000,
            Variant::CentiStep => 628,
        }
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        match self {
            Variant::FullPeriod => 1..=self.sample_count(),
            Variant::CentiStep => 0..=self.sample_count() - 1,
        }
    }

    pub fn angle(&self, t: usize) -> f64 {
        match self {
            // Evaluated left to right so the angles match ((t * 2) * pi) / 1000 bit for bit.
            Variant::FullPeriod => t as f64 * 2.0 * PI / 1000.0,
            Variant::CentiStep => t as f64 / 100.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::FullPeriod => "full-period",
            Variant::CentiStep => "centi-step",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("unknown variant `{}` (expected full-period or centi-step)", s))
    }
}
