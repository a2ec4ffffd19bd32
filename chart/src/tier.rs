//! Effectiveness tiers for display and grouping

/// The six multipliers a single or dual type interaction can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Effectiveness {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Effectiveness {
    /// All tiers, weakest first
    pub const ALL: [Effectiveness; 6] = [
        Effectiveness::Immune,
        Effectiveness::Quarter,
        Effectiveness::Half,
        Effectiveness::Neutral,
        Effectiveness::Double,
        Effectiveness::Quadruple,
    ];

    /// Classify a multiplier; `None` for values outside the six tiers
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tier| (tier.multiplier() - multiplier).abs() < 1e-9)
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Quarter => 0.25,
            Effectiveness::Half => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Double => 2.0,
            Effectiveness::Quadruple => 4.0,
        }
    }

    /// Short label ("0×", "¼×", "½×", "1×", "2×", "4×")
    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "0×",
            Effectiveness::Quarter => "¼×",
            Effectiveness::Half => "½×",
            Effectiveness::Neutral => "1×",
            Effectiveness::Double => "2×",
            Effectiveness::Quadruple => "4×",
        }
    }

    pub fn is_super_effective(&self) -> bool {
        matches!(self, Effectiveness::Double | Effectiveness::Quadruple)
    }

    pub fn is_resisted(&self) -> bool {
        matches!(
            self,
            Effectiveness::Immune | Effectiveness::Quarter | Effectiveness::Half
        )
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
