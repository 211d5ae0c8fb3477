use std::fmt;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// One user-entered record. Ratings are already validated against
/// [`RATING_MIN`]..=[`RATING_MAX`] when the collector builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Initiative {
    pub name: String,
    pub cost: f64,
    pub value: f64,
}

impl Initiative {
    pub fn new(name: impl Into<String>, cost: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }

    /// Quadrant relative to `midpoint`; a rating on the line counts as high.
    pub fn quadrant(&self, midpoint: f64) -> Quadrant {
        match (self.value >= midpoint, self.cost >= midpoint) {
            (true, false) => Quadrant::HighValueLowCost,
            (true, true) => Quadrant::HighValueHighCost,
            (false, false) => Quadrant::LowValueLowCost,
            (false, true) => Quadrant::LowValueHighCost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    HighValueLowCost,
    HighValueHighCost,
    LowValueLowCost,
    LowValueHighCost,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighValueLowCost,
        Quadrant::HighValueHighCost,
        Quadrant::LowValueLowCost,
        Quadrant::LowValueHighCost,
    ];

    pub fn caption(&self) -> &'static str {
        match self {
            Quadrant::HighValueLowCost => "High Value, Low Cost",
            Quadrant::HighValueHighCost => "High Value, High Cost",
            Quadrant::LowValueLowCost => "Low Value, Low Cost",
            Quadrant::LowValueHighCost => "Low Value, High Cost",
        }
    }

    pub fn is_high_cost(&self) -> bool {
        matches!(self, Quadrant::HighValueHighCost | Quadrant::LowValueHighCost)
    }

    pub fn is_high_value(&self) -> bool {
        matches!(self, Quadrant::HighValueLowCost | Quadrant::HighValueHighCost)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_classification() {
        assert_eq!(Initiative::new("a", 1.0, 5.0).quadrant(3.0), Quadrant::HighValueLowCost);
        assert_eq!(Initiative::new("b", 5.0, 5.0).quadrant(3.0), Quadrant::HighValueHighCost);
        assert_eq!(Initiative::new("c", 1.0, 1.0).quadrant(3.0), Quadrant::LowValueLowCost);
        assert_eq!(Initiative::new("d", 5.0, 1.0).quadrant(3.0), Quadrant::LowValueHighCost);
    }

    #[test]
    fn test_midpoint_counts_as_high() {
        let centre = Initiative::new("X", 3.0, 3.0);
        assert_eq!(centre.quadrant(3.0), Quadrant::HighValueHighCost);
    }
}
