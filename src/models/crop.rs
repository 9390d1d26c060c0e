use serde::{Deserialize, Serialize};

/// How a field's area is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    /// base x height, for row-planted fields
    Rectangle,
    /// pi * r^2, for center-pivot irrigated fields
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crop {
    Soy,
    Corn,
    /// Unrecognized crop, label preserved as entered
    Other(String),
}

impl Crop {
    /// Interpret a free-text crop label. Never fails: anything that is not
    /// a recognized soy or corn spelling becomes `Other` with the label kept.
    pub fn from_label(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "soy" | "soybean" | "soybeans" => Crop::Soy,
            "corn" | "maize" => Crop::Corn,
            _ => Crop::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Crop::Soy => "soy",
            Crop::Corn => "corn",
            Crop::Other(label) => label,
        }
    }

    /// Corn fields are measured as center-pivot circles; everything else
    /// falls back to the rectangle formula.
    pub fn geometry(&self) -> Geometry {
        match self {
            Crop::Corn => Geometry::Circle,
            Crop::Soy | Crop::Other(_) => Geometry::Rectangle,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
