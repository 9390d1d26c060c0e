use crate::logic::dosage;
use crate::models::Crop;
use serde::{Deserialize, Serialize};

/// Dosing unit for per-area applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    KgPerHa,
    LPerHa,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::KgPerHa => "kg/ha",
            Unit::LPerHa => "L/ha",
        }
    }

    /// The unit of the computed total (the part before the "/ha").
    pub fn quantity_label(&self) -> &'static str {
        match self {
            Unit::KgPerHa => "kg",
            Unit::LPerHa => "L",
        }
    }

    /// Interpret free-text unit entry by substring match: anything
    /// mentioning "kg" means kg/ha, everything else liquid L/ha.
    pub fn from_input(s: &str) -> Self {
        if s.to_lowercase().contains("kg") {
            Unit::KgPerHa
        } else {
            Unit::LPerHa
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu-facing application mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationMode {
    PerLength,
    PerArea,
}

impl ApplicationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationMode::PerLength => "per-length",
            ApplicationMode::PerArea => "per-area",
        }
    }
}

impl std::fmt::Display for ApplicationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An input application with its mode-specific inputs and derived total.
/// Totals are only ever produced by the constructors, never entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Application {
    PerLength {
        dose_ml_per_m: f64,
        row_count: u32,
        row_length_m: f64,
        total_liters: f64,
    },
    PerArea {
        dose_per_ha: f64,
        unit: Unit,
        total_quantity: f64,
    },
}

impl Application {
    pub fn per_length(dose_ml_per_m: f64, row_count: u32, row_length_m: f64) -> Self {
        Application::PerLength {
            dose_ml_per_m,
            row_count,
            row_length_m,
            total_liters: dosage::per_length_total_liters(dose_ml_per_m, row_count, row_length_m),
        }
    }

    pub fn per_area(dose_per_ha: f64, unit: Unit, area_ha: f64) -> Self {
        Application::PerArea {
            dose_per_ha,
            unit,
            total_quantity: dosage::per_area_total_quantity(dose_per_ha, area_ha),
        }
    }

    pub fn mode(&self) -> ApplicationMode {
        match self {
            Application::PerLength { .. } => ApplicationMode::PerLength,
            Application::PerArea { .. } => ApplicationMode::PerArea,
        }
    }
}

/// One field/application event: a crop's measured area plus the input
/// applied to it. The record's index in the store is its only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub crop: Crop,
    pub area_ha: f64,
    pub product: String,
    pub application: Application,
}

impl FieldRecord {
    pub fn new(crop: Crop, area_ha: f64, product: String, application: Application) -> Self {
        Self {
            crop,
            area_ha,
            product,
            application,
        }
    }

    /// Replace the area and keep derived quantities consistent: a per-area
    /// total depends on the area, a per-length total does not.
    pub fn set_area(&mut self, area_ha: f64) {
        self.area_ha = area_ha;
        if let Application::PerArea {
            dose_per_ha, unit, ..
        } = self.application
        {
            self.application = Application::per_area(dose_per_ha, unit, area_ha);
        }
    }
}

impl std::fmt::Display for FieldRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "crop={}, area={} ha, product={}",
            self.crop, self.area_ha, self.product
        )?;
        match &self.application {
            Application::PerLength {
                dose_ml_per_m,
                row_count,
                row_length_m,
                total_liters,
            } => write!(
                f,
                ", dose={} mL/m, rows={}, length={} m, total={} L",
                dose_ml_per_m, row_count, row_length_m, total_liters
            ),
            Application::PerArea {
                dose_per_ha,
                unit,
                total_quantity,
            } => write!(
                f,
                ", dose={} {}, total={} {}",
                dose_per_ha,
                unit,
                total_quantity,
                unit.quantity_label()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_from_input_substring_match() {
        assert_eq!(Unit::from_input("kg/ha"), Unit::KgPerHa);
        assert_eq!(Unit::from_input("KG"), Unit::KgPerHa);
        assert_eq!(Unit::from_input("l/ha"), Unit::LPerHa);
        assert_eq!(Unit::from_input("liters"), Unit::LPerHa);
        assert_eq!(Unit::from_input(""), Unit::LPerHa);
    }

    #[test]
    fn per_length_constructor_derives_total() {
        let app = Application::per_length(2.0, 10, 150.0);
        match app {
            Application::PerLength { total_liters, .. } => assert_eq!(total_liters, 3.0),
            _ => panic!("expected per-length application"),
        }
    }

    #[test]
    fn per_area_constructor_derives_total() {
        let app = Application::per_area(40.0, Unit::KgPerHa, 0.5);
        match app {
            Application::PerArea { total_quantity, .. } => assert_eq!(total_quantity, 20.0),
            _ => panic!("expected per-area application"),
        }
    }

    #[test]
    fn set_area_recomputes_per_area_total() {
        let mut record = FieldRecord::new(
            Crop::Soy,
            0.5,
            "fosfato".into(),
            Application::per_area(40.0, Unit::KgPerHa, 0.5),
        );
        record.set_area(2.0);
        assert_eq!(record.area_ha, 2.0);
        match record.application {
            Application::PerArea { total_quantity, .. } => assert_eq!(total_quantity, 80.0),
            _ => panic!("expected per-area application"),
        }
    }

    #[test]
    fn set_area_leaves_per_length_total_alone() {
        let mut record = FieldRecord::new(
            Crop::Corn,
            1.0,
            "herbicide x".into(),
            Application::per_length(1.5, 20, 100.0),
        );
        record.set_area(3.0);
        assert_eq!(record.area_ha, 3.0);
        match record.application {
            Application::PerLength { total_liters, .. } => assert_eq!(total_liters, 3.0),
            _ => panic!("expected per-length application"),
        }
    }

    #[test]
    fn record_display_per_area() {
        let record = FieldRecord::new(
            Crop::Soy,
            0.5,
            "fosfato".into(),
            Application::per_area(40.0, Unit::KgPerHa, 0.5),
        );
        assert_eq!(
            record.to_string(),
            "crop=soy, area=0.5 ha, product=fosfato, dose=40 kg/ha, total=20 kg"
        );
    }

    #[test]
    fn record_display_per_length() {
        let record = FieldRecord::new(
            Crop::Corn,
            1.2,
            "herbicide x".into(),
            Application::per_length(1.5, 20, 100.0),
        );
        assert_eq!(
            record.to_string(),
            "crop=corn, area=1.2 ha, product=herbicide x, dose=1.5 mL/m, rows=20, length=100 m, total=3 L"
        );
    }
}
