use crate::error::{FieldOpsError, Result};
use crate::models::{Application, FieldRecord};
use crate::store::RecordStore;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Flat CSV row: every record serializes to the same fixed column set, with
/// the fields of the other application mode left empty.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    crop: &'a str,
    area_ha: f64,
    product: &'a str,
    application_mode: &'a str,
    dose_ml_per_m: Option<f64>,
    row_count: Option<u32>,
    row_length_m: Option<f64>,
    total_liters: Option<f64>,
    dose_per_ha: Option<f64>,
    unit: Option<&'a str>,
    total_quantity: Option<f64>,
}

impl<'a> ExportRow<'a> {
    fn from_record(record: &'a FieldRecord) -> Self {
        let mut row = ExportRow {
            crop: record.crop.label(),
            area_ha: record.area_ha,
            product: &record.product,
            application_mode: record.application.mode().as_str(),
            dose_ml_per_m: None,
            row_count: None,
            row_length_m: None,
            total_liters: None,
            dose_per_ha: None,
            unit: None,
            total_quantity: None,
        };
        match &record.application {
            Application::PerLength {
                dose_ml_per_m,
                row_count,
                row_length_m,
                total_liters,
            } => {
                row.dose_ml_per_m = Some(*dose_ml_per_m);
                row.row_count = Some(*row_count);
                row.row_length_m = Some(*row_length_m);
                row.total_liters = Some(*total_liters);
            }
            Application::PerArea {
                dose_per_ha,
                unit,
                total_quantity,
            } => {
                row.dose_per_ha = Some(*dose_per_ha);
                row.unit = Some(unit.as_str());
                row.total_quantity = Some(*total_quantity);
            }
        }
        row
    }
}

impl RecordStore {
    /// Write every record to a comma-separated UTF-8 file with a header row,
    /// overwriting any existing file. An empty store is refused rather than
    /// producing a header-only file.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        if self.is_empty() {
            return Err(FieldOpsError::NothingToExport);
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in self.iter() {
            writer.serialize(ExportRow::from_record(record))?;
        }
        writer.flush()?;

        debug!(path = %path.display(), records = self.len(), "exported csv");
        Ok(())
    }
}
