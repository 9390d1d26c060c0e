use crate::error::{FieldOpsError, Result};
use crate::logic::{dosage, geometry};
use crate::models::{Application, ApplicationMode, Crop, FieldRecord, Geometry, Unit};
use crate::store::RecordStore;
use crate::ui::prompts;
use std::path::Path;

const MENU_ITEMS: &[&str] = &[
    "Insert record",
    "List records",
    "Update record",
    "Delete record",
    "Export CSV",
    "Quit",
];

/// The interactive loop: one awaiting state, five operations, each
/// returning here on completion, cancellation, or validation failure.
pub fn run(store: &mut RecordStore, export_path: &Path) -> Result<()> {
    println!("=== FieldOps ===");
    loop {
        println!();
        match prompts::select("Choose an operation", MENU_ITEMS, 0)? {
            Some(0) => insert(store)?,
            Some(1) => list(store),
            Some(2) => update(store)?,
            Some(3) => delete(store)?,
            Some(4) => export(store, export_path),
            _ => {
                println!("Bye!");
                return Ok(());
            }
        }
    }
}

fn insert(store: &mut RecordStore) -> Result<()> {
    println!("\n== Insert record ==");

    let crop = match prompt_crop()? {
        Some(crop) => crop,
        None => {
            println!("Insertion cancelled.");
            return Ok(());
        }
    };
    let area_ha = prompt_area(&crop)?;
    let product = prompts::text("Product (e.g. fosfato, herbicide x)")?;

    let default_index = match dosage::suggest_mode(&product) {
        ApplicationMode::PerLength => 0,
        ApplicationMode::PerArea => 1,
    };
    let application = match prompts::select(
        "Application mode",
        &[
            "Per length: dose in mL/m, scaled by rows",
            "Per area: dose in kg/ha or L/ha",
        ],
        default_index,
    )? {
        Some(0) => prompt_per_length()?,
        Some(1) => prompt_per_area(&product, area_ha)?,
        _ => {
            println!("Insertion cancelled.");
            return Ok(());
        }
    };

    let index = store.insert(FieldRecord::new(crop, area_ha, product, application));
    println!("Record inserted at index {index}.");
    Ok(())
}

fn list(store: &RecordStore) {
    println!("\n== Records ==");
    if store.is_empty() {
        println!("(empty)");
        return;
    }
    for (index, record) in store.iter().enumerate() {
        println!("[{index}] {record}");
    }
}

fn update(store: &mut RecordStore) -> Result<()> {
    println!("\n== Update record ==");
    if store.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    let index = match prompts::record_index("Record index", store.len())? {
        Some(index) => index,
        None => {
            println!("Invalid index.");
            return Ok(());
        }
    };

    match prompts::select(
        "What to change",
        &[
            "Recompute area",
            "Recompute inputs",
            "Change crop label",
            "Change product label",
            "Cancel",
        ],
        0,
    )? {
        Some(0) => {
            let crop = store.get(index)?.crop.clone();
            let area_ha = prompt_area(&crop)?;
            store.get_mut(index)?.set_area(area_ha);
            println!("Area updated.");
        }
        Some(1) => {
            let (mode, product, area_ha) = {
                let record = store.get(index)?;
                (
                    record.application.mode(),
                    record.product.clone(),
                    record.area_ha,
                )
            };
            let application = match mode {
                ApplicationMode::PerLength => prompt_per_length()?,
                ApplicationMode::PerArea => prompt_per_area(&product, area_ha)?,
            };
            store.get_mut(index)?.application = application;
            println!("Inputs recomputed.");
        }
        Some(2) => {
            // label change only, the stored area is kept as-is
            let label = prompts::text("New crop")?;
            store.get_mut(index)?.crop = Crop::from_label(&label);
            println!("Crop updated.");
        }
        Some(3) => {
            store.get_mut(index)?.product = prompts::text("New product")?;
            println!("Product updated.");
        }
        _ => println!("Cancelled."),
    }
    Ok(())
}

fn delete(store: &mut RecordStore) -> Result<()> {
    println!("\n== Delete record ==");
    if store.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    let index = match prompts::record_index("Record index", store.len())? {
        Some(index) => index,
        None => {
            println!("Invalid index.");
            return Ok(());
        }
    };

    if prompts::confirm(&format!("Delete record {index}?"))? {
        store.remove(index)?;
        println!("Removed.");
    } else {
        println!("Kept.");
    }
    Ok(())
}

fn export(store: &RecordStore, path: &Path) {
    println!("\n== Export CSV ==");
    match store.export_csv(path) {
        Ok(()) => println!(
            "Exported {} record(s) to {}",
            store.len(),
            path.display()
        ),
        Err(FieldOpsError::NothingToExport) => {
            println!("Nothing to export: insert a record first.");
        }
        Err(e) => println!("Export failed: {e}"),
    }
}

fn prompt_crop() -> Result<Option<Crop>> {
    let crop = match prompts::select("Crop", &["Soy", "Corn", "Other"], 0)? {
        Some(0) => Crop::Soy,
        Some(1) => Crop::Corn,
        Some(2) => {
            let label = prompts::text("Crop name")?;
            let crop = Crop::from_label(&label);
            if let Crop::Other(_) = crop {
                println!("Unmapped crop, using the rectangle formula for area.");
            }
            crop
        }
        _ => return Ok(None),
    };
    Ok(Some(crop))
}

fn prompt_area(crop: &Crop) -> Result<f64> {
    let area_ha = match crop.geometry() {
        Geometry::Rectangle => {
            let base = prompts::positive_f64("Field base (m)")?;
            let height = prompts::positive_f64("Field height (m)")?;
            geometry::rectangle_area_ha(base, height)
        }
        Geometry::Circle => {
            let radius = prompts::positive_f64("Pivot radius (m)")?;
            geometry::circular_area_ha(radius)
        }
    };
    println!("Computed area: {area_ha:.4} ha");
    Ok(area_ha)
}

fn prompt_per_length() -> Result<Application> {
    let dose_ml_per_m = prompts::positive_f64("Dose (mL per meter)")?;
    let row_count = prompts::row_count("Number of rows")?;
    let row_length_m = prompts::positive_f64("Average row length (m)")?;
    Ok(Application::per_length(dose_ml_per_m, row_count, row_length_m))
}

fn prompt_per_area(product: &str, area_ha: f64) -> Result<Application> {
    let suggested = dosage::suggest_unit(product);
    let raw = prompts::text_with_default("Unit [kg/ha or L/ha]", suggested.as_str())?;
    let unit = Unit::from_input(&raw);
    let dose_per_ha = prompts::positive_f64(&format!("Dose ({unit})"))?;
    Ok(Application::per_area(dose_per_ha, unit, area_ha))
}
