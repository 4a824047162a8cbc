// File: crates/kpi-demo/src/input.rs
// Summary: Load host rows from JSON (array or {"data": [...]}) or CSV files.

use anyhow::{bail, Context, Result};
use kpi_core::{ChartModel, RawRow};
use serde_json::{Number, Value};
use std::path::Path;

pub fn load_model(path: &Path) -> Result<ChartModel> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text).with_context(|| format!("parsing {}", path.display()))
        }
        "csv" => {
            let rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_path(path)
                .with_context(|| format!("opening {}", path.display()))?;
            Ok(ChartModel::new(read_csv_rows(rdr)?))
        }
        other => bail!("unsupported input extension '{other}' (expected .json or .csv)"),
    }
}

/// Accepts a bare array of rows or a host payload object.
pub fn parse_json(text: &str) -> Result<ChartModel> {
    let v: Value = serde_json::from_str(text)?;
    match v {
        Value::Array(_) => Ok(ChartModel::new(serde_json::from_value(v)?)),
        Value::Object(_) => Ok(serde_json::from_value(v)?),
        _ => bail!("expected an array of rows or an object with a \"data\" array"),
    }
}

/// Header row names the fields; numeric-looking cells become numbers, empty cells are omitted.
pub fn read_csv_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<RawRow>> {
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("csv headers: {:?}", headers);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut row = RawRow::new();
        for (name, cell) in headers.iter().zip(rec.iter()) {
            if cell.is_empty() {
                continue;
            }
            row.insert(name.clone(), csv_cell(cell));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn csv_cell(s: &str) -> Value {
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(s.to_string()))
}
