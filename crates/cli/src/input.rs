//! Loading numeric series from CSV and JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::warn;

use crate::CliResult;

/// Load a series from a CSV file.
///
/// `column` is a header name or a zero-based index; the first column is used
/// when it is omitted. Cells that are empty, unparseable, or non-finite are
/// skipped.
pub fn load_csv_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column {
        Some(col) => headers
            .iter()
            .position(|h| h == col)
            .or_else(|| col.parse::<usize>().ok())
            .ok_or_else(|| format!("Column '{}' not found", col))?,
        None => 0,
    };

    let mut data = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        match record.get(col_idx).and_then(|v| v.trim().parse::<f64>().ok()) {
            Some(num) if num.is_finite() => data.push(num),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, column = col_idx, "skipped non-numeric or non-finite cells");
    }
    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }

    Ok(data)
}

/// Load a series from a JSON file.
///
/// Accepts a bare array of numbers, an array of objects (keyed by `column` or
/// one of `value`, `values`, `data`, `y`), or an object holding such an array.
pub fn load_json_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    extract_series(&json, column).ok_or_else(|| "Could not extract numeric data from JSON".to_string())
}

fn extract_series(json: &serde_json::Value, column: Option<&str>) -> Option<Vec<f64>> {
    if let Some(arr) = json.as_array() {
        if !arr.is_empty() && arr.iter().all(|v| v.is_number()) {
            return Some(finite(arr.iter().filter_map(|v| v.as_f64())));
        }

        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["value", "values", "data", "y"],
        };
        for key in keys {
            let data = finite(arr.iter().filter_map(|obj| obj.get(key).and_then(|v| v.as_f64())));
            if !data.is_empty() {
                return Some(data);
            }
        }
    }

    if let Some(obj) = json.as_object() {
        for key in ["data", "values", "series", "y"] {
            if let Some(inner) = obj.get(key).filter(|v| v.is_array()) {
                if let Some(data) = extract_series(inner, column) {
                    return Some(data);
                }
            }
        }
    }

    None
}

fn finite(values: impl Iterator<Item = f64>) -> Vec<f64> {
    values.filter(|v| v.is_finite()).collect()
}

/// Load data from file, picking the format from the extension.
pub fn load_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_data(path, column),
        "json" => load_json_data(path, column),
        _ => load_csv_data(path, column).or_else(|_| load_json_data(path, column)),
    }
}
