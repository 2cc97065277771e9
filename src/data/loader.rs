use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::LoadError;
use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column headers of the launch table. Other columns are ignored.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch-table column names
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – one column per field, string and numeric Arrow types
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    LaunchDataset::from_records(records)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate one row's fields and build the record.
fn build_record(
    row: usize,
    site: String,
    payload_mass_kg: f64,
    class: f64,
    booster: String,
) -> Result<LaunchRecord, LoadError> {
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(LoadError::malformed(
            row,
            PAYLOAD_COLUMN,
            format!("payload mass must be a non-negative number, got {payload_mass_kg}"),
        ));
    }
    let outcome = Outcome::from_class_f64(class).ok_or_else(|| {
        LoadError::malformed(row, CLASS_COLUMN, format!("expected 0 or 1, got {class}"))
    })?;
    Ok(LaunchRecord::new(site, payload_mass_kg, outcome, booster))
}

fn parse_number(row: usize, column: &'static str, text: &str) -> Result<f64, LoadError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::malformed(row, column, format!("'{text}' is not a number")))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(open(path)?);
    let headers = reader.headers()?.clone();

    let mut idx = [0usize; 4];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }
    let [site_idx, payload_idx, class_idx, booster_idx] = idx;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or("");

        let payload = parse_number(row, PAYLOAD_COLUMN, field(payload_idx))?;
        let class = parse_number(row, CLASS_COLUMN, field(class_idx))?;
        records.push(build_record(
            row,
            field(site_idx).to_string(),
            payload,
            class,
            field(booster_idx).to_string(),
        )?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    let reader = std::io::BufReader::new(open(path)?);
    let rows: Vec<Map<String, JsonValue>> = serde_json::from_reader(reader)?;

    if let Some(first) = rows.first() {
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !first.contains_key(**c)) {
            return Err(LoadError::MissingColumn(*missing));
        }
    }

    rows.iter()
        .enumerate()
        .map(|(row, obj)| {
            build_record(
                row,
                json_string(obj, row, SITE_COLUMN)?,
                json_number(obj, row, PAYLOAD_COLUMN)?,
                json_number(obj, row, CLASS_COLUMN)?,
                json_string(obj, row, BOOSTER_COLUMN)?,
            )
        })
        .collect()
}

fn json_string(
    obj: &Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<String, LoadError> {
    match obj.get(column) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(other) => Err(LoadError::malformed(
            row,
            column,
            format!("expected a string, got {other}"),
        )),
        None => Err(LoadError::malformed(row, column, "missing value")),
    }
}

fn json_number(
    obj: &Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    match obj.get(column) {
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| LoadError::malformed(row, column, format!("{n} is out of range"))),
        Some(JsonValue::String(s)) => parse_number(row, column, s),
        Some(other) => Err(LoadError::malformed(
            row,
            column,
            format!("expected a number, got {other}"),
        )),
        None => Err(LoadError::malformed(row, column, "missing value")),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet launch table.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): strings may be `Utf8` or `LargeUtf8`,
/// numbers any of the common integer / float widths.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?.build()?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        let schema = batch.schema();

        let mut cols: Vec<&ArrayRef> = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for name in REQUIRED_COLUMNS {
            let idx = schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name))?;
            cols.push(batch.column(idx));
        }

        let offset = records.len();
        for i in 0..batch.num_rows() {
            let row = offset + i;
            records.push(build_record(
                row,
                arrow_string(cols[0], i, row, SITE_COLUMN)?,
                arrow_number(cols[1], i, row, PAYLOAD_COLUMN)?,
                arrow_number(cols[2], i, row, CLASS_COLUMN)?,
                arrow_string(cols[3], i, row, BOOSTER_COLUMN)?,
            )?);
        }
    }

    Ok(records)
}

// -- Arrow helpers --

fn arrow_string(
    col: &ArrayRef,
    i: usize,
    row: usize,
    column: &'static str,
) -> Result<String, LoadError> {
    if col.is_null(i) {
        return Err(LoadError::malformed(row, column, "null value"));
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(i).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(i).to_string()),
        other => Err(LoadError::malformed(
            row,
            column,
            format!("expected a string column, got {other:?}"),
        )),
    }
}

fn arrow_number(
    col: &ArrayRef,
    i: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    if col.is_null(i) {
        return Err(LoadError::malformed(row, column, "null value"));
    }
    match col.data_type() {
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(i) as f64),
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(i) as f64),
        DataType::Float32 => Ok(col.as_primitive::<Float32Type>().value(i) as f64),
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(i)),
        other => Err(LoadError::malformed(
            row,
            column,
            format!("expected a numeric column, got {other:?}"),
        )),
    }
}
