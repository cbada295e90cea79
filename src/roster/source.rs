//! Roster sources
//!
//! A [`RosterSource`] yields roster records in row order. Sources are
//! concatenated in the order given, so a supplemental file listed after the
//! main roster is appended after it.

use super::RosterRecord;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Which columns of a roster table matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLayout {
    pub label_column: String,
    pub attribute_columns: Vec<String>,
}

impl RosterLayout {
    pub fn new(label_column: impl Into<String>, attribute_columns: Vec<String>) -> Self {
        Self {
            label_column: label_column.into(),
            attribute_columns,
        }
    }

    /// Build a record by looking up each column through `cell`
    ///
    /// Columns `cell` does not know are recorded as absent.
    pub fn build_record<F>(&self, cell: F) -> RosterRecord
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut record = RosterRecord::new(cell(&self.label_column).as_deref());
        for column in &self.attribute_columns {
            record.set_attribute(column.clone(), cell(column).as_deref());
        }
        record
    }
}

impl Default for RosterLayout {
    fn default() -> Self {
        let schema = crate::pipeline::AttributeSchema::default();
        Self::new(super::builtin::LABEL_COLUMN, schema.attribute_names())
    }
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Human-readable origin, for logs
    fn name(&self) -> String;

    async fn load(&self, layout: &RosterLayout) -> Result<Vec<RosterRecord>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
    Yaml,
    Toml,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(RosterFormat::Csv),
            "json" => Ok(RosterFormat::Json),
            "yaml" | "yml" => Ok(RosterFormat::Yaml),
            "toml" => Ok(RosterFormat::Toml),
            _ => Err(Error::Roster(format!(
                "Cannot detect roster format of '{}' (expected .csv, .json, .yaml, .yml or .toml)",
                path.display()
            ))),
        }
    }
}

/// Roster table stored in a file
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
    format: RosterFormat,
}

impl FileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = RosterFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

}

#[async_trait]
impl RosterSource for FileRoster {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self, layout: &RosterLayout) -> Result<Vec<RosterRecord>> {
        let data = fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes of {:?} from {}", data.len(), self.format, self.path.display());
        parse_roster(&data, self.format, layout)
    }
}

/// Decode roster text in `format`
pub fn parse_roster(data: &str, format: RosterFormat, layout: &RosterLayout) -> Result<Vec<RosterRecord>> {
    match format {
        RosterFormat::Csv => parse_csv(data, layout),
        RosterFormat::Json => {
            let value: Value = serde_json::from_str(data)?;
            rows_from_json(value, layout)
        }
        RosterFormat::Yaml => {
            let parsed: serde_yaml::Value = serde_yaml::from_str(data)?;
            rows_from_json(serde_json::to_value(parsed)?, layout)
        }
        RosterFormat::Toml => {
            let mut table: toml::Table = toml::from_str(data)?;
            let rows = table.remove("rows").ok_or_else(|| {
                Error::Roster("TOML roster must contain a [[rows]] array".to_string())
            })?;
            rows_from_json(serde_json::to_value(rows)?, layout)
        }
    }
}

fn parse_csv(data: &str, layout: &RosterLayout) -> Result<Vec<RosterRecord>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let headers = reader.headers()?.clone();

    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| (header.trim(), i))
        .collect();

    if !index.contains_key(layout.label_column.as_str()) {
        return Err(Error::Roster(format!(
            "Label column '{}' not found in CSV header",
            layout.label_column
        )));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(layout.build_record(|column| {
            index
                .get(column)
                .and_then(|&i| row.get(i))
                .map(str::to_string)
        }));
    }

    Ok(records)
}

fn rows_from_json(value: Value, layout: &RosterLayout) -> Result<Vec<RosterRecord>> {
    let rows = match value {
        Value::Array(rows) => rows,
        _ => {
            return Err(Error::Roster(
                "Roster must be a list of rows".to_string(),
            ))
        }
    };

    let label_column = layout.label_column.as_str();
    let has_label = |row: &Value| !row.is_object() || row.get(label_column).is_some();
    if !rows.is_empty() && !rows.iter().any(has_label) {
        return Err(Error::Roster(format!(
            "Label column '{}' not found in any row",
            label_column
        )));
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| -> Result<RosterRecord> {
            match row {
                Value::Object(map) => {
                    for column in std::iter::once(&layout.label_column).chain(&layout.attribute_columns) {
                        if let Some(cell) = map.get(column) {
                            scalar_to_string(cell).map_err(|kind| {
                                Error::Roster(format!(
                                    "Row {}: column '{}' holds {}, expected a scalar",
                                    index, column, kind
                                ))
                            })?;
                        }
                    }
                    Ok(layout.build_record(|column| {
                        map.get(column).and_then(|cell| scalar_to_string(cell).ok().flatten())
                    }))
                }
                _ => Err(Error::Roster(format!("Row {} is not a mapping", index))),
            }
        })
        .collect()
}

/// Stringify a scalar cell; `null` is absent
fn scalar_to_string(value: &Value) -> std::result::Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err("a list"),
        Value::Object(_) => Err("a mapping"),
    }
}

/// Load every source in order and concatenate the rows
pub async fn load_all(
    sources: &[Box<dyn RosterSource>],
    layout: &RosterLayout,
) -> Result<Vec<RosterRecord>> {
    let mut records = Vec::new();
    for source in sources {
        let rows = source.load(layout).await?;
        info!("Loaded {} roster rows from {}", rows.len(), source.name());
        records.extend(rows);
    }
    Ok(records)
}
