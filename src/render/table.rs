use crate::error::{Error, Result};
use crate::pipeline::{AggregatedRegion, AttributeSchema};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TableFormat {
    Json,
    Csv,
    Text,
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Json => write!(f, "json"),
            TableFormat::Csv => write!(f, "csv"),
            TableFormat::Text => write!(f, "text"),
        }
    }
}

/// Render the aggregated table in `format`
pub fn render_table(
    regions: &[AggregatedRegion],
    schema: &AttributeSchema,
    format: TableFormat,
) -> Result<String> {
    match format {
        TableFormat::Json => Ok(serde_json::to_string_pretty(regions)?),
        TableFormat::Csv => render_csv(regions, schema),
        TableFormat::Text => Ok(regions
            .iter()
            .map(|region| format!("{}\n", region.display_text))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_csv(regions: &[AggregatedRegion], schema: &AttributeSchema) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![schema.region_label.as_str()];
    header.extend(schema.attributes.iter().map(|a| a.label.as_str()));
    writer.write_record(&header)?;

    for region in regions {
        let mut row = vec![region.region.as_str()];
        row.extend(
            schema
                .attributes
                .iter()
                .map(|a| region.value(&a.name).unwrap_or_default()),
        );
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
