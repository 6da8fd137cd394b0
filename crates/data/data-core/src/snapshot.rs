//! Local snapshot of the tracker table.
//!
//! The snapshot keeps only the columns the dashboard reads, puts `Date` first in
//! ISO format and renames the counters to their display names.

use std::io::Write;

use csv::{ByteRecord, WriterBuilder};
use data_spi::{DataError, ObservationTable, Result};

const HEADER: [&str; 6] = [
    "Date",
    "CountryName",
    "RegionName",
    "Jurisdiction",
    "Cumulative Cases",
    "Cumulative Deaths",
];

/// Write the table in snapshot layout. Returns the number of rows written.
pub fn write_snapshot<W: Write>(table: &ObservationTable, output: W) -> Result<usize> {
    let mut writer = WriterBuilder::new().from_writer(output);
    let write_err = |e: csv::Error| DataError::Io(e.to_string());

    let mut header = ByteRecord::new();
    for name in HEADER {
        header.push_field(name.as_bytes());
    }
    writer.write_byte_record(&header).map_err(write_err)?;

    let mut record = ByteRecord::new();
    for row in table {
        record.clear();
        record.push_field(row.date.format("%Y-%m-%d").to_string().as_bytes());
        record.push_field(&to_latin1(&row.country));
        record.push_field(&to_latin1(row.region.as_deref().unwrap_or("")));
        record.push_field(row.jurisdiction.as_code().as_bytes());
        record.push_field(format_count(row.cases).as_bytes());
        record.push_field(format_count(row.deaths).as_bytes());
        writer.write_byte_record(&record).map_err(write_err)?;
    }
    writer.flush()?;
    Ok(table.len())
}

/// Fetch the latest export and replace the snapshot at `config.cache_path`.
#[cfg(feature = "fetch")]
pub fn download_latest(config: &crate::SourceConfig) -> Result<usize> {
    use data_spi::DataSource;

    let table = crate::RemoteCsvSource::from_config(config).load_observations()?;
    if let Some(parent) = config.cache_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&config.cache_path)?;
    let written = write_snapshot(&table, std::io::BufWriter::new(file))?;
    tracing::info!(rows = written, path = %config.cache_path.display(), "wrote tracker snapshot");
    Ok(written)
}

fn format_count(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
