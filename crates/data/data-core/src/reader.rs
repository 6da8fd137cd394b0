//! CSV parsing for tracker exports and local snapshots.
//!
//! Both layouts are accepted: the raw export (`Date` as `YYYYMMDD`,
//! `ConfirmedCases`/`ConfirmedDeaths`) and the snapshot written by
//! [`write_snapshot`](crate::snapshot::write_snapshot) (`Date` as `YYYY-MM-DD`,
//! `Cumulative Cases`/`Cumulative Deaths`). Bytes are decoded as ISO-8859-1.
//! Rows that fail to parse are skipped and counted rather than failing the load.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder};
use data_spi::{DataError, Jurisdiction, Observation, ObservationTable, Result, Statistic};

const DATE: &str = "Date";
const COUNTRY: &str = "CountryName";
const REGION: &str = "RegionName";
const JURISDICTION: &str = "Jurisdiction";

/// Parse a tracker date, either `YYYYMMDD` or `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| DataError::InvalidDate(raw.to_string()))
}

/// Read every parseable observation from a CSV stream.
///
/// Fails only when the header is unusable, the stream cannot be read, or no
/// row survives parsing.
pub fn read_observations<R: Read>(input: R) -> Result<ObservationTable> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader
        .byte_headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut record = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => match columns.parse(&record) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            },
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(DataError::Io(e.to_string())),
            Err(e) => {
                tracing::trace!(error = %e, "skipping malformed CSV record");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, kept = rows.len(), "skipped malformed tracker rows");
    }
    if rows.is_empty() {
        return Err(DataError::NoData);
    }
    tracing::debug!(rows = rows.len(), "parsed tracker rows");
    Ok(ObservationTable::new(rows))
}

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    country: usize,
    region: Option<usize>,
    jurisdiction: usize,
    cases: usize,
    deaths: usize,
}

impl Columns {
    fn resolve(headers: &ByteRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|field| clean_header(&latin1(field)))
            .collect();
        let find = |name: &str| names.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| DataError::MissingColumn(name.to_string()));
        let counter = |stat: Statistic| {
            find(stat.display_name())
                .or_else(|| find(stat.source_column()))
                .ok_or_else(|| DataError::MissingColumn(stat.source_column().to_string()))
        };

        Ok(Self {
            date: require(DATE)?,
            country: require(COUNTRY)?,
            region: find(REGION),
            jurisdiction: require(JURISDICTION)?,
            cases: counter(Statistic::CumulativeCases)?,
            deaths: counter(Statistic::CumulativeDeaths)?,
        })
    }

    fn parse(&self, record: &ByteRecord) -> Option<Observation> {
        let text = |idx: usize| record.get(idx).map(latin1);

        let date = parse_date(&text(self.date)?).ok()?;
        let country = text(self.country)?.trim().to_string();
        if country.is_empty() {
            return None;
        }
        let region = self
            .region
            .and_then(text)
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        let jurisdiction = Jurisdiction::from_code(&text(self.jurisdiction)?);
        let cases = parse_count(record.get(self.cases))?;
        let deaths = parse_count(record.get(self.deaths))?;

        Some(Observation {
            date,
            country,
            region,
            jurisdiction,
            cases,
            deaths,
        })
    }
}

/// Outer `None` marks a malformed value, inner `None` an empty cell.
fn parse_count(field: Option<&[u8]>) -> Option<Option<f64>> {
    let raw = match field {
        Some(bytes) => latin1(bytes),
        None => return Some(None),
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Some(None);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(Some)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn clean_header(name: &str) -> String {
    // UTF-8 byte order mark as seen through ISO-8859-1
    name.trim_start_matches("\u{ef}\u{bb}\u{bf}")
        .trim_start_matches('\u{feff}')
        .trim()
        .to_string()
}
