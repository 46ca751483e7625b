use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::StringRecord;

use crate::domain::model::Detachment;
use crate::domain::ports::DetachmentSource;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{validate_latitude, validate_longitude};

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "detachment_number",
    "name",
    "city",
    "state",
    "latitude",
    "longitude",
];

/// File-backed roster source. The file handle lives only for the duration of
/// `load` and is closed on every exit path.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DetachmentSource for CsvFileSource {
    fn load(&self) -> Result<Vec<Detachment>> {
        tracing::debug!("Reading roster from {}", self.path.display());
        let file = File::open(&self.path)?;
        read_detachments(file)
    }
}

struct ColumnIndex {
    number: usize,
    name: usize,
    city: usize,
    state: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |column: &str| headers.iter().position(|h| h.trim() == column);

        let mut missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(column).is_none())
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(SearchError::MissingColumns { columns: missing });
        }

        // All positions exist after the check above.
        let require = |column: &str| -> Result<usize> {
            position(column).ok_or_else(|| SearchError::MissingColumns {
                columns: vec![column.to_string()],
            })
        };

        Ok(Self {
            number: require("detachment_number")?,
            name: require("name")?,
            city: require("city")?,
            state: require("state")?,
            latitude: require("latitude")?,
            longitude: require("longitude")?,
        })
    }
}

/// Parses a roster from any reader. Header row required; extra columns are
/// ignored; rows that are entirely blank are skipped. Line numbers in errors
/// are 1-based and count the header as line 1.
pub fn read_detachments<R: Read>(reader: R) -> Result<Vec<Detachment>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SearchError::MissingHeader);
    }
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut detachments = Vec::new();
    for row in csv_reader.records() {
        let record = row?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());

        let latitude = parse_coordinate(&record, columns.latitude, "latitude", line)?;
        let longitude = parse_coordinate(&record, columns.longitude, "longitude", line)?;
        validate_latitude(latitude).map_err(|e| coordinate_error(line, &e))?;
        validate_longitude(longitude).map_err(|e| coordinate_error(line, &e))?;

        detachments.push(Detachment::new(
            field(&record, columns.number),
            field(&record, columns.name),
            field(&record, columns.city),
            field(&record, columns.state),
            latitude,
            longitude,
        ));
    }

    Ok(detachments)
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("").trim()
}

fn parse_coordinate(record: &StringRecord, index: usize, name: &str, line: u64) -> Result<f64> {
    let raw = field(record, index);
    raw.parse::<f64>().map_err(|_| SearchError::InvalidCoordinate {
        line,
        reason: format!("cannot parse {} value {:?}", name, raw),
    })
}

fn coordinate_error(line: u64, cause: &SearchError) -> SearchError {
    SearchError::InvalidCoordinate {
        line,
        reason: cause.to_string(),
    }
}
