use std::io::Write;

use detachment_search::{CsvFileSource, DetachmentSource, SearchError};
use tempfile::NamedTempFile;

fn roster_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loads_valid_roster_from_disk() {
    let file = roster_file(
        "detachment_number,name,city,state,latitude,longitude\n\
         9,First Coast,Jacksonville,FL,30.3322,-81.6557\n\
         144,Golden Isles,Brunswick,GA,31.1499,-81.4915\n",
    );
    let roster = CsvFileSource::new(file.path()).load().unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].number, "144");
    assert_eq!(roster[1].state, "GA");
}

#[test]
fn test_missing_latitude_column_names_it() {
    let file = roster_file(
        "detachment_number,name,city,state,longitude\n9,First Coast,Jacksonville,FL,-81.6557\n",
    );
    let err = CsvFileSource::new(file.path()).load().unwrap_err();
    assert!(err.to_string().contains("latitude"));
    match err {
        SearchError::MissingColumns { columns } => assert_eq!(columns, vec!["latitude"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_coordinate_on_line_three() {
    let file = roster_file(
        "detachment_number,name,city,state,latitude,longitude\n\
         9,First Coast,Jacksonville,FL,30.3322,-81.6557\n\
         12,St. Johns River,Orange Park,FL,abc,-81.7065\n",
    );
    let err = CsvFileSource::new(file.path()).load().unwrap_err();
    match err {
        SearchError::InvalidCoordinate { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_state_may_be_empty() {
    let file = roster_file(
        "detachment_number,name,city,state,latitude,longitude\n\
         9,First Coast,Jacksonville,,30.3322,-81.6557\n",
    );
    let roster = CsvFileSource::new(file.path()).load().unwrap();
    assert_eq!(roster[0].state, "");
}
