use crate::domain::model::{Station, StationTable};
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// The catalogue ships inside the archive under a year-prefixed name,
/// e.g. `2024_GRDC_Stations.xlsx`; we match on the stable suffix.
pub const STATION_FILE_SUFFIX: &str = "GRDC_Stations.xlsx";
pub const STATION_SHEET: &str = "grdc_metadata";

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Locate the station spreadsheet inside the scratch directory.
pub fn find_station_file(dir: &Path) -> Result<PathBuf> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(STATION_FILE_SUFFIX));
        if matches {
            return Ok(path);
        }
    }

    Err(EtlError::MissingStationFile {
        pattern: STATION_FILE_SUFFIX.to_string(),
        dir: dir.display().to_string(),
    })
}

/// Load the `grdc_metadata` sheet into a station table.
///
/// Numeric columns are coerced leniently (unparseable cells become
/// missing); the two import-date columns are strict, a malformed date is
/// an error. Rows without a station number are skipped.
pub fn parse_station_file(path: &Path) -> Result<StationTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(STATION_SHEET)?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| EtlError::MissingColumn("grdc_no".to_string()))?;
    let columns = Columns::resolve(header)?;

    let mut stations = Vec::new();
    for row in rows {
        let Some(grdc_no) = numeric_cell(cell(row, columns.grdc_no)) else {
            continue;
        };

        stations.push(Station {
            grdc_no: grdc_no as u64,
            name: columns.station.and_then(|i| text_cell(cell(row, i))),
            river: columns.river.and_then(|i| text_cell(cell(row, i))),
            country: columns.country.and_then(|i| text_cell(cell(row, i))),
            lat: numeric_cell(cell(row, columns.lat)).unwrap_or(f64::NAN),
            lon: numeric_cell(cell(row, columns.lon)).unwrap_or(f64::NAN),
            d_start: year_cell(cell(row, columns.d_start)),
            d_end: year_cell(cell(row, columns.d_end)),
            d_yrs: year_cell(cell(row, columns.d_yrs)),
            d_miss: numeric_cell(cell(row, columns.d_miss)),
            m_start: year_cell(cell(row, columns.m_start)),
            m_end: year_cell(cell(row, columns.m_end)),
            m_yrs: year_cell(cell(row, columns.m_yrs)),
            m_miss: numeric_cell(cell(row, columns.m_miss)),
            f_import: date_cell(cell(row, columns.f_import), "f_import")?,
            l_import: date_cell(cell(row, columns.l_import), "l_import")?,
        });
    }

    Ok(StationTable::new(stations))
}

struct Columns {
    grdc_no: usize,
    station: Option<usize>,
    river: Option<usize>,
    country: Option<usize>,
    lat: usize,
    lon: usize,
    d_start: usize,
    d_end: usize,
    d_yrs: usize,
    d_miss: usize,
    m_start: usize,
    m_end: usize,
    m_yrs: usize,
    m_miss: usize,
    f_import: usize,
    l_import: usize,
}

impl Columns {
    fn resolve(header: &[Data]) -> Result<Self> {
        Ok(Self {
            grdc_no: required(header, "grdc_no")?,
            station: optional(header, "station"),
            river: optional(header, "river"),
            country: optional(header, "country"),
            lat: required(header, "lat")?,
            lon: required(header, "long")?,
            d_start: required(header, "d_start")?,
            d_end: required(header, "d_end")?,
            d_yrs: required(header, "d_yrs")?,
            d_miss: required(header, "d_miss")?,
            m_start: required(header, "m_start")?,
            m_end: required(header, "m_end")?,
            m_yrs: required(header, "m_yrs")?,
            m_miss: required(header, "m_miss")?,
            f_import: required(header, "f_import")?,
            l_import: required(header, "l_import")?,
        })
    }
}

fn cell<'a>(row: &'a [Data], index: usize) -> &'a Data {
    row.get(index).unwrap_or(&Data::Empty)
}

fn optional(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim().eq_ignore_ascii_case(name)))
}

fn required(header: &[Data], name: &str) -> Result<usize> {
    optional(header, name).ok_or_else(|| EtlError::MissingColumn(name.to_string()))
}

/// Lenient numeric coercion: unparseable values become missing.
fn numeric_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn year_cell(cell: &Data) -> Option<i32> {
    numeric_cell(cell).map(|value| value as i32)
}

fn text_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Strict date coercion with the catalogue's fixed `%d.%m.%Y` format.
fn date_cell(cell: &Data, column: &str) -> Result<Option<NaiveDate>> {
    match cell {
        Data::Empty => Ok(None),
        Data::DateTime(dt) => Ok(dt.as_datetime().map(|value| value.date())),
        Data::String(s) if s.trim().is_empty() => Ok(None),
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|_| EtlError::DateParseError {
                column: column.to_string(),
                value: s.clone(),
            }),
        other => Err(EtlError::DateParseError {
            column: column.to_string(),
            value: format!("{:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cell_coercion() {
        assert_eq!(numeric_cell(&Data::Float(48.5)), Some(48.5));
        assert_eq!(numeric_cell(&Data::Int(1979)), Some(1979.0));
        assert_eq!(numeric_cell(&Data::String(" 1979 ".to_string())), Some(1979.0));
        assert_eq!(numeric_cell(&Data::String("n/a".to_string())), None);
        assert_eq!(numeric_cell(&Data::Empty), None);
    }

    #[test]
    fn test_year_cell_truncates() {
        assert_eq!(year_cell(&Data::Float(1979.0)), Some(1979));
        assert_eq!(year_cell(&Data::Empty), None);
    }

    #[test]
    fn test_date_cell_fixed_format() {
        let parsed = date_cell(&Data::String("03.11.1999".to_string()), "f_import").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(1999, 11, 3));

        assert_eq!(date_cell(&Data::Empty, "f_import").unwrap(), None);
        assert_eq!(
            date_cell(&Data::String("  ".to_string()), "f_import").unwrap(),
            None
        );
    }

    #[test]
    fn test_date_cell_rejects_other_formats() {
        let result = date_cell(&Data::String("1999-11-03".to_string()), "l_import");
        assert!(matches!(
            result,
            Err(EtlError::DateParseError { ref column, .. }) if column == "l_import"
        ));
    }

    #[test]
    fn test_header_resolution_is_case_insensitive() {
        let header = vec![
            Data::String("GRDC_No".to_string()),
            Data::String("lat".to_string()),
        ];
        assert_eq!(required(&header, "grdc_no").unwrap(), 0);
        assert_eq!(required(&header, "lat").unwrap(), 1);
        assert!(required(&header, "long").is_err());
    }

    #[test]
    fn test_find_station_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_station_file(dir.path());
        assert!(matches!(result, Err(EtlError::MissingStationFile { .. })));
    }

    #[test]
    fn test_find_station_file_matches_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"ignore me").unwrap();
        std::fs::write(dir.path().join("2024_GRDC_Stations.xlsx"), b"stub").unwrap();

        let found = find_station_file(dir.path()).unwrap();
        assert!(found.ends_with("2024_GRDC_Stations.xlsx"));
    }
}
