use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One row of the GRDC station catalogue.
///
/// Only `lat`/`lon` and the monthly measurement bounds (`m_start`/`m_end`)
/// feed the aggregation; the rest is carried through for logging and
/// completeness. Coordinates default to NaN when the sheet leaves them
/// blank, mirroring how the catalogue itself encodes unknown positions.
#[derive(Debug, Clone)]
pub struct Station {
    pub grdc_no: u64,
    pub name: Option<String>,
    pub river: Option<String>,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Daily series bounds and coverage.
    pub d_start: Option<i32>,
    pub d_end: Option<i32>,
    pub d_yrs: Option<i32>,
    pub d_miss: Option<f64>,
    /// Monthly series bounds and coverage.
    pub m_start: Option<i32>,
    pub m_end: Option<i32>,
    pub m_yrs: Option<i32>,
    pub m_miss: Option<f64>,
    /// First and last import into the GRDC database.
    pub f_import: Option<NaiveDate>,
    pub l_import: Option<NaiveDate>,
}

impl Station {
    /// A station is active for a year when the year falls inside its
    /// inclusive monthly measurement range. Stations without bounds are
    /// never active.
    pub fn active_in(&self, year: i32) -> bool {
        match (self.m_start, self.m_end) {
            (Some(start), Some(end)) => year >= start && year <= end,
            _ => false,
        }
    }
}

/// The parsed station catalogue, one record per station row.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    stations: Vec<Station>,
}

impl StationTable {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }
}

/// Contiguous run of years to analyze, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: i32,
    pub end: i32,
}

impl Period {
    pub fn years(&self) -> std::ops::Range<i32> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Year shown in frame `index`, if the index is in range.
    pub fn year_at(&self, index: usize) -> Option<i32> {
        self.years().nth(index)
    }
}

/// Output of the aggregation stage: per-year active-station counts and
/// locations, both aligned with `period.years()`.
#[derive(Debug, Clone)]
pub struct ActivitySeries {
    pub period: Period,
    pub counts: Vec<u32>,
    pub locations: BTreeMap<i32, Vec<(f64, f64)>>,
}

impl ActivitySeries {
    pub fn count_for(&self, year: i32) -> Option<u32> {
        if !self.period.years().contains(&year) {
            return None;
        }
        let index = (year - self.period.start) as usize;
        self.counts.get(index).copied()
    }
}
