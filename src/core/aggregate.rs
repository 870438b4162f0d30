use crate::domain::model::{ActivitySeries, Period, StationTable};
use crate::utils::error::{EtlError, Result};
use std::collections::BTreeMap;

/// Derive the span of years to analyze from the monthly measurement
/// bounds: `min(m_start)..max(m_end)`, end-exclusive. Stations without
/// bounds are skipped; a table yielding no bounds at all is an error.
pub fn data_period(table: &StationTable) -> Result<Period> {
    let start = table
        .iter()
        .filter_map(|station| station.m_start)
        .min()
        .ok_or(EtlError::EmptyPeriod)?;
    let end = table
        .iter()
        .filter_map(|station| station.m_end)
        .max()
        .ok_or(EtlError::EmptyPeriod)?;

    Ok(Period { start, end })
}

/// Count the stations active in each year of the period. Brute-force
/// years × stations scan, positionally aligned with `period.years()`.
pub fn count_stations(table: &StationTable, period: &Period) -> Vec<u32> {
    period
        .years()
        .map(|year| table.iter().filter(|station| station.active_in(year)).count() as u32)
        .collect()
}

/// Collect the `(longitude, latitude)` of every station active in each
/// year of the period. Same scan as `count_stations`, so for any year the
/// list length equals the count.
pub fn station_locations(table: &StationTable, period: &Period) -> BTreeMap<i32, Vec<(f64, f64)>> {
    period
        .years()
        .map(|year| {
            let coords = table
                .iter()
                .filter(|station| station.active_in(year))
                .map(|station| (station.lon, station.lat))
                .collect();
            (year, coords)
        })
        .collect()
}

/// Run the full aggregation stage over a parsed table.
pub fn aggregate(table: &StationTable) -> Result<ActivitySeries> {
    let period = data_period(table)?;
    let counts = count_stations(table, &period);
    let locations = station_locations(table, &period);

    Ok(ActivitySeries {
        period,
        counts,
        locations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Station;

    fn station(grdc_no: u64, lon: f64, lat: f64, m_start: i32, m_end: i32) -> Station {
        Station {
            grdc_no,
            name: None,
            river: None,
            country: None,
            lat,
            lon,
            d_start: None,
            d_end: None,
            d_yrs: None,
            d_miss: None,
            m_start: Some(m_start),
            m_end: Some(m_end),
            m_yrs: None,
            m_miss: None,
            f_import: None,
            l_import: None,
        }
    }

    fn two_station_table() -> StationTable {
        StationTable::new(vec![
            station(1, 10.0, 50.0, 2000, 2005),
            station(2, -60.0, -15.0, 2003, 2010),
        ])
    }

    #[test]
    fn test_period_spans_global_bounds() {
        let period = data_period(&two_station_table()).unwrap();
        assert_eq!(period, Period { start: 2000, end: 2010 });
        assert_eq!(period.years().next(), Some(2000));
        // End-exclusive: the final m_end year is not analyzed.
        assert_eq!(period.years().last(), Some(2009));
    }

    #[test]
    fn test_empty_table_fails_period_derivation() {
        let result = data_period(&StationTable::default());
        assert!(matches!(result, Err(EtlError::EmptyPeriod)));
    }

    #[test]
    fn test_table_without_bounds_fails_period_derivation() {
        let mut lone = station(1, 0.0, 0.0, 2000, 2001);
        lone.m_start = None;
        lone.m_end = None;
        let result = data_period(&StationTable::new(vec![lone]));
        assert!(matches!(result, Err(EtlError::EmptyPeriod)));
    }

    #[test]
    fn test_count_scenario() {
        let table = two_station_table();
        let series = aggregate(&table).unwrap();

        assert_eq!(series.count_for(2001), Some(1));
        assert_eq!(series.count_for(2004), Some(2));
        // 2010 falls outside the end-exclusive period.
        assert_eq!(series.count_for(2010), None);
    }

    #[test]
    fn test_counts_within_bounds() {
        let table = two_station_table();
        let series = aggregate(&table).unwrap();

        for (year, count) in series.period.years().zip(series.counts.iter()) {
            assert!(*count as usize <= table.len());
            // Every counted station must cover the year.
            let covering = table.iter().filter(|s| s.active_in(year)).count();
            assert_eq!(covering as u32, *count);
        }
    }

    #[test]
    fn test_counts_agree_with_locations() {
        let table = two_station_table();
        let series = aggregate(&table).unwrap();

        assert_eq!(series.counts.len(), series.period.len());
        assert_eq!(series.locations.len(), series.period.len());
        for (year, count) in series.period.years().zip(series.counts.iter()) {
            assert_eq!(series.locations[&year].len(), *count as usize);
        }
    }

    #[test]
    fn test_locations_carry_lon_lat_pairs() {
        let table = two_station_table();
        let locations = station_locations(&table, &Period { start: 2004, end: 2005 });

        let year_2004 = &locations[&2004];
        assert_eq!(year_2004.len(), 2);
        assert!(year_2004.contains(&(10.0, 50.0)));
        assert!(year_2004.contains(&(-60.0, -15.0)));
    }

    #[test]
    fn test_years_with_no_active_stations_are_empty() {
        let table = StationTable::new(vec![
            station(1, 0.0, 0.0, 2000, 2001),
            station(2, 0.0, 0.0, 2005, 2006),
        ]);
        let series = aggregate(&table).unwrap();

        assert_eq!(series.count_for(2003), Some(0));
        assert!(series.locations[&2003].is_empty());
    }

    #[test]
    fn test_station_missing_bounds_never_counted() {
        let mut unbounded = station(3, 0.0, 0.0, 0, 0);
        unbounded.m_start = None;
        unbounded.m_end = None;

        let table = StationTable::new(vec![station(1, 0.0, 0.0, 2000, 2002), unbounded]);
        let series = aggregate(&table).unwrap();

        assert_eq!(series.count_for(2000), Some(1));
        assert_eq!(series.count_for(2001), Some(1));
    }
}
