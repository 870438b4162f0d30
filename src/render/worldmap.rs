//! Static map background: coarse continent silhouettes filled grey over a
//! light graticule. The outlines are hand-digitized at roughly 5 degree
//! fidelity, which is plenty at the figure's map resolution.

use crate::utils::error::{EtlError, Result};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

const LAND: RGBColor = RGBColor(0xcc, 0xcc, 0xcc);

/// Draw the graticule and continent fills. Called once per frame before
/// the dynamic elements; the background never changes between frames.
pub fn draw_background<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> Result<()> {
    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.08))
        .draw()
        .map_err(EtlError::render)?;

    for outline in LAND_OUTLINES {
        chart
            .draw_series(std::iter::once(Polygon::new(outline.to_vec(), LAND.filled())))
            .map_err(EtlError::render)?;
    }

    Ok(())
}

pub const LAND_OUTLINES: &[&[(f64, f64)]] = &[
    NORTH_AMERICA,
    SOUTH_AMERICA,
    AFRICA,
    EURASIA,
    AUSTRALIA,
    GREENLAND,
    ANTARCTICA,
];

const NORTH_AMERICA: &[(f64, f64)] = &[
    (-168.0, 65.0),
    (-166.0, 60.0),
    (-152.0, 58.0),
    (-140.0, 59.0),
    (-125.0, 49.0),
    (-120.0, 34.0),
    (-110.0, 23.0),
    (-105.0, 19.0),
    (-95.0, 16.0),
    (-84.0, 10.0),
    (-78.0, 8.0),
    (-83.0, 14.0),
    (-90.0, 21.0),
    (-97.0, 26.0),
    (-90.0, 29.0),
    (-82.0, 25.0),
    (-80.0, 32.0),
    (-75.0, 35.0),
    (-70.0, 42.0),
    (-60.0, 46.0),
    (-65.0, 60.0),
    (-78.0, 62.0),
    (-85.0, 66.0),
    (-95.0, 68.0),
    (-110.0, 68.0),
    (-125.0, 70.0),
    (-140.0, 70.0),
    (-156.0, 71.0),
];

const SOUTH_AMERICA: &[(f64, f64)] = &[
    (-78.0, 8.0),
    (-72.0, 12.0),
    (-64.0, 10.0),
    (-52.0, 4.0),
    (-44.0, -2.0),
    (-35.0, -8.0),
    (-39.0, -17.0),
    (-42.0, -23.0),
    (-48.0, -28.0),
    (-53.0, -34.0),
    (-58.0, -39.0),
    (-65.0, -45.0),
    (-68.0, -52.0),
    (-70.0, -54.0),
    (-73.0, -50.0),
    (-75.0, -46.0),
    (-73.0, -37.0),
    (-71.0, -30.0),
    (-70.0, -18.0),
    (-75.0, -14.0),
    (-81.0, -5.0),
    (-80.0, 1.0),
];

const AFRICA: &[(f64, f64)] = &[
    (-6.0, 35.0),
    (-17.0, 21.0),
    (-17.0, 15.0),
    (-12.0, 8.0),
    (-4.0, 5.0),
    (8.0, 4.0),
    (9.0, -1.0),
    (12.0, -6.0),
    (12.0, -17.0),
    (14.0, -22.0),
    (17.0, -33.0),
    (20.0, -35.0),
    (28.0, -33.0),
    (33.0, -27.0),
    (35.0, -22.0),
    (40.0, -15.0),
    (40.0, -10.0),
    (41.0, -2.0),
    (51.0, 12.0),
    (43.0, 12.0),
    (37.0, 22.0),
    (32.0, 31.0),
    (20.0, 33.0),
    (10.0, 37.0),
];

const EURASIA: &[(f64, f64)] = &[
    (-10.0, 36.0),
    (-9.0, 43.0),
    (-2.0, 47.0),
    (0.0, 50.0),
    (9.0, 54.0),
    (8.0, 58.0),
    (11.0, 65.0),
    (18.0, 70.0),
    (30.0, 70.0),
    (45.0, 68.0),
    (60.0, 69.0),
    (75.0, 72.0),
    (90.0, 75.0),
    (110.0, 76.0),
    (130.0, 72.0),
    (150.0, 70.0),
    (170.0, 68.0),
    (178.0, 66.0),
    (170.0, 60.0),
    (162.0, 56.0),
    (155.0, 50.0),
    (142.0, 54.0),
    (140.0, 48.0),
    (130.0, 42.0),
    (122.0, 39.0),
    (121.0, 31.0),
    (114.0, 22.0),
    (109.0, 18.0),
    (105.0, 10.0),
    (104.0, 1.0),
    (100.0, 8.0),
    (98.0, 14.0),
    (94.0, 16.0),
    (90.0, 22.0),
    (85.0, 19.0),
    (80.0, 13.0),
    (77.0, 8.0),
    (73.0, 16.0),
    (68.0, 23.0),
    (66.0, 25.0),
    (57.0, 25.0),
    (58.0, 22.0),
    (55.0, 17.0),
    (45.0, 13.0),
    (43.0, 12.0),
    (35.0, 28.0),
    (34.0, 30.0),
    (36.0, 36.0),
    (30.0, 36.0),
    (27.0, 37.0),
    (23.0, 36.0),
    (20.0, 40.0),
    (18.0, 40.0),
    (15.0, 38.0),
    (12.0, 42.0),
    (9.0, 44.0),
    (4.0, 43.0),
    (0.0, 39.0),
    (-2.0, 37.0),
    (-5.0, 36.0),
];

const AUSTRALIA: &[(f64, f64)] = &[
    (114.0, -22.0),
    (114.0, -35.0),
    (124.0, -33.0),
    (130.0, -32.0),
    (136.0, -35.0),
    (140.0, -38.0),
    (147.0, -38.0),
    (150.0, -37.0),
    (153.0, -32.0),
    (153.0, -25.0),
    (146.0, -19.0),
    (142.0, -11.0),
    (136.0, -12.0),
    (132.0, -11.0),
    (126.0, -14.0),
    (122.0, -18.0),
];

const GREENLAND: &[(f64, f64)] = &[
    (-45.0, 60.0),
    (-53.0, 65.0),
    (-55.0, 70.0),
    (-60.0, 75.0),
    (-68.0, 78.0),
    (-60.0, 82.0),
    (-45.0, 83.0),
    (-30.0, 83.0),
    (-20.0, 80.0),
    (-22.0, 75.0),
    (-20.0, 70.0),
    (-25.0, 66.0),
    (-40.0, 62.0),
];

const ANTARCTICA: &[(f64, f64)] = &[
    (-180.0, -90.0),
    (-180.0, -72.0),
    (-120.0, -74.0),
    (-90.0, -72.0),
    (-60.0, -64.0),
    (-40.0, -72.0),
    (0.0, -70.0),
    (60.0, -67.0),
    (120.0, -66.0),
    (180.0, -70.0),
    (180.0, -90.0),
];
