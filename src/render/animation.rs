use crate::domain::model::ActivitySeries;
use crate::render::worldmap;
use crate::utils::error::{EtlError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 12x4in figure at ~100dpi.
pub const FIGURE_SIZE: (u32, u32) = (1200, 400);

const SERIES_COLOR: RGBColor = RGBColor(0xff, 0x80, 0x00);

/// Frame-state for the time-lapse: owns the aggregates and draws one
/// frame per year. Frame `i` shows the count line through the first `i`
/// years, the scatter of year `i`'s active stations, and a year label.
pub struct TimeLapse {
    series: ActivitySeries,
    frame_interval_ms: u32,
}

impl TimeLapse {
    pub fn new(series: ActivitySeries, frame_interval_ms: u32) -> Self {
        Self {
            series,
            frame_interval_ms,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.series.period.len()
    }

    /// Render every frame into an animated GIF at `output`.
    pub fn render(&self, output: &Path) -> Result<()> {
        let root = BitMapBackend::gif(output, FIGURE_SIZE, self.frame_interval_ms)
            .map_err(EtlError::render)?
            .into_drawing_area();

        for frame in 0..self.frame_count() {
            self.draw_frame(&root, frame)?;
            root.present().map_err(EtlError::render)?;
        }

        Ok(())
    }

    fn draw_frame(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>, frame: usize) -> Result<()> {
        root.fill(&WHITE).map_err(EtlError::render)?;
        let (chart_area, map_area) = root.split_horizontally((FIGURE_SIZE.0 / 3) as i32);
        self.draw_count_line(&chart_area, frame)?;
        self.draw_map(&map_area, frame)?;
        Ok(())
    }

    /// Left panel: running line of active-station counts.
    fn draw_count_line(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        frame: usize,
    ) -> Result<()> {
        let period = self.series.period;
        let y_max = self.series.counts.iter().copied().max().unwrap_or(0).max(1);

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(period.start..period.end, 0u32..y_max + 1 + y_max / 20)
            .map_err(EtlError::render)?;

        chart
            .configure_mesh()
            .x_desc("Time (year)")
            .y_desc("GRDC stations")
            .light_line_style(BLACK.mix(0.15))
            .draw()
            .map_err(EtlError::render)?;

        let drawn = period
            .years()
            .zip(self.series.counts.iter().copied())
            .take(frame);
        chart
            .draw_series(LineSeries::new(drawn, SERIES_COLOR.stroke_width(3)))
            .map_err(EtlError::render)?;

        Ok(())
    }

    /// Right panel: world map with this year's station locations.
    fn draw_map(&self, area: &DrawingArea<BitMapBackend<'_>, Shift>, frame: usize) -> Result<()> {
        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .build_cartesian_2d(-180.0f64..180.0, -90.0f64..90.0)
            .map_err(EtlError::render)?;

        worldmap::draw_background(&mut chart)?;

        let year = self
            .series
            .period
            .year_at(frame)
            .ok_or_else(|| EtlError::render(format!("frame {} out of range", frame)))?;

        let empty = Vec::new();
        let coords = self.series.locations.get(&year).unwrap_or(&empty);
        chart
            .draw_series(
                coords
                    .iter()
                    .filter(|(lon, lat)| lon.is_finite() && lat.is_finite())
                    .map(|&(lon, lat)| Circle::new((lon, lat), 2, SERIES_COLOR.filled())),
            )
            .map_err(EtlError::render)?;

        chart
            .draw_series(std::iter::once(Text::new(
                year.to_string(),
                (120.0, 75.0),
                ("sans-serif", 22),
            )))
            .map_err(EtlError::render)?;

        Ok(())
    }
}
