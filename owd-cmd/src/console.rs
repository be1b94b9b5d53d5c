//! Plain-text stand-ins for the chart, map and prediction surfaces.

use owd_api::models::{MapStateEntry, Prediction};
use owd_panels::charts::{ChartKind, ChartRenderer, ChartSpec};
use owd_panels::map::{LatLng, MapBackend, TileSource};
use owd_panels::prediction::{result_rows, PredictionView};
use std::cell::RefCell;
use std::io::Write;

/// Writes every panel as text to `out`; alerts go to `err`.
pub struct Console<W: Write, E: Write> {
    out: RefCell<W>,
    err: RefCell<E>,
    markers: usize,
}

impl Console<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            markers: 0,
        }
    }

    pub fn markers(&self) -> usize {
        self.markers
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn line(&self, text: &str) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", text) {
            log::warn!("stdout write failed: {}", e);
        }
    }
}

impl<W: Write, E: Write> ChartRenderer for Console<W, E> {
    fn render(&self, target: &str, spec: &ChartSpec) {
        let kind = match spec.kind {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        };
        let width = spec.data.labels.iter().map(String::len).max().unwrap_or(0);
        for dataset in &spec.data.datasets {
            self.line(&format!("== {} ({} chart, {})", dataset.label, kind, target));
            for (label, value) in spec.data.labels.iter().zip(&dataset.data) {
                self.line(&format!("{:<width$}  {}", label, value, width = width));
            }
        }
    }
}

impl<W: Write, E: Write> MapBackend for Console<W, E> {
    fn set_visible(&mut self, _visible: bool) {}

    fn create_map(&mut self, center: LatLng, zoom: u8, tiles: &TileSource) {
        self.line(&format!(
            "== Map centred at ({}, {}), zoom {} [{}]",
            center.lat, center.lon, zoom, tiles.attribution
        ));
    }

    fn add_marker(&mut self, position: LatLng, entry: &MapStateEntry) {
        self.markers += 1;
        self.line(&format!(
            "({:>8.3}, {:>9.3})  {}, Total Wells: {}, Avg Millions of Barrels/Year: {}",
            position.lat, position.lon, entry.state, entry.total_wells, entry.avg_production
        ));
    }
}

impl<W: Write, E: Write> PredictionView for Console<W, E> {
    fn alert(&self, message: &str) {
        if let Err(e) = writeln!(self.err.borrow_mut(), "{}", message) {
            log::warn!("stderr write failed: {}", e);
        }
    }

    fn show_results(&self, prediction: &Prediction) {
        self.line("== Prediction Results");
        for (label, value) in result_rows(prediction) {
            self.line(&format!("{}: {}", label, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owd_api::models::TrendPoint;
    use owd_panels::charts::trend_chart;
    use owd_panels::map::OSM_TILES;

    fn console() -> Console<Vec<u8>, Vec<u8>> {
        Console::new(Vec::new(), Vec::new())
    }

    fn stdout_of(console: Console<Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().0).unwrap()
    }

    #[test]
    fn chart_prints_rows_in_order() {
        let console = console();
        let spec = trend_chart(&[
            TrendPoint { year: 2021, total_oil_production: 5.0 },
            TrendPoint { year: 2020, total_oil_production: 7.5 },
        ]);
        console.render("trendChart", &spec);

        let out = stdout_of(console);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "== Total Oil Production (Barrels) (line chart, trendChart)");
        assert_eq!(lines[1], "2021  5");
        assert_eq!(lines[2], "2020  7.5");
    }

    #[test]
    fn marker_prints_entry_fields_as_text() {
        let mut console = console();
        console.create_map(LatLng { lat: 37.8, lon: -96.0 }, 4, &OSM_TILES);
        let entry = MapStateEntry {
            state: "A&M <Brazos>".to_string(),
            lat: Some(30.6),
            lon: Some(-96.3),
            total_wells: 12,
            avg_production: 0.5,
        };
        console.add_marker(LatLng { lat: 30.6, lon: -96.3 }, &entry);

        assert_eq!(console.markers(), 1);
        let out = stdout_of(console);
        let marker = out.lines().nth(1).unwrap();
        assert_eq!(
            marker,
            "(  30.600,   -96.300)  A&M <Brazos>, Total Wells: 12, Avg Millions of Barrels/Year: 0.5"
        );
    }

    #[test]
    fn alerts_go_to_stderr() {
        let console = console();
        console.alert("Error: model unavailable");
        let (out, err) = console.into_parts();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Error: model unavailable\n");
    }
}
