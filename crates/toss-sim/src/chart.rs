//! Chart sinks writing running frequencies for external plotting tools.

use std::io::{self, Write};

use serde::Serialize;
use toss_core::{ChartFrame, ChartSink, FrequencyPoint};

use crate::config::ChartFormat;

/// Writes `position,frequency` rows preceded by a commented frame line.
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChartSink for CsvSink<W> {
    type Error = io::Error;

    fn render(
        &mut self,
        frame: &ChartFrame,
        points: &mut dyn Iterator<Item = FrequencyPoint>,
    ) -> Result<(), Self::Error> {
        writeln!(
            self.writer,
            "# side={} y=[{},{}] reference={}",
            frame.label, frame.y_min, frame.y_max, frame.reference
        )?;
        let mut rows = csv::Writer::from_writer(&mut self.writer);
        for point in points {
            rows.serialize(point)?;
        }
        rows.flush()
    }
}

#[derive(Serialize)]
struct ChartDocument<'a> {
    frame: &'a ChartFrame,
    points: Vec<FrequencyPoint>,
}

/// Writes a single JSON document holding the frame and every point.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChartSink for JsonSink<W> {
    type Error = io::Error;

    fn render(
        &mut self,
        frame: &ChartFrame,
        points: &mut dyn Iterator<Item = FrequencyPoint>,
    ) -> Result<(), Self::Error> {
        let document = ChartDocument {
            frame,
            points: points.collect(),
        };
        serde_json::to_writer(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Boxes the sink matching `format`.
pub fn sink_for<'a, W: Write + 'a>(
    format: ChartFormat,
    writer: W,
) -> Box<dyn ChartSink<Error = io::Error> + 'a> {
    match format {
        ChartFormat::Csv => Box::new(CsvSink::new(writer)),
        ChartFormat::Json => Box::new(JsonSink::new(writer)),
    }
}
