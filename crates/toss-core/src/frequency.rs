//! Running frequencies and the boundary to external charting.

use serde::{Deserialize, Serialize};

use crate::series::TossSeries;
use crate::side::Side;

/// Lazy cumulative proportion of one side over a run of outcomes.
///
/// Yields exactly one value per outcome. A clone resumes from the same
/// position as the original; each call to [`TossSeries::running_frequencies`]
/// starts a fresh run at the first toss.
#[derive(Debug, Clone)]
pub struct RunningFrequencies<'a> {
    outcomes: &'a [String],
    label: &'a str,
    position: usize,
    count: usize,
}

impl<'a> RunningFrequencies<'a> {
    pub(crate) fn new(outcomes: &'a [String], label: &'a str) -> Self {
        Self {
            outcomes,
            label,
            position: 0,
            count: 0,
        }
    }

    /// Label whose frequency is being tracked.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Pairs each frequency with its 1-based toss position.
    pub fn points(self) -> impl Iterator<Item = FrequencyPoint> + 'a {
        self.enumerate().map(|(idx, frequency)| FrequencyPoint {
            position: idx + 1,
            frequency,
        })
    }
}

impl Iterator for RunningFrequencies<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let outcome = self.outcomes.get(self.position)?;
        if outcome == self.label {
            self.count += 1;
        }
        self.position += 1;
        Some(self.count as f64 / self.position as f64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.outcomes.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RunningFrequencies<'_> {}

/// One point of a running frequency chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    /// 1-based toss position.
    pub position: usize,
    /// Proportion of the tracked side among the first `position` tosses.
    pub frequency: f64,
}

/// Axes and reference line a chart of running frequencies is drawn against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    /// Label of the tracked side.
    pub label: String,
    /// Number of points that follow.
    pub total: usize,
    /// Lower bound of the y axis.
    pub y_min: f64,
    /// Upper bound of the y axis.
    pub y_max: f64,
    /// Height of the horizontal reference line.
    pub reference: f64,
}

/// External charting facility fed by [`plot`].
pub trait ChartSink {
    /// Error raised while rendering.
    type Error;

    /// Renders `points` against `frame`.
    fn render(
        &mut self,
        frame: &ChartFrame,
        points: &mut dyn Iterator<Item = FrequencyPoint>,
    ) -> Result<(), Self::Error>;
}

/// Hands the running frequencies of `side` to `sink`.
pub fn plot<S>(series: &TossSeries, side: Side, sink: &mut S) -> Result<(), S::Error>
where
    S: ChartSink + ?Sized,
{
    let frequencies = series.running_frequencies(side);
    let frame = ChartFrame {
        label: frequencies.label().to_string(),
        total: series.total(),
        y_min: 0.0,
        y_max: 1.0,
        reference: 0.5,
    };
    let mut points = frequencies.points();
    sink.render(&frame, &mut points)
}
