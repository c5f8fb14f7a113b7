//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use [`NoopObserver`] when nothing needs to watch, or
//! [`StageTimingObserver`] to collect a [`StageReport`] per stage.

use crate::pagerank::PageRankResult;
use crate::types::Sentence;
use serde::Serialize;
use std::time::{Duration, Instant};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Stages in execution order
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_VECTORIZE,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_SELECT,
];

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the clock was started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageReport {
    pub duration: Duration,
    /// Graph nodes (graph stage)
    pub nodes: Option<usize>,
    /// Undirected graph edges (graph stage)
    pub edges: Option<usize>,
    /// PageRank iterations (rank stage)
    pub iterations: Option<usize>,
    /// Whether PageRank converged (rank stage)
    pub converged: Option<bool>,
    /// Final L1 delta (rank stage)
    pub residual: Option<f64>,
}

impl StageReport {
    /// Report carrying only a duration
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start a report for a stage that took `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    /// Set the graph node count
    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    /// Set the undirected edge count
    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    /// Set the PageRank iteration count
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    /// Set whether PageRank converged
    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    /// Set the final L1 delta
    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    /// Finish the report
    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Callbacks fired by the pipeline runner.
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the segmented sentences
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Called with the PageRank output
    fn on_rank(&mut self, _result: &PageRankResult) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every finished stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an observer with no reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order the stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report of a given stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total_duration(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .nodes(4)
            .edges(2)
            .build();

        assert_eq!(report.duration, Duration::from_millis(3));
        assert_eq!(report.nodes, Some(4));
        assert_eq!(report.edges, Some(2));
        assert_eq!(report.iterations, None);
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_start(STAGE_SEGMENT);
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_micros(10)));
        observer.on_stage_end(
            STAGE_RANK,
            &StageReportBuilder::new(Duration::from_micros(5))
                .iterations(12)
                .converged(true)
                .residual(1e-7)
                .build(),
        );

        let names: Vec<_> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SEGMENT, STAGE_RANK]);
        assert_eq!(observer.report(STAGE_RANK).unwrap().iterations, Some(12));
        assert!(observer.report(STAGE_GRAPH).is_none());
        assert_eq!(observer.total_duration(), Duration::from_micros(15));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}
