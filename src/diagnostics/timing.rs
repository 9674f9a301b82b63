//! Stopwatch records for the analyzer stages.
//!
//! Times are wall-clock milliseconds. They are informational only and never
//! feed back into the analysis.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds spent in a named stage (`dedup`, `joints`, `cluster`, `stats`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub ms: f64,
}

/// Stage times in execution order plus the wall time of the whole run.
///
/// `total_ms` is filled in by the analyzer once every stage has finished, so
/// it also covers the bookkeeping between stages.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `f` under the stage name `stage` and passes its value through.
    pub fn time<T>(&mut self, stage: &str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.stages.push(StageTiming {
            stage: stage.to_owned(),
            ms: elapsed_ms(started),
        });
        out
    }

    /// First record for `stage`, if that stage ran.
    pub fn stage(&self, stage: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Sum of the recorded stage times.
    pub fn stages_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.ms).sum()
    }
}

pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1e3
}
