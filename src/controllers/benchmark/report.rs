use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RunTiming {
    /// 1-based position in the run sequence.
    pub index: u32,
    pub duration: Duration,
}

impl RunTiming {
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// Outcome of a best-of-N benchmark. Always holds at least one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    label: String,
    runs: Vec<RunTiming>,
    best: Duration,
    checksum: u64,
}

impl BenchmarkReport {
    /// Returns `None` when `runs` is empty.
    #[must_use]
    pub fn from_runs(label: impl Into<String>, runs: Vec<RunTiming>, checksum: u64) -> Option<Self> {
        let best = runs.iter().map(|run| run.duration).min()?;

        Some(Self {
            label: label.into(),
            runs,
            best,
            checksum,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn runs(&self) -> &[RunTiming] {
        &self.runs
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn best(&self) -> Duration {
        self.best
    }

    /// Sum of escape counts of the grid each run produced.
    #[must_use]
    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    #[must_use]
    pub fn slowest(&self) -> Duration {
        self.runs
            .iter()
            .map(|run| run.duration)
            .max()
            .unwrap_or(self.best)
    }

    #[must_use]
    pub fn mean(&self) -> Duration {
        let total: Duration = self.runs.iter().map(|run| run.duration).sum();

        total / self.runs.len() as u32
    }

    /// Middle duration; the mean of the two middle ones for an even count.
    #[must_use]
    pub fn median(&self) -> Duration {
        let mut sorted: Vec<Duration> = self.runs.iter().map(|run| run.duration).collect();
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2
        } else {
            sorted[mid]
        }
    }
}
