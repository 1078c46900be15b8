use crate::controllers::benchmark::report::{BenchmarkReport, RunTiming};

/// Receives benchmark progress as it happens.
pub trait RunPresenterPort {
    fn begin(&mut self, label: &str, iterations: u32) -> std::io::Result<()>;

    fn run_completed(&mut self, run: &RunTiming) -> std::io::Result<()>;

    fn finish(&mut self, report: &BenchmarkReport) -> std::io::Result<()>;
}
