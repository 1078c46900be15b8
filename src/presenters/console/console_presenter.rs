use std::io::{self, Stdout, Write};

use crate::controllers::benchmark::report::{BenchmarkReport, RunTiming};
use crate::controllers::ports::run_presenter::RunPresenterPort;

/// Writes benchmark progress in the fixed line format shared by every
/// language port of the benchmark, so timings can be scraped with
/// `Run\s+\d+:\s+(\d+\.\d+)`.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunPresenterPort for ConsolePresenter<W> {
    fn begin(&mut self, label: &str, iterations: u32) -> io::Result<()> {
        writeln!(
            self.out,
            "Benchmarking Mandelbrot Set ({} with {} iterations)...",
            label, iterations
        )?;
        self.out.flush()
    }

    fn run_completed(&mut self, run: &RunTiming) -> io::Result<()> {
        writeln!(self.out, "  Run {:2}: {:.4} seconds", run.index, run.seconds())?;
        self.out.flush()
    }

    fn finish(&mut self, report: &BenchmarkReport) -> io::Result<()> {
        writeln!(
            self.out,
            "{} Time:    {:.4} seconds (best of {})",
            report.label(),
            report.best().as_secs_f64(),
            report.iterations()
        )?;
        self.out.flush()
    }
}
