use std::io::{self, Write};

pub const RAW_DIFF_HEADER: &str = "## Raw Diff";
pub const NO_DIFFERENCES_NOTICE: &str = "(No differences found)";
pub const SUMMARY_HEADER: &str = "## AI Benchmark Diff Summary";

/// Writes the report sections to stdout or any other sink.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_diff(&mut self, diff: &str) -> io::Result<()> {
        if diff.is_empty() {
            writeln!(self.out, "\n{NO_DIFFERENCES_NOTICE}\n")?;
        } else {
            writeln!(self.out, "\n{RAW_DIFF_HEADER}\n")?;
            writeln!(self.out, "{diff}")?;
        }
        self.out.flush()
    }

    pub fn print_summary(&mut self, summary: &str) -> io::Result<()> {
        writeln!(self.out, "\n{SUMMARY_HEADER}\n")?;
        writeln!(self.out, "{summary}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
