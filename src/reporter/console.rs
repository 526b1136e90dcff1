//! Console reporter with colored output

use crate::{Report, Status};
use colored::Colorize;

/// How many failures to list before truncating
const MAX_FAILURES_SHOWN: usize = 10;

/// Prints a post-generation summary to the terminal
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the summary block and failing tests, if any
    pub fn report(&self, report: &Report) {
        let s = &report.summary;

        println!();
        println!("{}", "Test Run Summary".bold());
        println!("{}", "─".repeat(48));
        println!("   Total:    {}", s.total.to_string().bold());
        println!("   Passed:   {}", s.passed.to_string().green());
        if s.failed > 0 {
            println!("   Failed:   {}", s.failed.to_string().red().bold());
        } else {
            println!("   Failed:   {}", s.failed);
        }
        println!("   Skipped:  {}", s.skipped.to_string().yellow());
        let other = s.total - s.passed - s.failed - s.skipped;
        if other > 0 {
            println!("   Other:    {} (timed out / interrupted / unknown)", other);
        }
        println!("   Duration: {} ms", s.duration);
        println!(
            "   Pass rate: {} {}",
            self.create_rate_bar(s.passed, s.total),
            s.pass_rate.bold()
        );

        self.print_failures(report);
        println!();
    }

    fn print_failures(&self, report: &Report) {
        let failures: Vec<_> = report
            .tests
            .iter()
            .filter(|t| t.status == Status::Failed)
            .collect();
        if failures.is_empty() {
            return;
        }

        println!();
        println!("   {}", "Failures:".bold());
        for t in failures.iter().take(MAX_FAILURES_SHOWN) {
            println!(
                "   {} {} {}",
                "✗".red(),
                t.full_title,
                format!("({})", t.file).dimmed()
            );
            if let Some(first_line) = t.error.as_deref().and_then(|e| e.lines().next()) {
                println!("     {}", first_line.dimmed());
            }
        }
        if failures.len() > MAX_FAILURES_SHOWN {
            println!(
                "   … and {} more (see the HTML report)",
                failures.len() - MAX_FAILURES_SHOWN
            );
        }
    }

    fn create_rate_bar(&self, passed: usize, total: usize) -> String {
        let pct = if total == 0 {
            0
        } else {
            (passed * 100 + total / 2) / total
        };
        let filled = (pct * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(empty));

        if self.use_colors {
            if pct >= 90 {
                bar.green().to_string()
            } else if pct >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
