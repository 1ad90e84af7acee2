//! Run reports for seeders

use serde::Serialize;

/// Outcome of a single seeder step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Rows inserted by this step
    pub created: usize,
    /// Rows already present and left untouched
    pub skipped: usize,
    /// True when a prerequisite guard suppressed the whole step
    pub guard_skipped: bool,
}

impl SeedReport {
    /// Report for a step whose prerequisite guard failed. Zero writes.
    pub fn guarded() -> Self {
        Self {
            guard_skipped: true,
            ..Self::default()
        }
    }

    /// Count one created row.
    pub fn record_created(&mut self) {
        self.created += 1;
    }

    /// Count one already-present row.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

impl std::fmt::Display for SeedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.guard_skipped {
            write!(f, "skipped (prerequisites missing)")
        } else {
            write!(f, "{} created, {} skipped", self.created, self.skipped)
        }
    }
}

/// One named step inside a full seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedStep {
    pub name: &'static str,
    pub report: SeedReport,
}

/// Ordered collection of step reports for a full run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedRunSummary {
    pub steps: Vec<SeedStep>,
}

impl SeedRunSummary {
    pub fn push(&mut self, name: &'static str, report: SeedReport) {
        self.steps.push(SeedStep { name, report });
    }

    /// Total rows inserted across all steps.
    pub fn total_created(&self) -> usize {
        self.steps.iter().map(|s| s.report.created).sum()
    }

    /// Total rows found already present across all steps.
    pub fn total_skipped(&self) -> usize {
        self.steps.iter().map(|s| s.report.skipped).sum()
    }
}

impl std::fmt::Display for SeedRunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            writeln!(f, "{:<28} {}", step.name, step.report)?;
        }
        write!(
            f,
            "total: {} created, {} skipped",
            self.total_created(),
            self.total_skipped()
        )
    }
}
