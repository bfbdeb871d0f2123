use crate::iteration::IterationReport;

/// Pass/fail counts over all iterations of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, report: &IterationReport) {
        for check in &report.checks {
            if check.passed() {
                log::info!("iteration {}: {}", report.iteration, check);
                self.passed += 1;
            } else {
                log::warn!("iteration {}: {}", report.iteration, check);
                self.failed += 1;
            }
        }
        log::debug!(
            "iteration {} finished: {} passed, {} failed",
            report.iteration,
            report.passed(),
            report.failed()
        );
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
