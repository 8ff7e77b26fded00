//! Convergence-table decorator over any statistics gatherer.

use super::StatisticsGatherer;

/// Snapshots an inner gatherer's report at doubling scenario counts.
///
/// Every result is forwarded to the inner gatherer. When the running
/// count reaches the next checkpoint (1, 2, 4, 8, ...), the inner
/// gatherer's current rows are appended to an append-only log, each row
/// extended with the checkpoint count. Checkpoints are recorded in
/// strictly increasing count order and never revisited.
#[derive(Debug, Clone)]
pub struct ConvergenceTable {
    inner: Box<dyn StatisticsGatherer>,
    checkpoint: usize,
    count: usize,
    rows: Vec<Vec<f64>>,
}

impl ConvergenceTable {
    /// Decorates `inner`.
    pub fn new(inner: Box<dyn StatisticsGatherer>) -> Self {
        Self {
            inner,
            checkpoint: 1,
            count: 0,
            rows: Vec::new(),
        }
    }

    /// Read access to the decorated gatherer.
    pub fn inner(&self) -> &dyn StatisticsGatherer {
        self.inner.as_ref()
    }
}

impl StatisticsGatherer for ConvergenceTable {
    fn dump_one_result(&mut self, value: f64) {
        self.inner.dump_one_result(value);
        self.count += 1;

        if self.count == self.checkpoint {
            self.checkpoint *= 2;
            for mut row in self.inner.results_so_far() {
                row.push(self.count as f64);
                self.rows.push(row);
            }
        }
    }

    /// The checkpoint log, plus the inner rows at the current count when
    /// the run did not stop exactly on a checkpoint.
    fn results_so_far(&self) -> Vec<Vec<f64>> {
        let mut table = self.rows.clone();
        let stopped_on_checkpoint = self.count > 0 && self.count * 2 == self.checkpoint;
        if !stopped_on_checkpoint {
            for mut row in self.inner.results_so_far() {
                row.push(self.count as f64);
                table.push(row);
            }
        }
        table
    }

    fn sims_so_far(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MeanGatherer;
    use approx::assert_relative_eq;

    fn table_after(n: usize) -> ConvergenceTable {
        let mut table = ConvergenceTable::new(Box::new(MeanGatherer::new()));
        for i in 0..n {
            table.dump_one_result(i as f64);
        }
        table
    }

    #[test]
    fn checkpoints_double_and_stay_ordered() {
        let table = table_after(10);
        let rows = table.results_so_far();

        // Checkpoints 1, 2, 4, 8 plus the trailing row at count 10.
        let counts: Vec<f64> = rows.iter().map(|r| r[r.len() - 1]).collect();
        assert_eq!(counts, vec![1.0, 2.0, 4.0, 8.0, 10.0]);
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_trailing_row_when_stopped_on_a_checkpoint() {
        let table = table_after(8);
        let rows = table.results_so_far();
        let counts: Vec<f64> = rows.iter().map(|r| r[r.len() - 1]).collect();
        assert_eq!(counts, vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn logged_count_never_exceeds_total_sims() {
        for n in [1, 3, 5, 9, 16, 33] {
            let table = table_after(n);
            assert!(table
                .results_so_far()
                .iter()
                .all(|r| r[r.len() - 1] <= n as f64));
            assert_eq!(table.sims_so_far(), n);
        }
    }

    #[test]
    fn rows_carry_the_inner_statistic_at_each_checkpoint() {
        let table = table_after(4);
        let rows = table.results_so_far();

        // Inner mean of 0..k at checkpoint k, with the checkpoint count
        // appended to the inner [mean, count] row.
        assert_relative_eq!(rows[0][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rows[1][0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(rows[2][0], 1.5, epsilon = 1e-12);
        assert_eq!(rows[2], vec![1.5, 4.0, 4.0]);
    }

    #[test]
    fn empty_table_reports_no_data() {
        let table = ConvergenceTable::new(Box::new(MeanGatherer::new()));
        assert!(table.results_so_far().is_empty());
        assert_eq!(table.sims_so_far(), 0);
    }

    #[test]
    fn checkpoint_log_is_append_only_across_reads() {
        let mut table = table_after(5);
        let first_read = table.results_so_far();
        let second_read = table.results_so_far();
        assert_eq!(first_read, second_read);

        table.dump_one_result(100.0);
        let after = table.results_so_far();
        // Earlier checkpoint rows are unchanged by later dumps.
        assert_eq!(&after[..3], &first_read[..3]);
    }
}
