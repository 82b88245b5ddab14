use std::collections::BTreeMap;

/// An accumulator that coalesces a stream of per-codepoint property
/// values into closed codepoint ranges.
///
/// Coalescing is by value equality over the input sequence: consecutive
/// pushes carrying the same value extend the current range, even when
/// their codepoints are not numerically adjacent. A push with a different
/// value closes the current range and opens a new one. UnicodeData.txt
/// lists assigned codepoints in ascending order and marks large blocks
/// with First/Last sentinel rows, so runs over the raw line sequence track
/// the file's own block structure.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    tables: BTreeMap<String, Vec<(u32, u32)>>,
    run: Option<Run>,
}

#[derive(Debug)]
struct Run {
    value: String,
    start: u32,
    end: u32,
}

impl RunAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> RunAccumulator {
        RunAccumulator::default()
    }

    /// Add one codepoint with its property value.
    ///
    /// Codepoints must arrive in ascending order.
    pub fn push(&mut self, codepoint: u32, value: &str) {
        if let Some(ref mut run) = self.run {
            if run.value == value {
                run.end = codepoint;
                return;
            }
        }
        let closed = self.run.replace(Run {
            value: value.to_string(),
            start: codepoint,
            end: codepoint,
        });
        if let Some(run) = closed {
            self.close(run);
        }
    }

    /// Close the open run, if any, and return the per-value range tables.
    /// Each value's ranges appear in the order their runs closed.
    pub fn into_tables(mut self) -> BTreeMap<String, Vec<(u32, u32)>> {
        if let Some(run) = self.run.take() {
            self.close(run);
        }
        self.tables
    }

    fn close(&mut self, run: Run) {
        self.tables
            .entry(run.value)
            .or_insert_with(Vec::new)
            .push((run.start, run.end));
    }
}

#[cfg(test)]
mod tests {
    use super::RunAccumulator;

    #[test]
    fn adjacent_codepoints_coalesce() {
        let mut runs = RunAccumulator::new();
        for cp in 0x41..0x5B {
            runs.push(cp, "Lu");
        }
        let tables = runs.into_tables();
        assert_eq!(tables["Lu"], vec![(0x41, 0x5A)]);
    }

    #[test]
    fn value_change_closes_run() {
        let mut runs = RunAccumulator::new();
        runs.push(0x41, "Lu");
        runs.push(0x42, "Lu");
        runs.push(0x61, "Ll");
        let tables = runs.into_tables();
        assert_eq!(tables["Lu"], vec![(0x41, 0x42)]);
        assert_eq!(tables["Ll"], vec![(0x61, 0x61)]);
    }

    #[test]
    fn gap_with_same_value_still_merges() {
        // Runs follow the line sequence, not codepoint adjacency.
        let mut runs = RunAccumulator::new();
        runs.push(0x30, "Nd");
        runs.push(0x39, "Nd");
        runs.push(0x660, "Nd");
        let tables = runs.into_tables();
        assert_eq!(tables["Nd"], vec![(0x30, 0x660)]);
    }

    #[test]
    fn final_run_is_flushed() {
        let mut runs = RunAccumulator::new();
        runs.push(0x10FFFD, "Co");
        let tables = runs.into_tables();
        assert_eq!(tables["Co"], vec![(0x10FFFD, 0x10FFFD)]);
    }

    #[test]
    fn reopened_value_gets_separate_range() {
        let mut runs = RunAccumulator::new();
        runs.push(0x41, "Lu");
        runs.push(0x61, "Ll");
        runs.push(0xC0, "Lu");
        let tables = runs.into_tables();
        assert_eq!(tables["Lu"], vec![(0x41, 0x41), (0xC0, 0xC0)]);
    }

    #[test]
    fn empty_input_yields_no_tables() {
        let runs = RunAccumulator::new();
        assert!(runs.into_tables().is_empty());
    }
}
