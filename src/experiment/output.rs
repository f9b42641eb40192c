//! Run outputs: per-run trajectory files and the shared results log.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writes one trajectory as `step cost` lines, one per completed
/// temperature step.
pub fn write_trajectory(path: &Path, trajectory: &[f64]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (step, cost) in trajectory.iter().enumerate() {
        writeln!(writer, "{step} {cost}")?;
    }
    writer.flush()
}

/// Append-only log of final results shared by all concurrent runs.
///
/// The critical section is exactly one line: open the file for append,
/// write the line with a single `write_all`, close. The guard is released
/// on drop, so a failed append never leaves the lock held, and a line is
/// either fully visible or absent.
#[derive(Debug)]
pub struct ResultsLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ResultsLog {
    /// Creates a log appending to `path`. The file itself is created on
    /// first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one `schedule finalCost` line under the log's mutex.
    pub fn append(&self, schedule: &str, final_cost: f64) -> io::Result<()> {
        // The lock guards no state of its own; a poisoned guard is as good
        // as a clean one.
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(format!("{schedule} {final_cost}\n").as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tsp-anneal-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_write_trajectory_emits_indexed_lines() {
        let path = scratch_path("trajectory.txt");
        write_trajectory(&path, &[3.0, 2.5, 2.5, 1.0]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["0 3", "1 2.5", "2 2.5", "3 1"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_results_log_appends_across_instances() {
        let path = scratch_path("results-append.txt");
        let _ = fs::remove_file(&path);

        let log = ResultsLog::new(&path);
        log.append("linear", 41.5).unwrap();
        log.append("cosine", 40.0).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "linear 41.5\ncosine 40\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_results_log_append_fails_without_holding_the_lock() {
        // A directory cannot be opened for appending; the error must
        // surface and the next append must not deadlock.
        let dir = scratch_path("results-as-dir");
        fs::create_dir_all(&dir).unwrap();

        let log = ResultsLog::new(&dir);
        assert!(log.append("linear", 1.0).is_err());
        assert!(log.append("linear", 1.0).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
