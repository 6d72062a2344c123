use std::fs;
use std::path::PathBuf;

use datagrump_tools::app::{self, RankCli};

// The verbose logger is process-global, so everything touching it lives in
// this one test binary and runs in a single test.

// Helper to create a scratch directory holding an `out` results log
fn create_results_dir(content: &str, name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "datagrump_logging_{}_{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("Failed to create test dir");
    fs::write(dir.join("out"), content).expect("Failed to write results log");
    dir
}

// Helper to cleanup test directories
fn cleanup_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

fn run(cli: &RankCli) -> String {
    let mut stdout = Vec::new();
    app::run_ranker(cli, &mut stdout).expect("ranking failed");
    String::from_utf8(stdout).expect("ranker output is UTF-8")
}

#[cfg(test)]
mod logging_tests {
    use super::*;

    #[test]
    fn test_log_file_is_scoped_to_the_run_that_requested_it() {
        let dir = create_results_dir(
            "Command: a\nstats: x, 1\nCommand: b\nstats: x, 2\nCommand: c\nstats: x, 3\n",
            "scoped",
        );
        let log_path = dir.join("ranker.log");

        let logged = RankCli {
            input: dir.join("out"),
            top: 2,
            log_file: Some(log_path.clone()),
        };
        assert_eq!(run(&logged).lines().count(), 2);

        let log = fs::read_to_string(&log_path).expect("Could not read log file");
        assert!(log.contains("Ranking results log:"));
        assert!(log.contains("Found 3 stats line(s)."));

        let unlogged = RankCli {
            log_file: None,
            ..logged
        };
        assert_eq!(run(&unlogged).lines().count(), 2);
        let after = fs::read_to_string(&log_path).expect("Could not read log file");
        assert_eq!(after, log);

        cleanup_dir(&dir);
    }
}
