//! End-to-end conversion scenarios for tsl-core.
//!
//! Each test drives the binary against temp files and asserts on the exact
//! output CSV. A failed run must never leave an output file behind.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn tsl_core() -> Command {
    Command::cargo_bin("tsl-core").expect("tsl-core binary should exist")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

const SPIKY_SERIES: &str = "timestamp,value\n0,1.0\n1,5.0\n2,1.0\n3,9.0\n4,1.0\n5,1.0\n";

mod raw_to_label {
    use super::*;

    #[test]
    fn flagless_run_is_identity_with_zero_labels() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", "timestamp,value\n0,1.5\n1,2.5\n2,3.5\n");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1.5,0\n1,2.5,0\n2,3.5,0\n"
        );
    }

    #[test]
    fn downsampling_keeps_endpoints_and_spike() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SPIKY_SERIES);
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--threshold", "4", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1,0\n1,5,0\n3,9,0\n5,1,0\n"
        );
    }

    #[test]
    fn scaling_multiplies_values_only() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", "timestamp,value\n0,1.5\n1,2.5\n2,3.5\n");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--scale", "2.0", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(read(&out), "timestamp,value,is_anomaly\n0,3,0\n1,5,0\n2,7,0\n");
    }

    #[test]
    fn mean_buckets_by_duration() {
        let dir = TempDir::new().unwrap();
        let data = write_file(
            &dir,
            "in.csv",
            "timestamp,value\n0,1.0\n1,2.0\n2,3.0\n3,4.0\n4,5.0\n5,6.0\n",
        );
        let out = dir.path().join("out.csv");

        // Span 5s, 3s windows: two chunks of three, middle timestamps 1 and 4.
        tsl_core()
            .args(["W2L", "--mean", "3s", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(read(&out), "timestamp,value,is_anomaly\n1,2,0\n4,5,0\n");
    }

    #[test]
    fn custom_column_is_extracted() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", "timestamp,cpu,value\n0,0.25,9.0\n1,0.75,9.0\n");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--column", "cpu", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(read(&out), "timestamp,value,is_anomaly\n0,0.25,0\n1,0.75,0\n");
    }

    #[test]
    fn missing_column_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", "timestamp,value\n0,1.0\n");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--column", "watts", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("watts"));

        assert!(!out.exists());
    }

    #[test]
    fn bad_threshold_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SPIKY_SERIES);
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--threshold", "2", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Downsampling Failed"));

        assert!(!out.exists());
    }

    #[test]
    fn invalid_duration_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SPIKY_SERIES);
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["W2L", "--mean", "10x", "--data"])
            .arg(&data)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid Duration"));

        assert!(!out.exists());
    }
}

mod annotation_to_label {
    use super::*;

    const SIX_POINTS: &str = "timestamp,value\n0,1.0\n1,2.0\n2,3.0\n3,4.0\n4,5.0\n5,6.0\n";

    #[test]
    fn closed_regions_mark_anomalies() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(
            &dir,
            "labels.json",
            r#"[{"id": 1, "label": [{"start": 2, "end": 4}]}]"#,
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "1", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1,0\n1,2,0\n2,3,1\n3,4,1\n4,5,1\n5,6,0\n"
        );
    }

    #[test]
    fn label_set_is_selected_by_id() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(
            &dir,
            "labels.json",
            r#"[
                {"id": 1, "label": [{"start": 0, "end": 5}]},
                {"id": 2, "label": [{"start": 4, "end": 5}]}
            ]"#,
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "2", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1,0\n1,2,0\n2,3,0\n3,4,0\n4,5,1\n5,6,1\n"
        );
    }

    #[test]
    fn missing_label_id_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(
            &dir,
            "labels.json",
            r#"[{"id": 1, "label": [{"start": 2, "end": 4}]}]"#,
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "9", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Label Set Not Found"));

        assert!(!out.exists());
    }

    #[test]
    fn overlapping_regions_exit_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(
            &dir,
            "labels.json",
            r#"[{"id": 1, "label": [{"start": 0, "end": 10}, {"start": 5, "end": 15}]}]"#,
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "1", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Overlapping Regions"));

        assert!(!out.exists());
    }

    #[test]
    fn boundary_touching_regions_are_accepted() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(
            &dir,
            "labels.json",
            r#"[{"id": 1, "label": [{"start": 0, "end": 2}, {"start": 2, "end": 4}]}]"#,
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "1", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1,1\n1,2,1\n2,3,1\n3,4,1\n4,5,1\n5,6,0\n"
        );
    }

    #[test]
    fn malformed_export_exits_one() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "in.csv", SIX_POINTS);
        let labels = write_file(&dir, "labels.json", "{not json");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["S2L", "--labelid", "1", "--data"])
            .arg(&data)
            .arg("--labels")
            .arg(&labels)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("JSON Parse Error"));

        assert!(!out.exists());
    }
}

mod copy_label {
    use super::*;

    #[test]
    fn labels_are_copied_row_aligned_and_verbatim() {
        let dir = TempDir::new().unwrap();
        let data = write_file(
            &dir,
            "data.csv",
            "timestamp,value,is_anomaly\n0,1.0,0\n1,2.0,0\n2,3.0,0\n",
        );
        let source = write_file(
            &dir,
            "source.csv",
            "timestamp,value,is_anomaly\n0,9.9,1\n1,8.8,0\n2,7.7,1\n",
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["CPY", "--data"])
            .arg(&data)
            .arg("--source")
            .arg(&source)
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        // Data keeps its own values textually; only the label column comes
        // from the source.
        assert_eq!(
            read(&out),
            "timestamp,value,is_anomaly\n0,1.0,1\n1,2.0,0\n2,3.0,1\n"
        );
    }

    #[test]
    fn row_count_mismatch_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(
            &dir,
            "data.csv",
            "timestamp,value,is_anomaly\n0,1.0,0\n1,2.0,0\n2,3.0,0\n3,4.0,0\n",
        );
        let source = write_file(
            &dir,
            "source.csv",
            "timestamp,value,is_anomaly\n0,1.0,1\n1,2.0,0\n2,3.0,1\n",
        );
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["CPY", "--data"])
            .arg(&data)
            .arg("--source")
            .arg(&source)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Structural Mismatch"));

        assert!(!out.exists());
    }

    #[test]
    fn header_mismatch_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "timestamp,value,is_anomaly\n0,1.0,0\n");
        let source = write_file(&dir, "source.csv", "timestamp,score,is_anomaly\n0,1.0,1\n");
        let out = dir.path().join("out.csv");

        tsl_core()
            .args(["CPY", "--data"])
            .arg(&data)
            .arg("--source")
            .arg(&source)
            .arg("--output")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Structural Mismatch"));

        assert!(!out.exists());
    }
}
