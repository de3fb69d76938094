use std::process::Command;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use crudbox::{server, SqliteNoteStore};
use tempfile::TempDir;
use tower::ServiceExt;

fn crudbox_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_crudbox"))
}

#[test]
fn test_calc_prints_result_and_records_history() {
    let tmp = TempDir::new().unwrap();

    let output = crudbox_cmd()
        .current_dir(tmp.path())
        .args(["calc", "2", "+", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Result: 5"));

    let history = std::fs::read_to_string(tmp.path().join("history.txt")).unwrap();
    assert_eq!(history, "2.00 + 3.00 = 5.00\n");
}

#[test]
fn test_calc_history_round_trip() {
    let tmp = TempDir::new().unwrap();

    for args in [["10", "/", "4"], ["-1", "x", "3"]] {
        let output = crudbox_cmd()
            .current_dir(tmp.path())
            .arg("calc")
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success());
    }

    let output = crudbox_cmd()
        .current_dir(tmp.path())
        .args(["calc", "history"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10.00 / 4.00 = 2.50"));
    assert!(stdout.contains("-1.00 * 3.00 = -3.00"));
}

#[test]
fn test_calc_history_missing() {
    let tmp = TempDir::new().unwrap();

    let output = crudbox_cmd()
        .current_dir(tmp.path())
        .args(["calc", "history"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No history found"));
}

#[test]
fn test_calc_division_by_zero_fails() {
    let tmp = TempDir::new().unwrap();

    let output = crudbox_cmd()
        .current_dir(tmp.path())
        .args(["calc", "1", "/", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("division by zero"));
    assert!(!tmp.path().join("history.txt").exists());
}

#[test]
fn test_calc_invalid_operator_fails() {
    let tmp = TempDir::new().unwrap();

    let output = crudbox_cmd()
        .current_dir(tmp.path())
        .args(["calc", "1", "%", "2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid operator"));
}

#[tokio::test]
async fn test_notes_survive_restart() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    {
        let app = server::router(Arc::new(SqliteNoteStore::open(&db).unwrap()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/notes")
                    .body(Body::from(
                        r#"{"title":"Groceries","content":"Milk, eggs"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = server::router(Arc::new(SqliteNoteStore::open(&db).unwrap()));
    let response = app
        .oneshot(Request::builder().uri("/notes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let notes: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Groceries");
    assert_eq!(notes[0]["content"], "Milk, eggs");
}
