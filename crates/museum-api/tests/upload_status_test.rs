//! Upload status integration tests.
//!
//! Run with: `cargo test -p museum-api --test upload_status_test`

mod helpers;

use helpers::{api_path, setup_test_app};
use museum_api::test_helpers::{skin_record, upload_row, MD5_A, MD5_B, TEST_MAX_UPLOAD_STATUS_KEYS};
use museum_core::models::{ReviewStatus, SkinUploadStatus};
use serde_json::json;

#[tokio::test]
async fn test_statuses_by_md5_remaps_errored_and_drops_unknown() {
    let app = setup_test_app();
    app.harness
        .skins
        .add_skin(skin_record(MD5_A, ReviewStatus::Approved));
    app.harness
        .uploads
        .add_upload(upload_row(11, MD5_A, SkinUploadStatus::Errored));

    let response = app
        .client()
        .post(&api_path("/uploads/statuses-by-md5"))
        .json(&json!({ "md5s": [MD5_A, MD5_B] }))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let uploads = data.as_array().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0]["id"], "11");
    assert_eq!(uploads[0]["status"], "DELAYED");
    assert_eq!(uploads[0]["upload_md5"], MD5_A);
    assert_eq!(uploads[0]["skin"]["md5"], MD5_A);
}

#[tokio::test]
async fn test_statuses_by_id_orders_most_recent_first() {
    let app = setup_test_app();
    app.harness
        .uploads
        .add_upload(upload_row(2, MD5_A, SkinUploadStatus::UrlRequested));
    app.harness
        .uploads
        .add_upload(upload_row(9, MD5_B, SkinUploadStatus::UploadReported));

    let response = app
        .client()
        .post(&api_path("/uploads/statuses"))
        .json(&json!({ "ids": ["2", "9"] }))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let ids: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["9", "2"]);
    assert!(data[0]["skin"].is_null());
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(&api_path("/uploads/statuses"))
        .json(&json!({ "ids": ["12", "abc"] }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_too_many_keys_is_400() {
    let app = setup_test_app();
    let ids: Vec<String> = (1..=TEST_MAX_UPLOAD_STATUS_KEYS + 1)
        .map(|i| i.to_string())
        .collect();

    let response = app
        .client()
        .post(&api_path("/uploads/statuses"))
        .json(&json!({ "ids": ids }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(app.harness.journal.entries().is_empty());
}

#[tokio::test]
async fn test_malformed_md5_in_batch_is_dropped() {
    let app = setup_test_app();
    app.harness
        .skins
        .add_skin(skin_record(MD5_A, ReviewStatus::Approved));
    app.harness
        .uploads
        .add_upload(upload_row(4, MD5_A, SkinUploadStatus::Errored));

    let response = app
        .client()
        .post(&api_path("/uploads/statuses-by-md5"))
        .json(&json!({ "md5s": [MD5_A, "bbb"] }))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let uploads = data.as_array().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0]["id"], "4");
    assert_eq!(uploads[0]["status"], "DELAYED");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(&api_path("/uploads/statuses"))
        .json(&json!({ "ids": 5 }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "INVALID_INPUT");
}
