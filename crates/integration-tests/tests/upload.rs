//! Integration tests for product image upload.

use axum::http::StatusCode;

use marigold_integration_tests::TestApp;

#[tokio::test]
async fn upload_stores_file_and_returns_public_url() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_multipart("/upload", "product", "shirt.png", b"fake png bytes")
        .await;
    assert_eq!(status, StatusCode::OK, "upload failed: {body}");
    assert_eq!(body["success"], 1);

    let image_url = body["image_url"].as_str().unwrap();
    let (base, filename) = image_url.rsplit_once('/').unwrap();
    assert_eq!(base, "http://localhost:4000/images");
    assert!(filename.starts_with("product_"), "{filename}");
    assert!(filename.ends_with(".png"), "{filename}");

    let stored = tokio::fs::read(app.upload_dir.join(filename)).await.unwrap();
    assert_eq!(stored, b"fake png bytes");
}

#[tokio::test]
async fn upload_keeps_only_the_product_field() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_multipart("/upload", "attachment", "shirt.png", b"bytes")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // Nothing was written for the rejected field
    assert!(!app.upload_dir.exists());
}

#[tokio::test]
async fn upload_without_filename_extension_still_succeeds() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_multipart("/upload", "product", "shirt", b"bytes")
        .await;
    assert_eq!(status, StatusCode::OK);

    let image_url = body["image_url"].as_str().unwrap();
    let (_, filename) = image_url.rsplit_once('/').unwrap();
    assert!(!filename.contains('.'), "{filename}");
}
