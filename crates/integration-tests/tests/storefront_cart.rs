//! Integration tests for the gated cart routes.

use axum::http::StatusCode;
use serde_json::{Value, json};

use marigold_integration_tests::TestApp;

async fn cart_slot(app: &TestApp, token: &str, slot: &str) -> u64 {
    let (status, body) = app.post_authed("/getcart", token, None).await;
    assert_eq!(status, StatusCode::OK);
    let cart: Value = serde_json::from_str(&body).unwrap();
    cart[slot].as_u64().unwrap()
}

#[tokio::test]
async fn add_and_remove_walk_the_slot_quantity() {
    let app = TestApp::new().await;
    let token = app.signup("Ada", "a@x.com", "p").await;

    // add -> 1
    let (status, body) = app
        .post_authed("/addtocart", &token, Some(json!({"itemId": 5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Added to cart");
    assert_eq!(cart_slot(&app, &token, "5").await, 1);

    // add again -> 2
    app.post_authed("/addtocart", &token, Some(json!({"itemId": 5})))
        .await;
    assert_eq!(cart_slot(&app, &token, "5").await, 2);

    // remove -> back to 1
    let (status, body) = app
        .post_authed("/removefromcart", &token, Some(json!({"itemId": 5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Removed from cart");
    assert_eq!(cart_slot(&app, &token, "5").await, 1);

    // untouched slots stay at zero
    assert_eq!(cart_slot(&app, &token, "4").await, 0);
}

#[tokio::test]
async fn remove_from_empty_slot_is_silent_noop() {
    let app = TestApp::new().await;
    let token = app.signup("Ada", "a@x.com", "p").await;

    let (status, _) = app
        .post_authed("/removefromcart", &token, Some(json!({"itemId": 9})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart_slot(&app, &token, "9").await, 0);
}

#[tokio::test]
async fn carts_are_per_user() {
    let app = TestApp::new().await;
    let ada = app.signup("Ada", "ada@example.com", "p").await;
    let bob = app.signup("Bob", "bob@example.com", "p").await;

    app.post_authed("/addtocart", &ada, Some(json!({"itemId": 1})))
        .await;

    assert_eq!(cart_slot(&app, &ada, "1").await, 1);
    assert_eq!(cart_slot(&app, &bob, "1").await, 0);
}

#[tokio::test]
async fn cart_routes_reject_missing_token() {
    let app = TestApp::new().await;

    for path in ["/addtocart", "/removefromcart"] {
        let (status, body) = app.post_json(path, json!({"itemId": 1})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(body["errors"], "Please authenticate using a valid token");
    }
}

#[tokio::test]
async fn cart_routes_reject_invalid_token() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_authed("/getcart", "definitely-not-a-token", None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["errors"], "Please authenticate using a valid token");
}

#[tokio::test]
async fn out_of_range_slot_is_a_bad_request() {
    let app = TestApp::new().await;
    let token = app.signup("Ada", "a@x.com", "p").await;

    let (status, _) = app
        .post_authed("/addtocart", &token, Some(json!({"itemId": 300})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_authed("/addtocart", &token, Some(json!({"itemId": -1})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
