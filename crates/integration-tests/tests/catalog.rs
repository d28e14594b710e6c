//! Integration tests for the catalog routes and derived views.

use axum::http::StatusCode;
use serde_json::{Value, json};

use marigold_integration_tests::TestApp;

async fn add_product(app: &TestApp, name: &str) -> Value {
    let (status, body) = app
        .post_json(
            "/addproduct",
            json!({
                "name": name,
                "image": format!("/images/{name}.png"),
                "category": "women",
                "new_price": 50.0,
                "old_price": 80.5,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "addproduct failed: {body}");
    assert_eq!(body["success"], true);
    body
}

fn ids(products: &Value) -> Vec<i64> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn product_ids_are_sequential_from_one() {
    let app = TestApp::new().await;

    let first = add_product(&app, "Shirt").await;
    assert_eq!(first["name"], "Shirt");

    add_product(&app, "Hoodie").await;
    add_product(&app, "Skirt").await;

    let (status, products) = app.get_json("/allproducts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&products), vec![1, 2, 3]);
}

#[tokio::test]
async fn products_carry_their_fields_on_the_wire() {
    let app = TestApp::new().await;
    add_product(&app, "Shirt").await;

    let (_, products) = app.get_json("/allproducts").await;
    let product = &products.as_array().unwrap()[0];

    assert_eq!(product["id"], 1);
    assert_eq!(product["name"], "Shirt");
    assert_eq!(product["image"], "/images/Shirt.png");
    assert_eq!(product["category"], "women");
    assert_eq!(product["new_price"], 50.0);
    assert_eq!(product["old_price"], 80.5);
    assert_eq!(product["available"], true);
    assert!(product["date"].is_string());
}

#[tokio::test]
async fn remove_product_deletes_exactly_the_matching_id() {
    let app = TestApp::new().await;
    add_product(&app, "Shirt").await;
    add_product(&app, "Hoodie").await;

    let (status, body) = app.post_json("/removeproduct", json!({"id": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, products) = app.get_json("/allproducts").await;
    assert_eq!(ids(&products), vec![2]);
}

#[tokio::test]
async fn remove_product_is_idempotent_silent() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/removeproduct", json!({"id": 99})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn deleting_the_highest_id_lets_the_next_creation_reuse_it() {
    let app = TestApp::new().await;
    add_product(&app, "Shirt").await;
    add_product(&app, "Hoodie").await;

    app.post_json("/removeproduct", json!({"id": 2})).await;
    add_product(&app, "Skirt").await;

    let (_, products) = app.get_json("/allproducts").await;
    assert_eq!(ids(&products), vec![1, 2]);
}

#[tokio::test]
async fn new_collections_is_the_last_eight() {
    let app = TestApp::new().await;
    for i in 1..=10 {
        add_product(&app, &format!("Item{i}")).await;
    }

    let (status, products) = app.get_json("/newcollections").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&products), (3..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn popular_is_the_first_four() {
    let app = TestApp::new().await;
    for i in 1..=10 {
        add_product(&app, &format!("Item{i}")).await;
    }

    let (status, products) = app.get_json("/popularinwomen").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&products), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn small_catalogs_return_whole_views() {
    let app = TestApp::new().await;
    add_product(&app, "Shirt").await;

    let (_, collections) = app.get_json("/newcollections").await;
    assert_eq!(ids(&collections), vec![1]);

    let (_, popular) = app.get_json("/popularinwomen").await;
    assert_eq!(ids(&popular), vec![1]);
}
