mod common;

use axum::http::StatusCode;
use common::{json_body, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_list_books_empty() {
    let app = setup_test_app().await;

    let response = app.get("/books/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_list_books_without_trailing_slash() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    app.create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app.get("/books", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_book_as_admin() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app
        .post_json(
            "/books/",
            Some(&admin),
            json!({ "title": "Dune", "author": "Frank Herbert" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let book = json_body(response).await;
    assert!(book["id"].as_i64().is_some());
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"], "Frank Herbert");
    assert!(book["description"].is_null());
    assert!(book["year"].is_null());
}

#[tokio::test]
async fn test_create_book_with_all_fields() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let book = app
        .create_book(
            &admin,
            json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "description": "Desert planet",
                "year": 1965
            }),
        )
        .await;

    assert_eq!(book["description"], "Desert planet");
    assert_eq!(book["year"], 1965);

    let response = app.get(&format!("/books/{}", book["id"]), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, book);
}

#[tokio::test]
async fn test_create_book_missing_author() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app
        .post_json("/books/", Some(&admin), json!({ "title": "Dune" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("author"));
}

#[tokio::test]
async fn test_create_book_non_numeric_year() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app
        .post_json(
            "/books/",
            Some(&admin),
            json!({ "title": "Dune", "author": "Frank Herbert", "year": "nineteen" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book_empty_title() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app
        .post_json(
            "/books/",
            Some(&admin),
            json!({ "title": "", "author": "Frank Herbert" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book_as_user_forbidden() {
    let app = setup_test_app().await;
    let user = app.user_token("reader").await;

    let response = app
        .post_json(
            "/books/",
            Some(&user),
            json!({ "title": "Dune", "author": "Frank Herbert" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let listing = json_body(app.get("/books/", None).await).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn test_create_book_anonymous_unauthorized() {
    let app = setup_test_app().await;

    let response = app
        .post_json("/books/", None, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["www-authenticate"], "Bearer");
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = setup_test_app().await;

    let response = app.get("/books/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Book not found");
}

#[tokio::test]
async fn test_update_book_as_regular_user() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let user = app.user_token("reader").await;
    let book = app
        .create_book(
            &admin,
            json!({ "title": "Dune", "author": "Frank Herbert", "year": 1965 }),
        )
        .await;

    let response = app
        .put_json(
            &format!("/books/{}", book["id"]),
            Some(&user),
            json!({ "title": "Dune Messiah" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["id"], book["id"]);
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["author"], "Frank Herbert");
    assert_eq!(updated["year"], 1965);
}

#[tokio::test]
async fn test_update_book_clears_description_with_null() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let book = app
        .create_book(
            &admin,
            json!({ "title": "Dune", "author": "Frank Herbert", "description": "Spice" }),
        )
        .await;

    let response = app
        .put_json(
            &format!("/books/{}", book["id"]),
            Some(&admin),
            json!({ "description": null, "title": null }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert!(updated["description"].is_null());
    assert_eq!(updated["title"], "Dune");
}

#[tokio::test]
async fn test_update_book_without_token() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app
        .put_json(
            &format!("/books/{}", book["id"]),
            None,
            json!({ "title": "Changed" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let stored = json_body(app.get(&format!("/books/{}", book["id"]), None).await).await;
    assert_eq!(stored["title"], "Dune");
}

#[tokio::test]
async fn test_update_book_invalid_year_type() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app
        .put_json(
            &format!("/books/{}", book["id"]),
            Some(&admin),
            json!({ "year": "soon" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_unknown_book() {
    let app = setup_test_app().await;
    let user = app.user_token("reader").await;

    let response = app
        .put_json("/books/42", Some(&user), json!({ "title": "Ghost" }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_as_admin() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app
        .delete(&format!("/books/{}", book["id"]), Some(&admin))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listing = json_body(app.get("/books/", None).await).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn test_delete_book_as_user_forbidden() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let user = app.user_token("reader").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app
        .delete(&format!("/books/{}", book["id"]), Some(&user))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let listing = json_body(app.get("/books/", None).await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_book() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app.delete("/books/404", Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_books_ordered_by_id() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    for title in ["First", "Second", "Third"] {
        app.create_book(&admin, json!({ "title": title, "author": "Anon" }))
            .await;
    }

    let listing = json_body(app.get("/books/", None).await).await;
    let titles: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_delete_book_anonymous_unauthorized() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app.delete(&format!("/books/{}", book["id"]), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["www-authenticate"], "Bearer");

    let listing = json_body(app.get("/books/", None).await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_book_empty_title() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;
    let user = app.user_token("reader").await;
    let book = app
        .create_book(&admin, json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    let response = app
        .put_json(
            &format!("/books/{}", book["id"]),
            Some(&user),
            json!({ "title": "" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stored = json_body(app.get(&format!("/books/{}", book["id"]), None).await).await;
    assert_eq!(stored["title"], "Dune");
}

#[tokio::test]
async fn test_non_integer_book_id() {
    let app = setup_test_app().await;
    let admin = app.admin_token("admin").await;

    let response = app.get("/books/abc", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(json_body(response).await["error"], "Invalid path parameter");

    let response = app
        .put_json("/books/abc", Some(&admin), json!({ "title": "X" }))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.delete("/books/abc", Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
