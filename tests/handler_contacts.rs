mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_items_includes_deleted() {
    let server = common::make_server();

    let response = server.get("/list-items").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"<li class="deleted">Item 0</li>"#));
    assert!(body.contains("Item 15"));
    assert!(body.contains(r#"hx-delete="item-delete?id=1""#));
}

#[tokio::test]
async fn test_delete_contact_success() {
    let server = common::make_server();

    let response = server.delete("/item-delete").add_query_param("id", 3).await;

    response.assert_status_ok();
    assert!(response.maybe_header("hx-reswap").is_none());
    let body = response.text();
    assert!(body.contains("alert-info"));
    assert!(body.contains("Item 3"));
    assert!(body.contains("removed"));

    let list = server.get("/list-items").await.text();
    assert!(list.contains(r#"<li class="deleted">Item 3</li>"#));
    assert!(!list.contains(r#"hx-delete="item-delete?id=3""#));
}

#[tokio::test]
async fn test_delete_protected_contacts_refused() {
    let server = common::make_server();

    for (id, name) in [(5, "make me move"), (8, "Here to stay")] {
        let response = server.delete("/item-delete").add_query_param("id", id).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.header("hx-reswap"), "none");
        let body = response.text();
        assert!(body.contains("alert-danger"));
        assert!(body.contains(name));
        assert!(body.contains("cannot be deleted"));
    }

    let list = server.get("/list-items").await.text();
    assert!(list.contains(r#"hx-delete="item-delete?id=5""#));
    assert!(list.contains(r#"hx-delete="item-delete?id=8""#));
}

#[tokio::test]
async fn test_delete_twice_is_idempotent() {
    let server = common::make_server();

    for _ in 0..2 {
        let response = server.delete("/item-delete").add_query_param("id", 7).await;
        response.assert_status_ok();
        assert!(response.text().contains("removed"));
    }
}

#[tokio::test]
async fn test_delete_invalid_id_targets_item_zero() {
    let server = common::make_server();

    let response = server
        .delete("/item-delete")
        .add_query_param("id", "abc")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Item 0"));
}

#[tokio::test]
async fn test_delete_padded_id_targets_item_zero() {
    let server = common::make_server();

    let response = server
        .delete("/item-delete")
        .add_query_param("id", " 3 ")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Item 0"));

    let list = server.get("/list-items").await.text();
    assert!(list.contains(r#"hx-delete="item-delete?id=3""#));
}

#[tokio::test]
async fn test_delete_out_of_range() {
    let server = common::make_server();

    for id in ["16", "-1"] {
        let response = server.delete("/item-delete").add_query_param("id", id).await;

        response.assert_status_not_found();
        assert_eq!(response.header("hx-reswap"), "none");
        assert!(response.text().contains("does not exist"));
    }
}
