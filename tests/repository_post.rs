mod common;

use posts_service::domain::repositories::PostRepository;
use posts_service::error::ErrorKind;
use posts_service::infrastructure::persistence::PgPostRepository;
use serde_json::{Map, Value, json};
use sqlx::PgPool;

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

const MISSING_ID: &str = "0f8c6a1e-3b8e-4d7c-9a55-5c2f8e4b1a90";

#[sqlx::test]
async fn test_create_and_get(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);

    let id = repo
        .create(fields(json!({ "title": "T", "content": "C", "n": 1 })))
        .await
        .unwrap();

    let post = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(post.id, id);
    assert_eq!(post.title(), Some("T"));
    assert_eq!(post.content(), Some("C"));
    assert_eq!(post.fields["n"], 1);
    assert_eq!(post.created_at, post.updated_at);
}

#[sqlx::test]
async fn test_get_missing(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);

    assert!(repo.get(MISSING_ID).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_malformed_id_is_bad_request(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);

    let err = repo.get("nope").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    let err = repo.update("nope", Map::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    let err = repo.delete("nope").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[sqlx::test]
async fn test_update_merges_and_counts(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);
    let id = repo
        .create(fields(json!({ "title": "T", "content": "C", "keep": true })))
        .await
        .unwrap();

    let ack = repo
        .update(&id, fields(json!({ "title": "T2", "extra": [1, 2] })))
        .await
        .unwrap();
    assert_eq!(ack.matched, 1);
    assert_eq!(ack.modified, 1);

    let post = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(post.title(), Some("T2"));
    assert_eq!(post.fields["keep"], true);
    assert_eq!(post.fields["extra"], json!([1, 2]));
    assert!(post.updated_at >= post.created_at);
}

#[sqlx::test]
async fn test_update_unchanged(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);
    let id = repo
        .create(fields(json!({ "title": "T", "content": "C" })))
        .await
        .unwrap();

    let ack = repo
        .update(&id, fields(json!({ "title": "T" })))
        .await
        .unwrap();

    assert_eq!(ack.matched, 1);
    assert_eq!(ack.modified, 0);
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let store = common::create_test_store(pool);
    let repo = PgPostRepository::new(&store);

    let ack = repo
        .update(MISSING_ID, fields(json!({ "title": "T" })))
        .await
        .unwrap();

    assert_eq!(ack.matched, 0);
    assert_eq!(ack.modified, 0);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let store = common::create_test_store(pool.clone());
    let repo = PgPostRepository::new(&store);
    let id = repo
        .create(fields(json!({ "title": "T", "content": "C" })))
        .await
        .unwrap();

    assert_eq!(repo.delete(&id).await.unwrap().deleted, 1);
    assert_eq!(repo.delete(&id).await.unwrap().deleted, 0);
    assert_eq!(common::count_posts(&pool).await, 0);
}
