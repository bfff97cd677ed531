mod common;

use common::{fake_token, temp_db};
use std::fs;
use todonotion::db::{Token, TokenStorage};

#[tokio::test]
async fn insert_and_first_round_trip() {
    let (pool, path) = temp_db().await;
    let storage = TokenStorage::new(pool).await.expect("storage");

    assert_eq!(storage.first().await.expect("read"), None);

    storage.insert(&fake_token()).await.expect("insert");
    assert_eq!(storage.first().await.expect("read"), Some(fake_token()));
    assert_eq!(storage.all().await.expect("read").len(), 1);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn insert_ignores_primary_key_conflict() {
    let (pool, path) = temp_db().await;
    let storage = TokenStorage::new(pool).await.expect("storage");

    storage.insert(&fake_token()).await.expect("insert");
    let clashing = Token {
        access_token: "other".to_string(),
        ..fake_token()
    };
    storage.insert(&clashing).await.expect("conflicting insert");

    let stored = storage.first().await.expect("read").expect("row exists");
    assert_eq!(stored.access_token, "accessToken");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn delete_empties_subscription() {
    let (pool, path) = temp_db().await;
    let storage = TokenStorage::new(pool).await.expect("storage");

    let mut rx = storage.subscribe();
    assert!(rx.borrow_and_update().is_empty());

    storage.insert(&fake_token()).await.expect("insert");
    rx.changed().await.expect("emission after insert");
    assert_eq!(rx.borrow_and_update().len(), 1);

    storage.delete(&fake_token()).await.expect("delete");
    rx.changed().await.expect("emission after delete");
    assert!(rx.borrow_and_update().is_empty());

    let _ = fs::remove_file(&path);
}
