use catalog_core::{
    types::{GenreRef, NewMusic, PageRequest},
    CatalogError, CatalogStorage,
};

use test_helpers::{count_music, create_test_genre, create_test_music, TestDb};

#[tokio::test]
async fn test_insert_music_resolves_genre() {
    let db = TestDb::new().await;
    let storage = db.context();
    let genre_id = create_test_genre(db.pool(), "Metal").await;

    let music = storage
        .insert_music(NewMusic {
            name: "Master of Puppets".to_string(),
            genre_id,
        })
        .await
        .unwrap();

    assert_eq!(music.name, "Master of Puppets");
    assert_eq!(music.genre.id(), Some(genre_id));
    assert_eq!(music.genre.name(), Some("Metal"));

    let fetched = storage.find_music_by_id_with_genre(music.id).await.unwrap();
    assert_eq!(fetched, Some(music));
}

#[tokio::test]
async fn test_insert_with_dangling_genre_is_invalid() {
    let db = TestDb::new().await;

    let err = db
        .context()
        .insert_music(NewMusic {
            name: "Orphan".to_string(),
            genre_id: 404,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)), "got {err:?}");
    assert_eq!(count_music(db.pool()).await, 0);
}

#[tokio::test]
async fn test_find_missing_music_returns_none() {
    let db = TestDb::new().await;

    let fetched = db.context().find_music_by_id_with_genre(1).await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_deleted_genre_leaves_music_without_genre() {
    let db = TestDb::new().await;
    let genre_id = create_test_genre(db.pool(), "Disco").await;
    let music_id = create_test_music(db.pool(), "Stayin' Alive", Some(genre_id)).await;

    sqlx::query("DELETE FROM genres WHERE id = ?")
        .bind(genre_id)
        .execute(db.pool())
        .await
        .unwrap();

    let music = db
        .context()
        .find_music_by_id_with_genre(music_id)
        .await
        .unwrap()
        .expect("music should survive genre deletion");

    assert_eq!(music.genre, GenreRef::Absent);
}

#[tokio::test]
async fn test_pagination_over_five_records() {
    let db = TestDb::new().await;
    let storage = db.context();
    let genre_id = create_test_genre(db.pool(), "Pop").await;
    for n in 1..=5 {
        create_test_music(db.pool(), &format!("Song {n}"), Some(genre_id)).await;
    }

    let first = storage
        .find_all_music_with_genre(PageRequest::new(0, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(first.content.len(), 2);
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
    assert!(!first.is_last());
    assert_eq!(first.content[0].name, "Song 1");
    assert_eq!(first.content[1].name, "Song 2");

    let last = storage
        .find_all_music_with_genre(PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.content[0].name, "Song 5");
    assert!(last.is_last());
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let db = TestDb::new().await;
    create_test_music(db.pool(), "Lonely", None).await;

    let page = db
        .context()
        .find_all_music_with_genre(PageRequest::new(7, 10).unwrap())
        .await
        .unwrap();

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 1);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_offset_beyond_i64_is_empty() {
    let db = TestDb::new().await;
    create_test_music(db.pool(), "Only", None).await;

    let page = db
        .context()
        .find_all_music_with_genre(PageRequest::new(u32::MAX, u32::MAX).unwrap())
        .await
        .unwrap();

    assert!(page.content.is_empty(), "got {:?}", page.content);
    assert_eq!(page.page_no, u32::MAX);
    assert_eq!(page.total_elements, 1);
}

#[tokio::test]
async fn test_find_by_genre_returns_only_that_genre() {
    let db = TestDb::new().await;
    let rock = create_test_genre(db.pool(), "Rock").await;
    let jazz = create_test_genre(db.pool(), "Jazz").await;

    let a = create_test_music(db.pool(), "Back in Black", Some(rock)).await;
    create_test_music(db.pool(), "So What", Some(jazz)).await;
    let b = create_test_music(db.pool(), "Highway to Hell", Some(rock)).await;
    create_test_music(db.pool(), "Untagged", None).await;

    let found = db
        .context()
        .find_music_by_genre_id_with_genre(rock)
        .await
        .unwrap();

    let ids: Vec<i64> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert!(found.iter().all(|m| m.genre.name() == Some("Rock")));
}

#[tokio::test]
async fn test_transaction_update_commits() {
    let db = TestDb::new().await;
    let storage = db.context();
    let rock = create_test_genre(db.pool(), "Rock").await;
    let jazz = create_test_genre(db.pool(), "Jazz").await;
    let id = create_test_music(db.pool(), "Draft", Some(rock)).await;

    let mut tx = storage.begin().await.unwrap();
    let mut music = tx.find_music_by_id_with_genre(id).await.unwrap().unwrap();
    let genre = tx.find_genre_by_id(jazz).await.unwrap().unwrap();
    music.name = "Final".to_string();
    music.genre = GenreRef::Present(genre);
    let updated = tx.update_music(&music).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(updated.name, "Final");
    let stored = storage.find_music_by_id_with_genre(id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.genre.name(), Some("Jazz"));
}

#[tokio::test]
async fn test_dropped_transaction_rolls_back() {
    let db = TestDb::new().await;
    let storage = db.context();
    let id = create_test_music(db.pool(), "Keep Me", None).await;

    {
        let mut tx = storage.begin().await.unwrap();
        assert!(tx.music_exists(id).await.unwrap());
        tx.delete_music_by_id(id).await.unwrap();
        assert!(!tx.music_exists(id).await.unwrap());
    }

    assert!(storage.find_music_by_id_with_genre(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_update_with_blank_name_is_invalid() {
    let db = TestDb::new().await;
    let storage = db.context();
    let id = create_test_music(db.pool(), "Valid", None).await;

    let mut tx = storage.begin().await.unwrap();
    let mut music = tx.find_music_by_id_with_genre(id).await.unwrap().unwrap();
    music.name = String::new();
    let err = tx.update_music(&music).await.unwrap_err();
    drop(tx);

    assert!(matches!(err, CatalogError::InvalidArgument(_)), "got {err:?}");
    let stored = storage.find_music_by_id_with_genre(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Valid");
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let db = TestDb::new().await;
    let storage = db.context();

    let mut tx = storage.begin().await.unwrap();
    let ghost = catalog_core::Music::new(77, "Ghost", GenreRef::Absent);
    let err = tx.update_music(&ghost).await.unwrap_err();

    assert!(matches!(err, CatalogError::NotFound { .. }), "got {err:?}");
}
