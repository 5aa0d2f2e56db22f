mod common;

use common::test_service;

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let service = test_service();

    let first = service.create_note("one".to_string()).await.unwrap();
    let second = service.create_note("two".to_string()).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let service = test_service();

    let created = service.create_note("buy milk".to_string()).await.unwrap();
    let fetched = service.get_one_note(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.body, "buy milk");
}

#[tokio::test]
async fn get_all_returns_notes_in_insertion_order() {
    let service = test_service();

    for body in ["a", "b", "c"] {
        service.create_note(body.to_string()).await.unwrap();
    }

    let notes = service.get_all_notes().await.unwrap();
    let bodies: Vec<&str> = notes.iter().map(|note| note.body.as_str()).collect();

    assert_eq!(bodies, ["a", "b", "c"]);
}

#[tokio::test]
async fn update_keeps_id_stable() {
    let service = test_service();

    let created = service.create_note("draft".to_string()).await.unwrap();
    let updated = service
        .update_note(created.id, "final".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.body, "final");
}

#[tokio::test]
async fn lookups_on_missing_id_report_absence() {
    let service = test_service();

    assert!(service.get_one_note(7).await.unwrap().is_none());
    assert!(service.update_note(7, "x".to_string()).await.unwrap().is_none());
    assert!(!service.delete_note(7).await.unwrap());
}

#[tokio::test]
async fn delete_removes_note() {
    let service = test_service();

    let created = service.create_note("temp".to_string()).await.unwrap();

    assert!(service.delete_note(created.id).await.unwrap());
    assert!(service.get_one_note(created.id).await.unwrap().is_none());
    assert!(service.get_all_notes().await.unwrap().is_empty());
}
