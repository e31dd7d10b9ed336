//! Integration tests for client CRUD and search.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use persistence::repositories::{ClientPatch, ClientSearchFilter, UpdateOutcome};
use persistence::StoreError;

mod common;

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn create_then_search_by_email_round_trips() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    let created = clients
        .create("Peter", "Peterson", "pet@mail.ru")
        .await
        .unwrap();
    assert_eq!(created.name, "Peter");
    assert_eq!(created.surname, "Peterson");

    let filter = ClientSearchFilter {
        email: Some("pet@mail.ru".to_string()),
        ..Default::default()
    };
    let rows = clients.search(&filter).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Peter");
    assert_eq!(rows[0].surname, "Peterson");
    assert_eq!(rows[0].email, "pet@mail.ru");
    assert_eq!(rows[0].number, None);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn empty_patch_is_a_noop_and_leaves_the_row_alone() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    let created = clients
        .create("Nika", "Ivanova", "ivan@gmail.com")
        .await
        .unwrap();

    let outcome = clients
        .update(created.client_id, &ClientPatch::default())
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Noop);

    let rows = clients
        .search(&ClientSearchFilter {
            email: Some("ivan@gmail.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Nika");
    assert_eq!(rows[0].surname, "Ivanova");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn partial_update_changes_only_the_supplied_field() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    let created = clients
        .create("Nika", "Ivanova", "ivan@gmail.com")
        .await
        .unwrap();

    let patch = ClientPatch {
        surname: Some("Petrova".to_string()),
        ..Default::default()
    };
    let outcome = clients.update(created.client_id, &patch).await.unwrap();

    match outcome {
        UpdateOutcome::Updated(client) => {
            assert_eq!(client.name, "Nika");
            assert_eq!(client.surname, "Petrova");
            assert_eq!(client.email, "ivan@gmail.com");
        }
        other => panic!("expected Updated, got {:?}", other),
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn update_of_missing_client_reports_not_found() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    let patch = ClientPatch {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let outcome = clients.update(4096, &patch).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn duplicate_email_is_rejected_and_first_row_survives() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    clients
        .create("Peter", "Peterson", "pet@mail.ru")
        .await
        .unwrap();
    let error = clients
        .create("Pjotr", "Petrov", "pet@mail.ru")
        .await
        .unwrap_err();
    assert!(matches!(error, StoreError::UniqueViolation(_)));

    let rows = clients
        .search(&ClientSearchFilter {
            email: Some("pet@mail.ru".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Peter");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn name_filter_ignores_other_clients() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    clients
        .create("Nika", "Ivanova", "ivan@gmail.com")
        .await
        .unwrap();
    for i in 0..5 {
        let name: String = FirstName().fake();
        let surname: String = LastName().fake();
        // Faked names may repeat; emails must not.
        let email = format!("client{}@example.net", i);
        if name != "Nika" {
            clients.create(&name, &surname, &email).await.unwrap();
        }
    }

    let rows = clients
        .search(&ClientSearchFilter {
            name: Some("Nika".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row.name == "Nika"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn deleted_client_is_invisible_to_search() {
    let (_pool, clients, _phones) = common::fresh_registry().await;

    let created = clients
        .create("Alex", "Groten", "joni@gmail.com")
        .await
        .unwrap();

    let removed = clients.delete(created.client_id).await.unwrap().unwrap();
    assert_eq!(removed.email, "joni@gmail.com");

    let rows = clients
        .search(&ClientSearchFilter {
            email: Some("joni@gmail.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(rows.is_empty());

    // A second delete finds nothing.
    assert_eq!(clients.delete(created.client_id).await.unwrap(), None);
}
