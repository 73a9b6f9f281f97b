mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_genderize::{MockGenderize, MockResponse};
use common::{app_with_memory_store, client_for, dead_base_url, fill_form};
use personform::person::{GenderSelection, PersonRepository, ValidationError};
use personform::store::{FileStore, KeyValueStore};
use personform::ui::profile::ProfileState;
use personform::ui::{App, NavOutcome, Notice, Route};

#[tokio::test]
async fn navigation_requires_save_in_session() {
    let (mut app, _store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");

    assert_eq!(app.open_bmi(), NavOutcome::SaveRequired);
    assert_eq!(app.take_notice(), Some(Notice::SaveRequired));
    assert_eq!(app.route(), &Route::Home);

    assert_eq!(app.save(), Some(&Notice::Saved));
    assert_eq!(app.open_bmi(), NavOutcome::Opened);
    assert_eq!(
        app.route(),
        &Route::Bmi {
            name: "Jan".into(),
            surname: "Kowalski".into()
        }
    );
}

#[tokio::test]
async fn navigation_disabled_while_field_empty() {
    let (mut app, _store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "");

    assert_eq!(app.open_profile(), NavOutcome::Disabled);
    assert_eq!(app.take_notice(), None);
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn invalid_save_writes_nothing() {
    let (mut app, store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "", "Kowalski", "abc", "180", "80");

    assert_eq!(
        app.save(),
        Some(&Notice::Invalid(ValidationError::EmptyName))
    );
    assert!(!app.form().data_saved);
    assert_eq!(store.get_string("imie"), None);
    assert!(app.stored_person().is_empty());
}

#[tokio::test]
async fn gate_survives_later_invalid_edits() {
    let (mut app, _store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");
    app.save();

    app.edit(personform::ui::form::FormField::Age, "999");
    assert_eq!(app.open_bmi(), NavOutcome::Opened);
    // Stored data, not the edited form, feeds the screen
    assert_eq!(app.stored_person().age, 30);
}

#[tokio::test]
async fn bmi_screen_reads_store() {
    let (mut app, _store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "160", "64");
    app.save();
    app.open_bmi();

    let screen = app.render();
    assert_eq!(screen[0], "== BMI ==");
    assert_eq!(
        screen[1],
        "Hej Jan, Twoje BMI wynosi 25.00, warto zadbać o zdrowie!"
    );

    assert!(app.back());
    assert_eq!(app.route(), &Route::Home);
    assert!(!app.back());
}

#[tokio::test]
async fn gender_selection_is_not_persisted() {
    let (mut app, store) = app_with_memory_store(&dead_base_url());
    fill_form(&mut app, "Ewa", "Lis", "25", "165", "55");
    app.select_gender(GenderSelection::Female);
    app.save();

    assert_eq!(app.form().gender, GenderSelection::Female);
    for key in ["plec", "gender", "płeć"] {
        assert!(store.get(key).is_none());
    }
}

#[tokio::test]
async fn profile_screen_loads_gender() {
    let mock = MockGenderize::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"name":"Ewa","gender":"female","probability":0.97,"count":800}"#,
    ))
    .await;

    let (mut app, _store) = app_with_memory_store(&mock.base_url());
    fill_form(&mut app, "Ewa", "Lis", "25", "165", "55");
    app.save();

    assert_eq!(app.open_profile(), NavOutcome::Opened);
    assert!(app.profile_state().is_loading());
    assert_eq!(app.render()[1], "Ładowanie...");

    tokio::time::timeout(Duration::from_secs(5), app.next_profile_update())
        .await
        .expect("lookup should settle");

    let screen = app.render();
    assert!(screen.contains(&"Imię: Ewa".to_string()));
    assert!(screen.contains(&"Wzrost: 165".to_string()));
    assert!(screen.contains(&"Płeć: kobieta".to_string()));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("name=Ewa"));
}

#[tokio::test]
async fn profile_screen_shows_error_state() {
    let mock = MockGenderize::start().await;
    mock.enqueue_response(MockResponse::error(500, "down")).await;

    let (mut app, _store) = app_with_memory_store(&mock.base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");
    app.save();
    app.open_profile();

    tokio::time::timeout(Duration::from_secs(5), app.next_profile_update())
        .await
        .expect("lookup should settle");

    assert!(matches!(app.profile_state(), ProfileState::Failed { .. }));
    assert_eq!(app.render()[1], "Failed to fetch gender");
}

#[tokio::test]
async fn leaving_profile_discards_lookup() {
    let mock = MockGenderize::start().await;
    mock.enqueue_response(MockResponse::default().with_delay(300))
        .await;

    let (mut app, _store) = app_with_memory_store(&mock.base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");
    app.save();
    app.open_profile();
    assert!(app.back());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!app.poll_profile());
    assert_eq!(app.profile_state(), &ProfileState::Idle);
}

#[tokio::test]
async fn revisiting_profile_fetches_again() {
    let mock = MockGenderize::start().await;
    let (mut app, _store) = app_with_memory_store(&mock.base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");
    app.save();

    for _ in 0..2 {
        app.open_profile();
        tokio::time::timeout(Duration::from_secs(5), app.next_profile_update())
            .await
            .expect("lookup should settle");
        assert!(app.profile_state().is_settled());
        app.back();
    }

    assert_eq!(mock.captured_requests().await.len(), 2);
}

#[tokio::test]
async fn route_uses_form_name_not_stored_name() {
    let mock = MockGenderize::start().await;
    let (mut app, _store) = app_with_memory_store(&mock.base_url());
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");
    app.save();
    app.edit(personform::ui::form::FormField::Name, "Adam");

    app.open_profile();
    tokio::time::timeout(Duration::from_secs(5), app.next_profile_update())
        .await
        .expect("lookup should settle");

    assert_eq!(app.route().name(), Some("Adam"));
    assert!(app.render().contains(&"Imię: Jan".to_string()));
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("name=Adam"));
}

#[tokio::test]
async fn failed_store_write_keeps_navigation_locked() {
    let dir = tempfile::TempDir::new().unwrap();
    // A regular file where the store directory should be.
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, "").unwrap();
    let store = FileStore::open(&blocked, "ListaLudzi").unwrap();
    let mut app = App::new(
        PersonRepository::new(Arc::new(store)),
        client_for(&dead_base_url()),
    );
    fill_form(&mut app, "Jan", "Kowalski", "30", "180", "80");

    let notice = app.save().cloned();
    assert!(matches!(notice, Some(Notice::SaveFailed(_))));
    assert!(notice
        .unwrap()
        .message()
        .starts_with("Nie udało się zapisać danych: "));
    assert!(!app.form().data_saved);

    assert_eq!(app.open_profile(), NavOutcome::SaveRequired);
    assert_eq!(app.route(), &Route::Home);
    assert!(app.stored_person().is_empty());
}
