//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_genderize;

use personform::genderize::GenderizeClient;
use personform::person::PersonRepository;
use personform::store::MemoryStore;
use personform::ui::form::FormField;
use personform::ui::App;
use std::net::TcpListener;
use std::sync::Arc;

/// Client pointed at `base_url`.
pub fn client_for(base_url: &str) -> GenderizeClient {
    GenderizeClient::with_client(reqwest::Client::new(), base_url)
}

/// Base URL of a local port with nothing listening on it.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// App over an in-memory store, returning the store for inspection.
pub fn app_with_memory_store(base_url: &str) -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new("ListaLudzi"));
    let app = App::new(PersonRepository::new(store.clone()), client_for(base_url));
    (app, store)
}

/// Fill all five form fields.
pub fn fill_form(app: &mut App, name: &str, surname: &str, age: &str, height: &str, weight: &str) {
    app.edit(FormField::Name, name);
    app.edit(FormField::Surname, surname);
    app.edit(FormField::Age, age);
    app.edit(FormField::Height, height);
    app.edit(FormField::Weight, weight);
}
