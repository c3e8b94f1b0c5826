//! Item Module Tests
//!
//! Validates the item record, its validation rules and the HTTP surface.
//!
//! ## Test Scopes
//! - **Validation**: Each rule fires for its field and only then.
//! - **Documents**: Mapping between `Item` and stored documents.
//! - **API**: The full router served on a random local port, driven over HTTP.

#[cfg(test)]
mod tests {
    use crate::items::error::ValidationProblem;
    use crate::items::types::Item;
    use crate::items::validation::{NAME_REQUIRED, PRICE_NOT_POSITIVE, validate_item};
    use crate::server;
    use crate::storage::{DocumentStore, ID_FIELD, MemoryStore};
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use std::sync::Arc;

    /// Serves the router on 127.0.0.1:0 and returns its base URL.
    async fn spawn_app() -> (String, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        server::ensure_indexes(store.as_ref()).await.unwrap();

        let app = server::router(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), store)
    }

    async fn create(client: &reqwest::Client, base: &str, body: Value) -> Item {
        let resp = client
            .post(format!("{}/items", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_valid_item_passes() {
        assert!(validate_item(&Item::new("Widget", None, 9.99)).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let errors = validate_item(&Item::new("", None, 9.99)).unwrap_err();

        assert_eq!(errors.field("name"), Some(&[NAME_REQUIRED.to_string()][..]));
        assert!(errors.field("price").is_none());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let errors = validate_item(&Item::new("   ", None, 1.0)).unwrap_err();
        assert!(errors.field("name").is_some());
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [0.0, -1.0, f64::NAN] {
            let errors = validate_item(&Item::new("Widget", None, price)).unwrap_err();
            assert_eq!(
                errors.field("price"),
                Some(&[PRICE_NOT_POSITIVE.to_string()][..]),
                "price {} should be rejected",
                price
            );
        }
    }

    #[test]
    fn test_both_rules_reported() {
        let errors = validate_item(&Item::new("", None, -5.0)).unwrap_err();
        assert_eq!(errors.errors.len(), 2);
    }

    // ============================================================
    // DOCUMENT MAPPING TESTS
    // ============================================================

    #[test]
    fn test_to_document_drops_id() {
        let item = Item {
            id: Some("abc".to_string()),
            ..Item::new("Widget", Some("blue"), 2.5)
        };

        let document = item.to_document().unwrap();
        assert!(document.get("id").is_none());
        assert!(document.get(ID_FIELD).is_none());
        assert_eq!(document.get("description"), Some(&json!("blue")));
        assert_eq!(item.id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_from_document_exposes_store_id() {
        let mut document = Item::new("Widget", None, 2.5).to_document().unwrap();
        document.insert(ID_FIELD.to_string(), json!("64b7f0c2a1b2c3d4e5f60718"));

        let item = Item::from_document(document).unwrap();
        assert_eq!(item.id.as_deref(), Some("64b7f0c2a1b2c3d4e5f60718"));
        assert_eq!(item.description, None);
    }

    // ============================================================
    // API TESTS
    // ============================================================

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/items", base))
            .json(&json!({ "name": "Widget", "price": 9.99 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("Location header");
        let created: Item = resp.json().await.unwrap();
        let id = created.id.clone().expect("generated id");
        assert_eq!(location, format!("/items/{}", id));

        let resp = client.get(format!("{}{}", base, location)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Item = resp.json().await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        let created = create(
            &client,
            &base,
            json!({ "id": "mine", "name": "Widget", "price": 1.0 }),
        )
        .await;
        assert_ne!(created.id.as_deref(), Some("mine"));
    }

    #[tokio::test]
    async fn test_create_invalid_item_is_rejected() {
        let (base, store) = spawn_app().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/items", base))
            .json(&json!({ "name": "", "price": 0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let problem: ValidationProblem = resp.json().await.unwrap();
        assert_eq!(problem.status, 400);
        assert_eq!(problem.errors["name"], vec![NAME_REQUIRED.to_string()]);
        assert_eq!(problem.errors["price"], vec![PRICE_NOT_POSITIVE.to_string()]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let (base, _store) = spawn_app().await;

        let resp = reqwest::get(format!("{}/items/does-not-exist", base)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_returns_all_items() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        create(&client, &base, json!({ "name": "A", "price": 1.0 })).await;
        create(&client, &base, json!({ "name": "B", "price": 2.0 })).await;

        let items: Vec<Item> = reqwest::get(format!("{}/items", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_replace_existing_item() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        let created = create(
            &client,
            &base,
            json!({ "name": "Widget", "description": "old", "price": 9.99 }),
        )
        .await;
        let id = created.id.unwrap();

        let resp = client
            .put(format!("{}/items/{}", base, id))
            .json(&json!({ "name": "Widget v2", "price": 11.0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let fetched: Item = reqwest::get(format!("{}/items/{}", base, id))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
        assert_eq!(fetched.name, "Widget v2");
        assert_eq!(fetched.description, None);
        assert_eq!(fetched.price, 11.0);
    }

    #[tokio::test]
    async fn test_replace_unknown_is_not_found() {
        let (base, store) = spawn_app().await;
        let client = reqwest::Client::new();

        let resp = client
            .put(format!("{}/items/missing", base))
            .json(&json!({ "name": "Widget", "price": 1.0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_replace_invalid_leaves_original() {
        let (base, store) = spawn_app().await;
        let client = reqwest::Client::new();

        let created = create(&client, &base, json!({ "name": "Widget", "price": 9.99 })).await;
        let id = created.id.clone().unwrap();

        let resp = client
            .put(format!("{}/items/{}", base, id))
            .json(&json!({ "name": "Widget", "price": -1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(Item::from_document(stored).unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        let created = create(&client, &base, json!({ "name": "Widget", "price": 9.99 })).await;
        let url = format!("{}/items/{}", base, created.id.unwrap());

        let resp = client.delete(&url).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = client.delete(&url).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = client.get(&url).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        create(&client, &base, json!({ "name": "Widget", "price": 9.99 })).await;
        create(&client, &base, json!({ "name": "Gadget", "price": 15.0 })).await;
        create(&client, &base, json!({ "name": "big WIDGET", "price": 18.0 })).await;

        let search = |query: &'static str| {
            let client = client.clone();
            let url = format!("{}/items/search{}", base, query);
            async move {
                let resp = client.get(url).send().await.unwrap();
                assert_eq!(resp.status(), StatusCode::OK);
                resp.json::<Vec<Item>>()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|i| i.name)
                    .collect::<Vec<_>>()
            }
        };

        assert_eq!(search("").await.len(), 3);
        assert_eq!(search("?name=wid").await, vec!["Widget", "big WIDGET"]);
        assert_eq!(search("?minPrice=10&maxPrice=20").await, vec!["Gadget", "big WIDGET"]);
        assert_eq!(search("?name=wid&minPrice=10&maxPrice=20").await, vec!["big WIDGET"]);
        assert!(search("?maxPrice=5").await.is_empty());
        // Unparsable bounds are dropped rather than rejected
        assert_eq!(search("?minPrice=abc").await.len(), 3);
    }

    #[tokio::test]
    async fn test_search_repeated_keys_are_accepted() {
        let (base, _store) = spawn_app().await;
        let client = reqwest::Client::new();

        create(&client, &base, json!({ "name": "Widget", "price": 1.5 })).await;
        create(&client, &base, json!({ "name": "Gadget", "price": 3.0 })).await;

        let resp = reqwest::get(format!("{}/items/search?minPrice=1&min_price=2", base))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let items: Vec<Item> = resp.json().await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget"]);

        let resp = reqwest::get(format!("{}/items/search?name=zzz&name=wid", base))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let items: Vec<Item> = resp.json().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Widget");
    }

    #[tokio::test]
    async fn test_search_with_broken_pattern_is_server_error() {
        let (base, _store) = spawn_app().await;
        create(
            &reqwest::Client::new(),
            &base,
            json!({ "name": "Widget", "price": 1.0 }),
        )
        .await;

        let resp = reqwest::get(format!("{}/items/search?name=%5B", base)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
