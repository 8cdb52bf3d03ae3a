//! CRUD lifecycle over the catalog endpoints.

mod harness;

use harness::server::TestServer;
use serde_json::json;

#[tokio::test]
async fn priority_lifecycle() {
    let server = TestServer::start_default().await.unwrap();

    // Create
    let resp = server
        .post_json("/priorities", &json!({"name": "High", "description": "Handle first"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_owned();
    let created: serde_json::Value = resp.json().await.unwrap();
    let id = created["idPriority"].as_i64().unwrap();
    assert_eq!(location, format!("/priorities/{id}"));
    assert_eq!(created["name"], "High");

    // Read back, by id and via the collection
    let resp = server.get(&location).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    let resp = server.get("/priorities").send().await.unwrap();
    let all: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Update
    let resp = server
        .put_json(&location, &json!({"name": "Urgent", "description": "Handle first"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(updated["idPriority"], id);
    assert_eq!(updated["name"], "Urgent");

    // Delete, then the id is gone
    let resp = server.delete(&location).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = server.get(&location).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = server.delete(&location).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["subtypeCode"], "RNF-002");
    assert_eq!(
        body["errors"]["message"],
        format!("Cannot delete Priority with ID {id}: resource not found")
    );
}

#[tokio::test]
async fn client_creation_requires_an_existing_document_type() {
    let server = TestServer::start_default().await.unwrap();

    let resp = server
        .post_json(
            "/clients",
            &json!({
                "firstName": "Maria",
                "lastName": "Lopez",
                "idDocumentType": 99,
                "documentNumber": "12345678",
                "email": "maria@example.com",
                "phone": "+57 300-1234567"
            }),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["subtypeCode"], "RNF-001");
    assert_eq!(body["errors"]["details"]["resourceType"], "DocumentType");
}

#[tokio::test]
async fn client_email_must_stay_unique() {
    let server = TestServer::start_default().await.unwrap();

    let resp = server
        .post_json(
            "/document-types",
            &json!({"code": "CC", "description": "National identity card", "active": true}),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let doc_type: serde_json::Value = resp.json().await.unwrap();
    let doc_type_id = doc_type["idDocumentType"].as_i64().unwrap();

    let client = |document_number: &str| {
        json!({
            "firstName": "Maria",
            "lastName": "Lopez",
            "idDocumentType": doc_type_id,
            "documentNumber": document_number,
            "email": "maria@example.com",
            "phone": "3001234567"
        })
    };

    let resp = server.post_json("/clients", &client("11111111")).send().await.unwrap();
    assert_eq!(resp.status(), 201);

    // Same email, different document number
    let resp = server.post_json("/clients", &client("22222222")).send().await.unwrap();
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["subtypeCode"], "RBV-005");
    assert_eq!(body["errors"]["details"]["problematicField"], "email");
}

#[tokio::test]
async fn account_creation_resolves_all_references_and_generates_a_number() {
    let server = TestServer::start_default().await.unwrap();

    // No client yet
    let resp = server
        .post_json("/accounts", &json!({"idClient": 1, "idAccountType": 1, "idCurrency": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["details"]["resourceType"], "Client");

    // Seed the full reference chain
    let resp = server
        .post_json(
            "/document-types",
            &json!({"code": "CC", "description": "National identity card", "active": true}),
        )
        .send()
        .await
        .unwrap();
    let doc_type_id = resp.json::<serde_json::Value>().await.unwrap()["idDocumentType"]
        .as_i64()
        .unwrap();

    let resp = server
        .post_json(
            "/clients",
            &json!({
                "firstName": "Maria",
                "lastName": "Lopez",
                "idDocumentType": doc_type_id,
                "documentNumber": "12345678",
                "email": "maria@example.com",
                "phone": "3001234567"
            }),
        )
        .send()
        .await
        .unwrap();
    let client_id = resp.json::<serde_json::Value>().await.unwrap()["idClient"]
        .as_i64()
        .unwrap();

    let resp = server
        .post_json(
            "/account-types",
            &json!({"code": "SA", "description": "Savings account", "active": true}),
        )
        .send()
        .await
        .unwrap();
    let account_type_id = resp.json::<serde_json::Value>().await.unwrap()["idAccountType"]
        .as_i64()
        .unwrap();

    let resp = server
        .post_json(
            "/currencies",
            &json!({"code": "USD", "name": "US Dollar", "symbol": "$", "active": true}),
        )
        .send()
        .await
        .unwrap();
    let currency_id = resp.json::<serde_json::Value>().await.unwrap()["idCurrency"]
        .as_i64()
        .unwrap();

    let resp = server
        .post_json(
            "/accounts",
            &json!({
                "idClient": client_id,
                "idAccountType": account_type_id,
                "idCurrency": currency_id,
                "balance": 250.0
            }),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let account: serde_json::Value = resp.json().await.unwrap();
    let number = account["accountNumber"].as_str().unwrap();
    assert_eq!(number.len(), 19);
    assert!(number.starts_with("SA"));
    assert_eq!(&number[2..5], "USD");
    assert_eq!(account["status"], "INACTIVE");
    assert_eq!(account["balance"], 250.0);
    assert!(account["activatedDate"].is_null());

    // Lookup by generated number
    let resp = server
        .get(&format!("/accounts/by-account-number/{number}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let by_number: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(by_number["idAccount"], account["idAccount"]);

    // Unknown number is keyed by the number, not an id
    let resp = server
        .get("/accounts/by-account-number/SAUSD00000000000000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["details"]["searchValue"], "SAUSD00000000000000");
}

#[tokio::test]
async fn negative_balance_is_rejected() {
    let server = TestServer::start_default().await.unwrap();

    let resp = server
        .post_json(
            "/accounts",
            &json!({"idClient": 1, "idAccountType": 1, "idCurrency": 1, "balance": -5.0}),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["subtypeCode"], "RBV-000");
    assert_eq!(body["errors"]["details"]["problematicField"], "balance");
}
