mod common;

use common::{TestApp, john_doe};
use http::{Method, Request, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn create_returns_assembled_employee() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/v1/employees", john_doe()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["hireDate"], "2025-02-01");
    assert_eq!(body["departmentId"], 1);
    assert_eq!(body["address"]["streetNumber2"], json!(null));
    assert_eq!(body["address"]["countryId"], 1);
    assert_eq!(body["address"]["country"]["id"], 1);
    assert_eq!(body["address"]["country"]["code"], "USA");

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/v1/employees/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn create_accepts_iso_timestamp_hire_date() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload["hireDate"] = json!("2025-02-01T08:00:00.000Z");

    let (status, body) = app.post("/api/v1/employees", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hireDate"], "2025-02-01");
}

#[tokio::test]
async fn create_with_unknown_country_persists_nothing() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload["address"]["countryId"] = json!(999);

    let (status, body) = app.post("/api/v1/employees", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8502);
    assert_eq!(body["message"], "Country 999 not found");
    assert_eq!(app.count("employees").await, 0);
    assert_eq!(app.count("addresses").await, 0);
}

#[tokio::test]
async fn create_with_unknown_department_persists_nothing() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload["departmentId"] = json!(999);

    let (status, body) = app.post("/api/v1/employees", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8501);
    assert_eq!(body["details"]["departmentId"], 999);
    assert_eq!(app.count("employees").await, 0);
    assert_eq!(app.count("addresses").await, 0);
}

#[tokio::test]
async fn create_reports_every_validation_error() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload.as_object_mut().unwrap().remove("lastName");
    payload["phone"] = json!("0".repeat(21));
    payload["address"]["city"] = json!("x".repeat(101));

    let (status, body) = app.post("/api/v1/employees", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["details"]["errors"],
        json!([
            "lastName should not be empty",
            "phone must be at most 20 characters",
            "address.city must be at most 100 characters"
        ])
    );
    assert_eq!(app.count("employees").await, 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"firstName\": "))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn list_is_empty_then_in_id_order() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, first) = app.post("/api/v1/employees", john_doe()).await;
    let mut other = john_doe();
    other["firstName"] = json!("Jane");
    let (_, second) = app.post("/api/v1/employees", other).await;

    let (_, body) = app.get("/api/v1/employees").await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], first["id"]);
    assert_eq!(list[1]["id"], second["id"]);
    assert_eq!(list[1]["address"]["country"]["code"], "USA");
}

#[tokio::test]
async fn unknown_employee_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/employees/4242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);

    let (status, _) = app.put("/api/v1/employees/4242", json!({ "firstName": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/v1/employees/4242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/v1/employees", john_doe()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = app
        .put(&format!("/api/v1/employees/{id}"), json!({ "firstName": "Johnny" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Johnny");
    assert_eq!(updated["lastName"], created["lastName"]);
    assert_eq!(updated["phone"], created["phone"]);
    assert_eq!(updated["hireDate"], created["hireDate"]);
    assert_eq!(updated["address"], created["address"]);

    let (status, updated) = app
        .put(
            &format!("/api/v1/employees/{id}"),
            json!({ "address": { "city": "Shelbyville" } }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Johnny");
    assert_eq!(updated["address"]["city"], "Shelbyville");
    assert_eq!(updated["address"]["id"], created["address"]["id"]);
    assert_eq!(updated["address"]["streetName"], created["address"]["streetName"]);
    assert_eq!(updated["address"]["country"], created["address"]["country"]);
}

#[tokio::test]
async fn update_street_number2_null_clears_it() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload["address"]["streetNumber2"] = json!("Apt. 1");
    let (_, created) = app.post("/api/v1/employees", payload).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["address"]["streetNumber2"], "Apt. 1");

    let (_, updated) = app
        .put(&format!("/api/v1/employees/{id}"), json!({ "address": { "state": "Ohio" } }))
        .await;
    assert_eq!(updated["address"]["streetNumber2"], "Apt. 1");

    let (status, updated) = app
        .put(
            &format!("/api/v1/employees/{id}"),
            json!({ "address": { "streetNumber2": null } }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["address"]["streetNumber2"], json!(null));
}

#[tokio::test]
async fn update_rejects_bad_references_and_payloads() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/v1/employees", john_doe()).await;
    let uri = format!("/api/v1/employees/{}", created["id"]);

    let (status, body) = app
        .put(&uri, json!({ "address": { "countryId": 999 } }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8502);

    let (status, body) = app.put(&uri, json!({ "departmentId": 999 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8501);

    let (status, body) = app.put(&uri, json!({ "hireDate": "not a date" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["errors"], json!(["hireDate must be a valid date (YYYY-MM-DD)"]));

    let (_, stored) = app.get(&uri).await;
    assert_eq!(stored, created);
}

#[tokio::test]
async fn delete_twice_and_cascade_address() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/v1/employees", john_doe()).await;
    let uri = format!("/api/v1/employees/{}", created["id"]);
    assert_eq!(app.count("addresses").await, 1);

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "code": 0, "message": "Employee deleted successfully" }));
    assert_eq!(app.count("addresses").await, 0);

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/employees/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert!(body["message"].is_string());

    let (status, body) = app.put("/api/v1/employees/abc", json!({ "firstName": "X" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (status, body) = app.delete("/api/v1/employees/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn integral_float_ids_are_accepted() {
    let app = TestApp::new().await;
    let mut payload = john_doe();
    payload["departmentId"] = json!(2.0);
    payload["address"]["countryId"] = json!(10.0);

    let (status, body) = app.post("/api/v1/employees", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["departmentId"], 2);
    assert_eq!(body["address"]["country"]["code"], "ESP");

    let uri = format!("/api/v1/employees/{}", body["id"]);
    let (status, body) = app.put(&uri, json!({ "departmentId": 1.5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["errors"], json!(["departmentId must be an integer number"]));
}
