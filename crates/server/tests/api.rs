use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Duration;
use http_body_util::BodyExt;
use ledger::Ledger;
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::{Value, json};
use server::JwtService;
use tower::ServiceExt;
use uuid::Uuid;

fn jwt() -> JwtService {
    JwtService::new(
        b"api-test-secret",
        "freedom".to_string(),
        "freedom".to_string(),
        Duration::minutes(60),
    )
}

async fn app() -> (Router, String) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let ledger = Ledger::builder().database(db).build().await.unwrap();
    let token = jwt().generate_security_token("fake@email.com").unwrap();
    (server::router(ledger, jwt()), token)
}

fn request(method: Method, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str, token: &str) -> Value {
    let (status, body) = send(app, request(Method::GET, uri, token, None)).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn tokens_endpoint_is_anonymous() {
    let (app, _) = app().await;
    let req = Request::builder()
        .uri("/tokens")
        .body(Body::empty())
        .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "{content_type}");

    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let token = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!token.starts_with('"'));
    let claims = jwt().validate(&token).unwrap();
    assert_eq!(claims.email, "fake@email.com");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (app, _) = app().await;

    let req = Request::builder()
        .uri("/currencies")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_empty());

    let (status, _) = send(&app, request(Method::GET, "/currencies", "garbage", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_another_audience_is_forbidden() {
    let (app, _) = app().await;
    let foreign = JwtService::new(
        b"api-test-secret",
        "freedom".to_string(),
        "elsewhere".to_string(),
        Duration::minutes(60),
    )
    .generate_security_token("fake@email.com")
    .unwrap();

    let (status, _) = send(&app, request(Method::GET, "/currencies", &foreign, None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_expense_then_read_budget() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/budgets/user/{user_id}");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "expenseCategoryName": "Groceries",
                "countryCurrencyCode": "ZAR",
                "value": 1500
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_empty());

    let budget = get_json(&app, &uri, &token).await;
    assert_eq!(budget["userId"], json!(user_id));
    let expenses = budget["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["displayName"], "Groceries");
    assert_eq!(expenses[0]["countryCurrencyCode"], "ZAR");
    assert_eq!(expenses[0]["value"], json!(1500.0));
    assert_eq!(expenses[0]["userId"], json!(user_id));
}

#[tokio::test]
async fn missing_value_is_rejected_before_storage() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/budgets/user/{user_id}");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "expenseCategoryName": "Groceries",
                "countryCurrencyCode": "ZAR"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["errorCode"], 11);

    let budget = get_json(&app, &uri, &token).await;
    assert!(budget["expenses"].as_array().unwrap().is_empty());
    let categories = get_json(&app, "/expenseCategories", &token).await;
    assert!(categories["expenseCategories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_user_id_is_bad_request() {
    let (app, token) = app().await;
    let (status, body) = send(
        &app,
        request(Method::GET, "/budgets/user/not-a-uuid", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["errorCode"], 11);
}

#[tokio::test]
async fn car_loan_scenario() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/debtAccounts/user/{user_id}");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "name": "Car loan",
                "amountOwed": 333000,
                "countryCurrencyCode": "ZAR",
                "targetPayoffDate": "2020-06-30"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let list = get_json(&app, &uri, &token).await;
    assert_eq!(list["userId"], json!(user_id));
    let account = &list["debtAccounts"][0];
    assert_eq!(account["name"], "Car loan");
    assert_eq!(account["initialAmountOwed"], json!(333000.0));
    assert_eq!(account["currentAmountOwed"], json!(333000.0));
    assert_eq!(account["targetPayoffDate"], "2020-06-30");
    assert_eq!(account["actualPayoffDate"], Value::Null);
    let id = account["debtAccountId"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/debtAccount/{id}/addAmount"),
            &token,
            Some(json!({ "amount": 2500 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/debtAccount/{id}"),
            &token,
            Some(json!({ "name": "Old car" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let account = &get_json(&app, &uri, &token).await["debtAccounts"][0];
    assert_eq!(account["currentAmountOwed"], json!(335500.0));
    assert_eq!(account["name"], "Old car");
    assert_eq!(account["countryCurrencyCode"], "ZAR");
}

#[tokio::test]
async fn explicit_null_on_required_patch_field_is_bad_request() {
    let (app, token) = app().await;
    let uri = format!(
        "/debtAccounts/user/{}/debtAccount/{}",
        Uuid::new_v4(),
        Uuid::new_v4()
    );

    let (status, _) = send(
        &app,
        request(Method::PATCH, &uri, &token, Some(json!({ "name": null }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_missing_rows_returns_ok() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();

    for uri in [
        format!("/budgets/user/{user_id}/expense/{}", Uuid::new_v4()),
        format!("/debtAccounts/user/{user_id}/debtAccount/{}", Uuid::new_v4()),
        format!("/savingsAccounts/user/{user_id}/savingsAccount/{}", Uuid::new_v4()),
        format!("/expenseCategories/user/{user_id}/expense/{}", Uuid::new_v4()),
    ] {
        let (status, body) = send(&app, request(Method::DELETE, &uri, &token, None)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn savings_target_can_be_cleared() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/savingsAccounts/user/{user_id}");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "name": "Holiday",
                "savingsValue": 1000,
                "savingsTarget": 20000,
                "countryCurrencyCode": "ZAR"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let account = &get_json(&app, &uri, &token).await["savingsAccounts"][0];
    assert_eq!(account["savingsTarget"], json!(20000.0));
    let id = account["savingsAccountId"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/savingsAccount/{id}"),
            &token,
            Some(json!({ "targetSavingsAmount": null, "currentSavingsAmount": 1200 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let account = &get_json(&app, &uri, &token).await["savingsAccounts"][0];
    assert_eq!(account["savingsTarget"], Value::Null);
    assert_eq!(account["currentSavingsValue"], json!(1200.0));
    assert_eq!(account["initialSavingsValue"], json!(1000.0));
}

#[tokio::test]
async fn currencies_round_trip_through_the_api() {
    let (app, token) = app().await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/currencies",
            &token,
            Some(json!({
                "currencyId": Uuid::nil(),
                "name": "Rand",
                "countryCurrencyCode": "ZAR",
                "country": "South Africa",
                "randExchangeRate": 1
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let list = get_json(&app, "/currencies", &token).await;
    let currency = &list["currencies"][0];
    assert_eq!(currency["countryCurrencyCode"], "ZAR");
    assert_eq!(currency["randExchangeRate"], json!(1.0));
    assert_ne!(currency["currencyId"], json!(Uuid::nil()));
}

async fn create_savings_account(app: &Router, token: &str, uri: &str, value: f64) -> String {
    let (status, _) = send(
        app,
        request(
            Method::POST,
            uri,
            token,
            Some(json!({
                "name": "Emergency fund",
                "savingsValue": value,
                "countryCurrencyCode": "ZAR"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let account = &get_json(app, uri, token).await["savingsAccounts"][0];
    account["savingsAccountId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn adding_to_savings_raises_current_value_by_exactly_the_amount() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/savingsAccounts/user/{user_id}");
    let id = create_savings_account(&app, &token, &uri, 10000.0).await;

    let before = get_json(&app, &uri, &token).await["savingsAccounts"][0]["currentSavingsValue"]
        .as_f64()
        .unwrap();

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/savingsAccount/{id}/addAmount"),
            &token,
            Some(json!({ "amount": 2500 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let account = &get_json(&app, &uri, &token).await["savingsAccounts"][0];
    assert_eq!(account["currentSavingsValue"].as_f64().unwrap(), before + 2500.0);
    assert_eq!(account["initialSavingsValue"], json!(10000.0));
}

#[tokio::test]
async fn subtracting_from_savings_can_go_negative() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/savingsAccounts/user/{user_id}");
    let id = create_savings_account(&app, &token, &uri, 100.0).await;

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/savingsAccount/{id}/subtractAmount"),
            &token,
            Some(json!({ "amount": 250 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let account = &get_json(&app, &uri, &token).await["savingsAccounts"][0];
    assert_eq!(account["currentSavingsValue"], json!(-150.0));
}

#[tokio::test]
async fn subtracting_from_debt_lowers_amount_owed() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/debtAccounts/user/{user_id}");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "name": "Student loan",
                "amountOwed": 50000,
                "countryCurrencyCode": "ZAR",
                "targetPayoffDate": "2030-01-31"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let id = get_json(&app, &uri, &token).await["debtAccounts"][0]["debtAccountId"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/debtAccount/{id}/subtractAmount"),
            &token,
            Some(json!({ "amount": 7500 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let account = &get_json(&app, &uri, &token).await["debtAccounts"][0];
    assert_eq!(account["currentAmountOwed"], json!(42500.0));
    assert_eq!(account["initialAmountOwed"], json!(50000.0));
}

#[tokio::test]
async fn expense_can_be_updated_through_the_api() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/budgets/user/{user_id}");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &uri,
            &token,
            Some(json!({
                "expenseCategoryName": "Rent",
                "countryCurrencyCode": "ZAR",
                "value": 9000
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let id = get_json(&app, &uri, &token).await["expenses"][0]["expenseId"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("{uri}/expense/{id}"),
            &token,
            Some(json!({ "value": 9500, "displayName": "Flat rent" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let expense = &get_json(&app, &uri, &token).await["expenses"][0];
    assert_eq!(expense["value"], json!(9500.0));
    assert_eq!(expense["displayName"], "Flat rent");
    assert_eq!(expense["countryCurrencyCode"], "ZAR");
}

#[tokio::test]
async fn user_expense_categories_through_the_api() {
    let (app, token) = app().await;
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();
    let uri = format!("/expenseCategories/user/{user_id}");

    for name in ["Transport", "Groceries", "Transport"] {
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                &uri,
                &token,
                Some(json!({ "expenseCategoryName": name })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert!(body.is_empty());
    }

    let list = get_json(&app, &uri, &token).await;
    assert_eq!(list["userId"], json!(user_id));
    let names: Vec<&str> = list["expenseCategories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|category| category["expenseCategoryName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Groceries", "Transport"]);

    let other = get_json(&app, &format!("/expenseCategories/user/{other_user}"), &token).await;
    assert!(other["expenseCategories"].as_array().unwrap().is_empty());

    let transport = list["expenseCategories"][1]["expenseCategoryId"]
        .as_str()
        .unwrap()
        .to_string();
    let (status, _) = send(
        &app,
        request(Method::DELETE, &format!("{uri}/expense/{transport}"), &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let list = get_json(&app, &uri, &token).await;
    assert_eq!(list["expenseCategories"].as_array().unwrap().len(), 1);
    let all = get_json(&app, "/expenseCategories", &token).await;
    assert_eq!(all["expenseCategories"].as_array().unwrap().len(), 2);
}
