use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use delivery_routing::web::models::{ErrorResponse, NetworkInfo, PlannedRoute};
use delivery_routing::web::server::{build_app, ServerConfig};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ServerConfig::default()).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_health_and_network() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<Value>(&body)["status"], "healthy");

    let (status, body) = send(&app, "GET", "/api/network", None).await;
    assert_eq!(status, StatusCode::OK);
    let info: NetworkInfo = parse(&body);
    assert_eq!(info.node_count, 300);
    assert_eq!(info.depot, 0);
}

#[tokio::test]
async fn test_plan_and_fetch_route() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/routes", Some(json!({ "stops": [2, 13, 2] }))).await;
    assert_eq!(status, StatusCode::OK);
    let planned: PlannedRoute = parse(&body);
    assert_eq!(planned.route.visit_order, vec![13, 2]);
    assert_eq!(planned.route.total_distance, 642);

    let (status, body) = send(&app, "GET", &format!("/api/routes/{}", planned.id), None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: PlannedRoute = parse(&body);
    assert_eq!(fetched.route, planned.route);

    let (status, _) = send(&app, "GET", &format!("/api/routes/{}", uuid::Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_route_errors_are_typed() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/routes", Some(json!({ "stops": [500] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorResponse>(&body).error, "invalid_node");

    let (status, body) = send(&app, "POST", "/api/routes", Some(json!({ "stops": [83] }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "unreachable");
    assert_eq!(error.details, Some(json!({ "from": 0, "to": [83] })));
}

#[tokio::test]
async fn test_order_dispatch_flow() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/dispatch", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/inventory",
        Some(json!({ "name": "rice", "quantity": 5, "price": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for location in [2, 13] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/orders",
            Some(json!({ "product": "rice", "quantity": 2, "location": location })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "product": "rice", "quantity": 2, "location": 45 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorResponse>(&body).error, "insufficient_stock");

    let (status, body) = send(&app, "POST", "/api/dispatch", None).await;
    assert_eq!(status, StatusCode::OK);
    let planned: PlannedRoute = parse(&body);
    assert_eq!(planned.orders.len(), 2);
    assert_eq!(planned.route.visit_order, vec![13, 2]);

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(parse::<Vec<Value>>(&body).len(), 0);

    let (_, body) = send(&app, "GET", "/api/inventory", None).await;
    assert_eq!(parse::<Value>(&body)[0]["quantity"], 1);
}

#[tokio::test]
async fn test_orders_to_cut_off_locations_are_rejected() {
    let app = app();
    send(
        &app,
        "POST",
        "/api/inventory",
        Some(json!({ "name": "tea", "quantity": 4, "price": 1.0 })),
    )
    .await;

    // 83 lies in a district with no road to the depot
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "product": "tea", "quantity": 1, "location": 83 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "unreachable");
    assert_eq!(error.details, Some(json!({ "from": 0, "to": [83] })));

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(parse::<Vec<Value>>(&body).len(), 0);
    let (_, body) = send(&app, "GET", "/api/inventory", None).await;
    assert_eq!(parse::<Value>(&body)[0]["quantity"], 4);

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "product": "tea", "quantity": 1, "location": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/dispatch", None).await;
    assert_eq!(status, StatusCode::OK);
    let planned: PlannedRoute = parse(&body);
    assert_eq!(planned.route.visit_order, vec![2]);
}

#[test]
fn test_config_from_lookup() {
    let config = ServerConfig::from_lookup(|key| match key {
        "DELIVERY_PORT" => Some("8080".to_string()),
        "DELIVERY_CORS" => Some("false".to_string()),
        "DELIVERY_MAX_ROUTES" => Some("many".to_string()),
        _ => None,
    });

    assert_eq!(config.port, 8080);
    assert!(!config.enable_cors);
    assert_eq!(config.max_stored_routes, ServerConfig::default().max_stored_routes);
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}
