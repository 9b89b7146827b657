use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::{Graph, RoadNetwork};
use crate::orders::{Inventory, Order, OrderBook, Product};
use crate::routing::{build_route, Route};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<RoadNetwork<u32>>,
    pub depot: usize,
    /// node -> whether the depot can drive there
    pub reachable: Arc<Vec<bool>>,
    pub max_stored_routes: usize,
    pub inventory: Arc<Mutex<Inventory>>,
    pub orders: Arc<Mutex<OrderBook>>,
    pub routes: Arc<Mutex<HashMap<Uuid, PlannedRoute>>>,
}

impl AppState {
    /// Fails if `depot` is not a node of `network`
    pub fn new(network: RoadNetwork<u32>, depot: usize, max_stored_routes: usize) -> crate::Result<Self> {
        let from_depot = Dijkstra::new().compute_shortest_paths(&network, depot)?;
        let reachable = (0..network.vertex_count())
            .map(|node| from_depot.is_reachable(node))
            .collect();

        Ok(Self {
            network: Arc::new(network),
            depot,
            reachable: Arc::new(reachable),
            max_stored_routes,
            inventory: Arc::new(Mutex::new(Inventory::new())),
            orders: Arc::new(Mutex::new(OrderBook::new())),
            routes: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Keeps a planned route, evicting the oldest one when full
    fn store_route(&self, planned: PlannedRoute) -> Result<(), ApiError> {
        let mut routes = lock(&self.routes)?;
        if self.max_stored_routes > 0 && routes.len() >= self.max_stored_routes {
            let oldest = routes
                .values()
                .min_by_key(|route| route.created_at)
                .map(|route| route.id);
            if let Some(id) = oldest {
                routes.remove(&id);
            }
        }
        routes.insert(planned.id, planned);
        Ok(())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/network", get(network_info))
        .route("/api/routes", get(list_routes).post(plan_route))
        .route("/api/routes/:route_id", get(get_route))
        .route("/api/inventory", get(list_inventory).post(add_product))
        .route("/api/orders", get(list_orders).post(place_order))
        .route("/api/dispatch", post(dispatch))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Describe the served road network
pub async fn network_info(State(state): State<AppState>) -> ApiResult<NetworkInfo> {
    Ok(Json(NetworkInfo {
        node_count: state.network.vertex_count(),
        edge_count: state.network.edge_count(),
        depot: state.depot,
    }))
}

/// Plan a route over an explicit stop list
pub async fn plan_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> ApiResult<PlannedRoute> {
    let start = request.start.unwrap_or(state.depot);
    let (route, elapsed_ms) = timed_route(&state, start, &request.stops)?;

    let planned = PlannedRoute::new(route, elapsed_ms, Vec::new());
    state.store_route(planned.clone())?;

    Ok(Json(planned))
}

/// List stored route ids
pub async fn list_routes(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let routes = lock(&state.routes)?;
    Ok(Json(routes.keys().cloned().collect()))
}

/// Get a stored route
pub async fn get_route(
    State(state): State<AppState>,
    Path(route_id): Path<Uuid>,
) -> ApiResult<PlannedRoute> {
    let routes = lock(&state.routes)?;

    match routes.get(&route_id) {
        Some(route) => Ok(Json(route.clone())),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "route_not_found",
            "Route not found".to_string(),
        )),
    }
}

/// Current stock
pub async fn list_inventory(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let inventory = lock(&state.inventory)?;
    Ok(Json(inventory.products().to_vec()))
}

/// Stock a new product
pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> ApiResult<Product> {
    let mut inventory = lock(&state.inventory)?;
    let product = inventory
        .add_product(request.name, request.quantity, request.price)
        .map_err(from_error)?;
    Ok(Json(product.clone()))
}

/// Pending orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<Order>> {
    let orders = lock(&state.orders)?;
    Ok(Json(orders.orders().to_vec()))
}

/// Place an order for delivery to a customer location
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> ApiResult<Order> {
    state
        .network
        .check_vertex(request.location)
        .map_err(from_error)?;
    // A pending order nobody can drive to would block every dispatch
    if !state.reachable[request.location] {
        return Err(from_error(Error::Unreachable {
            from: state.depot,
            to: vec![request.location],
        }));
    }

    let mut inventory = lock(&state.inventory)?;
    let mut orders = lock(&state.orders)?;
    let order = orders
        .place_order(&mut inventory, &request.product, request.quantity, request.location)
        .map_err(from_error)?;

    Ok(Json(order.clone()))
}

/// Plan a route from the depot over every pending order and clear the book
pub async fn dispatch(State(state): State<AppState>) -> ApiResult<PlannedRoute> {
    let planned = {
        let mut orders = lock(&state.orders)?;
        if orders.is_empty() {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "no_pending_orders",
                "No orders have been placed".to_string(),
            ));
        }

        // Orders stay pending if the route cannot be built
        let (route, elapsed_ms) = timed_route(&state, state.depot, &orders.stops())?;
        PlannedRoute::new(route, elapsed_ms, orders.clear())
    };

    state.store_route(planned.clone())?;
    Ok(Json(planned))
}

// Helper functions

fn timed_route(state: &AppState, start: usize, stops: &[usize]) -> Result<(Route<u32>, f64), ApiError> {
    let start_time = Instant::now();
    let route = build_route(state.network.as_ref(), start, stops).map_err(from_error)?;
    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    Ok((route, elapsed_ms))
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ApiError> {
    mutex.lock().map_err(|_| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "state_unavailable",
            "Server state lock is poisoned".to_string(),
        )
    })
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn from_error(err: Error) -> ApiError {
    let (status, code, details) = match &err {
        Error::InvalidNode { node, .. } => (
            StatusCode::BAD_REQUEST,
            "invalid_node",
            Some(serde_json::json!({ "node": node })),
        ),
        Error::Unreachable { from, to } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "unreachable",
            Some(serde_json::json!({ "from": from, "to": to })),
        ),
        Error::DistanceOverflow(_) => (StatusCode::UNPROCESSABLE_ENTITY, "distance_overflow", None),
        Error::ProductNotFound(_) => (StatusCode::BAD_REQUEST, "product_not_found", None),
        Error::InsufficientStock { .. } => (StatusCode::BAD_REQUEST, "insufficient_stock", None),
        Error::InventoryFull(_) => (StatusCode::BAD_REQUEST, "inventory_full", None),
    };

    let mut response = error_response(status, code, err.to_string());
    (response.1).0.details = details;
    response
}
