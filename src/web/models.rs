use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::orders::Order;
use crate::routing::Route;

/// Summary of the road network being served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub node_count: usize,
    pub edge_count: usize,
    pub depot: usize,
}

/// Parameters for planning a route
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Defaults to the depot
    #[serde(default)]
    pub start: Option<usize>,
    pub stops: Vec<usize>,
}

/// A planned route kept by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub execution_time_ms: f64,
    pub route: Route<u32>,
    /// Orders served by this route, empty for ad-hoc requests
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl PlannedRoute {
    pub fn new(route: Route<u32>, execution_time_ms: f64, orders: Vec<Order>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            execution_time_ms,
            route,
            orders,
        }
    }
}

/// Parameters for stocking a product
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Parameters for placing an order
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub product: String,
    pub quantity: u32,
    pub location: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
