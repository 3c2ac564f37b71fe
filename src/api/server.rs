//! API Server Module
//!
//! This module implements a JSON-RPC server for transaction submissions.
//! Submitted transactions go through pool admission and the verdict is
//! returned to the caller as a soft confirmation.

use crate::{
    ConfirmationStatus, SoftConfirmation, config::ApiConfig, pool::AddError, pool::TxPool,
    state::MemoryStater, tx::Transaction,
};
use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared application state accessible across all request handlers
#[derive(Clone)]
pub struct AppState {
    pool: Arc<TxPool<MemoryStater>>,
}

/// The main API server struct
pub struct Server {
    config: ApiConfig,
    state: AppState,
}

impl Server {
    pub fn new(config: ApiConfig, pool: Arc<TxPool<MemoryStater>>) -> Self {
        Self {
            config,
            state: AppState { pool },
        }
    }

    /// Router with the single JSON-RPC endpoint at "/"
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(handle_rpc))
            .with_state(self.state.clone())
    }

    /// Binds to the configured host and port and serves requests
    pub async fn start(self) -> anyhow::Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` is populated, never both.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn result(id: Value, result: Value) -> Json<Self> {
        Json(Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        })
    }

    fn error(id: Value, code: i32, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        })
    }
}

async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);

    match request.method.as_str() {
        "sendTransaction" => handle_send_transaction(state, request).await,
        "txpoolStatus" => {
            let pending = state.pool.len().await;
            JsonRpcResponse::result(request.id, json!({ "pending": pending }))
        }
        _ => JsonRpcResponse::error(request.id, -32601, "Method not found"),
    }
}

/// Handles the "sendTransaction" RPC method
///
/// Validation failures are still successful JSON-RPC calls; the confirmation
/// carries the rejection reason. Only state access failures are RPC errors.
async fn handle_send_transaction(
    state: AppState,
    request: JsonRpcRequest,
) -> Json<JsonRpcResponse> {
    let tx: Transaction = match serde_json::from_value(request.params) {
        Ok(tx) => tx,
        Err(e) => {
            error!("Failed to deserialize transaction: {}", e);
            return JsonRpcResponse::error(request.id, -32602, format!("Invalid params: {}", e));
        }
    };

    let tx_id = tx.hash();
    let status = match state.pool.add(tx).await {
        Ok(_) => ConfirmationStatus::Accepted,
        Err(AddError::Validation(e)) => {
            warn!("Transaction {:?} rejected: {}", tx_id, e);
            ConfirmationStatus::Rejected {
                reason: e.to_string(),
                retryable: e.is_retryable(),
            }
        }
        Err(e @ AddError::State(_)) => {
            error!("Transaction {:?} not validated: {}", tx_id, e);
            return JsonRpcResponse::error(request.id, -32000, e.to_string());
        }
    };

    let confirmation = SoftConfirmation {
        tx_id,
        status,
        timestamp: chrono::Utc::now().timestamp(),
    };

    match serde_json::to_value(confirmation) {
        Ok(result) => JsonRpcResponse::result(request.id, result),
        Err(e) => JsonRpcResponse::error(request.id, -32603, e.to_string()),
    }
}
