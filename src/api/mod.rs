use axum::{
    Router,
    body::Bytes,
    extract::{Json, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::{Value, value::RawValue};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::core::{
    RateEntry, SimulationError, SimulationInput, Term, rate_table, simulate, validate_amount,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Boundary policy shared by every request.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Largest principal accepted, for every term. `None` leaves it unbounded.
    pub max_amount: Option<f64>,
}

/// Request fields kept as raw JSON text until validation.
#[derive(Debug, Default)]
struct SimulatePayload {
    amount: Option<Box<RawValue>>,
    term: Option<Box<RawValue>>,
}

impl SimulatePayload {
    /// An empty body, or one not declared as JSON, carries no fields.
    /// Anything else must be a JSON object.
    fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, serde_json::Error> {
        if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let mut fields: HashMap<String, Box<RawValue>> = serde_json::from_slice(body)?;
        Ok(Self {
            amount: fields.remove("amount"),
            term: fields.remove("term"),
        })
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct RatesResponse {
    rates: Vec<RateEntry>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(config: ApiConfig) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/health", get(health_handler))
        .route("/api/rates", get(rates_handler))
        .route("/api/simulate-savings", post(simulate_handler))
        .fallback(not_found_handler)
        .with_state(config)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(addr: SocketAddr, config: ApiConfig) -> std::io::Result<()> {
    let app = router(config);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "savings simulator listening");
    info!("local access: http://127.0.0.1:{}/", addr.port());

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn rates_handler() -> Response {
    json_response(
        StatusCode::OK,
        RatesResponse {
            rates: rate_table(),
        },
    )
}

async fn simulate_handler(
    State(config): State<ApiConfig>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let payload = match SimulatePayload::from_body(&headers, &body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(reason = %e, "unreadable simulation payload");
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid JSON payload: {e}"),
            );
        }
    };

    let input = match simulation_input_from_payload(&payload, &config) {
        Ok(input) => input,
        Err(err) => {
            warn!(error = %err, amount = ?payload.amount, term = ?payload.term, "simulation rejected");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let result = simulate(&input);
    debug!(
        amount = result.initial_amount,
        term = result.term.months(),
        rate = result.interest_rate,
        earned = result.earned_interest,
        "simulation computed"
    );
    json_response(StatusCode::OK, result)
}

/// Amount is checked (including the configured cap) before term, so a
/// request with both fields wrong reports the amount.
fn simulation_input_from_payload(
    payload: &SimulatePayload,
    config: &ApiConfig,
) -> Result<SimulationInput, SimulationError> {
    let amount =
        numeric_field(payload.amount.as_deref()).ok_or(SimulationError::InvalidAmount)?;
    let amount = validate_amount(amount)?;
    if config.max_amount.is_some_and(|max| amount > max) {
        return Err(SimulationError::AmountAboveLimit);
    }

    let term = numeric_field(payload.term.as_deref()).ok_or(SimulationError::InvalidTerm)?;
    let term = Term::from_months(term)?;

    SimulationInput::new(amount, term)
}

/// JSON numbers, or strings that parse as one. Anything else is absent.
fn numeric_field(value: Option<&RawValue>) -> Option<f64> {
    let raw = value?.get();
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Number(n)) => n.as_f64(),
        Ok(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Ok(_) => None,
        // Only numbers beyond f64 range get here; they read as infinite.
        Err(_) => raw.parse::<f64>().ok(),
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
