//! # API REST
//!
//! HTTP surface for the symptom checker.
//!
//! Handles:
//! - the HTML checklist form and results page
//! - JSON endpoints with axum
//! - OpenAPI/Swagger documentation
//! - HTTP concerns (form parsing, CORS, request tracing)
//!
//! Uses `api-shared` for the wire types and `symptom-core` for scoring.

#![warn(rust_2018_idioms)]

pub mod html;

use api_shared::{
    HealthRes, HealthService, IllnessRes, IllnessesRes, ScoreReq, ScoreRes, ScoredIllness,
    SymptomsRes,
};
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use symptom_core::SymptomChecker;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Form field carrying each ticked checkbox.
const SYMPTOMS_FIELD: &str = "symptoms";

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    checker: Arc<SymptomChecker>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_symptoms, list_illnesses, get_illness, score_symptoms),
    components(schemas(
        HealthRes,
        SymptomsRes,
        IllnessRes,
        IllnessesRes,
        ScoreReq,
        ScoreRes,
        ScoredIllness
    ))
)]
pub struct ApiDoc;

/// Builds the full application router.
///
/// Routes:
/// - `GET /` and `POST /results`: the HTML form
/// - `GET /health`
/// - `GET /api/symptoms`, `GET /api/illnesses`, `GET /api/illnesses/:name`
/// - `POST /api/score`
/// - `/swagger-ui` and `/api-docs/openapi.json`
pub fn router(checker: SymptomChecker) -> Router {
    let state = AppState {
        checker: Arc::new(checker),
    };

    Router::new()
        .route("/", get(index))
        .route("/results", post(results))
        .route("/health", get(health))
        .route("/api/symptoms", get(list_symptoms))
        .route("/api/illnesses", get(list_illnesses))
        .route("/api/illnesses/:name", get(get_illness))
        .route("/api/score", post(score_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Checklist form page
#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(html::render_index(state.checker.catalog()))
}

/// Form submission handler
///
/// Browsers send one `symptoms=<label>` pair per ticked checkbox, so the body is read as raw
/// pairs to keep repeats and submission order. Unrelated fields are ignored.
#[axum::debug_handler]
async fn results(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    let chosen: Vec<String> = fields
        .into_iter()
        .filter(|(key, _)| key == SYMPTOMS_FIELD)
        .map(|(_, value)| value)
        .collect();

    let report = state.checker.score(&chosen);
    tracing::info!(
        chosen = chosen.len(),
        matched = report.results.len(),
        "scored form submission"
    );
    Html(html::render_results(&report))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/symptoms",
    responses(
        (status = 200, description = "Symptom catalog in display order", body = SymptomsRes)
    )
)]
#[axum::debug_handler]
async fn list_symptoms(State(state): State<AppState>) -> Json<SymptomsRes> {
    Json(SymptomsRes::from_catalog(state.checker.catalog()))
}

#[utoipa::path(
    get,
    path = "/api/illnesses",
    responses(
        (status = 200, description = "Illness profiles in table order", body = IllnessesRes)
    )
)]
#[axum::debug_handler]
async fn list_illnesses(State(state): State<AppState>) -> Json<IllnessesRes> {
    let illnesses = state.checker.profiles().iter().map(IllnessRes::from).collect();
    Json(IllnessesRes { illnesses })
}

#[utoipa::path(
    get,
    path = "/api/illnesses/{name}",
    params(("name" = String, Path, description = "Exact illness name")),
    responses(
        (status = 200, description = "Illness profile", body = IllnessRes),
        (status = 404, description = "Unknown illness")
    )
)]
/// Fetch a single illness profile by name
///
/// # Errors
/// Returns `404 Not Found` if no profile has exactly this name.
#[axum::debug_handler]
async fn get_illness(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<IllnessRes>, (StatusCode, &'static str)> {
    match state.checker.profile(&name) {
        Some(profile) => Ok(Json(IllnessRes::from(profile))),
        None => {
            tracing::warn!("Unknown illness requested: {:?}", name);
            Err((StatusCode::NOT_FOUND, "Unknown illness"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/score",
    request_body = ScoreReq,
    responses(
        (status = 200, description = "Ranked matches for the selection", body = ScoreRes),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Body is not a valid score request")
    )
)]
/// Score a selection of symptoms
///
/// An empty selection is not an error: the response carries an advisory `message` and no
/// results.
#[axum::debug_handler]
async fn score_symptoms(
    State(state): State<AppState>,
    Json(req): Json<ScoreReq>,
) -> Json<ScoreRes> {
    let report = state.checker.score(&req.symptoms);
    tracing::info!(
        chosen = req.symptoms.len(),
        matched = report.results.len(),
        "scored api request"
    );
    Json(ScoreRes::from(report))
}
