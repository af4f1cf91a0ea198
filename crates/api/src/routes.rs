use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use blaze_core::query::{
    blaze::{self, BlazeParams, BlazePayload, BlazeSelector},
    character::{self, CharacterParams, CharacterPayload, CharacterRequest},
    grizzlies::{self, GrizzliesParams, GrizzliesPayload, GrizzliesRequest},
    live_scores::{self, LiveScoresParams, LiveScoresPayload, LiveScoresRequest},
    nil::{self, NilParams, NilPayload, NilRequest},
    perfect_game::{self, PerfectGameParams, PerfectGamePayload, PerfectGameRequest},
    QueryError,
};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::AppState;

const LIVE_SCORES_MAX_AGE: u32 = 60;
const NIL_MAX_AGE: u32 = 300;
const CHARACTER_MAX_AGE: u32 = 600;

type ApiResult<T> = Result<Envelope<T>, ApiError>;

fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params.map(|Query(p)| p).map_err(|rejection| {
        ApiError::Query(QueryError::InvalidValue {
            field: "query string",
            reason: rejection.body_text(),
        })
    })
}

fn body_bytes(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| ApiError::Query(QueryError::InvalidBody(rejection.body_text())))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn live_scores(
    params: Result<Query<LiveScoresParams>, QueryRejection>,
) -> ApiResult<LiveScoresPayload> {
    let request = LiveScoresRequest::parse(&query_params(params)?)?;
    let payload = live_scores::resolve(&request);
    tracing::debug!(sport = payload.sport, count = payload.count, "live scores");
    Ok(Envelope::new(payload).max_age(LIVE_SCORES_MAX_AGE))
}

pub async fn grizzlies_analytics(
    params: Result<Query<GrizzliesParams>, QueryRejection>,
) -> ApiResult<GrizzliesPayload> {
    let request = GrizzliesRequest::parse(&query_params(params)?)?;
    tracing::debug!(metric = request.metric.as_str(), "grizzlies analytics");
    Ok(Envelope::new(grizzlies::resolve(&request)))
}

pub async fn perfect_game_analytics(
    params: Result<Query<PerfectGameParams>, QueryRejection>,
) -> ApiResult<PerfectGamePayload> {
    let request = PerfectGameRequest::parse(&query_params(params)?)?;
    tracing::debug!(
        category = request.category.as_str(),
        graduation_year = ?request.graduation_year,
        "perfect game analytics"
    );
    Ok(Envelope::new(perfect_game::resolve(&request)?))
}

pub async fn blaze_analytics(
    params: Result<Query<BlazeParams>, QueryRejection>,
) -> ApiResult<BlazePayload> {
    let selector = BlazeSelector::parse(&query_params(params)?)?;
    tracing::debug!(?selector, "blaze analytics");
    Ok(Envelope::new(blaze::resolve(selector)))
}

pub async fn nil_valuation_query(
    State(state): State<AppState>,
    params: Result<Query<NilParams>, QueryRejection>,
) -> ApiResult<NilPayload> {
    let request = NilRequest::from_params(&query_params(params)?)?;
    Ok(nil_envelope(&state, &request))
}

pub async fn nil_valuation_body(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<NilPayload> {
    let request = NilRequest::from_body(&body_bytes(body)?)?;
    Ok(nil_envelope(&state, &request))
}

fn nil_envelope(state: &AppState, request: &NilRequest) -> Envelope<NilPayload> {
    let payload = nil::resolve(request, state.valuation.as_ref());
    tracing::debug!(
        sport = %request.athlete.sport,
        total = payload.nil_valuation.total_annual_value,
        "nil valuation"
    );
    Envelope::new(payload).max_age(NIL_MAX_AGE)
}

pub async fn character_assessment_query(
    params: Result<Query<CharacterParams>, QueryRejection>,
) -> ApiResult<CharacterPayload> {
    let request = CharacterRequest::from_params(&query_params(params)?)?;
    Ok(character_envelope(&request))
}

pub async fn character_assessment_body(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<CharacterPayload> {
    let request = CharacterRequest::from_body(&body_bytes(body)?)?;
    Ok(character_envelope(&request))
}

fn character_envelope(request: &CharacterRequest) -> Envelope<CharacterPayload> {
    let payload = character::resolve(request);
    tracing::debug!(
        player_id = %request.player_id,
        overall = payload.character_assessment.overall_score,
        "character assessment"
    );
    Envelope::new(payload).max_age(CHARACTER_MAX_AGE)
}

/// CORS preflight: 200 with an empty body. The Access-Control headers are added router-wide.
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
    )
        .into_response()
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
