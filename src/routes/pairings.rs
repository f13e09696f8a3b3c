use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{PairingConfig, PairingEngine};
use crate::models::{CreatePairsRequest, CreatePairsResponse, ErrorResponse, HealthResponse, Identity};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Defaults applied when a request leaves a setting out
    pub defaults: PairingConfig,
    pub max_roster_size: usize,
    pub max_retries_limit: u32,
}

/// Configure all pairing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pairings", web::post().to(create_pairs));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Create pairs endpoint
///
/// POST /api/v1/pairings
///
/// Request body:
/// ```json
/// {
///   "roster": [{"identityId": "string", "displayName": "string"}],
///   "attributes": {"<identityId>": {"discipline": "string", "pastMatches": []}},
///   "maxRetries": 2,
///   "randomSeed": 42
/// }
/// ```
async fn create_pairs(
    state: web::Data<AppState>,
    req: web::Json<CreatePairsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for create_pairs request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.roster.len() > state.max_roster_size {
        tracing::warn!(
            "Rejecting roster of {} people (max {})",
            req.roster.len(),
            state.max_roster_size
        );
        return bad_request(
            "Roster too large",
            format!("Roster may contain at most {} people", state.max_roster_size),
        );
    }

    if let Some(retries) = req.max_retries.filter(|&r| r > state.max_retries_limit) {
        tracing::warn!(
            "Rejecting maxRetries={} (max {})",
            retries,
            state.max_retries_limit
        );
        return bad_request(
            "Too many retries",
            format!("maxRetries may be at most {}", state.max_retries_limit),
        );
    }

    // Duplicates are undefined for the engine, so they stop here
    if let Some(id) = req.duplicate_identity() {
        tracing::warn!("Rejecting roster with duplicate identity {}", id);
        return bad_request(
            "Duplicate identity",
            format!("Identity {} appears more than once in the roster", id),
        );
    }

    let CreatePairsRequest {
        roster,
        attributes,
        max_retries,
        random_seed,
    } = req.into_inner();

    let config = PairingConfig {
        max_retries: max_retries.unwrap_or(state.defaults.max_retries),
        seed: random_seed.or(state.defaults.seed),
    };
    let identities: Vec<Identity> = roster.into_iter().map(Identity::from).collect();
    let run_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "Pairing run {}: {} people, {} attribute records, max_retries={}",
        run_id,
        identities.len(),
        attributes.len(),
        config.max_retries
    );

    // Ranking and matching are CPU-bound, keep them off the worker thread
    let outcome = web::block(move || {
        PairingEngine::new(config).create_pairs(&identities, &attributes)
    })
    .await;

    match outcome {
        Ok(Ok(result)) => {
            tracing::info!(
                "Pairing run {} produced {} pairs ({} repeats) after {} attempts",
                run_id,
                result.pairs.len(),
                result.repeat_count(),
                result.attempts
            );
            HttpResponse::Ok().json(CreatePairsResponse::from_result(run_id, &result))
        }
        Ok(Err(e)) => {
            tracing::error!("Pairing run {} failed: {}", run_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Pairing failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Pairing run {} could not be scheduled: {}", run_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Pairing failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
