use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub storage: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub storage: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 whenever the process can answer; storage is not inspected
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            storage: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Returns 503 when the data directory holding the mirror files is gone.
/// An app running without mirror files has no storage to be ready with.
pub async fn readiness_check(storage: Option<web::Data<StorageConfig>>) -> impl Responder {
    let storage_ready = match &storage {
        Some(storage) => {
            let present = storage.data_dir.is_dir();
            if !present {
                tracing::error!(path = %storage.data_dir.display(), "Data directory is missing");
            }
            present
        }
        None => {
            tracing::warn!("Readiness requested without a storage configuration");
            false
        }
    };

    let response = ReadinessResponse {
        ready: storage_ready,
        checks: ReadinessChecks {
            storage: storage_ready,
            application: true,
        },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
