use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_status(db: &DatabaseConnection) -> &'static str {
    let statement = Statement::from_string(db.get_database_backend(), "SELECT 1");

    match db.execute(statement).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    }
}

async fn redis_status(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: redis pool unavailable");
            return "unhealthy";
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: redis PING failed");
            "unhealthy"
        }
    }
}

/// READINESS PROBE
/// - Checks Postgres and Redis
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = database_status(&db).await;
    let redis = redis_status(&redis).await;

    if database == "ok" && redis == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            redis,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use deadpool_redis::{Config, Runtime};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[actix_web::test]
    async fn liveness_always_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn readiness_reports_unreachable_redis() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        // Nothing listens on port 1
        let pool = Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .app_data(web::Data::new(Arc::new(pool)))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "ok");
        assert_eq!(body["redis"], "unhealthy");
    }
}
