pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::entry;
pub use modules::topic;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
};
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::services::{
    CreateEntryService, GetEntryService, UpdateEntryService,
};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::AppConfig;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{CreateTopicService, GetTopicService, GetTopicsService};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub topic: TopicUseCases,
    pub entry: EntryUseCases,
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_env_file();
    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config =
        JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT configuration", e))?;
    let password_hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("Invalid Argon2 configuration", e))?;

    let server_url = config.server_url();
    info!(environment = %config.environment, %server_url, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Failed to create Redis pool", e))?;

    let redis_arc = Arc::new(redis_pool);

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher = Arc::new(password_hasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let create_user_use_case = CreateUserUseCase::new(
        user_query.clone(),
        user_repo,
        password_hasher.clone(),
        Arc::new(BasicPasswordPolicy),
    );
    let create_user_uc_arc: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(create_user_use_case);

    let register_user_orchestrator =
        UserRegistrationOrchestrator::new(create_user_uc_arc, token_provider_arc.clone());
    let login_user_use_case =
        LoginUserUseCase::new(user_query, password_hasher, token_provider_arc.clone());
    let refresh_token_use_case =
        RefreshTokenUseCase::new(redis_token_repo.clone(), token_provider_arc.clone());
    let logout_user_use_case = LogoutUseCase::new(redis_token_repo, token_provider_arc.clone());

    // Topics and entries
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic = TopicUseCases {
        create: Arc::new(CreateTopicService::new(topic_repo)),
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_single: Arc::new(GetTopicService::new(
            topic_query.clone(),
            entry_query.clone(),
        )),
    };

    let entry = EntryUseCases {
        create: Arc::new(CreateEntryService::new(
            topic_query.clone(),
            entry_repo.clone(),
        )),
        get_single: Arc::new(GetEntryService::new(
            entry_query.clone(),
            topic_query.clone(),
        )),
        update: Arc::new(UpdateEntryService::new(entry_query, topic_query, entry_repo)),
    };

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        topic,
        entry,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    // Entries
    cfg.service(crate::entry::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::get_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::update_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
