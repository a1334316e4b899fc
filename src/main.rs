pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, portfolio, template};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::UserProfileQueryPostgres;
use crate::auth::application::ports::outgoing::{TokenProvider, UserProfileQuery};
use crate::portfolio::adapter::outgoing::{
    PortfolioQueryPostgres, PortfolioRepositoryPostgres, SectionRepositoryPostgres,
    SlugGeneratorPostgres,
};
use crate::portfolio::application::service::{
    CreatePortfolioService, DeletePortfolioService, GetPortfoliosService,
    GetPublicPortfolioService, GetSinglePortfolioService, PublishPortfolioService,
    SyncSectionsService, UpdatePortfolioService,
};
use crate::portfolio::application::session::SaveCoordinator;
use crate::portfolio::application::PortfolioUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::template::adapter::outgoing::TemplateQueryPostgres;
use crate::template::application::ports::incoming::use_cases::{
    GetTemplateUseCase, GetTemplatesUseCase,
};
use crate::template::application::services::{GetTemplateService, GetTemplatesService};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub get_templates_use_case: Arc<dyn GetTemplatesUseCase + Send + Sync>,
    pub get_template_use_case: Arc<dyn GetTemplateUseCase + Send + Sync>,
    pub save_coordinator: Arc<SaveCoordinator>,
    pub user_profile_query: Arc<dyn UserProfileQuery>,
}

#[cfg(not(tarpaulin_include))]
fn portfolio_use_cases(db: &Arc<DatabaseConnection>) -> PortfolioUseCases {
    let query = PortfolioQueryPostgres::new(Arc::clone(db));
    let repository = PortfolioRepositoryPostgres::new(Arc::clone(db));
    let sections = SectionRepositoryPostgres::new(Arc::clone(db));
    let slugs = SlugGeneratorPostgres::new(Arc::clone(db));

    PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(
            repository.clone(),
            sections.clone(),
            slugs,
        )),
        get_list: Arc::new(GetPortfoliosService::new(query.clone())),
        get_single: Arc::new(GetSinglePortfolioService::new(query.clone())),
        get_public: Arc::new(GetPublicPortfolioService::new(query.clone())),
        update: Arc::new(UpdatePortfolioService::new(repository.clone())),
        publish: Arc::new(PublishPortfolioService::new(query.clone(), repository.clone())),
        sync_sections: Arc::new(SyncSectionsService::new(query, sections)),
        delete: Arc::new(DeletePortfolioService::new(repository)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio builder...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

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
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let template_query = TemplateQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        portfolio: portfolio_use_cases(&db_arc),
        get_templates_use_case: Arc::new(GetTemplatesService::new(template_query.clone())),
        get_template_use_case: Arc::new(GetTemplateService::new(template_query)),
        save_coordinator: Arc::new(SaveCoordinator::new()),
        user_profile_query: Arc::new(UserProfileQueryPostgres::new(Arc::clone(&db_arc))),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));

    info!(
        "Server listening on {} (autosave interval {:?})",
        server_url, config.autosave_interval
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::portfolio::adapter::incoming::web::routes as portfolio_routes;
    use crate::template::adapter::incoming::web::routes as template_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolios
    cfg.service(portfolio_routes::get_portfolios_handler);
    cfg.service(portfolio_routes::create_portfolio_handler);
    cfg.service(portfolio_routes::get_single_portfolio_handler);
    cfg.service(portfolio_routes::patch_portfolio_handler);
    cfg.service(portfolio_routes::sync_sections_handler);
    cfg.service(portfolio_routes::apply_edits_handler);
    cfg.service(portfolio_routes::publish_portfolio_handler);
    cfg.service(portfolio_routes::delete_portfolio_handler);
    // Public
    cfg.service(portfolio_routes::get_public_portfolio_handler);
    cfg.service(portfolio_routes::public_page_handler);
    cfg.service(portfolio_routes::preview_portfolio_handler);
    // Templates
    cfg.service(template_routes::get_templates_handler);
    cfg.service(template_routes::get_template_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
