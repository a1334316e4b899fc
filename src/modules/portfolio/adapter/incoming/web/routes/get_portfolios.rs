use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfoliosError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Owner's portfolios, most recently updated first.
#[get("/api/portfolios")]
pub async fn get_portfolios_handler(user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_list.execute(user.owner()).await {
        Ok(portfolios) => ApiResponse::success(portfolios),

        Err(GetPortfoliosError::ServiceUnavailable(msg)) => {
            error!("Database unavailable listing portfolios: {}", msg);
            ApiResponse::service_unavailable()
        }

        Err(GetPortfoliosError::RepositoryError(msg)) => {
            error!("Failed to list portfolios for {}: {}", user.user_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfoliosUseCase;
    use crate::modules::portfolio::application::ports::outgoing::PortfolioView;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::in_memory_portfolios::InMemoryPortfolios;
    use crate::tests::support::portfolio_fixtures::sample_view;

    /* --------------------------------------------------
     * Mock GetPortfolios Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetPortfoliosUseCase {
        result: Result<Vec<PortfolioView>, GetPortfoliosError>,
    }

    #[async_trait]
    impl GetPortfoliosUseCase for MockGetPortfoliosUseCase {
        async fn execute(&self, _owner: UserId) -> Result<Vec<PortfolioView>, GetPortfoliosError> {
            self.result.clone()
        }
    }

    fn with_list(uc: MockGetPortfoliosUseCase) -> web::Data<AppState> {
        let mut use_cases = InMemoryPortfolios::new().use_cases();
        use_cases.get_list = std::sync::Arc::new(uc);
        TestAppStateBuilder::default().with_portfolio(use_cases).build()
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_portfolios_success() {
        let user_id = Uuid::new_v4();
        let owner = UserId::from(user_id);
        let id = Uuid::new_v4();

        let app = test::init_service(
            App::new()
                .app_data(with_list(MockGetPortfoliosUseCase {
                    result: Ok(vec![sample_view(owner, id)]),
                }))
                .app_data(token_provider_data())
                .service(get_portfolios_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolios")
            .insert_header(bearer(user_id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], id.to_string());
        assert_eq!(body["data"][0]["document"]["profile"]["name"], "Ada Lovelace");
    }

    #[actix_web::test]
    async fn test_get_portfolios_requires_auth() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(get_portfolios_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolios").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_portfolios_service_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(with_list(MockGetPortfoliosUseCase {
                    result: Err(GetPortfoliosError::ServiceUnavailable(
                        "connection refused".to_string(),
                    )),
                }))
                .app_data(token_provider_data())
                .service(get_portfolios_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolios")
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Cannot connect to database. The service may be paused."
        );
    }

    #[actix_web::test]
    async fn test_get_portfolios_repository_error() {
        let app = test::init_service(
            App::new()
                .app_data(with_list(MockGetPortfoliosUseCase {
                    result: Err(GetPortfoliosError::RepositoryError("boom".to_string())),
                }))
                .app_data(token_provider_data())
                .service(get_portfolios_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolios")
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
