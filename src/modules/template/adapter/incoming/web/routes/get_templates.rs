use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::template::application::ports::incoming::use_cases::GetTemplatesError;
use crate::template::application::ports::outgoing::TemplateListFilter;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetTemplatesQuery {
    pub category: Option<String>,
    pub premium: Option<bool>,
    pub search: Option<String>,
}

impl From<GetTemplatesQuery> for TemplateListFilter {
    fn from(q: GetTemplatesQuery) -> Self {
        TemplateListFilter {
            category: q.category,
            premium: q.premium,
            search: q.search,
        }
    }
}

/// Public catalog; no authentication.
#[get("/api/templates")]
pub async fn get_templates_handler(
    query: web::Query<GetTemplatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .get_templates_use_case
        .execute(query.into_inner().into())
        .await
    {
        Ok(templates) => ApiResponse::success(templates),

        Err(GetTemplatesError::ServiceUnavailable(msg)) => {
            error!("Template catalog unavailable: {}", msg);
            ApiResponse::service_unavailable()
        }

        Err(GetTemplatesError::QueryFailed(msg)) => {
            error!("Failed to list templates: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value as JsonValue;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::template::application::ports::incoming::use_cases::GetTemplatesUseCase;
    use crate::template::application::ports::outgoing::TemplateView;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock GetTemplates Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetTemplatesUseCase {
        result: Result<Vec<TemplateView>, GetTemplatesError>,
        seen: Arc<Mutex<Option<TemplateListFilter>>>,
    }

    impl MockGetTemplatesUseCase {
        fn new(result: Result<Vec<TemplateView>, GetTemplatesError>) -> Self {
            Self {
                result,
                seen: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl GetTemplatesUseCase for MockGetTemplatesUseCase {
        async fn execute(
            &self,
            filter: TemplateListFilter,
        ) -> Result<Vec<TemplateView>, GetTemplatesError> {
            *self.seen.lock().unwrap() = Some(filter);
            self.result.clone()
        }
    }

    fn modern_clean() -> TemplateView {
        TemplateView {
            id: Uuid::new_v4(),
            name: "Modern Clean".to_string(),
            description: "Professional and minimalist design with clean typography".to_string(),
            category: "professional".to_string(),
            is_premium: false,
            created_at: Utc::now(),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_templates_success_with_filters() {
        let use_case = MockGetTemplatesUseCase::new(Ok(vec![modern_clean()]));
        let seen = use_case.seen.clone();

        let app_state = TestAppStateBuilder::default()
            .with_get_templates(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_templates_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates?category=professional&premium=false&search=clean")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["name"], "Modern Clean");
        assert_eq!(body["data"][0]["is_premium"], false);

        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.category.as_deref(), Some("professional"));
        assert_eq!(filter.premium, Some(false));
        assert_eq!(filter.search.as_deref(), Some("clean"));
    }

    #[actix_web::test]
    async fn test_get_templates_service_unavailable() {
        let app_state = TestAppStateBuilder::default()
            .with_get_templates(MockGetTemplatesUseCase::new(Err(
                GetTemplatesError::ServiceUnavailable("refused".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_templates_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[actix_web::test]
    async fn test_get_templates_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_templates(MockGetTemplatesUseCase::new(Err(
                GetTemplatesError::QueryFailed("syntax error".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_templates_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
