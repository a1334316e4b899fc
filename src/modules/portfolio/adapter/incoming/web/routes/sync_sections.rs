use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::SyncSectionsError;
use crate::modules::portfolio::domain::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncSectionsRequest {
    pub sections: Vec<Section>,
}

#[put("/api/portfolios/{id}/sections")]
pub async fn sync_sections_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<SyncSectionsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data
        .portfolio
        .sync_sections
        .execute(user.owner(), portfolio_id, req.into_inner().sections)
        .await
    {
        Ok(summary) => ApiResponse::success(summary),

        Err(SyncSectionsError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(e @ SyncSectionsError::DuplicateSection(_)) => {
            ApiResponse::bad_request("DUPLICATE_SECTION_ID", &e.to_string())
        }

        Err(SyncSectionsError::ServiceUnavailable(msg)) => {
            error!("Database unavailable syncing sections of {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }

        Err(SyncSectionsError::ReorderFailed(msg)) => {
            error!("Section order of {} may be partially applied: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }

        Err(SyncSectionsError::RepositoryError(msg)) => {
            error!("Failed to sync sections of {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::portfolio::domain::section_store::create_section;
    use crate::modules::portfolio::domain::SectionType;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::in_memory_portfolios::InMemoryPortfolios;
    use crate::tests::support::portfolio_fixtures::{sample_document, sample_record};

    #[actix_web::test]
    async fn test_sync_sections_reports_each_kind_of_write() {
        let store = InMemoryPortfolios::new();
        let user_id = Uuid::new_v4();
        let id = Uuid::new_v4();
        let stored = sample_document().sections;
        store.seed(sample_record(UserId::from(user_id), id), stored.clone());

        // keep the skills section, drop the text one, add a list at the front
        let added = create_section(SectionType::List);
        let wanted = vec![added.clone(), stored[1].clone()];

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_portfolio_store(&store).build())
                .app_data(token_provider_data())
                .service(sync_sections_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/portfolios/{}/sections", id))
            .insert_header(bearer(user_id))
            .set_json(json!({ "sections": wanted }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["created"], 1);
        assert_eq!(body["data"]["deleted"], 1);
        assert_eq!(body["data"]["unchanged"], 1);
        assert_eq!(body["data"]["updated"], 0);

        let ids: Vec<_> = store.stored_sections(id).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![added.id, stored[1].id]);
    }

    #[actix_web::test]
    async fn test_sync_sections_rejects_mismatched_content() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(sync_sections_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/portfolios/{}/sections", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .set_json(json!({
                "sections": [{
                    "id": Uuid::now_v7(),
                    "type": "skills",
                    "title": "Skills",
                    "content": { "unexpected": 42 }
                }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_sync_sections_rejects_repeated_ids() {
        let store = InMemoryPortfolios::new();
        let user_id = Uuid::new_v4();
        let id = Uuid::new_v4();
        store.seed(sample_record(UserId::from(user_id), id), sample_document().sections);

        let repeated = create_section(SectionType::Text);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_portfolio_store(&store).build())
                .app_data(token_provider_data())
                .service(sync_sections_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/portfolios/{}/sections", id))
            .insert_header(bearer(user_id))
            .set_json(json!({ "sections": [repeated.clone(), repeated] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DUPLICATE_SECTION_ID");
        assert_eq!(store.writes(), 0);
        assert_eq!(store.stored_sections(id).len(), 2);
    }

    #[actix_web::test]
    async fn test_sync_sections_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(sync_sections_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/portfolios/{}/sections", Uuid::new_v4()))
            .set_json(json!({ "sections": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
