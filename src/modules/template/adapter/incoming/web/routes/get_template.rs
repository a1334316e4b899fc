use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::template::application::ports::incoming::use_cases::GetTemplateError;
use crate::AppState;

#[get("/api/templates/{id}")]
pub async fn get_template_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_template_use_case.execute(path.into_inner()).await {
        Ok(template) => ApiResponse::success(template),

        Err(GetTemplateError::NotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(GetTemplateError::ServiceUnavailable(msg)) => {
            error!("Template catalog unavailable: {}", msg);
            ApiResponse::service_unavailable()
        }

        Err(GetTemplateError::QueryFailed(msg)) => {
            error!("Failed to load template: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
