use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::modules::portfolio::domain::Document;
use crate::shared::api::ApiResponse;
use crate::template::domain::{render_document, Node};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewRequest {
    pub document: Document,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// True when the caller is anonymous and nothing can be saved.
    pub preview: bool,
    pub tree: Node,
    pub html: String,
}

/// Renders an unsaved document. Works signed in or not; never persists.
#[post("/api/preview")]
pub async fn preview_portfolio_handler(
    user: MaybeUser,
    req: web::Json<PreviewRequest>,
) -> impl Responder {
    let tree = render_document(&req.document);
    let html = tree.to_html();

    ApiResponse::success(PreviewResponse {
        preview: user.owner().is_none(),
        tree,
        html,
    })
}
