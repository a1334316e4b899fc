use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, HttpResponseBuilder, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPublicPortfolioError;
use crate::modules::portfolio::domain::Document;
use crate::template::domain::node::escape_html;
use crate::template::domain::render_document;
use crate::AppState;

/// Server-rendered page for a published portfolio.
#[get("/p/{slug}")]
pub async fn public_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.portfolio.get_public.execute(&slug).await {
        Ok(view) => {
            let body = render_document(&view.document).to_html();
            html(HttpResponse::Ok(), &page_title(&view.document), &body)
        }

        Err(GetPublicPortfolioError::NotFound) => html(
            HttpResponse::NotFound(),
            "Not found",
            "<main><h1>Portfolio not found</h1></main>",
        ),

        Err(GetPublicPortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable rendering '{}': {}", slug, msg);
            html(
                HttpResponse::ServiceUnavailable(),
                "Unavailable",
                "<main><h1>This page is temporarily unavailable</h1></main>",
            )
        }

        Err(GetPublicPortfolioError::RepositoryError(msg)) => {
            error!("Failed to render '{}': {}", slug, msg);
            html(
                HttpResponse::InternalServerError(),
                "Error",
                "<main><h1>Something went wrong</h1></main>",
            )
        }
    }
}

fn page_title(document: &Document) -> String {
    let name = document.profile.name.trim();
    if name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} | Portfolio", name)
    }
}

fn html(mut builder: HttpResponseBuilder, title: &str, body: &str) -> HttpResponse {
    builder.content_type(ContentType::html()).body(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title></head><body>{}</body></html>",
        escape_html(title),
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory_portfolios::InMemoryPortfolios;
    use crate::tests::support::portfolio_fixtures::{published_record, sample_document};

    #[actix_web::test]
    async fn test_public_page_renders_html() {
        let store = InMemoryPortfolios::new();
        let mut record = published_record(UserId::from(Uuid::new_v4()), Uuid::new_v4());
        record.profile.name = "Ada <Byron>".to_string();
        let slug = record.slug.clone();
        store.seed(record, sample_document().sections);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_portfolio_store(&store).build())
                .service(public_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(&format!("/p/{}", slug)).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<title>Ada &lt;Byron&gt; | Portfolio</title>"));
        assert!(body.contains("data-template=\"modern-clean\""));
        assert!(!body.contains("<Byron>"));
    }

    #[actix_web::test]
    async fn test_public_page_missing_slug() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(public_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/p/nobody-here").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Portfolio not found"));
    }

    #[actix_web::test]
    async fn test_page_title_falls_back_without_name() {
        assert_eq!(page_title(&Document::default()), "Portfolio");
    }
}
