use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio-builder".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// App data the auth extractors look up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header for a verified user.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = create_test_jwt_service()
        .generate_access_token(user_id, true)
        .unwrap();
    ("Authorization", format!("Bearer {}", token))
}
