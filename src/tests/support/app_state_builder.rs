use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::UserProfileQuery;
use crate::portfolio::application::session::SaveCoordinator;
use crate::portfolio::application::PortfolioUseCases;
use crate::template::application::ports::incoming::use_cases::{
    GetTemplateUseCase, GetTemplatesUseCase,
};
use crate::tests::support::in_memory_portfolios::InMemoryPortfolios;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    get_templates: Arc<dyn GetTemplatesUseCase + Send + Sync>,
    get_template: Arc<dyn GetTemplateUseCase + Send + Sync>,
    save_coordinator: Arc<SaveCoordinator>,
    user_profile_query: Arc<dyn UserProfileQuery>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            // Empty store, so routes under test see real service behaviour
            portfolio: InMemoryPortfolios::new().use_cases(),
            get_templates: Arc::new(StubGetTemplatesUseCase::success(vec![])),
            get_template: Arc::new(StubGetTemplateUseCase),
            save_coordinator: Arc::new(SaveCoordinator::new()),
            user_profile_query: Arc::new(StubUserProfileQuery::empty()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_portfolio(mut self, use_cases: PortfolioUseCases) -> Self {
        self.portfolio = use_cases;
        self
    }

    pub fn with_portfolio_store(self, store: &InMemoryPortfolios) -> Self {
        self.with_portfolio(store.use_cases())
    }

    pub fn with_get_templates(
        mut self,
        uc: impl GetTemplatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_templates = Arc::new(uc);
        self
    }

    pub fn with_get_template(mut self, uc: impl GetTemplateUseCase + Send + Sync + 'static) -> Self {
        self.get_template = Arc::new(uc);
        self
    }

    pub fn with_save_coordinator(mut self, coordinator: Arc<SaveCoordinator>) -> Self {
        self.save_coordinator = coordinator;
        self
    }

    pub fn with_user_profile_query(mut self, query: impl UserProfileQuery + 'static) -> Self {
        self.user_profile_query = Arc::new(query);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            get_templates_use_case: self.get_templates,
            get_template_use_case: self.get_template,
            save_coordinator: self.save_coordinator,
            user_profile_query: self.user_profile_query,
        })
    }
}
