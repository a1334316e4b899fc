use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfoliosUseCase,
    GetPublicPortfolioUseCase, GetSinglePortfolioUseCase, PublishPortfolioUseCase,
    SyncSectionsUseCase, UpdatePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPortfoliosUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePortfolioUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishPortfolioUseCase + Send + Sync>,
    pub sync_sections: Arc<dyn SyncSectionsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
}
