use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::UserRepository;
use crate::domain::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub user_service: Arc<UserService>,
}
