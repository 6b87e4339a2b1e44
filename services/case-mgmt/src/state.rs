//! 请求处理层共享状态

use std::sync::Arc;

use crate::application::services::{CaseService, ClientService};

/// 路由层状态：启动时装配一次，按请求克隆
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService>,
    pub case_service: Arc<CaseService>,
}

impl AppState {
    pub fn new(client_service: Arc<ClientService>, case_service: Arc<CaseService>) -> Self {
        Self {
            client_service,
            case_service,
        }
    }
}
