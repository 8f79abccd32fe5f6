use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::core::ports::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore + Send + Sync>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore + Send + Sync>) -> Self {
        Self { users }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
