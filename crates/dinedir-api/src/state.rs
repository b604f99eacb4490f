use std::sync::Arc;

use handlebars::Handlebars;

use dinedir_core::repositories::{RestaurantRepository, StoreInspector};
use dinedir_core::services::MenuService;
use dinedir_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub menu: Arc<MenuService>,
    pub inspector: Arc<dyn StoreInspector>,
    pub templates: Arc<Handlebars<'static>>,
    pub config: AppConfig,
}
