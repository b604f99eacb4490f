// ============================================================================
// DineDir API - Page Handlers
// File: crates/dinedir-api/src/handlers/pages.rs
// ============================================================================
//! Server-rendered directory and restaurant detail pages

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use dinedir_core::domain::Restaurant;

use crate::state::AppState;
use crate::templates::render_page;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub q: Option<String>,
}

/// Directory listing - GET /
pub async fn home(State(state): State<AppState>, Query(params): Query<HomeQuery>) -> Response {
    let restaurants = match state.restaurants.list_unlocked().await {
        Ok(restaurants) => restaurants,
        Err(e) => {
            error!("Error fetching restaurants: {}", e);
            Vec::new()
        }
    };
    info!("Found {} unlocked restaurants", restaurants.len());

    let query = params.q.unwrap_or_default();
    let visible = filter_by_name(restaurants, &query);

    render_page(
        &state.templates,
        "home",
        &json!({
            "appName": state.config.app.name,
            "query": query,
            "restaurants": views::restaurant_cards(&visible),
        }),
    )
}

/// Restaurant detail - GET /restaurant/{id}
pub async fn restaurant_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let restaurant = match state.restaurants.find_unlocked_by_id(&id).await {
        Ok(Some(restaurant)) => restaurant,
        Ok(None) => {
            info!("Restaurant {} not found or is locked", id);
            return not_found_page(&state);
        }
        Err(e) => {
            error!("Error fetching restaurant {}: {}", id, e);
            return not_found_page(&state);
        }
    };

    let menu = state.menu.normalized_menu(Some(&restaurant)).await;
    info!(
        "Restaurant: {}, menu items: {}",
        restaurant.name,
        menu.items.len()
    );

    render_page(
        &state.templates,
        "restaurant",
        &views::restaurant_page(&restaurant, &menu),
    )
}

/// Fallback for unmatched routes
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found_page(&state)
}

pub fn not_found_page(state: &AppState) -> Response {
    let mut response = render_page(
        &state.templates,
        "not_found",
        &json!({ "appName": state.config.app.name }),
    );
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

/// Case-insensitive name substring filter for the listing page search box.
fn filter_by_name(restaurants: Vec<Restaurant>, query: &str) -> Vec<Restaurant> {
    if query.is_empty() {
        return restaurants;
    }
    let needle = query.to_lowercase();
    restaurants
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
