//! Handlebars template registry
//!
//! Templates are embedded in the binary and registered once at startup.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use tracing::error;

use dinedir_shared::constants::DEFAULT_CURRENCY;
use dinedir_shared::price::format_price;

pub fn build_registry() -> Result<Handlebars<'static>, handlebars::TemplateError> {
    let mut registry = Handlebars::new();
    registry.register_template_string("home", include_str!("../templates/home.hbs"))?;
    registry.register_template_string("restaurant", include_str!("../templates/restaurant.hbs"))?;
    registry.register_template_string(
        "contact_received",
        include_str!("../templates/contact_received.hbs"),
    )?;
    registry.register_template_string("not_found", include_str!("../templates/not_found.hbs"))?;
    registry.register_helper("price", Box::new(price_helper));
    Ok(registry)
}

/// Renders a template into a response; a render failure logs and degrades to
/// a plain 500.
pub fn render_page(registry: &Handlebars<'_>, name: &str, data: &impl Serialize) -> Response {
    match registry.render(name, data) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render error in {}: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn price_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).and_then(|p| p.value().as_f64());
    out.write(&format_price(value, DEFAULT_CURRENCY))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registry_builds_with_all_pages() {
        let registry = build_registry().unwrap();
        for name in ["home", "restaurant", "contact_received", "not_found"] {
            assert!(registry.get_template(name).is_some(), "missing template {name}");
        }
    }

    #[test]
    fn restaurant_page_renders_sections_and_prices() {
        use dinedir_core::domain::{MenuItem, Restaurant};
        use dinedir_core::services::NormalizedMenu;

        let restaurant = Restaurant {
            id: "r1".to_string(),
            name: "Addis House".to_string(),
            logo: String::new(),
            cover_photo: None,
            location: "Bole".to_string(),
            description: "Home-style cooking".to_string(),
            theme_color: Some("#D97706".to_string()),
            locked: None,
            menu_categories: None,
            menu_items: None,
        };
        let menu = NormalizedMenu {
            items: vec![MenuItem {
                id: "item-0-0".to_string(),
                restaurant_id: "r1".to_string(),
                name: "Doro Wot".to_string(),
                description: "Slow-cooked chicken stew".to_string(),
                price: 240.0,
                image: String::new(),
                category: "Mains".to_string(),
            }],
            categories: vec!["Mains".to_string()],
        };

        let registry = build_registry().unwrap();
        let html = registry
            .render("restaurant", &crate::views::restaurant_page(&restaurant, &menu))
            .unwrap();

        assert!(html.contains("Addis House"));
        assert!(html.contains("id=\"category-mains\""));
        assert!(html.contains("Doro Wot"));
        assert!(html.contains("240 Birr"));
        assert!(html.contains("#c56300"));
    }

    #[test]
    fn price_helper_formats_values() {
        let registry = build_registry().unwrap();
        let out = registry
            .render_template("{{price value}}", &json!({ "value": 12.5 }))
            .unwrap();
        assert_eq!(out, "12.5 Birr");

        let missing = registry
            .render_template("{{price value}}", &json!({}))
            .unwrap();
        assert_eq!(missing, "0 Birr");
    }

    #[test]
    fn not_found_page_names_the_app() {
        let registry = build_registry().unwrap();
        let html = registry
            .render("not_found", &json!({ "appName": "dinedir" }))
            .unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("dinedir"));
    }
}
