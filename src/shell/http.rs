use axum::{
    Router,
    http::Method,
    routing::{MethodRouter, delete, get, post, put},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::modules::users::use_cases::add_user::inbound::http as add_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_http;
use crate::modules::users::use_cases::update_user::inbound::http as update_http;
use crate::shell::state::AppState;

pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub pattern: &'static str,
    endpoint: MethodRouter<AppState>,
}

pub fn routes() -> Vec<Route> {
    vec![
        Route {
            name: "getUsers",
            method: Method::GET,
            pattern: "/users",
            endpoint: get(list_http::handle),
        },
        Route {
            name: "getUser",
            method: Method::GET,
            pattern: "/user/{id}",
            endpoint: get(get_http::handle),
        },
        Route {
            name: "addUser",
            method: Method::POST,
            pattern: "/user/add",
            endpoint: post(add_http::handle),
        },
        Route {
            name: "updateUser",
            method: Method::PUT,
            pattern: "/user/update",
            endpoint: put(update_http::handle),
        },
        Route {
            name: "deleteUser",
            method: Method::DELETE,
            pattern: "/user/delete/{id}",
            endpoint: delete(delete_http::handle),
        },
    ]
}

pub fn router(state: AppState) -> Router {
    routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!(
                route = route.name,
                method = %route.method,
                pattern = route.pattern,
                "registering route"
            );
            router.route(route.pattern, route.endpoint)
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Trailing slashes are trimmed before routing, so `/users/` serves `/users`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
