use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

fn auth_routes() -> Router {
    Router::new()
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
}

/// Catalog, sales and report endpoints. All of them need a signed-in user;
/// vendor writes additionally check the admin flag in the handler.
fn business_routes() -> Router {
    Router::new()
        // A001 Category
        .route(
            "/api/category",
            get(handlers::a001_category::list_all).post(handlers::a001_category::upsert),
        )
        .route(
            "/api/category/:id",
            get(handlers::a001_category::get_by_id).delete(handlers::a001_category::delete),
        )
        // A002 Client
        .route(
            "/api/client",
            get(handlers::a002_client::list_all).post(handlers::a002_client::upsert),
        )
        .route(
            "/api/client/:id",
            get(handlers::a002_client::get_by_id).delete(handlers::a002_client::delete),
        )
        // A003 Supplier
        .route(
            "/api/supplier",
            get(handlers::a003_supplier::list_all).post(handlers::a003_supplier::upsert),
        )
        .route(
            "/api/supplier/:id",
            get(handlers::a003_supplier::get_by_id).delete(handlers::a003_supplier::delete),
        )
        // A004 Vendor
        .route(
            "/api/vendor",
            get(handlers::a004_vendor::list_all).post(handlers::a004_vendor::upsert),
        )
        .route(
            "/api/vendor/:id",
            get(handlers::a004_vendor::get_by_id).delete(handlers::a004_vendor::delete),
        )
        // A005 Sale
        .route(
            "/api/sale",
            get(handlers::a005_sale::list_all).post(handlers::a005_sale::upsert),
        )
        .route(
            "/api/sale/:id",
            get(handlers::a005_sale::get_by_id).delete(handlers::a005_sale::delete),
        )
        // A006 Expense
        .route(
            "/api/expense",
            get(handlers::a006_expense::list_all).post(handlers::a006_expense::upsert),
        )
        .route(
            "/api/expense/:id",
            get(handlers::a006_expense::get_by_id).delete(handlers::a006_expense::delete),
        )
        // Reports
        .route(
            "/api/reports/sales",
            get(handlers::p900_sales_report::report),
        )
        .route(
            "/api/reports/expenses",
            get(handlers::p901_expense_report::report),
        )
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth))
}

pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(auth_routes())
        .merge(business_routes())
}
