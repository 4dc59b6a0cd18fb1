use crate::handlers::{books, customers, dashboard, sales};
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/books", get(books::list).post(books::create))
        .route("/books/new", get(books::new_form))
        .route("/books/:id", post(books::update))
        .route("/books/:id/edit", get(books::edit_form))
        .route("/books/:id/delete", get(books::confirm_delete).post(books::delete))
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/new", get(customers::new_form))
        .route("/customers/:id", post(customers::update))
        .route("/customers/:id/edit", get(customers::edit_form))
        .route(
            "/customers/:id/delete",
            get(customers::confirm_delete).post(customers::delete),
        )
        .route("/sales", get(sales::list).post(sales::create))
        .route("/sales/new", get(sales::new_form))
        .route("/sales/:id", get(sales::detail).post(sales::update))
        .route("/sales/:id/edit", get(sales::edit_form))
        .route("/sales/:id/delete", get(sales::confirm_delete).post(sales::delete))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/monthly-sales", get(dashboard::get_monthly_sales))
        .route(
            "/api/monthly-sales/backend",
            get(dashboard::get_backend_monthly_sales),
        )
        .with_state(state)
}
