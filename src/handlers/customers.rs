use super::{Messages, NoticeQuery, html_with_status, redirect_with_notice};
use crate::forms::CustomerForm;
use crate::models::Id;
use crate::state::AppState;
use crate::ui::Notice;
use crate::ui::customers::{render_customer_delete, render_customer_form, render_customers};
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
};
use tracing::info;

const LIST_PATH: &str = "/customers";

const MESSAGES: Messages = Messages {
    created: "Customer added successfully!",
    updated: "Customer updated successfully!",
    deleted: "Customer deleted successfully!",
};

pub async fn list(State(state): State<AppState>, Query(query): Query<NoticeQuery>) -> Html<String> {
    let notice = query.resolve(&MESSAGES);
    Html(list_page(&state, notice.as_ref()).await)
}

async fn list_page(state: &AppState, notice: Option<&Notice>) -> String {
    let customers = state.api.customers().list().await;
    render_customers(customers.as_deref().map_err(ToString::to_string), notice)
}

async fn list_with_error(state: &AppState, status: StatusCode, message: String) -> Response {
    let notice = Notice::Error(message);
    html_with_status(status, list_page(state, Some(&notice)).await)
}

pub async fn new_form() -> Html<String> {
    Html(render_customer_form(None, &CustomerForm::default(), None))
}

pub async fn create(State(state): State<AppState>, Form(form): Form<CustomerForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            return html_with_status(
                StatusCode::BAD_REQUEST,
                render_customer_form(None, &form, Some(err.0)),
            );
        }
    };

    match state.api.customers().create(&input).await {
        Ok(_) => {
            info!(email = %input.email, "customer created");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "created")
        }
        Err(err) => html_with_status(
            err.response_status(),
            render_customer_form(None, &form, Some(&err.to_string())),
        ),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.customers().get(id).await {
        Ok(customer) => html_with_status(
            StatusCode::OK,
            render_customer_form(Some(id), &CustomerForm::from(&customer), None),
        ),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Form(form): Form<CustomerForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            return html_with_status(
                StatusCode::BAD_REQUEST,
                render_customer_form(Some(id), &form, Some(err.0)),
            );
        }
    };

    match state.api.customers().update(id, &input).await {
        Ok(_) => {
            info!(id, "customer updated");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "updated")
        }
        Err(err) => html_with_status(
            err.response_status(),
            render_customer_form(Some(id), &form, Some(&err.to_string())),
        ),
    }
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.customers().get(id).await {
        Ok(customer) => html_with_status(StatusCode::OK, render_customer_delete(&customer, None)),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.customers().delete(id).await {
        Ok(()) => {
            info!(id, "customer deleted");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "deleted")
        }
        Err(err) => match state.api.customers().get(id).await {
            Ok(customer) => html_with_status(
                err.response_status(),
                render_customer_delete(&customer, Some(&err.to_string())),
            ),
            Err(_) => list_with_error(&state, err.response_status(), err.to_string()).await,
        },
    }
}
