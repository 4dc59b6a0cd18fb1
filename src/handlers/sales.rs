use super::{Messages, NoticeQuery, html_with_status, redirect_with_notice};
use crate::forms::SaleForm;
use crate::models::Id;
use crate::state::AppState;
use crate::ui::Notice;
use crate::ui::sales::{render_sale_delete, render_sale_detail, render_sale_form, render_sales};
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
};
use chrono::Local;
use tracing::{info, warn};

const LIST_PATH: &str = "/sales";

const MESSAGES: Messages = Messages {
    created: "Sale recorded successfully!",
    updated: "Sale updated successfully!",
    deleted: "Sale deleted successfully!",
};

/// Lists sales and reloads the dropdown cache alongside.
pub async fn list(State(state): State<AppState>, Query(query): Query<NoticeQuery>) -> Html<String> {
    let notice = query.resolve(&MESSAGES);
    let (page, refreshed) = tokio::join!(
        list_page(&state, notice.as_ref()),
        state.dropdowns.refresh(&state.api)
    );
    if let Err(err) = refreshed {
        warn!("error loading dropdown data: {err}");
    }
    Html(page)
}

async fn list_page(state: &AppState, notice: Option<&Notice>) -> String {
    let sales = state.api.sales().list().await;
    render_sales(sales.as_deref().map_err(ToString::to_string), notice)
}

async fn list_with_error(state: &AppState, status: StatusCode, message: String) -> Response {
    let notice = Notice::Error(message);
    html_with_status(status, list_page(state, Some(&notice)).await)
}

/// Renders the sale form with the cached book and customer lists.
async fn form_page(
    state: &AppState,
    id: Option<Id>,
    form: &SaleForm,
    error: Option<&str>,
) -> String {
    let lists = state.dropdowns.snapshot_or_refresh(&state.api).await;
    render_sale_form(
        id,
        form,
        lists.as_ref().map_err(ToString::to_string),
        error,
    )
}

pub async fn new_form(State(state): State<AppState>) -> Html<String> {
    let form = SaleForm::new_dated(&today_string());
    Html(form_page(&state, None, &form, None).await)
}

pub async fn create(State(state): State<AppState>, Form(form): Form<SaleForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            let page = form_page(&state, None, &form, Some(err.0)).await;
            return html_with_status(StatusCode::BAD_REQUEST, page);
        }
    };

    match state.api.sales().create(&input).await {
        Ok(_) => {
            info!(
                book_id = input.book_id,
                customer_id = input.customer_id,
                quantity = input.quantity,
                "sale recorded"
            );
            redirect_with_notice(LIST_PATH, "created")
        }
        Err(err) => {
            let page = form_page(&state, None, &form, Some(&err.to_string())).await;
            html_with_status(err.response_status(), page)
        }
    }
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.sales().get(id).await {
        Ok(sale) => html_with_status(StatusCode::OK, render_sale_detail(&sale)),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.sales().get(id).await {
        Ok(sale) => {
            let page = form_page(&state, Some(id), &SaleForm::from(&sale), None).await;
            html_with_status(StatusCode::OK, page)
        }
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Form(form): Form<SaleForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            let page = form_page(&state, Some(id), &form, Some(err.0)).await;
            return html_with_status(StatusCode::BAD_REQUEST, page);
        }
    };

    match state.api.sales().update(id, &input).await {
        Ok(_) => {
            info!(id, "sale updated");
            redirect_with_notice(LIST_PATH, "updated")
        }
        Err(err) => {
            let page = form_page(&state, Some(id), &form, Some(&err.to_string())).await;
            html_with_status(err.response_status(), page)
        }
    }
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.sales().get(id).await {
        Ok(sale) => html_with_status(StatusCode::OK, render_sale_delete(&sale, None)),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.sales().delete(id).await {
        Ok(()) => {
            info!(id, "sale deleted");
            redirect_with_notice(LIST_PATH, "deleted")
        }
        Err(err) => match state.api.sales().get(id).await {
            Ok(sale) => html_with_status(
                err.response_status(),
                render_sale_delete(&sale, Some(&err.to_string())),
            ),
            Err(_) => list_with_error(&state, err.response_status(), err.to_string()).await,
        },
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
