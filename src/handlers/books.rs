use super::{Messages, NoticeQuery, html_with_status, redirect_with_notice};
use crate::forms::BookForm;
use crate::models::Id;
use crate::state::AppState;
use crate::ui::Notice;
use crate::ui::books::{render_book_delete, render_book_form, render_books};
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
};
use tracing::info;

const LIST_PATH: &str = "/books";

const MESSAGES: Messages = Messages {
    created: "Book added successfully!",
    updated: "Book updated successfully!",
    deleted: "Book deleted successfully!",
};

pub async fn list(State(state): State<AppState>, Query(query): Query<NoticeQuery>) -> Html<String> {
    let notice = query.resolve(&MESSAGES);
    Html(list_page(&state, notice.as_ref()).await)
}

async fn list_page(state: &AppState, notice: Option<&Notice>) -> String {
    let books = state.api.books().list().await;
    render_books(books.as_deref().map_err(ToString::to_string), notice)
}

/// The list with an error banner, for a record that could not be opened.
async fn list_with_error(state: &AppState, status: StatusCode, message: String) -> Response {
    let notice = Notice::Error(message);
    html_with_status(status, list_page(state, Some(&notice)).await)
}

pub async fn new_form() -> Html<String> {
    Html(render_book_form(None, &BookForm::default(), None))
}

pub async fn create(State(state): State<AppState>, Form(form): Form<BookForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            return html_with_status(
                StatusCode::BAD_REQUEST,
                render_book_form(None, &form, Some(err.0)),
            );
        }
    };

    match state.api.books().create(&input).await {
        Ok(_) => {
            info!(title = %input.title, "book created");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "created")
        }
        Err(err) => html_with_status(
            err.response_status(),
            render_book_form(None, &form, Some(&err.to_string())),
        ),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.books().get(id).await {
        Ok(book) => html_with_status(
            StatusCode::OK,
            render_book_form(Some(id), &BookForm::from(&book), None),
        ),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Form(form): Form<BookForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            return html_with_status(
                StatusCode::BAD_REQUEST,
                render_book_form(Some(id), &form, Some(err.0)),
            );
        }
    };

    match state.api.books().update(id, &input).await {
        Ok(_) => {
            info!(id, "book updated");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "updated")
        }
        Err(err) => html_with_status(
            err.response_status(),
            render_book_form(Some(id), &form, Some(&err.to_string())),
        ),
    }
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.books().get(id).await {
        Ok(book) => html_with_status(StatusCode::OK, render_book_delete(&book, None)),
        Err(err) => list_with_error(&state, err.response_status(), err.to_string()).await,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> Response {
    match state.api.books().delete(id).await {
        Ok(()) => {
            info!(id, "book deleted");
            state.dropdowns.invalidate().await;
            redirect_with_notice(LIST_PATH, "deleted")
        }
        Err(err) => match state.api.books().get(id).await {
            Ok(book) => html_with_status(
                err.response_status(),
                render_book_delete(&book, Some(&err.to_string())),
            ),
            Err(_) => list_with_error(&state, err.response_status(), err.to_string()).await,
        },
    }
}
