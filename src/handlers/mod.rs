//! Page controllers: fetch from the backend, render, and forward form posts.

pub mod books;
pub mod customers;
pub mod dashboard;
pub mod sales;

use crate::ui::Notice;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

/// `?notice=` key set by the redirect after a successful write.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Success messages for one entity, keyed by the write that happened.
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

impl NoticeQuery {
    pub fn resolve(&self, messages: &Messages) -> Option<Notice> {
        let text = match self.notice.as_deref()? {
            "created" => messages.created,
            "updated" => messages.updated,
            "deleted" => messages.deleted,
            _ => return None,
        };
        Some(Notice::Success(text.to_string()))
    }
}

pub(crate) fn redirect_with_notice(list_path: &str, key: &str) -> Response {
    Redirect::to(&format!("{list_path}?notice={key}")).into_response()
}

pub(crate) fn html_with_status(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: Messages = Messages {
        created: "Book added successfully!",
        updated: "Book updated successfully!",
        deleted: "Book deleted successfully!",
    };

    #[test]
    fn notice_keys_map_to_messages() {
        let query = NoticeQuery {
            notice: Some("deleted".into()),
        };
        assert_eq!(
            query.resolve(&MESSAGES),
            Some(Notice::Success("Book deleted successfully!".into()))
        );
    }

    #[test]
    fn unknown_notice_key_is_ignored() {
        let query = NoticeQuery {
            notice: Some("<script>".into()),
        };
        assert_eq!(query.resolve(&MESSAGES), None);
        assert_eq!(NoticeQuery::default().resolve(&MESSAGES), None);
    }
}
