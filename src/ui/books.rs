use super::{Nav, Notice, escape_html, form_error, format_money, message_row, render_page};
use crate::forms::BookForm;
use crate::models::Book;

const COLUMNS: usize = 5;

pub fn render_books(books: Result<&[Book], String>, notice: Option<&Notice>) -> String {
    let rows = match books {
        Err(message) => message_row(COLUMNS, &format!("Error loading books: {message}"), true),
        Ok([]) => message_row(COLUMNS, "No books found.", false),
        Ok(books) => books.iter().map(book_row).collect(),
    };

    let body = format!(
        r#"<section class="actions"><a class="button primary" href="/books/new">Add Book</a></section>
<table>
  <thead><tr><th>ID</th><th>Title</th><th>Author</th><th>Price</th><th>Actions</th></tr></thead>
  <tbody id="bookTableBody">{rows}</tbody>
</table>"#
    );
    render_page("Books", Nav::Books, notice, &body)
}

fn book_row(book: &Book) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td class="actions"><a class="button" href="/books/{id}/edit">Edit</a><a class="button danger" href="/books/{id}/delete">Delete</a></td></tr>"#,
        escape_html(&book.title),
        escape_html(&book.author),
        format_money(book.price),
        id = book.id,
    )
}

/// Create form when `id` is `None`, edit form otherwise.
pub fn render_book_form(id: Option<i64>, form: &BookForm, error: Option<&str>) -> String {
    let (heading, action, submit) = match id {
        Some(id) => ("Edit Book", format!("/books/{id}"), "Update Book"),
        None => ("Add Book", "/books".to_string(), "Save Book"),
    };

    let body = format!(
        r#"<form class="card" method="post" action="{action}">
  <h2>{heading}</h2>
  <label>Title <input name="title" value="{}" required /></label>
  <label>Author <input name="author" value="{}" required /></label>
  <label>Price <input name="price" type="number" step="0.01" min="0" value="{}" required /></label>
  <div class="actions"><button class="primary" type="submit">{submit}</button><a class="button quiet" href="/books">Cancel</a></div>
</form>"#,
        escape_html(&form.title),
        escape_html(&form.author),
        escape_html(&form.price),
    );
    render_page(heading, Nav::Books, form_error(error).as_ref(), &body)
}

pub fn render_book_delete(book: &Book, error: Option<&str>) -> String {
    let body = format!(
        r#"<form class="card" method="post" action="/books/{id}/delete">
  <h2>Delete Book</h2>
  <p>Are you sure you want to delete this book?</p>
  <dl><dt>Title</dt><dd>{}</dd><dt>Author</dt><dd>{}</dd></dl>
  <div class="actions"><button class="danger" type="submit">Delete</button><a class="button quiet" href="/books">Cancel</a></div>
</form>"#,
        escape_html(&book.title),
        escape_html(&book.author),
        id = book.id,
    );
    render_page("Delete Book", Nav::Books, form_error(error).as_ref(), &body)
}
