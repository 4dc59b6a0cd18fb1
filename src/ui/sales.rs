use super::{
    Nav, Notice, escape_html, form_error, format_date, format_money, message_row, render_page,
};
use crate::cache::{DropdownLists, book_option_label, customer_option_label};
use crate::forms::SaleForm;
use crate::models::Sale;

const COLUMNS: usize = 7;

pub fn render_sales(sales: Result<&[Sale], String>, notice: Option<&Notice>) -> String {
    let rows = match sales {
        Err(message) => message_row(COLUMNS, &format!("Error loading sales: {message}"), true),
        Ok([]) => message_row(COLUMNS, "No sales found.", false),
        Ok(sales) => sales.iter().map(sale_row).collect(),
    };

    let body = format!(
        r#"<section class="actions"><a class="button primary" href="/sales/new">Record Sale</a></section>
<table>
  <thead><tr><th>ID</th><th>Date</th><th>Book</th><th>Customer</th><th>Quantity</th><th>Total</th><th>Actions</th></tr></thead>
  <tbody id="saleTableBody">{rows}</tbody>
</table>"#
    );
    render_page("Sales", Nav::Sales, notice, &body)
}

fn sale_row(sale: &Sale) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="actions"><a class="button quiet" href="/sales/{id}">View</a><a class="button" href="/sales/{id}/edit">Edit</a><a class="button danger" href="/sales/{id}/delete">Delete</a></td></tr>"#,
        escape_html(&format_date(&sale.date)),
        escape_html(&sale.book_title),
        escape_html(&sale.customer_name),
        sale.quantity,
        format_money(sale.total_amount),
        id = sale.id,
    )
}

fn options(placeholder: &str, selected: &str, items: impl Iterator<Item = (i64, String)>) -> String {
    let mut out = format!(r#"<option value="">{}</option>"#, escape_html(placeholder));
    for (id, label) in items {
        let id = id.to_string();
        let marker = if id == selected.trim() { " selected" } else { "" };
        out.push_str(&format!(
            r#"<option value="{id}"{marker}>{}</option>"#,
            escape_html(&label)
        ));
    }
    out
}

/// Sale form. `lists` is `Err` when the dropdown data could not be loaded;
/// the selects then only carry their placeholder.
pub fn render_sale_form(
    id: Option<i64>,
    form: &SaleForm,
    lists: Result<&DropdownLists, String>,
    error: Option<&str>,
) -> String {
    let (heading, action, submit) = match id {
        Some(id) => ("Edit Sale", format!("/sales/{id}"), "Update Sale"),
        None => ("Record Sale", "/sales".to_string(), "Save Sale"),
    };

    let empty = DropdownLists::default();
    let (lists, load_error) = match lists {
        Ok(lists) => (lists, None),
        Err(message) => (&empty, Some(format!("Error loading dropdown data: {message}"))),
    };

    let book_options = options(
        "Select a book",
        &form.book_id,
        lists.books.iter().map(|book| (book.id, book_option_label(book))),
    );
    let customer_options = options(
        "Select a customer",
        &form.customer_id,
        lists
            .customers
            .iter()
            .map(|customer| (customer.id, customer_option_label(customer))),
    );

    let body = format!(
        r#"<form class="card" method="post" action="{action}">
  <h2>{heading}</h2>
  <label>Book <select name="book_id" required>{book_options}</select></label>
  <label>Customer <select name="customer_id" required>{customer_options}</select></label>
  <label>Date <input name="date" type="date" value="{}" required /></label>
  <label>Quantity <input name="quantity" type="number" min="1" step="1" value="{}" required /></label>
  <div class="actions"><button class="primary" type="submit">{submit}</button><a class="button quiet" href="/sales">Cancel</a></div>
</form>"#,
        escape_html(&form.date),
        escape_html(&form.quantity),
    );

    let notice = error
        .map(str::to_string)
        .or(load_error)
        .map(Notice::Error);
    render_page(heading, Nav::Sales, notice.as_ref(), &body)
}

pub fn render_sale_detail(sale: &Sale) -> String {
    let na = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(escape_html)
            .unwrap_or_else(|| "N/A".to_string())
    };

    let body = format!(
        r#"<section class="card">
  <h2>Sale #{id}</h2>
  <dl>
    <dt>Date</dt><dd>{}</dd>
    <dt>Book</dt><dd>{}</dd>
    <dt>Author</dt><dd>{}</dd>
    <dt>Book Price</dt><dd>{}</dd>
    <dt>Customer</dt><dd>{}</dd>
    <dt>Email</dt><dd>{}</dd>
    <dt>Quantity</dt><dd>{}</dd>
    <dt>Unit Price</dt><dd>{}</dd>
    <dt>Total Amount</dt><dd>{}</dd>
  </dl>
  <div class="actions"><a class="button" href="/sales/{id}/edit">Edit</a><a class="button danger" href="/sales/{id}/delete">Delete</a><a class="button quiet" href="/sales">Back</a></div>
</section>"#,
        escape_html(&format_date(&sale.date)),
        escape_html(&sale.book_title),
        na(&sale.book_author),
        format_money(sale.book_price),
        escape_html(&sale.customer_name),
        na(&sale.customer_email),
        sale.quantity,
        format_money(sale.book_price),
        format_money(sale.total_amount),
        id = sale.id,
    );
    render_page("Sale Details", Nav::Sales, None, &body)
}

pub fn render_sale_delete(sale: &Sale, error: Option<&str>) -> String {
    let body = format!(
        r#"<form class="card" method="post" action="/sales/{id}/delete">
  <h2>Delete Sale</h2>
  <p>Are you sure you want to delete this sale?</p>
  <dl><dt>Book</dt><dd>{}</dd><dt>Customer</dt><dd>{}</dd><dt>Date</dt><dd>{}</dd></dl>
  <div class="actions"><button class="danger" type="submit">Delete</button><a class="button quiet" href="/sales">Cancel</a></div>
</form>"#,
        escape_html(&sale.book_title),
        escape_html(&sale.customer_name),
        escape_html(&format_date(&sale.date)),
        id = sale.id,
    );
    render_page("Delete Sale", Nav::Sales, form_error(error).as_ref(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Customer};

    fn sale() -> Sale {
        Sale {
            id: 11,
            book_id: 2,
            book_title: "Emma".into(),
            book_author: None,
            book_price: 7.25,
            customer_id: 5,
            customer_name: "Ada".into(),
            customer_email: Some("ada@example.com".into()),
            date: "2024-02-14".into(),
            quantity: 2,
            total_amount: 14.5,
        }
    }

    #[test]
    fn list_row_has_seven_cells() {
        let sales = vec![sale()];
        let html = render_sales(Ok(&sales[..]), None);
        assert!(html.contains(
            "<td>2024-02-14</td><td>Emma</td><td>Ada</td><td>2</td><td>$14.50</td>"
        ));
        assert!(html.contains(r#"href="/sales/11""#));
    }

    #[test]
    fn form_preselects_current_book_and_customer() {
        let lists = DropdownLists {
            books: vec![Book {
                id: 2,
                title: "Emma".into(),
                author: "Jane Austen".into(),
                price: 7.25,
            }],
            customers: vec![Customer {
                id: 5,
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }],
        };
        let html = render_sale_form(Some(11), &SaleForm::from(&sale()), Ok(&lists), None);
        assert!(html.contains(r#"<option value="2" selected>Emma (Jane Austen) - $7.25</option>"#));
        assert!(html.contains(r#"<option value="5" selected>Ada (ada@example.com)</option>"#));
        assert!(html.contains(r#"action="/sales/11""#));
    }

    #[test]
    fn form_reports_dropdown_failure() {
        let html = render_sale_form(
            None,
            &SaleForm::new_dated("2024-05-01"),
            Err("timed out".into()),
            None,
        );
        assert!(html.contains("Error loading dropdown data: timed out"));
        assert!(html.contains(r#"value="2024-05-01""#));
    }

    #[test]
    fn detail_shows_na_for_missing_author() {
        let html = render_sale_detail(&sale());
        assert!(html.contains("<dt>Author</dt><dd>N/A</dd>"));
        assert!(html.contains("<dt>Email</dt><dd>ada@example.com</dd>"));
        assert!(html.contains("<dt>Total Amount</dt><dd>$14.50</dd>"));
    }
}
