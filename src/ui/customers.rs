use super::{Nav, Notice, escape_html, form_error, message_row, render_page};
use crate::forms::CustomerForm;
use crate::models::Customer;

const COLUMNS: usize = 4;

pub fn render_customers(customers: Result<&[Customer], String>, notice: Option<&Notice>) -> String {
    let rows = match customers {
        Err(message) => message_row(COLUMNS, &format!("Error loading customers: {message}"), true),
        Ok([]) => message_row(COLUMNS, "No customers found.", false),
        Ok(customers) => customers.iter().map(customer_row).collect(),
    };

    let body = format!(
        r#"<section class="actions"><a class="button primary" href="/customers/new">Add Customer</a></section>
<table>
  <thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Actions</th></tr></thead>
  <tbody id="customerTableBody">{rows}</tbody>
</table>"#
    );
    render_page("Customers", Nav::Customers, notice, &body)
}

fn customer_row(customer: &Customer) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{}</td><td>{}</td><td class="actions"><a class="button" href="/customers/{id}/edit">Edit</a><a class="button danger" href="/customers/{id}/delete">Delete</a></td></tr>"#,
        escape_html(&customer.name),
        escape_html(&customer.email),
        id = customer.id,
    )
}

pub fn render_customer_form(id: Option<i64>, form: &CustomerForm, error: Option<&str>) -> String {
    let (heading, action, submit) = match id {
        Some(id) => ("Edit Customer", format!("/customers/{id}"), "Update Customer"),
        None => ("Add Customer", "/customers".to_string(), "Save Customer"),
    };

    let body = format!(
        r#"<form class="card" method="post" action="{action}">
  <h2>{heading}</h2>
  <label>Name <input name="name" value="{}" required /></label>
  <label>Email <input name="email" type="email" value="{}" required /></label>
  <div class="actions"><button class="primary" type="submit">{submit}</button><a class="button quiet" href="/customers">Cancel</a></div>
</form>"#,
        escape_html(&form.name),
        escape_html(&form.email),
    );
    render_page(heading, Nav::Customers, form_error(error).as_ref(), &body)
}

pub fn render_customer_delete(customer: &Customer, error: Option<&str>) -> String {
    let body = format!(
        r#"<form class="card" method="post" action="/customers/{id}/delete">
  <h2>Delete Customer</h2>
  <p>Are you sure you want to delete this customer?</p>
  <dl><dt>Name</dt><dd>{}</dd><dt>Email</dt><dd>{}</dd></dl>
  <div class="actions"><button class="danger" type="submit">Delete</button><a class="button quiet" href="/customers">Cancel</a></div>
</form>"#,
        escape_html(&customer.name),
        escape_html(&customer.email),
        id = customer.id,
    );
    render_page("Delete Customer", Nav::Customers, form_error(error).as_ref(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_link_to_edit_and_delete() {
        let customers = vec![Customer {
            id: 8,
            name: "Ada O'Neil".into(),
            email: "ada@example.com".into(),
        }];
        let html = render_customers(Ok(&customers[..]), None);
        assert!(html.contains("<td>Ada O&#039;Neil</td>"));
        assert!(html.contains(r#"href="/customers/8/delete""#));
    }

    #[test]
    fn empty_table_has_four_column_row() {
        let html = render_customers(Ok(&[][..]), None);
        assert!(html.contains(r#"colspan="4""#));
        assert!(html.contains("No customers found."));
    }
}
