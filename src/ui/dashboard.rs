use super::chart::{self, Series};
use super::{Nav, Notice, escape_html, format_money, message_row, render_page};
use crate::models::{Dashboard, TopCustomer};

pub fn render_dashboard(dashboard: &Dashboard, notice: Option<&Notice>) -> String {
    let summary = &dashboard.summary;
    let stats = [
        ("Total Books", "totalBooks", summary.total_books.to_string()),
        ("Total Sales", "totalSales", summary.total_sales.to_string()),
        (
            "Total Customers",
            "totalCustomers",
            summary.total_customers.to_string(),
        ),
        ("Total Revenue", "totalRevenue", format_money(summary.total_revenue)),
    ];
    let cards: String = stats
        .iter()
        .map(|(label, id, value)| {
            format!(
                r#"<div class="stat"><span class="label">{label}</span><span id="{id}" class="value">{value}</span></div>"#
            )
        })
        .collect();

    let top_books = match &dashboard.top_books {
        Some(points) => chart::bar_chart(points),
        None => chart::empty_chart("Chart unavailable"),
    };
    let monthly = match &dashboard.monthly {
        Some(series) => chart::line_chart(
            &series.labels,
            &[
                Series {
                    label: "Books Sold",
                    values: series.sales_data.iter().map(|v| *v as f64).collect(),
                },
                Series {
                    label: "Revenue ($)",
                    values: series.revenue_data.clone(),
                },
            ],
        ),
        None => chart::empty_chart("Chart unavailable"),
    };
    let authors = match &dashboard.author_revenue {
        Some(points) => chart::pie_chart(points),
        None => chart::empty_chart("Chart unavailable"),
    };

    let customers = match &dashboard.top_customers {
        Some(rows) => top_customer_rows(rows),
        None => message_row(4, "Top customers unavailable.", false),
    };

    let body = format!(
        r#"<section class="panel">{cards}</section>
<section class="charts">
  <div class="card" id="topBooksChart"><h2>Top Selling Books</h2>{top_books}</div>
  <div class="card" id="monthlySalesChart"><h2>Monthly Sales</h2><p class="label">Books Sold (blue, left axis) and Revenue ($, red, right axis)</p>{monthly}</div>
  <div class="card" id="authorRevenueChart"><h2>Revenue by Author</h2>{authors}</div>
</section>
<section class="card">
  <h2>Top Customers</h2>
  <table>
    <thead><tr><th>Customer</th><th>Transactions</th><th>Books Bought</th><th>Total Spent</th></tr></thead>
    <tbody>{customers}</tbody>
  </table>
</section>"#
    );
    render_page("Dashboard", Nav::Dashboard, notice, &body)
}

fn top_customer_rows(rows: &[TopCustomer]) -> String {
    if rows.is_empty() {
        return message_row(4, "No sales yet.", false);
    }
    rows.iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&row.name),
                row.total_transactions,
                row.total_books_bought,
                format_money(row.total_spent)
            )
        })
        .collect()
}
