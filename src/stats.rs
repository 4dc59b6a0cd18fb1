use crate::models::{
    AuthorSales, Book, BookSales, ChartPoint, Customer, MonthlySales, MonthlySeries, Sale,
    SummaryStats,
};
use std::collections::BTreeMap;

/// Bars and slices shown on the dashboard charts.
pub const CHART_TOP_N: usize = 5;

const MONTH_KEY_LEN: usize = 7;

pub fn build_summary(books: &[Book], customers: &[Customer], sales: &[Sale]) -> SummaryStats {
    SummaryStats {
        total_books: books.len(),
        total_customers: customers.len(),
        total_sales: sales.len(),
        total_revenue: sales.iter().map(|sale| sale.total_amount).sum(),
    }
}

/// Groups sales by calendar month (`YYYY-MM`, the first seven characters of
/// the date) and sums quantity and revenue per month, oldest month first.
///
/// Sales whose date is shorter than seven characters are skipped.
pub fn build_monthly_series(sales: &[Sale]) -> MonthlySeries {
    let mut months: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for sale in sales {
        let Some(key) = month_key(&sale.date) else {
            continue;
        };
        let entry = months.entry(key).or_default();
        entry.0 = entry.0.saturating_add(sale.quantity);
        entry.1 += sale.total_amount;
    }
    into_series(months)
}

/// Same shape as [`build_monthly_series`], from the backend's own monthly rows.
/// Rows for the same month are merged.
pub fn series_from_backend(rows: &[MonthlySales]) -> MonthlySeries {
    let mut months: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for row in rows {
        let Some(key) = month_key(&row.month) else {
            continue;
        };
        let entry = months.entry(key).or_default();
        entry.0 = entry.0.saturating_add(row.total_sold);
        entry.1 += row.total_revenue;
    }
    into_series(months)
}

fn month_key(date: &str) -> Option<String> {
    let key: String = date.chars().take(MONTH_KEY_LEN).collect();
    (key.chars().count() == MONTH_KEY_LEN).then_some(key)
}

fn into_series(months: BTreeMap<String, (i64, f64)>) -> MonthlySeries {
    let mut series = MonthlySeries::default();
    for (label, (quantity, revenue)) in months {
        series.labels.push(label);
        series.sales_data.push(quantity);
        series.revenue_data.push(revenue);
    }
    series
}

/// Best-selling titles by copies sold.
pub fn top_books(rows: &[BookSales], limit: usize) -> Vec<ChartPoint> {
    let mut rows: Vec<&BookSales> = rows.iter().collect();
    rows.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
    rows.into_iter()
        .take(limit)
        .map(|row| ChartPoint {
            label: row.title.clone(),
            value: row.total_sold as f64,
        })
        .collect()
}

/// Authors by revenue.
pub fn top_authors(rows: &[AuthorSales], limit: usize) -> Vec<ChartPoint> {
    let mut rows: Vec<&AuthorSales> = rows.iter().collect();
    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows.into_iter()
        .take(limit)
        .map(|row| ChartPoint {
            label: row.author.clone(),
            value: row.total_revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(date: &str, quantity: i64, total_amount: f64) -> Sale {
        Sale {
            id: 0,
            book_id: 1,
            book_title: "Dune".into(),
            book_author: None,
            book_price: 10.0,
            customer_id: 1,
            customer_name: "Ada".into(),
            customer_email: None,
            date: date.into(),
            quantity,
            total_amount,
        }
    }

    #[test]
    fn monthly_series_groups_by_month() {
        let sales = vec![
            sale("2024-01-05", 2, 20.0),
            sale("2024-01-20", 1, 10.0),
            sale("2024-02-01", 3, 30.0),
        ];
        let series = build_monthly_series(&sales);
        assert_eq!(series.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(series.sales_data, vec![3, 3]);
        assert_eq!(series.revenue_data, vec![30.0, 30.0]);
    }

    #[test]
    fn monthly_series_sorts_and_preserves_totals() {
        let sales = vec![
            sale("2024-03-02", 4, 44.0),
            sale("2023-12-31", 1, 9.5),
            sale("2024-03-15T10:00:00", 2, 22.0),
            sale("2024-01-01", 5, 50.5),
        ];
        let series = build_monthly_series(&sales);
        assert_eq!(series.labels, vec!["2023-12", "2024-01", "2024-03"]);

        let quantity: i64 = series.sales_data.iter().sum();
        let revenue: f64 = series.revenue_data.iter().sum();
        assert_eq!(quantity, 12);
        assert!((revenue - 126.0).abs() < 1e-9);
    }

    #[test]
    fn monthly_series_skips_short_dates() {
        let sales = vec![
            sale("", 9, 90.0),
            sale("2024-1", 9, 90.0),
            sale("2024-06-01", 1, 10.0),
        ];
        let series = build_monthly_series(&sales);
        assert_eq!(series.labels, vec!["2024-06"]);
        assert_eq!(series.sales_data, vec![1]);
    }

    #[test]
    fn monthly_series_empty_input() {
        assert_eq!(build_monthly_series(&[]), MonthlySeries::default());
    }

    #[test]
    fn backend_rows_become_sorted_series() {
        let rows = vec![
            MonthlySales {
                month: "2024-02".into(),
                total_sold: 3,
                total_revenue: 30.0,
            },
            MonthlySales {
                month: "2024-01".into(),
                total_sold: 2,
                total_revenue: 25.0,
            },
        ];
        let series = series_from_backend(&rows);
        assert_eq!(series.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(series.sales_data, vec![2, 3]);
    }

    #[test]
    fn summary_sums_revenue() {
        let books = vec![Book {
            id: 1,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            price: 10.0,
        }];
        let sales = vec![sale("2024-01-01", 1, 10.0), sale("2024-01-02", 2, 20.5)];
        let summary = build_summary(&books, &[], &sales);
        assert_eq!(summary.total_books, 1);
        assert_eq!(summary.total_customers, 0);
        assert_eq!(summary.total_sales, 2);
        assert_eq!(summary.total_revenue, 30.5);
    }

    #[test]
    fn top_books_keeps_five_best_sellers() {
        let rows: Vec<BookSales> = (1..=7)
            .map(|n| BookSales {
                book_id: n,
                title: format!("Book {n}"),
                total_sold: n,
                total_revenue: n as f64,
            })
            .collect();
        let points = top_books(&rows, CHART_TOP_N);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Book 7", "Book 6", "Book 5", "Book 4", "Book 3"]);
    }

    #[test]
    fn top_authors_orders_by_revenue() {
        let rows = vec![
            AuthorSales {
                author: "Le Guin".into(),
                total_sold: 10,
                total_revenue: 80.0,
            },
            AuthorSales {
                author: "Herbert".into(),
                total_sold: 3,
                total_revenue: 120.0,
            },
        ];
        let points = top_authors(&rows, CHART_TOP_N);
        assert_eq!(points[0].label, "Herbert");
        assert_eq!(points[1].value, 80.0);
    }
}
