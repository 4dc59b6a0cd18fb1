use serde::{Deserialize, Deserializer, Serialize};

pub type Id = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: Id,
    pub title: String,
    pub author: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
}

/// A sale as the backend returns it, joined with book and customer fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Id,
    pub book_id: Id,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub book_author: Option<String>,
    #[serde(default)]
    pub book_price: f64,
    pub customer_id: Id,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Kept as sent; the monthly grouping works on the raw text. A
    /// non-string date reads as empty.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    pub quantity: i64,
    #[serde(default)]
    pub total_amount: f64,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleInput {
    pub book_id: Id,
    pub customer_id: Id,
    pub date: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSales {
    #[serde(rename = "BookID")]
    pub book_id: Id,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "TotalSold")]
    pub total_sold: i64,
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorSales {
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "TotalSold")]
    pub total_sold: i64,
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCustomer {
    #[serde(rename = "CustomerID")]
    pub customer_id: Id,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "TotalTransactions")]
    pub total_transactions: i64,
    #[serde(rename = "TotalBooksBought")]
    pub total_books_bought: i64,
    #[serde(rename = "TotalSpent")]
    pub total_spent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySales {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "TotalSold")]
    pub total_sold: i64,
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq)]
pub struct SummaryStats {
    pub total_books: usize,
    pub total_customers: usize,
    pub total_sales: usize,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub sales_data: Vec<i64>,
    pub revenue_data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Everything the dashboard page shows. A chart that failed to load is `None`.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Dashboard {
    pub summary: SummaryStats,
    pub top_books: Option<Vec<ChartPoint>>,
    pub monthly: Option<MonthlySeries>,
    pub author_revenue: Option<Vec<ChartPoint>>,
    pub top_customers: Option<Vec<TopCustomer>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_tolerates_missing_denormalized_fields() {
        let sale: Sale = serde_json::from_value(serde_json::json!({
            "id": 4,
            "book_id": 1,
            "customer_id": 2,
            "date": "2024-03-09",
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(sale.book_title, "");
        assert_eq!(sale.book_author, None);
        assert_eq!(sale.total_amount, 0.0);
    }

    #[test]
    fn non_string_sale_date_reads_as_empty() {
        let sale: Sale = serde_json::from_value(serde_json::json!({
            "id": 1,
            "book_id": 1,
            "customer_id": 1,
            "date": 20240105,
            "quantity": 1
        }))
        .unwrap();
        assert!(sale.date.is_empty());
    }

    #[test]
    fn analytics_rows_use_backend_column_names() {
        let row: BookSales = serde_json::from_value(serde_json::json!({
            "BookID": 7,
            "Title": "Dune",
            "TotalSold": 12,
            "TotalRevenue": 119.88
        }))
        .unwrap();
        assert_eq!(row.book_id, 7);
        assert_eq!(row.total_sold, 12);
    }

    #[test]
    fn monthly_series_serializes_camel_case() {
        let series = MonthlySeries {
            labels: vec!["2024-01".into()],
            sales_data: vec![3],
            revenue_data: vec![30.0],
        };
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["salesData"], serde_json::json!([3]));
        assert_eq!(value["revenueData"], serde_json::json!([30.0]));
    }
}
