//! Form payloads as posted by the console pages, and their validation.
//!
//! Fields arrive as raw strings so that a bad number is reported as a
//! validation failure rather than rejected by the extractor.

use crate::errors::FormError;
use crate::models::{Book, BookInput, Customer, CustomerInput, Id, Sale, SaleInput};
use serde::Deserialize;

pub const BOOK_FIELDS_REQUIRED: FormError = FormError("Please fill in all fields correctly");
pub const FIELDS_REQUIRED: FormError = FormError("Please fill in all fields");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub price: String,
}

impl BookForm {
    pub fn validate(&self) -> Result<BookInput, FormError> {
        let title = self.title.trim();
        let author = self.author.trim();
        let price = parse_float(&self.price);

        match price {
            Some(price) if !title.is_empty() && !author.is_empty() => Ok(BookInput {
                title: title.to_string(),
                author: author.to_string(),
                price,
            }),
            _ => Err(BOOK_FIELDS_REQUIRED),
        }
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl CustomerForm {
    pub fn validate(&self) -> Result<CustomerInput, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(FIELDS_REQUIRED);
        }
        Ok(CustomerInput {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

impl From<&Customer> for CustomerForm {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleForm {
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub quantity: String,
}

impl SaleForm {
    pub fn validate(&self) -> Result<SaleInput, FormError> {
        let book_id = parse_id(&self.book_id).ok_or(FIELDS_REQUIRED)?;
        let customer_id = parse_id(&self.customer_id).ok_or(FIELDS_REQUIRED)?;
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FIELDS_REQUIRED);
        }
        parse_int(&self.quantity)
            .filter(|quantity| *quantity != 0)
            .ok_or(FIELDS_REQUIRED)?;

        Ok(SaleInput {
            book_id,
            customer_id,
            date: date.to_string(),
            quantity: normalize_quantity(&self.quantity),
        })
    }

    /// Blank form for a new sale, dated today.
    pub fn new_dated(today: &str) -> Self {
        Self {
            date: today.to_string(),
            quantity: "1".to_string(),
            ..Self::default()
        }
    }
}

impl From<&Sale> for SaleForm {
    fn from(sale: &Sale) -> Self {
        Self {
            book_id: sale.book_id.to_string(),
            customer_id: sale.customer_id.to_string(),
            date: sale.date.clone(),
            quantity: sale.quantity.to_string(),
        }
    }
}

/// Coerces a quantity field to a whole number of at least one.
pub fn normalize_quantity(raw: &str) -> i64 {
    parse_int(raw).filter(|value| *value >= 1).unwrap_or(1)
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Leading-integer parse: "3.7" reads as 3, "12abc" as 12.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

fn parse_id(raw: &str) -> Option<Id> {
    parse_int(raw).filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_form_trims_and_parses_price() {
        let form = BookForm {
            title: "  Dune ".into(),
            author: "Frank Herbert".into(),
            price: "9.99".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.title, "Dune");
        assert_eq!(input.price, 9.99);
    }

    #[test]
    fn book_form_rejects_blank_or_bad_price() {
        let blank = BookForm {
            title: "   ".into(),
            author: "A".into(),
            price: "1".into(),
        };
        assert_eq!(blank.validate(), Err(BOOK_FIELDS_REQUIRED));

        let bad_price = BookForm {
            title: "T".into(),
            author: "A".into(),
            price: "cheap".into(),
        };
        assert_eq!(bad_price.validate(), Err(BOOK_FIELDS_REQUIRED));
    }

    #[test]
    fn customer_form_requires_both_fields() {
        let form = CustomerForm {
            name: "Ada".into(),
            email: " ".into(),
        };
        assert_eq!(form.validate(), Err(FIELDS_REQUIRED));
    }

    #[test]
    fn sale_form_requires_selection_date_and_quantity() {
        let mut form = SaleForm {
            book_id: "2".into(),
            customer_id: "".into(),
            date: "2024-05-01".into(),
            quantity: "3".into(),
        };
        assert_eq!(form.validate(), Err(FIELDS_REQUIRED));

        form.customer_id = "5".into();
        let input = form.validate().unwrap();
        assert_eq!(input.book_id, 2);
        assert_eq!(input.customer_id, 5);
        assert_eq!(input.quantity, 3);

        form.quantity = "0".into();
        assert_eq!(form.validate(), Err(FIELDS_REQUIRED));
    }

    #[test]
    fn sale_form_clamps_negative_quantity() {
        let form = SaleForm {
            book_id: "1".into(),
            customer_id: "1".into(),
            date: "2024-05-01".into(),
            quantity: "-4".into(),
        };
        assert_eq!(form.validate().unwrap().quantity, 1);
    }

    #[test]
    fn normalize_quantity_floors_and_clamps() {
        assert_eq!(normalize_quantity("3.7"), 3);
        assert_eq!(normalize_quantity("0"), 1);
        assert_eq!(normalize_quantity("-2"), 1);
        assert_eq!(normalize_quantity("many"), 1);
        assert_eq!(normalize_quantity("12"), 12);
    }

    #[test]
    fn quantity_ignores_exponent_notation() {
        assert_eq!(normalize_quantity("2e1"), 2);
        assert_eq!(normalize_quantity("1e300"), 1);

        let form = SaleForm {
            book_id: "1".into(),
            customer_id: "1".into(),
            date: "2024-01-05".into(),
            quantity: "2e1".into(),
        };
        assert_eq!(form.validate().unwrap().quantity, 2);
    }
}
