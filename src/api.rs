//! Typed access to the bookstore REST backend.
//!
//! Every call is plain JSON over HTTP: no auth, no pagination, no retries.

use crate::errors::ApiError;
use crate::models::{
    AuthorSales, Book, BookInput, BookSales, Customer, CustomerInput, Id, MonthlySales, Sale,
    SaleInput, TopCustomer,
};
use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use tracing::warn;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request. `Ok(None)` means the backend answered 204.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let result = self.send(method.clone(), &url, body).await;
        if let Err(err) = &result {
            warn!(%method, %url, "api request failed: {err}");
        }
        result
    }

    async fn send<T, B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: error_message(status, &bytes),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None)
            .await?
            .ok_or_else(|| ApiError::NotFound(endpoint.to_string()))
    }

    pub fn books(&self) -> Resource<'_, Book, BookInput> {
        Resource::new(self, "/books/", "Book")
    }

    pub fn customers(&self) -> Resource<'_, Customer, CustomerInput> {
        Resource::new(self, "/customers/", "Customer")
    }

    pub fn sales(&self) -> Resource<'_, Sale, SaleInput> {
        Resource::new(self, "/sales/", "Sale")
    }

    pub async fn sales_by_book(&self) -> Result<Vec<BookSales>, ApiError> {
        self.get("/sales/analytics/by-book").await
    }

    pub async fn bestselling_authors(&self) -> Result<Vec<AuthorSales>, ApiError> {
        self.get("/sales/analytics/bestselling-authors").await
    }

    pub async fn top_customers(&self) -> Result<Vec<TopCustomer>, ApiError> {
        self.get("/sales/analytics/top-customers").await
    }

    pub async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, ApiError> {
        self.get("/sales/analytics/monthly-sales").await
    }
}

/// CRUD calls for one collection (`/books/`, `/customers/`, `/sales/`).
pub struct Resource<'a, T, I> {
    client: &'a ApiClient,
    path: &'static str,
    noun: &'static str,
    _marker: PhantomData<fn() -> (T, I)>,
}

impl<'a, T, I> Resource<'a, T, I>
where
    T: DeserializeOwned,
    I: Serialize,
{
    fn new(client: &'a ApiClient, path: &'static str, noun: &'static str) -> Self {
        Self {
            client,
            path,
            noun,
            _marker: PhantomData,
        }
    }

    fn item(&self, id: Id) -> String {
        format!("{}{}", self.path, id)
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        Ok(self
            .client
            .request::<Vec<T>, ()>(Method::GET, self.path, None)
            .await?
            .unwrap_or_default())
    }

    pub async fn get(&self, id: Id) -> Result<T, ApiError> {
        self.client
            .request::<T, ()>(Method::GET, &self.item(id), None)
            .await?
            .ok_or_else(|| ApiError::NotFound(self.noun.to_string()))
    }

    /// Returns the stored record when the backend echoes one back.
    pub async fn create(&self, input: &I) -> Result<Option<T>, ApiError> {
        self.client.request(Method::POST, self.path, Some(input)).await
    }

    pub async fn update(&self, id: Id, input: &I) -> Result<Option<T>, ApiError> {
        self.client
            .request(Method::PUT, &self.item(id), Some(input))
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .request::<serde_json::Value, ()>(Method::DELETE, &self.item(id), None)
            .await?;
        Ok(())
    }
}

/// Pulls the human-readable message out of an error body.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    let detail = parsed.as_ref().and_then(|value| {
        ["detail", "message", "error"]
            .iter()
            .find_map(|key| value.get(*key))
            .and_then(|field| match field {
                serde_json::Value::String(text) => Some(text.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
    });

    detail.unwrap_or_else(|| {
        format!(
            "API Error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )
        .trim_end()
        .to_string()
    })
}
