use crate::api::ApiClient;
use crate::config::DashboardMode;
use crate::errors::{ApiError, AppError};
use crate::models::{Dashboard, MonthlySeries, SummaryStats};
use crate::state::AppState;
use crate::stats::{
    CHART_TOP_N, build_monthly_series, build_summary, series_from_backend, top_authors, top_books,
};
use crate::ui::Notice;
use crate::ui::dashboard::render_dashboard;
use axum::{Json, extract::State, response::Html};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    match load_dashboard(&state.api, state.dashboard_mode).await {
        Ok(dashboard) => Html(render_dashboard(&dashboard, None)),
        Err(err) => {
            let notice = Notice::error(format!("Error loading dashboard data: {err}"));
            Html(render_dashboard(&Dashboard::default(), Some(&notice)))
        }
    }
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    Ok(Json(load_dashboard(&state.api, state.dashboard_mode).await?))
}

/// Monthly series aggregated here from the raw sale list.
pub async fn get_monthly_sales(
    State(state): State<AppState>,
) -> Result<Json<MonthlySeries>, AppError> {
    let sales = state.api.sales().list().await?;
    Ok(Json(build_monthly_series(&sales)))
}

/// Monthly series as the backend's analytics endpoint reports it.
pub async fn get_backend_monthly_sales(
    State(state): State<AppState>,
) -> Result<Json<MonthlySeries>, AppError> {
    let rows = state.api.monthly_sales().await?;
    Ok(Json(series_from_backend(&rows)))
}

/// Summary first, then every chart concurrently. A chart that fails is left
/// out; a failed summary is fatal only in strict mode.
pub async fn load_dashboard(api: &ApiClient, mode: DashboardMode) -> Result<Dashboard, ApiError> {
    let summary = match load_summary(api).await {
        Ok(summary) => summary,
        Err(err) if mode == DashboardMode::Lenient => {
            warn!("summary stats unavailable, showing zeros: {err}");
            SummaryStats::default()
        }
        Err(err) => return Err(err),
    };

    let sales_api = api.sales();
    let (top_books_rows, sales, authors, customers) = tokio::join!(
        api.sales_by_book(),
        sales_api.list(),
        api.bestselling_authors(),
        api.top_customers()
    );

    Ok(Dashboard {
        summary,
        top_books: chart_data("top books", top_books_rows)
            .map(|rows| top_books(&rows, CHART_TOP_N)),
        monthly: chart_data("monthly sales", sales).map(|sales| build_monthly_series(&sales)),
        author_revenue: chart_data("author revenue", authors)
            .map(|rows| top_authors(&rows, CHART_TOP_N)),
        top_customers: chart_data("top customers", customers),
    })
}

async fn load_summary(api: &ApiClient) -> Result<SummaryStats, ApiError> {
    let books = api.books();
    let customers = api.customers();
    let sales = api.sales();
    let (books, customers, sales) =
        tokio::try_join!(books.list(), customers.list(), sales.list())?;
    Ok(build_summary(&books, &customers, &sales))
}

fn chart_data<T>(chart: &str, result: Result<T, ApiError>) -> Option<T> {
    result
        .map_err(|err| warn!(chart, "dropping chart: {err}"))
        .ok()
}
