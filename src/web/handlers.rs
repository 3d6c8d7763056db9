//! Web route handlers
//!
//! Each handler is one synchronous load → query/mutate → respond sequence
//! over a private copy of the record list, reloaded from disk on every
//! request. Mutating routes redirect back to the page they came from.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::charts::{bar_chart, line_chart, pie_chart};
use crate::error::TrackerError;
use crate::models::Expense;
use crate::reports::OverviewReport;
use crate::services::{ExpenseService, SortDirection, SortKey};
use crate::stats::ExpenseStats;

use super::pages;
use super::AppState;

/// Store errors surface as a plain 500; clients cannot repair them
fn internal_error(err: TrackerError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Form body shared by the add and edit routes
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    date: String,
    category: String,
    amount: f64,
    #[serde(default)]
    note: String,
}

impl ExpenseForm {
    fn into_expense(self) -> Expense {
        Expense::with_note(self.date, self.category, self.amount, self.note)
    }
}

/// Query parameters of the list view
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    sort: SortKey,
    #[serde(default)]
    dir: SortDirection,
}

/// GET / — overview dashboard
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let store = state.store();
    let expenses = ExpenseService::new(&store).list().map_err(internal_error)?;
    let report = OverviewReport::generate(&expenses);
    Ok(Html(pages::dashboard_page(&report)))
}

/// POST / — add a record from the dashboard form
pub async fn add_from_dashboard(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let store = state.store();
    ExpenseService::new(&store)
        .add(form.into_expense())
        .map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

/// GET /expenses — sortable record list
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let store = state.store();
    let expenses = ExpenseService::new(&store)
        .list_sorted(params.sort, params.dir)
        .map_err(internal_error)?;
    Ok(Html(pages::expenses_page(&expenses, params.sort, params.dir)))
}

/// POST /expenses/add — add a record from the list page form
pub async fn add_expense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let store = state.store();
    ExpenseService::new(&store)
        .add(form.into_expense())
        .map_err(internal_error)?;
    Ok(Redirect::to("/expenses"))
}

/// POST /expenses/delete/:index — delete by position
///
/// Out-of-range indices are a no-op; either way the client lands back on
/// the list.
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, (StatusCode, String)> {
    let store = state.store();
    ExpenseService::new(&store)
        .delete(index)
        .map_err(internal_error)?;
    Ok(Redirect::to("/expenses"))
}

/// GET /expenses/edit/:index — edit form, or back to the list if gone
pub async fn edit_expense_form(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<axum::response::Response, (StatusCode, String)> {
    let store = state.store();
    match ExpenseService::new(&store)
        .get(index)
        .map_err(internal_error)?
    {
        Some(expense) => Ok(Html(pages::edit_page(index, &expense)).into_response()),
        None => Ok(Redirect::to("/expenses").into_response()),
    }
}

/// POST /expenses/edit/:index — apply an edit by position
pub async fn update_expense(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let store = state.store();
    ExpenseService::new(&store)
        .edit(index, form.into_expense())
        .map_err(internal_error)?;
    Ok(Redirect::to("/expenses"))
}

fn svg_response(svg: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg)
}

/// GET /chart/categories.svg — bar chart of category totals
pub async fn chart_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let store = state.store();
    let expenses = ExpenseService::new(&store).list().map_err(internal_error)?;
    let stats = ExpenseStats::new(&expenses);
    Ok(svg_response(bar_chart(
        &stats.by_category(),
        "Expenses by Category",
    )))
}

/// GET /chart/pie.svg — category share pie chart
pub async fn chart_pie(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let store = state.store();
    let expenses = ExpenseService::new(&store).list().map_err(internal_error)?;
    let stats = ExpenseStats::new(&expenses);
    Ok(svg_response(pie_chart(
        &stats.by_category(),
        "Expense Distribution by Category",
    )))
}

/// GET /chart/monthly.svg — monthly trend line chart
pub async fn chart_monthly(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let store = state.store();
    let expenses = ExpenseService::new(&store).list().map_err(internal_error)?;
    let stats = ExpenseStats::new(&expenses);
    Ok(svg_response(line_chart(
        &stats.trend(true),
        "Monthly Total Expenses",
    )))
}
