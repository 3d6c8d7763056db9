//! Web presentation layer
//!
//! An axum server exposing the dashboard, the sortable record list with
//! positional add/edit/delete, and the chart images. State is only the
//! storage path; every request constructs its own store and loads a fresh
//! private copy of the list, so nothing mutable is shared across requests.

pub mod handlers;
pub mod pages;

use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;
use log::info;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::ExpenseStore;

/// Shared application state: just the location of the durable file
#[derive(Clone)]
pub struct AppState {
    expenses_path: PathBuf,
}

impl AppState {
    /// Create state over the durable file path
    pub fn new(expenses_path: PathBuf) -> Self {
        Self { expenses_path }
    }

    /// A fresh store for the current request
    pub fn store(&self) -> ExpenseStore {
        ExpenseStore::new(self.expenses_path.clone())
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard).post(handlers::add_from_dashboard))
        .route("/expenses", get(handlers::list_expenses))
        .route("/expenses/add", post(handlers::add_expense))
        .route("/expenses/delete/:index", post(handlers::delete_expense))
        .route(
            "/expenses/edit/:index",
            get(handlers::edit_expense_form).post(handlers::update_expense),
        )
        .route("/chart/categories.svg", get(handlers::chart_categories))
        .route("/chart/pie.svg", get(handlers::chart_pie))
        .route("/chart/monthly.svg", get(handlers::chart_monthly))
        .with_state(state)
}

/// Run the web server until interrupted
///
/// Spins up its own tokio runtime so the CLI binary stays synchronous
/// everywhere else.
pub fn serve(expenses_path: PathBuf, port: u16) -> TrackerResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| TrackerError::Server(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async {
        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TrackerError::Server(format!("Failed to bind {}: {}", addr, e)))?;

        info!("serving on http://localhost:{}", port);
        println!("Expense tracker running on http://localhost:{}", port);
        println!("Press Ctrl+C to stop.");

        axum::serve(listener, router(AppState::new(expenses_path)))
            .await
            .map_err(|e| TrackerError::Server(format!("Server error: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    #[test]
    fn test_router_builds() {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(temp_dir.path().join("expenses.json"));
        let _router = router(state);
    }

    #[test]
    fn test_state_store_reads_current_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let state = AppState::new(path.clone());

        assert!(state.store().load().unwrap().is_empty());

        ExpenseStore::new(path)
            .save(&[Expense::new("2025-06-01", "Groceries", 50.0)])
            .unwrap();
        // A fresh store per request sees the new contents.
        assert_eq!(state.store().load().unwrap().len(), 1);
    }
}
