//! HTML page rendering
//!
//! Hand-assembled markup for the three pages the web UI serves. Pages are
//! pure functions from already-computed data to HTML strings; no loading or
//! aggregation happens here.

use crate::models::Expense;
use crate::reports::OverviewReport;
use crate::services::{SortDirection, SortKey};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; color: #222; }\
table { border-collapse: collapse; }\
th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\
th a { color: inherit; }\
form.inline { display: inline; }\
img.chart { max-width: 100%; margin: 1em 0; border: 1px solid #eee; }\
nav a { margin-right: 1em; }";

/// Shared page shell
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Overview</a><a href=\"/expenses\">Expenses</a></nav>\n\
         {}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// The dashboard: overview statistics, an add form, and the charts
pub fn dashboard_page(report: &OverviewReport) -> String {
    let mut body = String::new();

    body.push_str("<h1>Expense Tracker</h1>\n");
    body.push_str("<h2>Overview</h2>\n<table>\n");
    body.push_str(&stat_row("Total spent", &format!("${:.2}", report.total)));
    body.push_str(&stat_row("Records", &report.count.to_string()));
    body.push_str(&stat_row(
        "Most expensive",
        &record_cell(report.most_expensive.as_ref()),
    ));
    body.push_str(&stat_row("Cheapest", &record_cell(report.cheapest.as_ref())));
    body.push_str(&stat_row(
        "Average per record",
        &format!("${:.2}", report.average),
    ));
    body.push_str(&stat_row(
        "Average per month",
        &format!("${:.2}", report.avg_per_month),
    ));
    body.push_str(&stat_row(
        "Average per day",
        &format!("${:.2}", report.avg_per_day),
    ));
    body.push_str(&stat_row("Top category", &category_cell(&report.max_category)));
    body.push_str(&stat_row(
        "Smallest category",
        &category_cell(&report.min_category),
    ));
    body.push_str("</table>\n");

    body.push_str("<h2>Add expense</h2>\n");
    body.push_str(&add_form("/"));

    body.push_str("<h2>Charts</h2>\n");
    body.push_str("<img class=\"chart\" src=\"/chart/categories.svg\" alt=\"Expenses by category\">\n");
    body.push_str("<img class=\"chart\" src=\"/chart/monthly.svg\" alt=\"Monthly totals\">\n");
    body.push_str("<img class=\"chart\" src=\"/chart/pie.svg\" alt=\"Category distribution\">\n");

    page("Expense Tracker", &body)
}

/// The sortable record list with edit and delete controls
pub fn expenses_page(
    expenses: &[(usize, Expense)],
    sort: SortKey,
    direction: SortDirection,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Expenses</h1>\n");

    if expenses.is_empty() {
        body.push_str("<p>No expenses recorded.</p>\n");
    } else {
        body.push_str("<table>\n<tr>");
        body.push_str(&header_cell("Date", SortKey::Date, sort, direction));
        body.push_str(&header_cell("Category", SortKey::Category, sort, direction));
        body.push_str(&header_cell("Amount", SortKey::Amount, sort, direction));
        body.push_str("<th>Note</th><th></th></tr>\n");

        for (index, expense) in expenses {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>${:.2}</td><td>{}</td>\
                 <td><a href=\"/expenses/edit/{index}\">edit</a> \
                 <form class=\"inline\" method=\"post\" action=\"/expenses/delete/{index}\">\
                 <button type=\"submit\">delete</button></form></td></tr>\n",
                escape_html(&expense.date),
                escape_html(&expense.category),
                expense.amount,
                escape_html(&expense.note),
                index = index,
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Add expense</h2>\n");
    body.push_str(&add_form("/expenses/add"));

    page("Expenses", &body)
}

/// The edit form for one record
pub fn edit_page(index: usize, expense: &Expense) -> String {
    let body = format!(
        "<h1>Edit expense #{index}</h1>\n\
         <form method=\"post\" action=\"/expenses/edit/{index}\">\n\
         <p><label>Date <input name=\"date\" value=\"{}\" required></label></p>\n\
         <p><label>Category <input name=\"category\" value=\"{}\" required></label></p>\n\
         <p><label>Amount <input name=\"amount\" type=\"number\" step=\"0.01\" value=\"{}\" required></label></p>\n\
         <p><label>Note <input name=\"note\" value=\"{}\"></label></p>\n\
         <p><button type=\"submit\">Save</button> <a href=\"/expenses\">Cancel</a></p>\n\
         </form>\n",
        escape_html(&expense.date),
        escape_html(&expense.category),
        expense.amount,
        escape_html(&expense.note),
        index = index,
    );
    page("Edit expense", &body)
}

fn add_form(action: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Date <input name=\"date\" placeholder=\"YYYY-MM-DD\" required></label></p>\n\
         <p><label>Category <input name=\"category\" required></label></p>\n\
         <p><label>Amount <input name=\"amount\" type=\"number\" step=\"0.01\" required></label></p>\n\
         <p><label>Note <input name=\"note\"></label></p>\n\
         <p><button type=\"submit\">Add</button></p>\n\
         </form>\n",
        action = action,
    )
}

/// Sortable column header; clicking the active column toggles direction
fn header_cell(label: &str, key: SortKey, current: SortKey, direction: SortDirection) -> String {
    let target_dir = if key == current {
        direction.toggled()
    } else {
        SortDirection::Asc
    };
    let marker = if key == current {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        ""
    };
    format!(
        "<th><a href=\"/expenses?sort={}&amp;dir={}\">{}{}</a></th>",
        key, target_dir, label, marker
    )
}

fn stat_row(label: &str, value: &str) -> String {
    format!("<tr><th>{}</th><td>{}</td></tr>\n", escape_html(label), value)
}

fn record_cell(expense: Option<&Expense>) -> String {
    match expense {
        Some(e) => escape_html(&e.to_string()),
        None => "—".to_string(),
    }
}

fn category_cell(category: &str) -> String {
    if category.is_empty() {
        "—".to_string()
    } else {
        escape_html(category)
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::OverviewReport;

    #[test]
    fn test_dashboard_page_empty() {
        let report = OverviewReport::generate(&[]);
        let html = dashboard_page(&report);

        assert!(html.contains("$0.00"));
        assert!(html.contains("—"));
        assert!(html.contains("/chart/categories.svg"));
    }

    #[test]
    fn test_expenses_page_escapes_fields() {
        let expenses = vec![(
            0,
            Expense::with_note("2025-06-01", "Food & Drink", 10.0, "<script>"),
        )];
        let html = expenses_page(&expenses, SortKey::Date, SortDirection::Asc);

        assert!(html.contains("Food &amp; Drink"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_expenses_page_header_toggles_direction() {
        let expenses = vec![(0, Expense::new("2025-06-01", "Groceries", 10.0))];
        let html = expenses_page(&expenses, SortKey::Date, SortDirection::Asc);

        // Active column links to the opposite direction.
        assert!(html.contains("/expenses?sort=date&amp;dir=desc"));
        // Inactive columns default to ascending.
        assert!(html.contains("/expenses?sort=amount&amp;dir=asc"));
    }

    #[test]
    fn test_edit_page_prefills_fields() {
        let html = edit_page(2, &Expense::with_note("2025-06-01", "Groceries", 50.0, "food"));
        assert!(html.contains("/expenses/edit/2"));
        assert!(html.contains("value=\"2025-06-01\""));
        assert!(html.contains("value=\"food\""));
    }
}
