use serde::Serialize;
use serde_json::Value;

use crate::models::report::{ReportTable, ReportView};

/// Input of the generic table page.
#[derive(Debug, Serialize)]
pub struct ReportPageView {
    pub title: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ReportPageView {
    pub fn new(view: ReportView, table: ReportTable) -> Self {
        Self {
            title: view.title(),
            columns: table.columns,
            rows: table.rows,
        }
    }
}
