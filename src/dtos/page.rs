use serde::Serialize;

use crate::auth::session::Flash;

/// Envelope handed to the presentation layer: which page to render, the
/// flash messages pending for it, and the page's own data.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub page: &'static str,
    pub flashes: Vec<Flash>,
    pub data: T,
}
