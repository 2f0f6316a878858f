use serde::{Deserialize, Serialize};

/// Body of `POST /login` and `POST /register`.
#[derive(Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

/// Landing page data.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub username: String,
    pub links: Vec<NavLink>,
}
