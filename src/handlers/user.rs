use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use crate::auth::password::{hash_password, verify_password, verify_unknown_user};
use crate::auth::session::{flash, sign_in, sign_out, FlashLevel};
use crate::dtos::page::Page;
use crate::dtos::user::CredentialsForm;
use crate::error::AppError;
use crate::handlers::render_page;
use crate::middleware::auth::{AuthContext, LOGIN_PATH};
use crate::state::AppState;

// GET /login
pub async fn login_page(session: Session) -> Result<Json<Page<()>>, AppError> {
    render_page(&session, "login", ()).await
}

// POST /login
#[instrument(skip_all, fields(username = %form.username))]
pub async fn login_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    let user = match state.users.find_by_username(&form.username).await? {
        Some(user) if verify_password(&form.password, &user.password_hash) => Some(user),
        Some(_) => None,
        None => {
            verify_unknown_user(&form.password, state.bcrypt_cost);
            None
        }
    };

    let Some(user) = user else {
        // Same notice whether the user is unknown or the password is wrong.
        warn!("Login failed");
        flash(&session, FlashLevel::Error, "Nombre de usuario o contraseña incorrectos.").await?;
        let page = render_page(&session, "login", ()).await?;
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    };

    sign_in(&session, user.id).await?;
    flash(&session, FlashLevel::Info, "Inicio de sesión exitoso.").await?;
    info!(user_id = user.id, "User logged in");
    Ok(Redirect::to("/").into_response())
}

// GET /register
pub async fn register_page(session: Session) -> Result<Json<Page<()>>, AppError> {
    render_page(&session, "register", ()).await
}

// POST /register
#[instrument(skip_all, fields(username = %form.username))]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    if form.username.trim().is_empty() || form.password.is_empty() {
        flash(&session, FlashLevel::Error, "Usuario y contraseña son obligatorios.").await?;
        let page = render_page(&session, "register", ()).await?;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    let password_hash = hash_password(&form.password, state.bcrypt_cost)?;

    // No pre-check: the unique constraint on users.username decides.
    match state.users.create(&form.username, &password_hash).await {
        Ok(user) => {
            info!(user_id = user.id, "User registered");
            flash(&session, FlashLevel::Info, "Usuario registrado exitosamente.").await?;
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Err(e) => {
            e.log();
            let message = match e {
                AppError::ConstraintViolation(_) => "El nombre de usuario ya existe.",
                _ => "Error al registrar usuario.",
            };
            flash(&session, FlashLevel::Error, message).await?;
            let page = render_page(&session, "register", ()).await?;
            Ok((e.status_code(), page).into_response())
        }
    }
}

// GET /logout
pub async fn logout_user(
    session: Session,
    Extension(auth): Extension<AuthContext>,
) -> Result<Redirect, AppError> {
    sign_out(&session).await?;
    flash(&session, FlashLevel::Info, "Has cerrado sesión.").await?;
    info!(user_id = auth.user_id, "User logged out");
    Ok(Redirect::to(LOGIN_PATH))
}
