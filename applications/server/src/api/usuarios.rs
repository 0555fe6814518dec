/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use usuarios_core::{validation::NAME_FIELD, User};

/// How a request body is decoded, chosen from its `Content-Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    /// Body is ignored and reads as `{}`
    Other,
}

impl BodyKind {
    fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return BodyKind::Other;
        };

        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match media_type.as_str() {
            "application/json" => BodyKind::Json,
            "application/x-www-form-urlencoded" => BodyKind::Form,
            _ => BodyKind::Other,
        }
    }
}

/// The `nombre` field of a request body, left unvalidated.
///
/// JSON and url-encoded form bodies are read; any other content type, and
/// an empty JSON body, reads as `{}`. The English alias `name` is accepted
/// when `nombre` is absent.
#[derive(Debug, Clone)]
pub struct NombreBody(pub Option<Value>);

impl NombreBody {
    fn from_json(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let mut fields: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|_| ServerError::BadRequest("Invalid JSON body".to_string()))?;

        Ok(Self(
            fields.remove(NAME_FIELD).or_else(|| fields.remove("name")),
        ))
    }

    fn from_form(mut fields: HashMap<String, String>) -> Self {
        let nombre = fields.remove(NAME_FIELD).or_else(|| fields.remove("name"));
        Self(nombre.map(Value::String))
    }

    pub fn as_value(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for NombreBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let kind = BodyKind::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        match kind {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;
                Self::from_json(&bytes)
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;
                Ok(Self::from_form(fields))
            }
            BodyKind::Other => Ok(Self(None)),
        }
    }
}

/// GET /api/usuarios
/// Get all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.directory.list().await?;
    Ok(Json(users))
}

/// GET /api/usuarios/:id
/// Get a single user
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.directory.get(&id).await?;
    Ok(Json(user))
}

/// POST /api/usuarios
/// Create a user
pub async fn create_user(
    State(app_state): State<AppState>,
    body: NombreBody,
) -> Result<Json<User>> {
    let user = app_state.directory.create(body.as_value()).await?;
    Ok(Json(user))
}

/// PUT /api/usuarios/:id
/// Rename a user
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: NombreBody,
) -> Result<Json<User>> {
    let user = app_state.directory.update(&id, body.as_value()).await?;
    Ok(Json(user))
}

/// DELETE /api/usuarios/:id
/// Delete a user, responding with the removed record
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.directory.delete(&id).await?;
    Ok(Json(user))
}
