use std::net::SocketAddr;
use std::ops::RangeInclusive;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::contacts::repository::{insert_contact, recent_contacts, ADMIN_LIST_LIMIT};
use crate::errors::AppError;
use crate::models::contact::{ContactMessage, NewContact};
use crate::rate_limit::client_key;
use crate::state::AppState;

const NAME_CHARS: RangeInclusive<usize> = 2..=100;
const MESSAGE_CHARS: RangeInclusive<usize> = 10..=1000;
const MAX_EMAIL_CHARS: usize = 254;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

lazy_static! {
    static ref EMAIL_ADDRESS: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email address regex");
}

/// Fields are optional so a missing field gets our message, not a
/// deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Trims every field, lower-cases the email and checks lengths.
    pub fn validate(self) -> Result<NewContact, AppError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let email = self.email.as_deref().map(str::trim).unwrap_or_default();
        let message = self.message.as_deref().map(str::trim).unwrap_or_default();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::Validation(
                "Name, email, and message are required".to_string(),
            ));
        }
        if !NAME_CHARS.contains(&name.chars().count()) {
            return Err(AppError::Validation(format!(
                "Name must be between {} and {} characters",
                NAME_CHARS.start(),
                NAME_CHARS.end()
            )));
        }
        if email.len() > MAX_EMAIL_CHARS || !EMAIL_ADDRESS.is_match(email) {
            return Err(AppError::Validation("Email address is not valid".to_string()));
        }
        if !MESSAGE_CHARS.contains(&message.chars().count()) {
            return Err(AppError::Validation(format!(
                "Message must be between {} and {} characters",
                MESSAGE_CHARS.start(),
                MESSAGE_CHARS.end()
            )));
        }

        Ok(NewContact {
            name: name.to_string(),
            email: email.to_lowercase(),
            message: message.to_string(),
        })
    }
}

#[derive(Serialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ContactListResponse {
    pub data: Vec<ContactMessage>,
    pub count: usize,
}

/// POST /api/v1/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactReceipt>), AppError> {
    let contact = form.validate()?;

    let client = client_key(
        &headers,
        connect_info.map(|ConnectInfo(addr)| addr),
        state.config.trust_proxy,
    );
    state.contact_limiter.check(&client).await?;

    let saved = insert_contact(&state.db, &contact).await?;
    info!(contact_id = %saved.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactReceipt {
            id: saved.id,
            message: "Thank you for your message! We will get back to you soon.",
        }),
    ))
}

/// GET /api/v1/admin/contacts
pub async fn handle_list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ContactListResponse>, AppError> {
    authorize_admin(state.config.admin_api_token.as_deref(), &headers)?;
    let data = recent_contacts(&state.db, ADMIN_LIST_LIMIT).await?;
    Ok(Json(ContactListResponse {
        count: data.len(),
        data,
    }))
}

/// The listing does not exist unless a token is configured.
fn authorize_admin(expected: Option<&str>, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Err(AppError::NotFound("Not found".to_string()));
    };
    let provided = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if provided == Some(expected) {
        Ok(())
    } else {
        Err(AppError::Unauthorized(
            "Missing or invalid admin token".to_string(),
        ))
    }
}
