//! Demo contact endpoint.
//!
//! Messages are validated, logged, and acknowledged; there is no mailbox
//! behind this site and nothing is stored.

use crate::error::ApiError;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct ContactMessage {
    name: String,
    email: String,
    #[serde(default)]
    subject: String,
    message: String,
}

#[derive(Serialize)]
pub(super) struct ContactAck {
    status: &'static str,
}

pub(super) async fn submit(
    Json(message): Json<ContactMessage>,
) -> Result<Json<ContactAck>, ApiError> {
    validate(&message).map_err(|reason| ApiError::InvalidContact(reason.to_string()))?;
    tracing::info!(
        name = %message.name,
        email = %message.email,
        subject = %message.subject,
        "contact message received"
    );
    Ok(Json(ContactAck { status: "received" }))
}

fn validate(message: &ContactMessage) -> Result<(), &'static str> {
    if message.name.trim().is_empty() {
        return Err("name must not be empty");
    }
    let email = message.email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("email must contain '@'");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("email address is not plausible");
    }
    if message.message.trim().is_empty() {
        return Err("message must not be empty");
    }
    Ok(())
}
