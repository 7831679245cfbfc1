//! Contact form route handlers.
//!
//! Submissions are relayed to the shop operator's inbox over SMTP. A
//! hidden `company` field acts as a honeypot: bots that fill it get the
//! same success response as everyone else while the message is dropped.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ContactError, Result};
use crate::middleware::AppJson;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Honeypot field, hidden in the form. Humans never fill it.
    #[serde(default)]
    pub company: Option<String>,
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub ok: bool,
}

/// Relay a contact form submission to the operator's inbox.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactForm>,
) -> Result<Json<ContactAccepted>> {
    if form.company.as_deref().is_some_and(|v| !v.is_empty()) {
        tracing::debug!("Honeypot field filled; dropping submission");
        return Ok(Json(ContactAccepted { ok: true }));
    }

    let (Some(name), Some(email), Some(message)) = (
        form.name.as_deref().filter(|v| !v.is_empty()),
        form.email.as_deref().filter(|v| !v.is_empty()),
        form.message.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return Err(ContactError::MissingFields.into());
    };

    let Some(mailer) = state.mailer() else {
        tracing::error!("Contact mailer not configured");
        return Err(ContactError::NotConfigured.into());
    };

    mailer
        .send_contact_message(name, email, form.phone.as_deref().unwrap_or(""), message)
        .await
        .map_err(ContactError::Send)?;

    Ok(Json(ContactAccepted { ok: true }))
}
