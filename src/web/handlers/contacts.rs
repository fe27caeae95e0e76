//! Contact list handlers.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::htmx::Fragments;
use crate::web::templates::{ContactList, PageMessage, Severity};

/// Renders the full contact list, deleted contacts included.
///
/// # Endpoint
///
/// `GET /list-items`
pub async fn list_items_handler(State(state): State<AppState>) -> Result<Fragments, AppError> {
    let contacts = state.contact_service.list_contacts().await?;
    Fragments::new().render(&ContactList { contacts })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteQuery {
    pub id: String,
}

impl DeleteQuery {
    /// Contact id, `0` when missing or not a plain integer.
    pub fn id(&self) -> i64 {
        self.id.parse().unwrap_or(0)
    }
}

/// Soft-deletes a contact.
///
/// # Endpoint
///
/// `DELETE /item-delete?id=N`
///
/// # Responses
///
/// - **200 OK**: info message, the contact is marked deleted
/// - **422 Unprocessable Entity**: protected contact, `HX-Reswap: none`
/// - **404 Not Found**: no contact with that id, `HX-Reswap: none`
pub async fn item_delete_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Fragments, AppError> {
    let contact = state.contact_service.delete_contact(query.id()).await?;

    Fragments::new().render(&PageMessage::new(
        Severity::Info,
        format!("\"{}\" removed", contact.name),
    ))
}
