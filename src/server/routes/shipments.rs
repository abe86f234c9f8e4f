//! Shipment workflow endpoints
//!
//! Reads go straight to the store; every shipment mutation goes through
//! `POST /api/v1/shipments/actions` so that the HTTP surface and in-process
//! callers share one code path. Chat threads are written directly.

use crate::core::types::{Role, ShipmentStatus};
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::services::shipments::{ChatMessage, ShipmentAction};
use crate::utils::error::{PreclearError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Named subsets of the shipment list
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentView {
    /// Broker queue
    AwaitingBroker,
    /// Shipments with at least one open document request
    DocumentRequests,
}

/// Query parameters for listing shipments
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<ShipmentStatus>,
    pub view: Option<ShipmentView>,
}

/// Query parameters carrying the caller's role
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    pub role: Role,
}

fn require_shipment(data: &AppState, id: &str) -> Result<()> {
    match data.store.get(id) {
        Some(_) => Ok(()),
        None => Err(PreclearError::not_found(format!("Shipment {} not found", id))),
    }
}

/// GET /api/v1/shipments
pub async fn list_shipments(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let shipments = match (query.view, query.status) {
        (Some(_), Some(_)) => {
            return Err(PreclearError::bad_request(
                "Use either status or view, not both",
            ));
        }
        (Some(ShipmentView::AwaitingBroker), None) => data.store.awaiting_broker(),
        (Some(ShipmentView::DocumentRequests), None) => data.store.with_document_requests(),
        (None, Some(status)) => data.store.by_status(status),
        (None, None) => data.store.all(),
    };

    let meta = serde_json::json!({ "total": shipments.len() });
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(shipments, meta)))
}

/// GET /api/v1/shipments/{id}
pub async fn get_shipment(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let shipment = data
        .store
        .get(&id)
        .ok_or_else(|| PreclearError::not_found(format!("Shipment {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shipment)))
}

/// Quote a stored shipment
/// GET /api/v1/shipments/{id}/quote
pub async fn quote_shipment(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let shipment = data
        .store
        .get(&id)
        .ok_or_else(|| PreclearError::not_found(format!("Shipment {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(data.pricing.quote(&shipment))))
}

/// GET /api/v1/shipments/{id}/messages
pub async fn shipment_messages(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    require_shipment(&data, &id)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(data.store.messages(&id))))
}

/// Post a message, or merge an edit into the message with the same id
/// POST /api/v1/shipments/{id}/messages
pub async fn post_message(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ChatMessage>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    require_shipment(&data, &id)?;
    let message = payload.into_inner();
    if message.shipment_id != id {
        return Err(PreclearError::bad_request(format!(
            "Message belongs to shipment {}",
            message.shipment_id
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(data.store.add_message(message))))
}

/// Replace a shipment's chat thread
/// PUT /api/v1/shipments/{id}/messages
pub async fn replace_messages(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<Vec<ChatMessage>>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    require_shipment(&data, &id)?;
    data.store.set_messages_for_shipment(&id, payload.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(data.store.messages(&id))))
}

/// POST /api/v1/shipments/{id}/messages/read?role=
pub async fn mark_messages_read(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<NotificationQuery>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    require_shipment(&data, &id)?;
    let marked = data.store.mark_messages_read(&id, query.role);

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({ "marked": marked }))))
}

/// GET /api/v1/messages/unread?role=
pub async fn unread_messages(
    data: web::Data<AppState>,
    query: web::Query<NotificationQuery>,
) -> Result<HttpResponse> {
    let unread = data.store.unread_message_count(query.role);
    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({ "unread": unread }))))
}

/// Apply one workflow action
/// POST /api/v1/shipments/actions
pub async fn dispatch_action(
    data: web::Data<AppState>,
    payload: web::Json<ShipmentAction>,
) -> Result<HttpResponse> {
    let action = payload.into_inner();
    info!(
        action = action.name(),
        shipment_id = action.shipment_id().unwrap_or("-"),
        "Dispatching shipment action"
    );

    let shipment = data.store.dispatch(action)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(shipment)))
}

/// GET /api/v1/notifications?role=
pub async fn list_notifications(
    data: web::Data<AppState>,
    query: web::Query<NotificationQuery>,
) -> Result<HttpResponse> {
    let notifications = data.store.notifications(query.role);
    Ok(HttpResponse::Ok().json(ApiResponse::success(notifications)))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_notification_read(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    data.store.mark_notification_read(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure shipment and notification routes
pub fn configure_shipment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/shipments")
            .route("", web::get().to(list_shipments))
            .route("/actions", web::post().to(dispatch_action))
            .route("/{id}", web::get().to(get_shipment))
            .route("/{id}/quote", web::get().to(quote_shipment))
            .route("/{id}/messages", web::get().to(shipment_messages))
            .route("/{id}/messages", web::post().to(post_message))
            .route("/{id}/messages", web::put().to(replace_messages))
            .route("/{id}/messages/read", web::post().to(mark_messages_read)),
    )
    .route("/api/v1/messages/unread", web::get().to(unread_messages))
    .service(
        web::scope("/api/v1/notifications")
            .route("", web::get().to(list_notifications))
            .route("/{id}/read", web::post().to(mark_notification_read)),
    );
}
