//! Chat stream and assistant handlers.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use chrono::{DateTime, Utc};
use futures::Stream;
use tracing::warn;

use streamgate_core::error::AppError;

use crate::dto::request::BotRequest;
use crate::dto::response::{ApiResponse, MessagePayload};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/chat/stream
///
/// Server-sent events: the first event carries the caller's full
/// conversation, then the store is re-queried on a fixed interval and
/// each non-empty batch of new messages becomes one event. Query
/// failures are logged and polling continues.
pub async fn stream(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let ctx = auth.0;
    let chat = Arc::clone(&state.chat_service);
    let interval = Duration::from_secs(state.config.chat.poll_interval_seconds);
    let batch = state.config.chat.poll_batch_size;

    let stream = futures::stream::unfold(None::<DateTime<Utc>>, move |cursor| {
        let chat = Arc::clone(&chat);
        let ctx = ctx.clone();
        async move {
            let mut cursor = cursor;
            loop {
                let messages = match cursor {
                    None => match chat.list_messages(&ctx).await {
                        Ok(messages) => messages,
                        Err(e) => {
                            warn!(error = %e, "Chat stream initial query failed");
                            Vec::new()
                        }
                    },
                    Some(after) => {
                        tokio::time::sleep(interval).await;
                        match chat.messages_since(&ctx, after, batch).await {
                            Ok(messages) => messages,
                            Err(e) => {
                                warn!(error = %e, "Chat stream poll failed");
                                continue;
                            }
                        }
                    }
                };

                let initial = cursor.is_none();
                let next_cursor = messages
                    .last()
                    .map(|m| m.created_at)
                    .or(cursor)
                    .unwrap_or_else(Utc::now);
                cursor = Some(next_cursor);

                if initial || !messages.is_empty() {
                    match Event::default().event("messages").json_data(&messages) {
                        Ok(event) => {
                            return Some((Ok::<_, Infallible>(event), cursor));
                        }
                        Err(e) => {
                            warn!(error = %e, "Chat stream serialization failed");
                        }
                    }
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// POST /api/chat/bot
///
/// Asks the catalog assistant. The question and the reply both land in
/// the caller's conversation; the reply is returned directly as well.
pub async fn bot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BotRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, AppError> {
    let message = state
        .assistant_service
        .ask(auth.context(), &req.message)
        .await?;
    Ok(Json(ApiResponse::ok(MessagePayload { message })))
}
