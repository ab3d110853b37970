//! Wellness assistant handlers.
//!
//! ```text
//! GET /api/chatbot
//! POST /api/chatbot {"message":"How do I calm Vata?"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{GREETING, SUGGESTED_PROMPTS};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/chatbot`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ChatBody {
    /// Free text; blank or missing messages get the general reply.
    #[serde(default)]
    #[schema(example = "What are benefits of turmeric?")]
    pub message: String,
}

/// Reply to one message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

/// Conversation opener.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatIntro {
    pub greeting: String,
    pub suggestions: Vec<String>,
}

/// Greeting and suggested prompts. Public.
#[utoipa::path(
    get,
    path = "/api/chatbot",
    responses((status = 200, description = "Greeting and suggestions", body = ChatIntro)),
    tags = ["chatbot"],
    operation_id = "getChatIntro",
    security([])
)]
#[get("/chatbot")]
pub async fn chat_intro() -> web::Json<ChatIntro> {
    web::Json(ChatIntro {
        greeting: GREETING.to_owned(),
        suggestions: SUGGESTED_PROMPTS.iter().map(|&prompt| prompt.to_owned()).collect(),
    })
}

/// Answer a message from the rule table. Public and stateless.
#[utoipa::path(
    post,
    path = "/api/chatbot",
    request_body = ChatBody,
    responses(
        (status = 200, description = "Reply", body = ChatReply),
        (status = 500, description = "Unreadable body", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["chatbot"],
    operation_id = "chat",
    security([])
)]
#[post("/chatbot")]
pub async fn chat(state: web::Data<HttpState>, payload: web::Json<ChatBody>) -> web::Json<ChatReply> {
    web::Json(ChatReply {
        reply: state.chatbot.reply(&payload.message).to_owned(),
    })
}
