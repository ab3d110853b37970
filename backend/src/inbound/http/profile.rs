//! Profile handlers.
//!
//! ```text
//! GET /api/user/profile
//! PUT /api/user/profile {"height":168,"weight":62.5,"activityLevel":"moderate","diseases":["asthma"]}
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ActivityLevel, Error, ProfileUpdate, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Full user record as returned to its owner. The password hash is omitted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[schema(example = "moderate")]
    pub activity_level: Option<String>,
    pub diseases: Vec<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email.into(),
            age: user.age,
            gender: user.gender,
            height: user.profile.height,
            weight: user.profile.weight,
            activity_level: user.profile.activity_level.map(|level| level.to_string()),
            diseases: user.profile.diseases,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Envelope for `GET /api/user/profile`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// Health attributes echoed after an update.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub diseases: Vec<String>,
}

impl From<User> for UpdatedProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email.into(),
            height: user.profile.height,
            weight: user.profile.weight,
            activity_level: user.profile.activity_level.map(|level| level.to_string()),
            diseases: user.profile.diseases,
        }
    }
}

/// Response for `PUT /api/user/profile`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UpdatedProfile,
}

/// Request body for `PUT /api/user/profile`. Absent fields are left as is.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[schema(example = "very-active")]
    pub activity_level: Option<String>,
    pub diseases: Option<Vec<String>>,
}

impl TryFrom<UpdateProfileBody> for ProfileUpdate {
    type Error = Error;

    fn try_from(body: UpdateProfileBody) -> Result<Self, Self::Error> {
        // Malformed input is reported like any other failure on this route.
        let activity_level = body
            .activity_level
            .as_deref()
            .map(ActivityLevel::from_str)
            .transpose()
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(Self {
            height: body.height,
            weight: body.weight,
            activity_level,
            diseases: body.diseases,
        })
    }
}

/// Fetch the caller's profile.
#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/user/profile")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let user = state.profile.fetch_profile(caller.id()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(ProfileResponse {
            user: UserResponse::from(user),
        }))
}

/// Update the caller's health attributes.
#[utoipa::path(
    put,
    path = "/api/user/profile",
    request_body = UpdateProfileBody,
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[put("/user/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    payload: web::Json<UpdateProfileBody>,
) -> ApiResult<web::Json<UpdateProfileResponse>> {
    let update = ProfileUpdate::try_from(payload.into_inner())?;
    let user = state
        .profile_command
        .update_profile(caller.id(), update)
        .await?;
    Ok(web::Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_owned(),
        user: UpdatedProfile::from(user),
    }))
}
