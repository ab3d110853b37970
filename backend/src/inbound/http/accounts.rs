//! Account handlers.
//!
//! ```text
//! POST /api/auth/signup {"name":"Asha","email":"asha@example.com","password":"tulsi-tea","age":32,"gender":"female"}
//! POST /api/auth/login {"email":"asha@example.com","password":"tulsi-tea"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{AuthSession, LoginCredentials};
use crate::domain::{Email, Error, SignupRequest, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::profile::UserResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Token and user returned after signup or login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    /// RFC 3339 expiry of `token`.
    pub expires_at: String,
    pub user: UserResponse,
}

impl AuthResponse {
    fn new(message: &str, session: AuthSession) -> Self {
        let AuthSession { user, token } = session;
        Self {
            message: message.to_owned(),
            token: token.token,
            expires_at: token.expires_at.to_rfc3339(),
            user: UserResponse::from(user),
        }
    }
}

fn missing_field(field: &str) -> Error {
    Error::invalid_request(format!("{field} is required")).with_details(json!({ "field": field }))
}

fn map_signup_validation_error(err: UserValidationError) -> Error {
    let field = match &err {
        UserValidationError::EmptyName => "name",
        UserValidationError::InvalidEmail => "email",
        UserValidationError::PasswordTooShort { .. } => "password",
        UserValidationError::InvalidId | UserValidationError::UnknownActivityLevel { .. } => {
            "request"
        }
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn parse_signup(body: SignupBody) -> Result<SignupRequest, Error> {
    let name = body.name.ok_or_else(|| missing_field("name"))?;
    let email = body.email.ok_or_else(|| missing_field("email"))?;
    let password = body.password.ok_or_else(|| missing_field("password"))?;
    let age = body.age.ok_or_else(|| missing_field("age"))?;
    let gender = body.gender.ok_or_else(|| missing_field("gender"))?;
    SignupRequest::try_new(name, email, password, age, gender).map_err(map_signup_validation_error)
}

/// Register a new account and return a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupBody,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupBody>,
) -> ApiResult<HttpResponse> {
    let request = parse_signup(payload.into_inner())?;
    let session = state.accounts.signup(request).await?;
    Ok(HttpResponse::Created().json(AuthResponse::new("User created successfully", session)))
}

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login success", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginBody>,
) -> ApiResult<HttpResponse> {
    let LoginBody { email, password } = payload.into_inner();
    // A malformed email can never match an account.
    let email = Email::new(email).map_err(|_| Error::unauthorized("Invalid credentials"))?;
    let session = state
        .accounts
        .login(LoginCredentials { email, password })
        .await?;
    Ok(HttpResponse::Ok().json(AuthResponse::new("Login successful", session)))
}
