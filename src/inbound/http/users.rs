//! User registration HTTP handler.
//!
//! ```text
//! POST /api/users
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Request payload for registering a user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub profile_pic: Option<String>,
}

#[derive(Debug)]
struct ParsedRegistration {
    email: String,
    name: String,
    profile_pic: Option<String>,
}

fn parse_register_request(payload: RegisterUserRequest) -> Result<ParsedRegistration, Error> {
    let email = payload
        .email
        .ok_or_else(|| missing_field_error(FieldName::new("email")))?;
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;

    Ok(ParsedRegistration {
        email,
        name,
        profile_pic: payload.profile_pic,
    })
}

/// Register a user, or return the existing record for a known email.
///
/// Registration is idempotent on email: posting an email that already has a
/// record returns that record unchanged, with the same 201 status.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User record", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let parsed = parse_register_request(payload.into_inner())?;
    let user = state
        .users
        .register(parsed.email, parsed.name, parsed.profile_pic)
        .await?;
    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn parse_register_request_rejects_missing_email() {
        let payload = RegisterUserRequest {
            email: None,
            name: Some("Ada".to_owned()),
            profile_pic: None,
        };

        let err = parse_register_request(payload).expect_err("missing email");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("details");
        assert_eq!(
            details.get("field").and_then(Value::as_str),
            Some("email")
        );
    }

    #[rstest]
    fn parse_register_request_rejects_missing_name() {
        let payload = RegisterUserRequest {
            email: Some("a@x.com".to_owned()),
            name: None,
            profile_pic: None,
        };

        let err = parse_register_request(payload).expect_err("missing name");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn parse_register_request_keeps_an_optional_profile_pic() {
        let payload = RegisterUserRequest {
            email: Some("a@x.com".to_owned()),
            name: Some("Ada".to_owned()),
            profile_pic: Some("https://cdn.example/ada.png".to_owned()),
        };

        let parsed = parse_register_request(payload).expect("valid payload");
        assert_eq!(
            parsed.profile_pic.as_deref(),
            Some("https://cdn.example/ada.png")
        );
    }
}
