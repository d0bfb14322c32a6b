use actix_web::{HttpResponse, post, web};

use crate::domain::theme::{Hsla, hex_to_hsla, hsla_to_hex};
use crate::dto::theme::{ConvertColorRequest, ConvertColorResponse};
use crate::models::auth::AuthenticatedUser;
use crate::routes::{ApiError, ensure_role};
use crate::SERVICE_ACCESS_ROLE;

/// Converts between hex and HSLA. Exactly one input representation must be
/// supplied; the response carries both.
#[post("/theme/convert")]
pub async fn convert_color(
    user: AuthenticatedUser,
    payload: web::Json<ConvertColorRequest>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let (hex, hsla): (String, Hsla) = match (&payload.hex, &payload.hsla) {
        (Some(hex), None) => {
            let hsla = hex_to_hsla(hex).map_err(|err| ApiError::BadRequest(err.to_string()))?;
            (hsla_to_hex(&hsla), hsla)
        }
        (None, Some(hsla)) => (hsla_to_hex(hsla), *hsla),
        _ => {
            return Err(ApiError::BadRequest(
                "provide exactly one of hex or hsla".to_string(),
            ));
        }
    };

    Ok(HttpResponse::Ok().json(ConvertColorResponse { hex, hsla }))
}
