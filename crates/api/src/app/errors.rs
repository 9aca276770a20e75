use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use potluck_core::{DomainError, PartyNumber};

/// HTTP status for each domain error kind.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NoGuests => StatusCode::BAD_REQUEST,
        DomainError::NotInvitedGuest { .. } => StatusCode::UNAUTHORIZED,
        DomainError::DuplicateContribution { .. } => StatusCode::BAD_REQUEST,
        DomainError::ItemNotFound { .. } => StatusCode::BAD_REQUEST,
        DomainError::PartyNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::PartyGone(_) => StatusCode::GONE,
        DomainError::InvalidId(_) => StatusCode::NOT_FOUND,
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = status_for(&err);
    tracing::warn!(status = status.as_u16(), code = err.code(), "request rejected: {err}");
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse the `{id}` path segment. A segment that is not a number was never issued.
pub fn parse_party_number(raw: &str) -> Result<PartyNumber, axum::response::Response> {
    raw.parse::<PartyNumber>().map_err(domain_error_to_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_documented_statuses() {
        let cases = [
            (DomainError::NoGuests, 400),
            (DomainError::not_invited("z"), 401),
            (DomainError::duplicate("cake"), 400),
            (DomainError::item_not_found("cake"), 400),
            (DomainError::PartyNotFound(PartyNumber::new(4)), 404),
            (DomainError::PartyGone(PartyNumber::new(0)), 410),
            (DomainError::invalid_id("x"), 404),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err).as_u16(), expected, "{err:?}");
        }
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        let res = parse_party_number("party-one").unwrap_err();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(parse_party_number("12").ok(), Some(PartyNumber::new(12)));
    }
}
