use crate::utils::error::AggregatorError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    description: String,
}

impl ResponseError for AggregatorError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            code: status.as_u16(),
            description: self.user_friendly_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ValidationError;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_validation_error_is_bad_request() {
        let err: AggregatorError = ValidationError::UnknownRegion.into();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["description"], "Invalid regionid");
    }

    #[actix_web::test]
    async fn test_upstream_error_is_generic_server_error() {
        let err = AggregatorError::UpstreamError {
            provider: "Carbon Intensity",
            status: 502,
            body: "raw upstream body".to_string(),
        };
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["description"], "Failed to fetch Carbon Intensity data");
        assert!(!String::from_utf8_lossy(&body).contains("raw upstream body"));
    }
}
