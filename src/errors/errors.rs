//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OAuth 2.0 토큰 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 실패는 경계를 벗어나기 전에 RFC 6749/6750 에러 종류로 분류되며,
//! HTTP 응답 본문은 항상 `{"error": ..., "error_description": ...}` 형태입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn verify_bearer(token: &str) -> Result<AccessTokenClaims, AppError> {
//!     let record = store.get_by_token(token)?
//!         .ok_or_else(|| AppError::InvalidToken("Unknown token".to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 에러를 OAuth 와이어 에러 종류로 분류한 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
///
/// 클라이언트 자격증명 실패와 미확인/만료/불일치 토큰 실패는 내부 원인과 무관하게
/// 동일한 외부 종류(`invalid_client`, `invalid_token`)로 보고됩니다.
/// 어떤 검증이 실패했는지 노출하지 않기 위함입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 형식 오류 (400 Bad Request)
    #[error("{0}")]
    InvalidRequest(String),

    /// 클라이언트 인증 실패 (401 Unauthorized + WWW-Authenticate)
    #[error("{0}")]
    InvalidClient(String),

    /// 토큰 검증 실패. 미확인/만료/서명 오류/불일치 모두 포함 (401 Unauthorized)
    #[error("{0}")]
    InvalidToken(String),

    /// 지원하지 않는 그랜트 타입 (400 Bad Request)
    #[error("{0}")]
    UnsupportedGrantType(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 내부 서버 에러. 저장소 변경/정리 실패 포함 (500 Internal Server Error)
    #[error("{0}")]
    ServerError(String),
}

impl AppError {
    /// 와이어 포맷의 에러 종류 문자열을 반환합니다.
    ///
    /// 응답 본문의 `error` 필드에 그대로 실리는 값입니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::InvalidClient(_) => "invalid_client",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::UnsupportedGrantType(_) => "unsupported_grant_type",
            AppError::NotFound(_) => "not_found",
            AppError::ServerError(_) => "server_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedGrantType(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidClient(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 종류를 적절한 HTTP 상태 코드와 표준 JSON 본문으로 변환합니다.
    /// 클라이언트 인증 실패의 경우 RFC 6749 §5.2에 따라
    /// `WWW-Authenticate` 챌린지 헤더를 함께 내려보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(self.status_code());

        if matches!(self, AppError::InvalidClient(_)) {
            builder.insert_header((
                actix_web::http::header::WWW_AUTHENTICATE,
                r#"Basic realm="oauth", error="invalid_client""#,
            ));
        }

        builder.json(serde_json::json!({
            "error": self.kind(),
            "error_description": self.to_string(),
        }))
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 실패를 요청 형식 오류로 변환합니다.
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidRequest(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::ServerError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::ServerError(format!("{}: {}", f(), e)))
    }
}
