//! BearerAuth 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::state::AppState;
use crate::domain::models::auth::AuthenticatedClient;

/// 실제 인증 로직을 수행하는 서비스
pub struct BearerAuthService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Authorization 헤더에서 Bearer 토큰 추출
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    log::debug!("Authorization 헤더 누락 또는 형식 오류");
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "invalid_request",
                        "error_description": "Missing or invalid Authorization header",
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            };

            // 접근 제어 서비스로 2단계 검증 위임
            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("AppState is not configured")
                })?;

            match state.access_control.verify_bearer(&token) {
                Ok(claims) => {
                    let client = AuthenticatedClient::from(claims);
                    log::debug!("인증 성공: client_id={}", client.client_id);

                    // 검증된 클라이언트 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(client);
                }
                Err(err) => {
                    log::warn!("토큰 검증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출합니다.
///
/// "Bearer {token}" 형식이 아니거나 헤더가 없으면 None을 반환합니다.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let auth_header = req.headers().get("Authorization")?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;

    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::AppError;

    #[test]
    fn test_verification_failure_maps_to_unauthorized() {
        let err = AppError::InvalidToken("Unknown token".to_string());
        let response = err.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
