//! Bearer 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고
//! 인증된 클라이언트 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::BearerAuthService;

/// Bearer 토큰 인증 미들웨어
///
/// 보호된 라우트 스코프에 `wrap`으로 적용합니다. 모든 요청에 대해
/// `Authorization: Bearer <token>` 헤더를 요구하며, 검증은
/// `AccessControlService::verify_bearer`에 위임합니다.
pub struct BearerAuth;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BearerAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service: Rc::new(service),
        }))
    }
}
