//! HTTP 핸들러 모듈
//!
//! 요청/응답 처리를 담당하는 핸들러 함수들을 제공합니다.

pub mod token_handlers;
pub mod users;
