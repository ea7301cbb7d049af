//! 계정 가입/인증/프로필 API의 요청·응답 DTO

pub mod request;
pub mod response;
