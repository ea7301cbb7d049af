//! 계정 관련 응답 DTO

pub mod account_response;

pub use account_response::{
    AccountResponse, AvailabilityResponse, CreateAccountResponse, ResendCodeResponse,
};
