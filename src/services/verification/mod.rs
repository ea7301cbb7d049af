//! 인증 코드 발급에 필요한 구성 요소

pub mod clock;
pub mod code_generator;

pub use clock::{Clock, SystemClock};
pub use code_generator::CodeGenerator;
