//! 현재 시각 공급자
//!
//! 만료 판정이 시각에 의존하므로 워크플로우는 시계를 주입받습니다.

use mongodb::bson::DateTime;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        DateTime::now()
    }
}
