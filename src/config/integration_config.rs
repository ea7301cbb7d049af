//! 외부 연동 설정
//!
//! 메일 발송(SMTP)과 외부 조회 API(ViaCEP, CNPJ.ws) 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 메일 전송 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTransportKind {
    /// STARTTLS + 계정 인증으로 SMTP 릴레이에 전송
    Smtp,
    /// 실제 전송 없이 로그만 남김 (로컬 실행용)
    Log,
}

impl From<&str> for MailTransportKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "log" | "console" | "noop" => MailTransportKind::Log,
            _ => MailTransportKind::Smtp,
        }
    }
}

/// 메일 발송 설정
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub transport: MailTransportKind,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// 발신 주소. 지정하지 않으면 `username`을 사용합니다.
    pub from_address: String,
}

impl MailConfig {
    /// `MAIL_TRANSPORT`, `MAIL_HOST`, `MAIL_PORT`, `MAIL_USER`, `MAIL_PASS`, `MAIL_FROM`
    pub fn from_env() -> Self {
        let username = env::var("MAIL_USER").unwrap_or_default();
        let from_address = env::var("MAIL_FROM")
            .ok()
            .filter(|from| !from.trim().is_empty())
            .unwrap_or_else(|| username.clone());

        Self {
            transport: env::var("MAIL_TRANSPORT")
                .map(|raw| MailTransportKind::from(raw.as_str()))
                .unwrap_or(MailTransportKind::Smtp),
            host: env::var("MAIL_HOST").unwrap_or_else(|_| "smtp.ethereal.email".to_string()),
            port: super::env_parsed("MAIL_PORT", 587),
            username,
            password: env::var("MAIL_PASS").unwrap_or_default(),
            from_address,
        }
    }
}

/// 외부 조회 API 설정
///
/// `ServiceLocator`에 등록되어 ViaCEP/CNPJ 서비스에 주입됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    /// 예: `https://viacep.com.br/ws` → `{base}/{cep}/json`
    pub viacep_base_url: String,
    /// 예: `https://publica.cnpj.ws/cnpj` → `{base}/{cnpj}`
    pub cnpj_base_url: String,
    /// 요청당 타임아웃
    pub timeout: Duration,
}

impl LookupConfig {
    /// `VIACEP_BASE_URL`, `CNPJ_BASE_URL`, `LOOKUP_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            viacep_base_url: env::var("VIACEP_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.viacep_base_url),
            cnpj_base_url: env::var("CNPJ_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.cnpj_base_url),
            timeout: Duration::from_secs(super::env_parsed("LOOKUP_TIMEOUT_SECS", 10)),
        }
    }

    /// 테스트에서 목 서버 주소를 가리키도록 할 때 사용합니다.
    pub fn with_base_urls(viacep_base_url: impl Into<String>, cnpj_base_url: impl Into<String>) -> Self {
        Self {
            viacep_base_url: viacep_base_url.into(),
            cnpj_base_url: cnpj_base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            viacep_base_url: "https://viacep.com.br/ws".to_string(),
            cnpj_base_url: "https://publica.cnpj.ws/cnpj".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_transport_kind_from_string() {
        assert_eq!(MailTransportKind::from("log"), MailTransportKind::Log);
        assert_eq!(MailTransportKind::from("SMTP"), MailTransportKind::Smtp);
        assert_eq!(MailTransportKind::from(""), MailTransportKind::Smtp);
    }

    #[test]
    fn test_lookup_config_defaults() {
        let config = LookupConfig::default();

        assert_eq!(config.viacep_base_url, "https://viacep.com.br/ws");
        assert_eq!(config.cnpj_base_url, "https://publica.cnpj.ws/cnpj");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_base_urls_keeps_default_timeout() {
        let config = LookupConfig::with_base_urls("http://127.0.0.1:9000", "http://127.0.0.1:9001");

        assert_eq!(config.viacep_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, LookupConfig::default().timeout);
    }
}
