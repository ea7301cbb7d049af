//! 메일 발송 서비스 구현
//!
//! 인증 코드 메일과 환영 메일을 text/plain + text/html 멀티파트로 보냅니다.
//! 전송 방식은 [`MailTransport`]로 주입되며, `log` 전송은 실제로 보내지 않고 로그만 남깁니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(MailTransport::from_config(&MailConfig::from_env())?));
//! let mail = MailService::instance();
//! mail.send_verification_code("ana@x.com", "482913", Duration::minutes(10)).await?;
//! ```

use std::sync::Arc;
use askama::Template;
use async_trait::async_trait;
use chrono::Duration;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use singleton_macro::service;
use crate::config::{MailConfig, MailTransportKind};
use super::{NotificationError, Notifier};

/// 메일 전송 수단
pub enum MailTransport {
    Smtp {
        mailer: AsyncSmtpTransport<Tokio1Executor>,
        from: String,
    },
    Log {
        from: String,
    },
}

impl MailTransport {
    /// `MailConfig`로 전송 수단을 만듭니다.
    ///
    /// SMTP는 STARTTLS 릴레이에 계정 인증을 사용합니다.
    pub fn from_config(config: &MailConfig) -> Result<Self, SmtpError> {
        match config.transport {
            MailTransportKind::Log => Ok(Self::log(config.from_address.clone())),
            MailTransportKind::Smtp => {
                let credentials = Credentials::new(config.username.clone(), config.password.clone());

                let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
                    .port(config.port)
                    .credentials(credentials)
                    .build();

                Ok(Self::Smtp {
                    mailer,
                    from: config.from_address.clone(),
                })
            }
        }
    }

    pub fn log(from: impl Into<String>) -> Self {
        Self::Log { from: from.into() }
    }

    fn from_address(&self) -> &str {
        match self {
            Self::Smtp { from, .. } | Self::Log { from } => from,
        }
    }
}

#[service(name = "mail")]
pub struct MailService {
    transport: Arc<MailTransport>,
}

impl MailService {
    /// 레지스트리를 거치지 않고 전송 수단을 직접 지정합니다.
    pub fn with_transport(transport: MailTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: String,
        html_body: String,
    ) -> Result<(), NotificationError> {
        let from = self.transport.from_address();

        let email = Message::builder()
            .from(from
                .parse()
                .map_err(|_| NotificationError::InvalidAddress(from.to_string()))?)
            .to(to
                .parse()
                .map_err(|_| NotificationError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body),
                    ),
            )?;

        match self.transport.as_ref() {
            MailTransport::Smtp { mailer, .. } => {
                mailer.send(email).await?;
                log::info!("📧 메일 발송 완료: to={}, subject={}", to, subject);
            }
            MailTransport::Log { .. } => {
                log::info!("📧 [log transport] to={}, subject={}", to, subject);
                log::debug!("{}", String::from_utf8_lossy(&email.formatted()));
            }
        }

        Ok(())
    }
}

/// 인증 코드 메일 본문 (HTML)
#[derive(Template)]
#[template(
    ext = "html",
    source = "<p>Olá!</p>\
<p>Seu código de verificação é: <strong>{{ code }}</strong></p>\
<p>Este código expira em {{ ttl_minutes }} minutos.</p>"
)]
struct VerificationCodeHtml<'a> {
    code: &'a str,
    ttl_minutes: i64,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "Olá!\n\nSeu código de verificação é: {{ code }}\n\nEste código expira em {{ ttl_minutes }} minutos.\n"
)]
struct VerificationCodeText<'a> {
    code: &'a str,
    ttl_minutes: i64,
}

/// 환영 메일 본문 (HTML). 이름은 자동으로 이스케이프됩니다.
#[derive(Template)]
#[template(
    ext = "html",
    source = "<p>Olá <strong>{{ name }}</strong>!</p>\
<p>Seu e-mail foi verificado com sucesso. Bem-vindo(a)!</p>"
)]
struct WelcomeHtml<'a> {
    name: &'a str,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "Olá {{ name }}!\n\nSeu e-mail foi verificado com sucesso. Bem-vindo(a)!\n"
)]
struct WelcomeText<'a> {
    name: &'a str,
}

#[async_trait]
impl Notifier for MailService {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        valid_for: Duration,
    ) -> Result<(), NotificationError> {
        let ttl_minutes = valid_for.num_minutes();
        let html = VerificationCodeHtml { code, ttl_minutes }.render()?;
        let text = VerificationCodeText { code, ttl_minutes }.render()?;

        self.send_multipart_email(email, "Verificação de Email", text, html)
            .await
    }

    async fn send_welcome(&self, email: &str, name: &str) -> Result<(), NotificationError> {
        let html = WelcomeHtml { name }.render()?;
        let text = WelcomeText { name }.render()?;

        self.send_multipart_email(email, "Bem-vindo(a)!", text, html)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_mail() -> MailService {
        MailService::with_transport(MailTransport::log("noreply@example.com"))
    }

    #[test]
    fn test_verification_body_mentions_code_and_ttl() {
        let text = VerificationCodeText { code: "482913", ttl_minutes: 3 }.render().unwrap();
        let html = VerificationCodeHtml { code: "482913", ttl_minutes: 3 }.render().unwrap();

        assert!(text.contains("482913"));
        assert!(text.contains("3 minutos"));
        assert!(html.contains("<strong>482913</strong>"));
        assert!(html.contains("3 minutos"));
    }

    #[test]
    fn test_welcome_html_escapes_name() {
        let name = r#"<script>alert("x")</script> & Co"#;

        let html = WelcomeHtml { name }.render().unwrap();
        let text = WelcomeText { name }.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; Co"));
        assert!(!html.contains(r#""x""#));
        assert!(text.contains(name));
    }

    #[actix_web::test]
    async fn test_log_transport_accepts_valid_addresses() {
        let mail = log_mail();

        mail.send_verification_code("ana@x.com", "482913", Duration::minutes(10)).await.unwrap();
        mail.send_welcome("ana@x.com", "Ana").await.unwrap();
    }

    #[actix_web::test]
    async fn test_invalid_recipient_is_reported() {
        let mail = log_mail();

        let result = mail.send_welcome("not-an-address", "Ana").await;

        assert!(matches!(result, Err(NotificationError::InvalidAddress(_))));
    }

    #[actix_web::test]
    async fn test_invalid_sender_is_reported() {
        let mail = MailService::with_transport(MailTransport::log(""));

        let result = mail.send_welcome("ana@x.com", "Ana").await;

        assert!(matches!(result, Err(NotificationError::InvalidAddress(_))));
    }
}
