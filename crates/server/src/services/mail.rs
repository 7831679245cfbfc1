//! Outbound contact mail over SMTP.
//!
//! Messages submitted through the contact form are relayed to the shop
//! operator's inbox as multipart text + HTML mail. The submitter's address
//! goes into `Reply-To` so the operator can answer directly from their
//! mail client.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;

use crate::config::ContactConfig;

/// HTML body of the relayed contact message.
#[derive(Template)]
#[template(path = "email/contact_message.html")]
struct ContactMessageHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

/// Plain-text alternative of the relayed contact message.
#[derive(Template)]
#[template(path = "email/contact_message.txt")]
struct ContactMessageText<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

/// Errors that can occur when sending email
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// SMTP relay for contact form submissions.
#[derive(Clone)]
pub struct ContactMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    to_address: String,
    from_address: String,
}

impl ContactMailer {
    /// Create a new mailer from SMTP configuration.
    ///
    /// Implicit TLS is used when the config asks for it, otherwise the
    /// connection starts in plaintext and upgrades via STARTTLS.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be built.
    pub fn new(config: &ContactConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = if config.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        }
        .port(config.smtp_port)
        .credentials(credentials)
        .build();

        Ok(Self {
            mailer,
            to_address: config.to_address.clone(),
            from_address: config.from_address.clone(),
        })
    }

    /// Relay a contact form submission to the operator's inbox.
    ///
    /// # Errors
    ///
    /// Returns an error if an address fails to parse, a template fails to
    /// render, or the SMTP transport rejects the message.
    pub async fn send_contact_message(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
    ) -> Result<(), MailerError> {
        let html = ContactMessageHtml {
            name,
            email,
            phone,
            message,
        }
        .render()?;
        let text = ContactMessageText {
            name,
            email,
            phone,
            message,
        }
        .render()?;

        let subject = format!("NovaStore contact — {name}");

        let mail = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| MailerError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .to_address
                .parse()
                .map_err(|_| MailerError::InvalidAddress(self.to_address.clone()))?)
            .reply_to(
                email
                    .parse()
                    .map_err(|_| MailerError::InvalidAddress(email.to_string()))?,
            )
            .subject(&subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    ),
            )?;

        self.mailer.send(mail).await?;

        tracing::info!(
            to = %self.to_address,
            subject = %subject,
            "Contact message relayed"
        );

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_html_template_escapes_markup() {
        let rendered = ContactMessageHtml {
            name: "Eve",
            email: "eve@example.com",
            phone: "",
            message: "<script>alert(1)</script>",
        }
        .render()
        .unwrap();

        // Askama escapes with numeric character references.
        assert!(rendered.contains("&#60;script&#62;"));
        assert!(!rendered.contains("<script>"));
    }

    #[test]
    fn test_html_template_omits_empty_phone() {
        let rendered = ContactMessageHtml {
            name: "Bob",
            email: "bob@example.com",
            phone: "",
            message: "Hello",
        }
        .render()
        .unwrap();

        assert!(!rendered.contains("Phone"));
    }

    #[test]
    fn test_html_template_includes_phone_when_present() {
        let rendered = ContactMessageHtml {
            name: "Bob",
            email: "bob@example.com",
            phone: "+46 70 123 45 67",
            message: "Hello",
        }
        .render()
        .unwrap();

        assert!(rendered.contains("Phone"));
        assert!(rendered.contains("+46 70 123 45 67"));
    }

    #[test]
    fn test_text_template_layout() {
        let rendered = ContactMessageText {
            name: "Alice",
            email: "alice@example.com",
            phone: "12345",
            message: "Is the iPad Pro in stock?",
        }
        .render()
        .unwrap();

        assert_eq!(
            rendered,
            "Name: Alice\nEmail: alice@example.com\nPhone: 12345\n\nIs the iPad Pro in stock?"
        );
    }
}
