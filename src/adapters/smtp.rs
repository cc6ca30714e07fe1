use crate::domain::model::Participant;
use crate::domain::ports::Mailer;
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Sends notification emails over SMTP with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(host: &str, port: u16, user: &str, password: &str) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            from: user.parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, to: &Participant, subject: &str, body_html: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(Some(to.name.clone()), to.email.parse()?))
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body_html.to_string())?;

        self.transport.send(message).await?;
        tracing::info!("✅ Email successfully sent to {} ({})", to.name, to.email);
        Ok(())
    }
}

/// Prints each email to the console instead of sending it. Never fails.
pub struct DryRunMailer;

#[async_trait]
impl Mailer for DryRunMailer {
    async fn deliver(&self, to: &Participant, _subject: &str, body_html: &str) -> Result<()> {
        println!("--- DRY RUN: Email to {} ---", to.email);
        println!("{}", body_html);
        println!("---------------------------------------\n");
        Ok(())
    }
}
