use crate::adapters::{roster, template};
use crate::core::assign;
use crate::domain::ports::{ConfigProvider, Mailer, RandomSource};
use crate::utils::error::Result;

/// Runs one full exchange: load the roster, draw the pairing, render the
/// template and hand each email to the mailer. Delivery stops at the first
/// mailer error; there is no retry and no partial resume.
pub struct SantaEngine<R: RandomSource, M: Mailer, C: ConfigProvider> {
    random: R,
    mailer: M,
    config: C,
}

impl<R: RandomSource, M: Mailer, C: ConfigProvider> SantaEngine<R, M, C> {
    pub fn new(random: R, mailer: M, config: C) -> Self {
        Self {
            random,
            mailer,
            config,
        }
    }

    /// Returns the number of emails delivered.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Loading participants from {}", self.config.participants_file());
        let participants = roster::load_participants(self.config.participants_file())?;
        tracing::info!("Loaded {} participants", participants.len());

        tracing::info!("Drawing assignment...");
        let pairs = assign::assign(&participants, &self.random).await?;
        if pairs.is_empty() {
            tracing::warn!("No pairs to notify; nothing sent");
            return Ok(0);
        }
        tracing::info!("Assigned {} giver/receiver pairs", pairs.len());

        let template = template::read_template(self.config.template_file())?;

        let mut sent = 0;
        for pair in &pairs {
            let subject = format!("🎅 Ola {} Você tem um Amigo Secreto!", pair.giver.name);
            let body = template::render(&template, pair, &self.config);
            self.mailer.deliver(&pair.giver, &subject, &body).await?;
            sent += 1;
        }

        tracing::info!("Delivered {} emails", sent);
        Ok(sent)
    }
}
