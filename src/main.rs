use clap::Parser;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, DryRunMailer, RandomOrgClient, SantaEngine, SmtpMailer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🎅 Starting Secret Santa assignment");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let random = RandomOrgClient::new(
        config.api_url.clone(),
        config.api_key.clone().unwrap_or_default(),
    );

    let result = if config.dry_run {
        tracing::info!("🔍 Dry run: emails will be printed, not sent");
        let engine = SantaEngine::new(random, DryRunMailer, config.clone());
        engine.run().await
    } else {
        let smtp_host = config.smtp_host.clone().unwrap_or_default();
        let smtp_user = config.smtp_user.clone().unwrap_or_default();
        let password = match std::env::var("SMTP_PASSWORD") {
            Ok(p) => p,
            Err(_) => rpassword::prompt_password(format!(
                "Enter SMTP password for {}: ",
                smtp_user
            ))?,
        };

        let mailer = match SmtpMailer::new(&smtp_host, config.smtp_port, &smtp_user, &password) {
            Ok(mailer) => mailer,
            Err(e) => {
                tracing::error!("❌ SMTP setup failed: {}", e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        };

        let engine = SantaEngine::new(random, mailer, config.clone());
        engine.run().await
    };

    match result {
        Ok(sent) => {
            tracing::info!("✅ Assignment complete! {} emails handled", sent);
            println!("✅ Assignment complete! {} emails handled.", sent);
        }
        Err(e) => {
            tracing::error!("❌ Secret Santa run failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
