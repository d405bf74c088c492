use crate::assign::{Engine, Strategy};
use crate::cli::Cli;
use crate::config::{Config, MailServer};
use crate::notify::{self, SmtpRelay};
use crate::output::{json, text};
use crate::roster::load_roster;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

struct EmailSettings {
    server: MailServer,
    from: String,
    to: Vec<String>,
}

pub async fn execute(args: Cli) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let config = Config::load(&args.config)?;

    // Resolve what the flags need before doing any work
    let gerrit_url = if args.with_gerrit_url {
        Some(config.gerrit_url()?.to_string())
    } else {
        None
    };
    let email = if args.send_email {
        Some(EmailSettings {
            server: config.mail_server()?,
            from: config.from_email()?.to_string(),
            to: config.to_email()?,
        })
    } else {
        None
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let committers = load_roster(&args.committers, &mut rng)
        .with_context(|| format!("Failed to load committers from {:?}", args.committers))?;
    let reviewers = load_roster(&args.reviewers, &mut rng)
        .with_context(|| format!("Failed to load reviewers from {:?}", args.reviewers))?;
    info!(
        "Loaded {} committers and {} reviewers",
        committers.len(),
        reviewers.len()
    );

    let strategy = Strategy::from_reviews_per_commit(args.reviews_per_commit);
    info!("Assigning with {}", strategy);

    let mut engine = Engine::new(committers, reviewers, rng);
    engine.run(strategy)?;
    let assignments = engine.into_assignments();

    let report = text::render(&assignments, gerrit_url.as_deref());
    if args.json {
        println!(
            "{}",
            json::render(&assignments, strategy, gerrit_url.as_deref())?
        );
    } else {
        println!("{}", report);
    }

    if let Some(email) = email {
        let relay = SmtpRelay::new(email.server.host, email.server.port);
        notify::email_results(&relay, &email.from, &email.to, &report).await?;
        info!("Email sent to {} recipients", email.to.len());
    }

    Ok(())
}
