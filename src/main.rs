use orbithub_portal::adapters::outbound::console::ConsoleNotifier;
use orbithub_portal::adapters::outbound::network::PortalApiClient;
use orbithub_portal::application::dto::SubmissionOutcome;
use orbithub_portal::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use orbithub_portal::application::FormController;
use orbithub_portal::cli::{Args, Command};
use orbithub_portal::config::{self, ConfigFile, Settings};
use orbithub_portal::shared::error::ExitCode;
use orbithub_portal::shared::Result;
use std::io::IsTerminal;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args.api_url.as_deref(), args.lang, config.as_ref())?;
    info!(
        api_url = %settings.api_url,
        language = %settings.language,
        "starting orbithub-portal"
    );

    let color = !args.no_color && std::io::stdout().is_terminal();
    let client = PortalApiClient::new(&settings.api_url)?;

    let mut form = FormController::new(
        client.clone(),
        client.clone(),
        ConsoleNotifier::new(!args.no_color && std::io::stderr().is_terminal()),
        settings.language,
    );
    let formatter = FormatterFactory::create(args.format, color);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));

    match args.command {
        Command::Options => {
            let output = formatter.format_options(&form.options())?;
            presenter.present(&output)?;
            Ok(ExitCode::Success)
        }
        Command::Filter { criteria } => {
            criteria.apply(form.draft_mut());
            form.filter().await?;
            let output = formatter.format(form.results(), form.selection(), form.language())?;
            presenter.present(&output)?;
            Ok(ExitCode::Success)
        }
        Command::Submit {
            client: client_args,
            criteria,
            description,
            select,
        } => {
            client_args.apply(form.draft_mut());
            criteria.apply(form.draft_mut());
            if let Some(description) = description {
                form.draft_mut().description = description;
            }

            if !select.is_empty() {
                form.filter().await?;
                for name in &select {
                    if !form.select_by_name(name) {
                        warn!(
                            "Satellite '{}' is not in the catalog results and will not be sent.",
                            name
                        );
                    }
                }
                let output = formatter.format(form.results(), form.selection(), form.language())?;
                presenter.present(&output)?;
            }

            Ok(match form.submit().await {
                SubmissionOutcome::Accepted => ExitCode::Success,
                SubmissionOutcome::Rejected { .. } | SubmissionOutcome::ConnectionFailed { .. } => {
                    ExitCode::RequestNotAccepted
                }
            })
        }
        Command::Health => {
            let status = client.health().await?;
            println!("{}: {}", client.base_url(), status);
            if status != "ok" {
                anyhow::bail!("Portal API reported status '{}'", status);
            }
            Ok(ExitCode::Success)
        }
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }
    let cwd = std::env::current_dir()?;
    config::discover_config(&cwd)
}
