use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::portal::domain::{Classification, Delivery, Language, RequestDraft};

/// Request satellite data from the OrbitHub portal
#[derive(Parser, Debug)]
#[command(name = "orbithub-portal")]
#[command(version)]
#[command(
    about = "Browse satellites ranked by sustainability and submit data requests to the OrbitHub portal",
    long_about = None
)]
pub struct Args {
    /// Interface language: en or pt (defaults to the config file, then en)
    #[arg(short, long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Portal API base URL (overrides the config file and build default)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (defaults to ./orbithub.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result format: text or json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the localized choices for sector, purpose, classification, delivery and country
    Options,
    /// Search the satellite catalog with the request criteria
    Filter {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },
    /// Submit a data request, optionally with satellites selected from a catalog search
    Submit {
        #[command(flatten)]
        client: ClientArgs,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Request description (AOI, cadence, formats, constraints)
        #[arg(long)]
        description: Option<String>,

        /// Satellite to include, by name; can be given multiple times.
        /// The catalog is searched with the request criteria first.
        #[arg(short, long = "select", value_name = "NAME")]
        select: Vec<String>,
    },
    /// Check that the portal API is reachable
    Health,
}

/// Catalog criteria shared by `filter` and `submit`
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct CriteriaArgs {
    /// Sustainability classification (GOLD, SILVER, BRONZE, PENDING or the Portuguese labels)
    #[arg(long, value_parser = parse_classification)]
    pub classification: Option<Classification>,

    /// Purpose option; use the "Other" label of the active language to give --purpose-other
    #[arg(long)]
    pub purpose: Option<String>,

    /// Free-text purpose used when --purpose is "Other"/"Outro"
    #[arg(long, value_name = "TEXT")]
    pub purpose_other: Option<String>,

    /// Delivery method: API or Batch
    #[arg(long, value_parser = parse_delivery, conflicts_with = "no_delivery")]
    pub delivery: Option<Delivery>,

    /// Search without a delivery criterion (a submitted request still
    /// carries the default delivery method)
    #[arg(long)]
    pub no_delivery: bool,
}

/// Client identification fields for `submit`
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct ClientArgs {
    /// Requester full name or organization contact
    #[arg(long)]
    pub name: Option<String>,

    /// Company identification number (CNPJ or equivalent)
    #[arg(long, value_name = "ID")]
    pub company_id: Option<String>,

    /// Billing or correspondence address
    #[arg(long)]
    pub address: Option<String>,

    /// Primary contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Business sector
    #[arg(long)]
    pub sector: Option<String>,

    /// Requester country
    #[arg(long)]
    pub country: Option<String>,
}

impl CriteriaArgs {
    /// Copies the given criteria into the draft
    pub fn apply(&self, draft: &mut RequestDraft) {
        if let Some(class) = self.classification {
            draft.classification = Some(class);
        }
        if let Some(purpose) = &self.purpose {
            draft.purpose = purpose.clone();
        }
        if let Some(other) = &self.purpose_other {
            draft.purpose_other = other.clone();
        }
        if self.no_delivery {
            draft.delivery = None;
        } else if let Some(delivery) = self.delivery {
            draft.delivery = Some(delivery);
        }
    }
}

impl ClientArgs {
    /// Copies the given client fields into the draft
    pub fn apply(&self, draft: &mut RequestDraft) {
        let fields = [
            (&self.name, &mut draft.name),
            (&self.company_id, &mut draft.company_id),
            (&self.address, &mut draft.address),
            (&self.email, &mut draft.email),
            (&self.sector, &mut draft.sector),
            (&self.country, &mut draft.country),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: crate::shared::error::PortalError| e.to_string())
}

fn parse_classification(s: &str) -> Result<Classification, String> {
    s.parse().map_err(|e: crate::shared::error::PortalError| e.to_string())
}

fn parse_delivery(s: &str) -> Result<Delivery, String> {
    s.parse().map_err(|e: crate::shared::error::PortalError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_command() {
        let args = Args::try_parse_from([
            "orbithub-portal",
            "--lang",
            "pt",
            "filter",
            "--classification",
            "ouro",
            "--delivery",
            "batch",
        ])
        .unwrap();

        assert_eq!(args.lang, Some(Language::Pt));
        let Command::Filter { criteria } = args.command else {
            panic!("expected filter command");
        };
        assert_eq!(criteria.classification, Some(Classification::Gold));
        assert_eq!(criteria.delivery, Some(Delivery::Batch));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["orbithub-portal", "options", "--lang", "en", "-f", "json"])
                .unwrap();
        assert_eq!(args.lang, Some(Language::En));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_submit_with_selection() {
        let args = Args::try_parse_from([
            "orbithub-portal",
            "submit",
            "--name",
            "Ana",
            "--company-id",
            "12.345.678/0001-90",
            "--purpose",
            "Other",
            "--purpose-other",
            "Fisheries mapping",
            "--select",
            "Amazonia-1",
            "-s",
            "CBERS-4",
        ])
        .unwrap();

        let Command::Submit {
            client,
            criteria,
            select,
            ..
        } = args.command
        else {
            panic!("expected submit command");
        };
        assert_eq!(select, ["Amazonia-1", "CBERS-4"]);

        let mut draft = RequestDraft::default();
        client.apply(&mut draft);
        criteria.apply(&mut draft);
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.company_id, "12.345.678/0001-90");
        assert_eq!(draft.effective_purpose("Other"), "Fisheries mapping");
        assert_eq!(draft.delivery, Some(Delivery::Api));
    }

    #[test]
    fn test_no_delivery_clears_default() {
        let mut draft = RequestDraft::default();
        CriteriaArgs {
            no_delivery: true,
            ..Default::default()
        }
        .apply(&mut draft);
        assert_eq!(draft.delivery, None);
    }

    #[test]
    fn test_submit_without_delivery_still_sends_a_method() {
        let args =
            Args::try_parse_from(["orbithub-portal", "submit", "--name", "Ana", "--no-delivery"])
                .unwrap();
        let Command::Submit {
            client, criteria, ..
        } = args.command
        else {
            panic!("expected submit command");
        };

        let mut draft = RequestDraft::default();
        client.apply(&mut draft);
        criteria.apply(&mut draft);
        let payload = crate::application::dto::SubmissionPayload::from_draft(
            &draft,
            "Other",
            Language::En,
            &crate::portal::domain::SelectionSet::new(),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["delivery"], "API");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Args::try_parse_from(["orbithub-portal", "--lang", "fr", "options"]).is_err());
        assert!(Args::try_parse_from([
            "orbithub-portal",
            "filter",
            "--classification",
            "platinum"
        ])
        .is_err());
        assert!(Args::try_parse_from([
            "orbithub-portal",
            "filter",
            "--delivery",
            "API",
            "--no-delivery"
        ])
        .is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["orbithub-portal"]).is_err());
    }
}
