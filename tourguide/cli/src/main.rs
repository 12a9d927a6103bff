//! Tourguide CLI - author location-based tours from the terminal

mod commands;
mod render;

use clap::{Args, Parser, Subcommand};
use tourguide_lib::{
    ApiClient, ClientConfig, HomescreenDisplay, LocationTrigger, ParticipantScoring, Position,
};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::CliError;

#[derive(Parser)]
#[command(name = "tourguide", version)]
#[command(about = "Author location-based tours against the tour backend", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list, edit and delete projects
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Create, list, edit and delete locations
    #[command(subcommand)]
    Location(LocationCommand),

    /// Show score and visit totals for a project
    Review {
        /// The project to review
        #[arg(value_name = "PROJECT_ID")]
        project_id: i64,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// List all projects
    List,

    /// Show one project
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Create a project
    Create {
        /// Project title
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Change fields on a project
    Update {
        #[arg(value_name = "ID")]
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(Args, Default)]
pub struct ProjectFields {
    /// What the tour is about
    #[arg(long)]
    pub description: Option<String>,

    /// Instructions shown to participants
    #[arg(long)]
    pub instructions: Option<String>,

    /// Clue that leads to the first location
    #[arg(long)]
    pub initial_clue: Option<String>,

    /// "Display Initial Clue" or "Display Initial Location"
    #[arg(long, value_name = "MODE")]
    pub homescreen_display: Option<HomescreenDisplay>,

    /// Whether participants can see the tour
    #[arg(long, value_name = "BOOL")]
    pub published: Option<bool>,

    /// "Not Scored", "Time Based" or "Points Based"
    #[arg(long, value_name = "MODE")]
    pub scoring: Option<ParticipantScoring>,
}

#[derive(Subcommand)]
pub enum LocationCommand {
    /// List locations, optionally for one project
    List {
        /// Only locations of this project
        #[arg(long, value_name = "PROJECT_ID")]
        project: Option<i64>,
    },

    /// Show one location
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Create a location in an existing project
    Create {
        /// Location name
        #[arg(long)]
        name: String,

        /// Owning project; must already exist
        #[arg(long, value_name = "PROJECT_ID")]
        project: i64,

        #[command(flatten)]
        fields: LocationFields,
    },

    /// Change fields on a location
    Update {
        #[arg(value_name = "ID")]
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Move to another existing project
        #[arg(long, value_name = "PROJECT_ID")]
        project: Option<i64>,

        #[command(flatten)]
        fields: LocationFields,
    },

    /// Delete a location
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(Args, Default)]
pub struct LocationFields {
    /// "Location", "QR Code" or "Both"
    #[arg(long, value_name = "MODE")]
    pub trigger: Option<LocationTrigger>,

    /// Coordinates as (lat,long), e.g. (37.7749,-122.4194)
    #[arg(long, value_name = "(LAT,LONG)", allow_hyphen_values = true)]
    pub position: Option<Position>,

    /// Points awarded for reaching this location
    #[arg(long, value_name = "POINTS", allow_hyphen_values = true)]
    pub score: Option<i64>,

    /// Clue leading to this location
    #[arg(long)]
    pub clue: Option<String>,

    /// HTML content shown on arrival
    #[arg(long, value_name = "HTML")]
    pub content: Option<String>,

    /// Photo URL or data URI
    #[arg(long, value_name = "URL")]
    pub photo_url: Option<String>,
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,tourguide_lib=info".to_string(),
            2 => "info,tourguide_lib=debug".to_string(),
            _ => "debug,tourguide_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");
    let client = ApiClient::new(config)?;

    match command {
        Commands::Project(cmd) => commands::project(&client, cmd).await,
        Commands::Location(cmd) => commands::location(&client, cmd).await,
        Commands::Review { project_id } => commands::review(&client, project_id).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    if let Err(e) = run(cli.command).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_location_create() {
        let cli = Cli::try_parse_from([
            "tourguide",
            "location",
            "create",
            "--name",
            "Lake",
            "--project",
            "7",
            "--position",
            "(-27.5,153.01)",
            "--trigger",
            "QR Code",
        ])
        .unwrap();

        match cli.command {
            Commands::Location(LocationCommand::Create {
                name,
                project,
                fields,
            }) => {
                assert_eq!(name, "Lake");
                assert_eq!(project, 7);
                assert_eq!(fields.position, Some(Position::new(-27.5, 153.01)));
                assert_eq!(fields.trigger, Some(LocationTrigger::QrCode));
            }
            _ => panic!("expected location create"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_position() {
        let result = Cli::try_parse_from([
            "tourguide",
            "location",
            "update",
            "3",
            "--position",
            "37.7,-122.4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_project_update_enums() {
        let cli = Cli::try_parse_from([
            "tourguide",
            "project",
            "update",
            "7",
            "--scoring",
            "Points Based",
            "--published",
            "true",
        ])
        .unwrap();

        match cli.command {
            Commands::Project(ProjectCommand::Update { id, title, fields }) => {
                assert_eq!(id, 7);
                assert_eq!(title, None);
                assert_eq!(fields.scoring, Some(ParticipantScoring::PointsBased));
                assert_eq!(fields.published, Some(true));
            }
            _ => panic!("expected project update"),
        }
    }
}
