use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use statusreport::models::TeamMember;
use statusreport::{
    BoardService, BugzillaClient, Config, GerritReviews, LaunchpadClient, Report, Services,
    TeamReport, TrelloClient,
};

#[derive(Parser, Debug)]
#[command(name = "statusreport")]
#[command(version = "0.1.0")]
#[command(about = "Print team status from Trello, Gerrit, Launchpad and Bugzilla")]
struct Args {
    /// Which part of the report to print
    #[arg(value_enum, default_value_t = Section::All)]
    section: Section,

    /// Look back this many weeks (defaults to LOOKBACK_WEEKS)
    #[arg(short, long)]
    weeks: Option<u32>,

    /// Only report on this roster key
    #[arg(short, long)]
    member: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    /// Every section plus the team summary
    All,
    Cards,
    Reviews,
    Launchpad,
    Bugzilla,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("statusreport=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let members: Vec<TeamMember> = match &args.member {
        Some(key) => vec![config
            .team
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No team member '{}' in TEAM", key))?],
        None => config.team.members().to_vec(),
    };
    let start_date = -(args.weeks.unwrap_or(config.lookback_weeks) as i64);

    // Initialize clients
    let trello = config.trello.as_ref().map(TrelloClient::new).transpose()?;
    if trello.is_none() {
        tracing::warn!("TRELLO_API_KEY or trello_token not set, board reports disabled");
    }
    let gerrit = GerritReviews::new(&config.gerrit)?;
    let launchpad = LaunchpadClient::new(&config.launchpad_api_url)?;
    let bugzilla = BugzillaClient::new(&config.bugzilla)?;

    let services = Services {
        boards: trello.as_ref().map(|t| t as &dyn BoardService),
        reviews: &gerrit,
        launchpad: &launchpad,
        bugzilla: &bugzilla,
    };

    let stdout = std::io::stdout();
    let mut report = Report::new(services, &config.board_to_check_id, stdout.lock());

    tracing::info!(
        "Reporting on {} member(s), {} week(s) back",
        members.len(),
        -start_date
    );

    match args.section {
        Section::All => {
            TeamReport::new(report).run_team(&members, start_date).await?;
        }
        Section::Cards => {
            if !report.has_boards() {
                anyhow::bail!("Board reports need TRELLO_API_KEY and trello_token");
            }
            for member in &members {
                match &member.identities.trello {
                    Some(trello) => {
                        report.print_active_cards(trello, start_date).await?;
                    }
                    None => tracing::info!("No trello account for {}, skipping", member.key),
                }
            }
        }
        Section::Reviews => {
            for member in &members {
                let identities = member.review_identities();
                if identities.is_empty() {
                    tracing::info!("No gerrit accounts for {}, skipping", member.key);
                    continue;
                }
                report.print_reviews(&identities, start_date).await?;
            }
        }
        Section::Launchpad => {
            for member in &members {
                match &member.identities.launchpad {
                    Some(person) => {
                        report.print_launch_pad_bugs(person, start_date).await?;
                    }
                    None => tracing::info!("No launchpad account for {}, skipping", member.key),
                }
            }
        }
        Section::Bugzilla => {
            for member in &members {
                match &member.identities.bugzilla {
                    Some(person) => {
                        report.print_bugzilla_bugs(person, start_date).await?;
                    }
                    None => tracing::info!("No bugzilla account for {}, skipping", member.key),
                }
            }
        }
    }

    Ok(())
}
