use std::io::Write;
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use astro_roster::models::{SignupInput, DESTINATIONS, EXPERIENCE_LEVELS, ROLES};
use astro_roster::signup;
use astro_roster::store::RosterStore;
use astro_roster::view::{table, SortDir, SortKey, ViewState};
use astro_roster::watch;

#[derive(Parser)]
#[command(name = "astro")]
#[command(about = "Crew signup and roster management for the mission desk")]
struct Cli {
    /// Override the roster data file location
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up a new astronaut (prompts for any field not given as a flag)
    Signup {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_parser = PossibleValuesParser::new(ROLES))]
        role: Option<String>,

        #[arg(long, value_parser = PossibleValuesParser::new(DESTINATIONS))]
        destination: Option<String>,

        #[arg(long, value_parser = PossibleValuesParser::new(EXPERIENCE_LEVELS))]
        experience: Option<String>,

        /// Favourite snack
        #[arg(long)]
        snack: Option<String>,

        /// Personal motto
        #[arg(long)]
        motto: Option<String>,
    },
    /// Show the roster table
    List {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Sort column
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
    /// Show every recorded field for one crew member
    Details {
        /// Position in the full roster (the `#` column)
        index: usize,
    },
    /// Remove the crew member at the given roster index
    Remove {
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Remove the entire roster
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Interactive roster session (live filter, sorting, backdrop rotation)
    Watch,
}

/// Initialize tracing to stderr so stdout stays clean for the roster output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "astro_roster=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = match cli.data_file {
        Some(path) => RosterStore::open(path)?,
        None => RosterStore::open_default()?,
    };

    match cli.command {
        Some(Commands::Signup {
            name,
            email,
            role,
            destination,
            experience,
            snack,
            motto,
        }) => {
            let input = gather_signup_input(name, email, role, destination, experience, snack, motto)?;
            match signup::submit(&store, input) {
                Ok(record) => {
                    tracing::info!(name = %record.name, "astronaut added to the roster");
                    // Success lands on the roster page.
                    render_list(&store, ViewState::default());
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::List { filter, sort, desc }) => {
            let dir = if desc {
                SortDir::Descending
            } else {
                SortDir::Ascending
            };
            let state = ViewState {
                filter,
                sort: sort.map(|key| (key, dir)),
            };
            render_list(&store, state);
        }
        Some(Commands::Details { index }) => match store.get(index) {
            Some(record) => println!("{}", table::render_details(&record)),
            None => {
                eprintln!("No crew member at index {index}.");
                std::process::exit(1);
            }
        },
        Some(Commands::Remove { index, yes }) => {
            let Some(record) = store.get(index) else {
                eprintln!("No crew member at index {index}.");
                std::process::exit(1);
            };
            let name = if record.name.is_empty() {
                "this person".to_string()
            } else {
                record.name.clone()
            };
            if yes || confirm(&format!("Remove {name} from the roster?"))? {
                store.remove(index);
                render_list(&store, ViewState::default());
            }
        }
        Some(Commands::Clear { yes }) => {
            if yes || confirm("Remove all crew members? This cannot be undone.")? {
                store.clear();
                render_list(&store, ViewState::default());
            }
        }
        Some(Commands::Watch) => watch::run(&store).await?,
        None => render_list(&store, ViewState::default()),
    }

    Ok(())
}

fn render_list(store: &RosterStore, state: ViewState) {
    let roster = store.read_all();
    println!(
        "{}",
        table::render_roster(&roster, &state, table::terminal_columns())
    );
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} (y/N) ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(watch::is_yes(&answer))
}

/// Fill in any field not supplied as a flag by prompting, the way the signup
/// form presents its inputs. Closed-set prompts accept an option name or its
/// number; anything else counts as "not selected" and fails validation.
#[allow(clippy::too_many_arguments)]
fn gather_signup_input(
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    destination: Option<String>,
    experience: Option<String>,
    snack: Option<String>,
    motto: Option<String>,
) -> anyhow::Result<SignupInput> {
    let name = match name {
        Some(value) => value,
        None => prompt("Name")?,
    };
    let email = match email {
        Some(value) => value,
        None => prompt("Email")?,
    };
    let role = match role {
        Some(value) => value,
        None => prompt_choice("Role", &ROLES)?,
    };
    let destination = match destination {
        Some(value) => value,
        None => prompt_choice("Destination", &DESTINATIONS)?,
    };
    let experience = match experience {
        Some(value) => value,
        None => prompt_choice("Experience", &EXPERIENCE_LEVELS)?,
    };
    let snack = match snack {
        Some(value) => Some(value),
        None => Some(prompt("Favourite snack (optional)")?),
    };
    let motto = match motto {
        Some(value) => Some(value),
        None => Some(prompt("Motto (optional)")?),
    };

    Ok(SignupInput {
        name,
        email,
        role,
        destination,
        experience,
        snack,
        motto,
    })
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut value = String::new();
    std::io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_choice(label: &str, options: &[&str]) -> anyhow::Result<String> {
    let listed = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}={}", i + 1, option))
        .collect::<Vec<_>>()
        .join(", ");
    let answer = prompt(&format!("{label} [{listed}]"))?;
    if answer.is_empty() {
        return Ok(String::new());
    }

    if let Ok(number) = answer.parse::<usize>() {
        if (1..=options.len()).contains(&number) {
            return Ok(options[number - 1].to_string());
        }
    }
    if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
        return Ok(option.to_string());
    }

    // Outside the closed set is the same as leaving it unselected.
    eprintln!("{label} must be one of: {}", options.join(", "));
    Ok(String::new())
}
