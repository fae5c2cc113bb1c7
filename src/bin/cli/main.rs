mod render;
mod session;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use innerbloom::chat;
use innerbloom::profile::{AvatarPreference, ProfileStorage, AVATAR_COUNT};
use innerbloom::stress;

#[derive(Parser)]
#[command(name = "innerbloom-cli", about = "InnerBloom wellness companion", version)]
struct Cli {
    /// Data directory override (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Get a supportive reply to a single message
    Reply {
        /// The message to respond to
        message: String,
    },

    /// Run a simulated stress scan
    Scan {
        /// Skip the analysis delay
        #[arg(long)]
        now: bool,
    },

    /// Show or change the saved avatar
    Avatar {
        /// Cycle to the next avatar and save
        #[arg(long, conflicts_with = "set")]
        next: bool,
        /// Pick a specific avatar (0-based) and save
        #[arg(long)]
        set: Option<usize>,
    },

    /// Start an interactive wellness session
    Session,
}

fn profile_storage(data_dir: Option<PathBuf>) -> anyhow::Result<ProfileStorage> {
    let base = match data_dir {
        Some(dir) => dir,
        None => ProfileStorage::default_data_dir()?,
    };
    Ok(ProfileStorage::new(base))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Reply { message } => {
            if message.trim().is_empty() {
                anyhow::bail!("message must not be empty");
            }
            println!("{}", chat::reply(&message, &[]));
        }
        Command::Scan { now } => {
            if !now {
                println!("Analyzing facial expressions...");
                std::thread::sleep(Duration::from_millis(stress::SCAN_DURATION_MS));
            }
            let reading = stress::simulate_scan(&mut rand::thread_rng());
            render::print_scan(&reading);
        }
        Command::Avatar { next, set } => {
            let storage = profile_storage(cli.data_dir)?;
            let mut pref = storage.load()?;
            if let Some(index) = set {
                pref = AvatarPreference::set(index)
                    .ok_or_else(|| anyhow::anyhow!("avatar index must be below {}", AVATAR_COUNT))?;
                storage.save(&pref)?;
            } else if next {
                pref = pref.next();
                storage.save(&pref)?;
            }
            println!("Avatar {} of {}", pref.selected + 1, AVATAR_COUNT);
        }
        Command::Session => session::run()?,
    }

    Ok(())
}
