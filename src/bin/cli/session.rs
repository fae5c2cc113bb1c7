//! Interactive wellness session
//!
//! The CLI analog of the wellness dashboard: one in-memory journal, one chat
//! transcript, and one intern roster, all living for the length of the
//! session, exactly as the original page keeps them in component state.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use chrono::Local;

use innerbloom::charts::WellnessTrends;
use innerbloom::chat::{ChatTranscript, GREETING, REPLY_DELAY_MS};
use innerbloom::interns::{default_groups, InternRoster};
use innerbloom::journal::{EventLog, Mood};
use innerbloom::stress;

use crate::render;

const HELP: &str = "\
Type a message to chat with the companion, or use a command:
  /activity <label>        log an activity for today
  /mood <mood> [note]      log a mood (happy, sad, angry, stressed, neutral)
  /energy <1-10>           log an energy level
  /charts                  show the last 7 days of trends
  /scan                    run a simulated stress scan
  /intern add <name> <email>   add an intern with generated credentials
  /intern rotate <username>    rotate an intern's credentials
  /intern list             list interns and groups
  /quit                    leave the session";

pub fn run() -> anyhow::Result<()> {
    let mut log = EventLog::new();
    let mut transcript = ChatTranscript::new();
    let mut roster = InternRoster::new();
    let mut rng = rand::thread_rng();

    println!("{}", GREETING);
    println!("(/help for commands, /quit to leave)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            match run_command(command, &mut log, &mut roster, &mut rng) {
                Ok(true) => break,
                Ok(false) => {}
                Err(message) => println!("{}", message),
            }
        } else {
            // Blank input was already filtered, so submit always replies
            if let Some(reply) = transcript.submit(line) {
                std::thread::sleep(Duration::from_millis(REPLY_DELAY_MS));
                println!("{}", reply);
            }
        }
    }

    Ok(())
}

/// Run one slash command; Ok(true) means the session should end
fn run_command(
    command: &str,
    log: &mut EventLog,
    roster: &mut InternRoster,
    rng: &mut impl rand::Rng,
) -> Result<bool, String> {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match name {
        "quit" | "exit" => return Ok(true),
        "help" => println!("{}", HELP),
        "activity" => {
            let event = log.log_activity(rest).map_err(|e| e.to_string())?;
            println!("Logged activity \"{}\" for {}", event.label, event.date);
        }
        "mood" => {
            let mut mood_parts = rest.splitn(2, char::is_whitespace);
            let mood_word = mood_parts.next().unwrap_or("");
            let note = mood_parts.next().unwrap_or("").trim();
            let mood = Mood::parse(mood_word)
                .ok_or_else(|| format!("unknown mood \"{}\"", mood_word))?;
            let event = log.log_mood(mood, note);
            println!("Logged mood {} for {}", event.mood.emoji(), event.date);
        }
        "energy" => {
            let level: u8 = rest
                .parse()
                .map_err(|_| format!("\"{}\" is not a number", rest))?;
            let event = log.log_energy(level).map_err(|e| e.to_string())?;
            println!("Logged energy {} for {}", event.level, event.date);
        }
        "charts" => {
            let trends = WellnessTrends::compute(log, Local::now().date_naive());
            render::print_trends(&trends);
        }
        "scan" => {
            println!("Analyzing facial expressions...");
            std::thread::sleep(Duration::from_millis(stress::SCAN_DURATION_MS));
            render::print_scan(&stress::simulate_scan(rng));
        }
        "intern" => run_intern_command(rest, roster, rng)?,
        other => println!("Unknown command /{} (try /help)", other),
    }

    Ok(false)
}

fn run_intern_command(
    rest: &str,
    roster: &mut InternRoster,
    rng: &mut impl rand::Rng,
) -> Result<(), String> {
    let mut parts = rest.split_whitespace();
    match parts.next() {
        Some("add") => {
            let name = parts.next().ok_or("usage: /intern add <name> <email>")?;
            let email = parts.next().ok_or("usage: /intern add <name> <email>")?;
            let account = roster.add_intern(rng, name, email, None, 3);
            println!(
                "Added {} — username: {}  password: {}  expires: {}",
                account.name,
                account.username,
                account.password,
                account.expires()
            );
        }
        Some("rotate") => {
            let username = parts.next().ok_or("usage: /intern rotate <username>")?;
            let id = roster
                .find_by_username(username)
                .map(|a| a.id)
                .ok_or_else(|| format!("no intern with username \"{}\"", username))?;
            let account = roster
                .rotate_credentials(rng, id)
                .ok_or("rotation failed")?;
            println!(
                "Rotated {} — username: {}  password: {}",
                account.name, account.username, account.password
            );
        }
        Some("list") | None => {
            if roster.interns().is_empty() {
                println!("No interns yet.");
            }
            for account in roster.interns() {
                println!(
                    "{} <{}> — {} (expires {})",
                    account.name,
                    account.email,
                    account.username,
                    account.expires()
                );
            }
            println!("Groups:");
            for group in default_groups() {
                println!("  {}. {}", group.id, group.name);
            }
        }
        Some(other) => return Err(format!("unknown intern command \"{}\"", other)),
    }
    Ok(())
}
