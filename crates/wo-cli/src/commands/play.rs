//! Interactive play in the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::{ColoredString, Colorize};

use wo_fiction::{GameSession, Narration, Tone};

pub fn run(world: Option<PathBuf>, color: bool, list_exits: bool) -> Result<(), String> {
    let config = super::config_for(world)
        .with_color(color)
        .with_exits_listed(list_exits);
    if !config.color {
        colored::control::set_override(false);
    }

    let mut session =
        GameSession::from_config(config).map_err(|e| format!("failed to start session: {e}"))?;

    let intro = session.intro().map_err(|e| e.to_string())?;
    print_narration(&intro);
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        tracing::debug!(input, "player command");

        match session.process(input) {
            Ok(output) => {
                print_narration(&output);
                if session.has_quit() || session.is_won() {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    if session.is_won() {
        println!("  {}", "You escaped.".bold());
    }

    Ok(())
}

fn print_narration(lines: &[Narration]) {
    for narration in lines {
        println!("{}\n", paint(narration));
    }
}

fn paint(narration: &Narration) -> ColoredString {
    let text = narration.text.as_str();
    match narration.tone {
        Tone::Failure => text.red(),
        Tone::Caution => text.yellow(),
        Tone::Success => text.green(),
        Tone::Travel => text.cyan(),
        Tone::Event => text.blue(),
        Tone::Info => text.normal(),
        Tone::Diagnostic => narration.to_string().magenta(),
    }
}
