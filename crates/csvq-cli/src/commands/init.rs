//! Init command - print or save the sqlite3 setup script.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use csvq::{ScriptAssembler, Session, SessionMode};

use crate::cli::InputArgs;

pub fn run(
    input: InputArgs,
    interactive: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = ScriptAssembler::with_config(input.config()).assemble(&input.files)?;

    let mode = if interactive {
        SessionMode::Interactive
    } else {
        SessionMode::Init
    };
    let session = Session::new(&script, mode);

    if interactive {
        // stdout stays clean for the script itself
        eprintln!("{}", session.banner());
        eprintln!();
    }

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", session.render()))?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
            eprintln!(
                "Run {} to start querying",
                format!("sqlite3 -init {}", path.display()).cyan().bold()
            );
        }
        None => println!("{}", session.render()),
    }

    Ok(())
}
