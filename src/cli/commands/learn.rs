//! Learn command handler
//!
//! Hosts an interactive [`Session`] on stdin/stdout, or replays a script
//! file when `--script` is given.

use learn_track::config::Config;
use learn_track::session::Session;
use learn_track::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::catalog::load_catalog;

/// Run the learn command
pub fn run(script: Option<&Path>, config: &Config) {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let reports_dir = if config.paths.reports_dir.is_empty() {
        Config::get_learntrack_dir().join("reports")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    debug!("Reports directory: {}", reports_dir.display());

    let mut session = Session::new(catalog, reports_dir);

    match script {
        Some(path) => run_script(&mut session, path),
        None => run_interactive(&mut session),
    }
}

/// Replay session commands from a file, echoing each one
fn run_script(session: &mut Session, path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("✗ Failed to read script {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    info!("Running session script {}", path.display());

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        println!("learn> {line}");
        let reply = session.handle_line(line);
        if !reply.text.is_empty() {
            println!("{}", reply.text);
        }
        if reply.quit {
            return;
        }
    }
}

fn run_interactive(session: &mut Session) {
    println!("\n=== {} ===", session.catalog().name);
    println!(
        "{} courses available. Type 'help' for commands, 'quit' to leave.\n",
        session.catalog().len()
    );

    loop {
        print!("learn> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            // EOF ends the session like `quit`
            Ok(0) => {
                println!();
                return;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ Failed to read input: {e}");
                return;
            }
        }

        let reply = session.handle_line(&line);
        if !reply.text.is_empty() {
            println!("{}", reply.text);
        }
        if reply.quit {
            return;
        }
    }
}
