//! External matcher process used by the delegated backend
//!
//! Usage: `fertil-matcher <age> <region> <specialty>`
//!
//! Ranks the filtered candidates with the keyword scorer and prints the best
//! one as a single JSON line. A query with no candidate prints a not-found
//! report on stdout and exits successfully. Other failures go to stderr with
//! a non-zero exit code; nothing else may ever be written to stderr, so no
//! logger is installed.

use std::process::ExitCode;
use std::sync::Arc;

use fertil_match::config::Settings;
use fertil_match::core::{Directory, KeywordScorer, MatchError, MatchSelector, SelectionStrategy};
use fertil_match::models::MatchQuery;
use fertil_match::services::ExternalNotFound;

const USAGE: &str = "Uso: fertil-matcher <idade> <localizacao> <especialidade>";

fn run(args: &[String]) -> Result<String, String> {
    let [age, region, specialty] = args else {
        return Err(USAGE.to_string());
    };

    let age: i32 = age
        .parse()
        .map_err(|e| format!("Invalid age {:?}: {}", age, e))?;

    let settings = Settings::load().map_err(|e| format!("Configuration error: {}", e))?;
    let directory = Directory::load(settings.directory.path.as_deref()).map_err(|e| e.to_string())?;

    let selector = MatchSelector::new(
        Arc::new(directory),
        Arc::new(KeywordScorer::default()),
        SelectionStrategy::HighestScore,
    );

    let line = match selector.select(&MatchQuery::new(age, region.as_str(), specialty.as_str())) {
        Ok(result) => serde_json::to_string(&result),
        Err(MatchError::NotFound { specialty, region }) => {
            serde_json::to_string(&ExternalNotFound::new(specialty, region))
        }
        Err(e) => return Err(e.to_string()),
    };

    line.map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
