//! Fact-checking handlers: one-shot and interactive

use std::io::BufRead;
use std::io::Write;

use crate::cli::output::print_error;
use crate::cli::output::print_info;
use crate::cli::output::print_sources;
use crate::cli::output::print_verdict;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::rag::FactChecker;

/// Verify a single statement, or run an interactive session when none given
pub async fn handle_check(
    config: &AppConfig,
    statement: Option<String>,
    show_sources: bool,
) -> Result<()> {
    // Index, embedder and LLM client are built once and reused for every
    // statement in the session
    let checker = FactChecker::new(config)?;
    print_info(&format!(
        "🕉️  Ramayana Fact Checker ({} verses indexed)",
        checker.index_len()
    ));

    match statement {
        Some(statement) => check_one(&checker, &statement, show_sources).await,
        None => run_interactive(&checker, show_sources).await,
    }
}

async fn check_one(checker: &FactChecker, statement: &str, show_sources: bool) -> Result<()> {
    print_info(&format!("🔍 Verifying: \"{}\"", statement.trim()));

    let response = checker.check(statement).await?;
    print_verdict(&response.verdict);

    if show_sources {
        print_sources(&response.sources);
    }

    Ok(())
}

/// Interactive read-check-print loop
///
/// A failed query is reported and the loop continues; the session ends on
/// EOF or an exit command.
async fn run_interactive(checker: &FactChecker, show_sources: bool) -> Result<()> {
    println!("Enter a statement to verify (exit/quit to leave):\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("🔍 > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let statement = line?.trim().to_string();

        if statement.is_empty() {
            continue;
        }
        if statement.eq_ignore_ascii_case("exit") || statement.eq_ignore_ascii_case("quit") {
            break;
        }

        match checker.check(&statement).await {
            Ok(response) => {
                print_verdict(&response.verdict);
                if show_sources {
                    print_sources(&response.sources);
                }
                println!();
            }
            Err(e) => print_error(&format!("Error: {e}")),
        }
    }

    println!("Goodbye!");
    Ok(())
}
