//! FAQ CLI commands

use clap::Subcommand;

use crate::error::PocketbookResult;
use crate::services::FaqService;

/// FAQ subcommands
#[derive(Subcommand, Debug)]
pub enum FaqCommands {
    /// List all questions
    #[command(alias = "ls")]
    List,

    /// Print the answer to a question (exact text, quoted)
    Ask {
        /// The question, exactly as listed
        question: String,
    },

    /// Find questions containing a word or phrase
    Search {
        /// Text to look for (case-insensitive)
        term: String,
    },
}

/// Handle a FAQ command
pub fn handle_faq_command(cmd: FaqCommands) -> PocketbookResult<()> {
    let faq = FaqService::new();

    match cmd {
        FaqCommands::List => {
            println!("Finance FAQ");
            println!("{}", "=".repeat(40));
            for (i, question) in faq.questions().enumerate() {
                println!("{:>2}. {}", i + 1, question);
            }
        }
        FaqCommands::Ask { question } => {
            let answer = faq.answer(&question)?;
            println!("{}", answer);
        }
        FaqCommands::Search { term } => {
            let hits = faq.search(&term);
            if hits.is_empty() {
                println!("No questions match '{}'.", term.trim());
                println!("Run 'pocketbook faq list' to see all questions.");
            } else {
                for entry in hits {
                    println!("Q: {}", entry.question);
                    println!("A: {}", entry.answer);
                    println!();
                }
            }
        }
    }

    Ok(())
}
