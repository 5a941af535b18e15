//! Shell command parsing.

use clap::{Parser, Subcommand};
use mercatus::{language::Language, reviews::RatingFilter};
use thiserror::Error;

/// Errors raised while splitting a command line into words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A quoted word was never closed.
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
}

/// One line of shell input
#[derive(Debug, Parser)]
#[command(
    name = "mercatus",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
pub struct ShellLine {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Storefront shell commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog
    Products,

    /// Open a product's detail view
    Open {
        /// Product id, e.g. p1
        id: String,
    },

    /// Close the detail view
    Close,

    /// Buy the open product
    Buy,

    /// Show the cart counter
    Cart,

    /// Switch language (en, es, it)
    Lang {
        /// Language tag
        language: Language,
    },

    /// Toggle between dark and light theme
    Theme,

    /// Show reviews for the open product
    Reviews {
        /// Rating filter: all, or 1 to 5 stars
        #[arg(long)]
        rating: Option<RatingFilter>,
    },

    /// Review the open product
    Review {
        /// Your display name
        #[arg(long)]
        name: String,

        /// Stars, 1 to 5
        #[arg(long, default_value_t = 5)]
        rating: u8,

        /// What you thought
        #[arg(long)]
        comment: String,
    },

    /// Ask the assistant about the open product
    Ask {
        /// Free-text question
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        question: Vec<String>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words, honouring single and double quotes.
///
/// # Errors
///
/// Returns `SplitError::UnterminatedQuote` when a quote is left open.
pub fn split_words(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match (quote, ch) {
            (Some(open), _) if ch == open => quote = None,
            (Some(_), _) => current.push(ch),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, _) if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(open) = quote {
        return Err(SplitError::UnterminatedQuote(open));
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}
