//! Interactive Shell
//!
//! Line-oriented front end over a [`Storefront`]. Each line is parsed as one
//! command; failures are printed and the session carries on until `quit` or end of
//! input.
//!
//! Assistant questions run as background tasks. Their answers are delivered between
//! commands, so browsing and reviewing continue while a question is in flight.

use std::io;

use clap::Parser;
use mercatus::{
    catalog::ProductId,
    storefront::{QuestionTicket, Storefront},
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, info};

use crate::{assistant::prompt::STORE_NAME, context::AppContext};

pub mod command;
mod render;

pub use command::{Command, ShellLine, SplitError, split_words};

const OPEN_A_PRODUCT_FIRST: &str = "Open a product first.";
const STILL_ANSWERING: &str = "The assistant is still answering.";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,

    /// Stop the session.
    Quit,
}

#[derive(Debug)]
struct Answer {
    ticket: QuestionTicket,
    text: String,
}

/// Storefront shell session
#[derive(Debug)]
pub struct Shell {
    ctx: AppContext,
    answers_tx: mpsc::UnboundedSender<Answer>,
    answers_rx: mpsc::UnboundedReceiver<Answer>,
}

impl Shell {
    /// Start a session over the given context.
    pub fn new(ctx: AppContext) -> Self {
        let (answers_tx, answers_rx) = mpsc::unbounded_channel();

        Self {
            ctx,
            answers_tx,
            answers_rx,
        }
    }

    /// Session state.
    pub fn storefront(&self) -> &Storefront {
        &self.ctx.storefront
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// `quit` leaves at once and abandons any question in flight. At end of input the
    /// session waits for the pending answer first.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: io::Write,
    {
        writeln!(out, "{STORE_NAME}. Type `help` for commands.")?;

        let mut lines = input.lines();

        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        writeln!(out)?;
                        self.settle(out).await?;
                        break;
                    };

                    if self.execute(&line, out)? == Flow::Quit {
                        break;
                    }
                }
                Some(answer) = self.answers_rx.recv() => {
                    writeln!(out)?;
                    self.deliver(answer, out)?;
                }
            }
        }

        info!(cart = self.ctx.storefront.cart_count(), "session ended");

        Ok(())
    }

    /// Run a single command line.
    ///
    /// `ask` only starts the question; its answer arrives through
    /// [`Shell::next_answer`] or the [`Shell::run`] loop.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing output fails.
    pub fn execute(&mut self, line: &str, out: &mut impl io::Write) -> io::Result<Flow> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(error) => {
                writeln!(out, "{error}")?;

                return Ok(Flow::Continue);
            }
        };

        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(error) => {
                write!(out, "{}", error.render())?;

                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "dispatching shell command");

        self.dispatch(command, out)
    }

    /// Wait for the next answer and show it if its question is still current.
    ///
    /// Returns whether the answer was shown; answers for a product that has been
    /// closed or reopened since are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing output fails.
    pub async fn next_answer(&mut self, out: &mut impl io::Write) -> io::Result<bool> {
        match self.answers_rx.recv().await {
            Some(answer) => self.deliver(answer, out),
            None => Ok(false),
        }
    }

    /// Wait until no question is in flight for the open product.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing output fails.
    pub async fn settle(&mut self, out: &mut impl io::Write) -> io::Result<()> {
        while self.ctx.storefront.assistant().is_busy() {
            self.next_answer(out).await?;
        }

        Ok(())
    }

    fn deliver(&mut self, answer: Answer, out: &mut impl io::Write) -> io::Result<bool> {
        let Answer { ticket, text } = answer;

        if !self.ctx.storefront.finish_question(ticket, text.as_str()) {
            debug!(?ticket, "dropping answer for a closed product");

            return Ok(false);
        }

        writeln!(out, "{text}")?;

        Ok(true)
    }

    fn dispatch(&mut self, command: Command, out: &mut impl io::Write) -> io::Result<Flow> {
        let storefront = &mut self.ctx.storefront;
        let lang = storefront.language();

        match command {
            Command::Products => render::catalog(out, storefront.catalog(), lang)?,
            Command::Open { id } => match storefront.open(ProductId::new(id)) {
                Ok(()) => {
                    if let Some(product) = storefront.selected() {
                        render::product(out, product, lang)?;
                    }

                    render::reviews(out, &storefront.visible_reviews(), storefront.filter())?;
                }
                Err(error) => writeln!(out, "{error}")?,
            },
            Command::Close => match storefront.close() {
                Some(id) => writeln!(out, "Closed {id}.")?,
                None => writeln!(out, "Nothing is open.")?,
            },
            Command::Buy => match storefront.buy() {
                Ok(count) => writeln!(out, "Added to cart. Cart: {count}")?,
                Err(error) => writeln!(out, "{error}")?,
            },
            Command::Cart => writeln!(out, "Cart: {}", storefront.cart_count())?,
            Command::Lang { language } => {
                storefront.set_language(language);
                writeln!(out, "Language: {language}")?;
            }
            Command::Theme => writeln!(out, "Theme: {}", storefront.toggle_theme())?,
            Command::Reviews { rating } => {
                if storefront.selected().is_none() {
                    writeln!(out, "{OPEN_A_PRODUCT_FIRST}")?;
                } else {
                    if let Some(filter) = rating {
                        storefront.set_filter(filter);
                    }

                    render::reviews(out, &storefront.visible_reviews(), storefront.filter())?;
                }
            }
            Command::Review {
                name,
                rating,
                comment,
            } => match storefront.submit_review(name, rating, comment) {
                Ok(id) => {
                    info!(review = %id, "review submitted");
                    writeln!(out, "Thanks! Review {id} is awaiting moderation.")?;
                }
                Err(error) => writeln!(out, "{error}")?,
            },
            Command::Ask { question } => self.ask(question.join(" "), out)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn ask(&mut self, question: String, out: &mut impl io::Write) -> io::Result<()> {
        if question.trim().is_empty() {
            return Ok(());
        }

        let storefront = &mut self.ctx.storefront;

        let Some(product) = storefront.selected().cloned() else {
            return writeln!(out, "{OPEN_A_PRODUCT_FIRST}");
        };

        let Some(ticket) = storefront.begin_question() else {
            return writeln!(out, "{STILL_ANSWERING}");
        };

        let lang = storefront.language();
        let assistant = self.ctx.assistant.clone();
        let answers = self.answers_tx.clone();

        debug!(product = %product.id, ?ticket, "question sent to assistant");

        tokio::spawn(async move {
            let text = assistant.answer(&product, &question, lang).await;

            // The receiver only goes away with the session.
            _ = answers.send(Answer { ticket, text });
        });

        Ok(())
    }

    fn prompt(&self) -> String {
        let storefront = &self.ctx.storefront;

        match storefront.selected() {
            Some(product) => format!("mercatus [{}] {}> ", storefront.language(), product.id),
            None => format!("mercatus [{}]> ", storefront.language()),
        }
    }
}
