//! Terminal implementation of [`UserChoice`].

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use longbox_lib::{CancelFlag, ChoiceError, UserChoice};

use crate::spinner::Spinner;

pub(crate) struct TerminalChoice {
    cancel: CancelFlag,
    spinner: Spinner,
}

impl TerminalChoice {
    pub(crate) fn new(cancel: CancelFlag, spinner: Spinner) -> Self {
        Self { cancel, spinner }
    }
}

/// One line from stdin, trimmed. End of input or a pending interrupt is
/// [`ChoiceError::Interrupted`].
fn read_answer(label: &str, cancel: &CancelFlag) -> Result<String, ChoiceError> {
    if cancel.is_cancelled() {
        return Err(ChoiceError::Interrupted);
    }
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 || cancel.is_cancelled() {
        println!();
        return Err(ChoiceError::Interrupted);
    }
    Ok(line.trim().to_string())
}

impl UserChoice for TerminalChoice {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, ChoiceError> {
        if options.is_empty() {
            return Err(ChoiceError::OutOfRange {
                prompt: prompt.to_string(),
                index: 0,
            });
        }
        let cancel = &self.cancel;
        self.spinner.suspend(|| {
            println!("{}", prompt.if_supports_color(Stdout, |t| t.bold()));
            for (index, option) in options.iter().enumerate() {
                println!(
                    "  {} {option}",
                    format!("{}.", index + 1).if_supports_color(Stdout, |t| t.cyan()),
                );
            }
            loop {
                let answer = read_answer("Choice", cancel)?;
                match answer.parse::<usize>() {
                    Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                    _ => println!(
                        "{}",
                        format!("Enter a number between 1 and {}", options.len())
                            .if_supports_color(Stdout, |t| t.yellow()),
                    ),
                }
            }
        })
    }

    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, ChoiceError> {
        let cancel = &self.cancel;
        self.spinner.suspend(|| {
            let label = match default {
                Some(default) => format!(
                    "{} {}",
                    prompt.if_supports_color(Stdout, |t| t.bold()),
                    format!("[{default}]").if_supports_color(Stdout, |t| t.dimmed()),
                ),
                None => prompt.if_supports_color(Stdout, |t| t.bold()).to_string(),
            };
            let answer = read_answer(&label, cancel)?;
            match default {
                Some(default) if answer.is_empty() => Ok(default.to_string()),
                _ => Ok(answer),
            }
        })
    }

    fn pause(&mut self, message: &str) -> Result<(), ChoiceError> {
        let cancel = &self.cancel;
        self.spinner.suspend(|| {
            println!("{message}");
            read_answer("Press Enter to continue", cancel).map(|_| ())
        })
    }
}
