//! The interactive menu loop.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::Limits;
use crate::demo;
use crate::error::{InputError, Result};
use crate::input::{bounded, parse_integer_list, parse_non_negative_int};
use crate::sort::SortAlgorithm;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sort(SortAlgorithm),
    Factorial,
    Hanoi,
    Exit,
}

impl MenuChoice {
    /// Maps the text typed at the menu prompt to a choice.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::Sort(SortAlgorithm::Bubble)),
            "2" => Some(MenuChoice::Sort(SortAlgorithm::Quick)),
            "3" => Some(MenuChoice::Factorial),
            "4" => Some(MenuChoice::Hanoi),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the session goes on after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session: reads choices and values from `input`, writes everything to `output`.
/// Invalid input is always answered with a message and a new prompt. The session ends on option
/// 5 or when `input` is exhausted.
pub struct Session<R, W> {
    input: R,
    output: W,
    limits: Limits,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, limits: Limits) -> Self {
        Session {
            input,
            output,
            limits,
        }
    }

    /// Runs the menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    debug!("input closed at the menu prompt");
                    return Ok(());
                }
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Sort(algorithm)) => self.sort_demo(algorithm)?,
                Some(MenuChoice::Factorial) => self.factorial_demo()?,
                Some(MenuChoice::Hanoi) => self.hanoi_demo()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                None => {
                    debug!("unknown menu option '{}'", line.trim());
                    writeln!(self.output, "Invalid option. Try again.")?;
                    writeln!(self.output)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Select an option:")?;
        writeln!(self.output, "1. Sort a list using Bubble Sort")?;
        writeln!(self.output, "2. Sort a list using Quick Sort")?;
        writeln!(self.output, "3. Compute the factorial of a number")?;
        writeln!(self.output, "4. Solve the Towers of Hanoi")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn sort_demo(&mut self, algorithm: SortAlgorithm) -> Result<Flow> {
        debug!("menu selected {}", algorithm);
        match self.read_integer_list()? {
            Some(data) => {
                demo::sort(&mut self.output, algorithm, data)?;
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Exit),
        }
    }

    fn factorial_demo(&mut self) -> Result<Flow> {
        let max = self.limits.max_factorial;
        match self.read_bounded_int("Enter a non-negative integer (e.g. 5): ", max)? {
            Some(n) => {
                demo::factorial_report(&mut self.output, n)?;
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Exit),
        }
    }

    fn hanoi_demo(&mut self) -> Result<Flow> {
        let max = self.limits.max_disks;
        match self.read_bounded_int("Enter the number of disks: ", max)? {
            Some(disks) => {
                demo::hanoi_report(&mut self.output, disks)?;
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Exit),
        }
    }

    /// Asks until the user enters a list with at least one integer. `None` if input ends first.
    fn read_integer_list(&mut self) -> Result<Option<Vec<i32>>> {
        loop {
            writeln!(self.output, "Enter a list of comma-separated numbers (e.g. 8,3,5,1,9):")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            let error = if line.trim().is_empty() {
                InputError::Empty
            } else {
                let data = parse_integer_list(&line);
                if !data.is_empty() {
                    return Ok(Some(data));
                }
                InputError::NoIntegers
            };

            debug!("rejected list input: {}", error);
            match error {
                InputError::Empty => writeln!(self.output, "Empty input. Try again.")?,
                _ => writeln!(
                    self.output,
                    "Could not parse the list. Enter only numbers separated by commas. Try again."
                )?,
            }
        }
    }

    /// Asks until the user enters an integer in `0..=max`. `None` if input ends first.
    fn read_bounded_int(&mut self, prompt: &str, max: u32) -> Result<Option<u32>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_non_negative_int(&line).and_then(|n| bounded(n, max)) {
                Ok(n) => return Ok(Some(n)),
                Err(InputError::TooLarge { value, max }) => writeln!(
                    self.output,
                    "Invalid input. {} is above the limit of {}. Try again.",
                    value, max
                )?,
                Err(error) => {
                    debug!("rejected integer input: {}", error);
                    writeln!(
                        self.output,
                        "Invalid input. Enter a non-negative integer. Try again."
                    )?
                }
            }
        }
    }

    /// Reads one line without its line terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
