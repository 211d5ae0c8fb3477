use crate::domain::model::{Initiative, RATING_MAX, RATING_MIN};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use std::io::{BufRead, Write};

pub const NAME_PROMPT: &str = "Enter initiative name (or blank to finish): ";
pub const COST_LABEL: &str = "cost rating";
pub const VALUE_LABEL: &str = "business value rating";
pub const NOT_A_NUMBER_MESSAGE: &str = "Please enter a number between 1 and 5.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Rating must be between 1 and 5.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    NotANumber,
    OutOfRange(f64),
}

/// Parse one line of rating input.
pub fn parse_rating(text: &str) -> std::result::Result<f64, RatingError> {
    let rating: f64 = text.trim().parse().map_err(|_| RatingError::NotANumber)?;
    validate_range("rating", rating, RATING_MIN, RATING_MAX)
        .map_err(|_| RatingError::OutOfRange(rating))?;
    Ok(rating)
}

/// Interactive, line-oriented collection of initiatives.
///
/// Invalid ratings are reported on `output` and asked again; they never
/// leave this type. Only failures of the streams themselves are returned
/// as errors. End of input behaves like a blank name.
pub struct Collector<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect(&mut self) -> Result<Vec<Initiative>> {
        let mut initiatives = Vec::new();

        loop {
            let name = match self.prompt(NAME_PROMPT)? {
                Some(line) => line.trim().to_string(),
                None => break,
            };
            if name.is_empty() {
                break;
            }

            let Some(cost) = self.get_rating(COST_LABEL)? else {
                tracing::debug!("Input closed while rating '{}', discarding it", name);
                break;
            };
            let Some(value) = self.get_rating(VALUE_LABEL)? else {
                tracing::debug!("Input closed while rating '{}', discarding it", name);
                break;
            };

            let initiative = Initiative::new(name, cost, value);
            tracing::debug!(
                "Accepted '{}' (cost {}, value {})",
                initiative.name,
                initiative.cost,
                initiative.value
            );
            initiatives.push(initiative);
        }

        tracing::debug!("Collected {} initiatives", initiatives.len());
        Ok(initiatives)
    }

    /// Ask for one rating until a valid value arrives. `None` means the
    /// input ended before one did.
    pub fn get_rating(&mut self, label: &str) -> Result<Option<f64>> {
        let prompt = format!("Enter {} (1-5): ", label);

        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            match parse_rating(&line) {
                Ok(rating) => return Ok(Some(rating)),
                Err(RatingError::NotANumber) => {
                    tracing::debug!("Rejected non-numeric {}: {:?}", label, line.trim());
                    writeln!(self.output, "{}", NOT_A_NUMBER_MESSAGE)?;
                }
                Err(RatingError::OutOfRange(rating)) => {
                    tracing::debug!("Rejected out-of-range {}: {}", label, rating);
                    writeln!(self.output, "{}", OUT_OF_RANGE_MESSAGE)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
