//! Plain-text rendering of cards and parsing of human answers.
//!
//! This is the shell around the core: the CLI uses it to print the table
//! after every draw, to ask human players through [`Prompt`] and to read
//! the seating order from `KIND:NAME` arguments.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::card::Cell;
use crate::core::{LottoError, CARD_COLS};
use crate::player::PlayerView;
use crate::round::{DecisionSource, RoundBuilder};

/// Shown in place of a struck number.
pub const STRUCK: &str = "-";

const CELL_WIDTH: usize = 2;
const CARD_WIDTH: usize = CARD_COLS * (CELL_WIDTH + 1) - 1;
const SEPARATOR: &str = " | ";

fn render_cell(cell: Cell) -> String {
    match cell {
        Cell::Blank => " ".repeat(CELL_WIDTH),
        Cell::Number(n) => format!("{:>width$}", n, width = CELL_WIDTH),
        Cell::Marked(_) => format!("{:>width$}", STRUCK, width = CELL_WIDTH),
    }
}

/// One line per card row.
#[must_use]
pub fn render_card(view: &PlayerView<'_>) -> Vec<String> {
    view.card
        .rows()
        .map(|row| row.iter().map(|&c| render_cell(c)).collect::<Vec<_>>().join(" "))
        .collect()
}

/// Header shown above a card.
#[must_use]
pub fn card_header(view: &PlayerView<'_>) -> String {
    format!("{} (struck: {})", view.name, view.move_count)
}

/// All cards side by side, each under its header.
///
/// ```
/// use rust_lotto::card::Card;
/// use rust_lotto::console::render_cards;
/// use rust_lotto::core::GameRng;
/// use rust_lotto::player::Player;
///
/// let mut rng = GameRng::new(1);
/// let a = Player::human("Ann", Card::generate(&mut rng));
/// let b = Player::human("Bob", Card::generate(&mut rng));
/// let table = render_cards(&[a.view(), b.view()]);
/// assert_eq!(table.lines().count(), 5);
/// assert!(table.starts_with("Ann (struck: 0)"));
/// ```
#[must_use]
pub fn render_cards(views: &[PlayerView<'_>]) -> String {
    if views.is_empty() {
        return String::new();
    }

    let columns: Vec<(String, Vec<String>)> = views
        .iter()
        .map(|v| (card_header(v), render_card(v)))
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(header, _)| header.chars().count().max(CARD_WIDTH))
        .collect();

    let mut lines = Vec::new();
    lines.push(join_padded(columns.iter().map(|(h, _)| h.as_str()), &widths));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    let rows = columns.first().map_or(0, |(_, r)| r.len());
    for i in 0..rows {
        lines.push(join_padded(columns.iter().map(|(_, r)| r[i].as_str()), &widths));
    }

    lines.join("\n")
}

fn join_padded<'a>(parts: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    parts
        .zip(widths)
        .map(|(text, &width)| format!("{:<width$}", text, width = width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

/// Whether a typed answer means "strike it".
///
/// Accepts `y`, `yes`, `да` and `1` in any case; anything else skips.
#[must_use]
pub fn parse_strike_answer(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes" | "да" | "1")
}

/// Asks human players on a text stream.
///
/// The first I/O failure is kept and every later question is answered
/// "no" without touching the streams. Callers check [`Prompt::take_error`]
/// after each step. End of input counts as a failure.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// The failure that stopped the prompt, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, view: &PlayerView<'_>, number: u8) -> io::Result<bool> {
        writeln!(self.output, "{}", render_cards(std::slice::from_ref(view)))?;
        write!(self.output, "{}, strike {}? (y/n): ", view.name, number)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed while asking {} about {}", view.name, number),
            ));
        }
        Ok(parse_strike_answer(&line))
    }
}

impl<R: BufRead, W: Write> DecisionSource for Prompt<R, W> {
    fn decide(&mut self, player: &PlayerView<'_>, number: u8) -> bool {
        if self.error.is_some() {
            return false;
        }
        match self.ask(player, number) {
            Ok(answer) => answer,
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }
}

/// One seat at the table, parsed from `human:NAME`, `bot:NAME` or
/// `bot:NAME@RATE`.
///
/// ```
/// use rust_lotto::console::Seat;
///
/// let seat: Seat = "bot:R2@0.05".parse().unwrap();
/// assert_eq!(seat, Seat::Bot { name: "R2".into(), mistake_rate: Some(0.05) });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Seat {
    Human(String),
    Bot {
        name: String,
        mistake_rate: Option<f64>,
    },
}

impl Seat {
    /// Add this seat to the builder, after any seats already there.
    #[must_use]
    pub fn register(self, builder: RoundBuilder) -> RoundBuilder {
        match self {
            Seat::Human(name) => builder.human(name),
            Seat::Bot {
                name,
                mistake_rate: None,
            } => builder.automated(name),
            Seat::Bot {
                name,
                mistake_rate: Some(rate),
            } => builder.automated_with_rate(name, rate),
        }
    }
}

impl FromStr for Seat {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |why: &str| LottoError::InvalidConfig(format!("seat {:?}: {}", s, why));

        let (kind, rest) = s.split_once(':').ok_or_else(|| bad("expected KIND:NAME"))?;
        let seat = match kind.trim().to_lowercase().as_str() {
            "human" => Seat::Human(rest.trim().to_string()),
            "bot" => match rest.rsplit_once('@') {
                Some((name, rate)) => Seat::Bot {
                    name: name.trim().to_string(),
                    mistake_rate: Some(rate.trim().parse().map_err(|_| bad("rate is not a number"))?),
                },
                None => Seat::Bot {
                    name: rest.trim().to_string(),
                    mistake_rate: None,
                },
            },
            _ => return Err(bad("kind must be human or bot")),
        };

        let name = match &seat {
            Seat::Human(name) | Seat::Bot { name, .. } => name,
        };
        if name.is_empty() {
            return Err(bad("name is empty"));
        }
        Ok(seat)
    }
}
