use std::io::{self, IsTerminal, Stdout, Write};

use owo_colors::OwoColorize;
use tigerdragon_shared::{DiscardPiles, Winner};

/// Human-readable progress trace of a run.
///
/// Each line is flushed as soon as it is written so the trace interleaves
/// correctly with other processes sharing the terminal.
pub struct Printer<W> {
    out: W,
    color: bool,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn joining(&mut self, room_id: &str, player_id: &str) -> io::Result<()> {
        self.line(format!(
            "Rust client joining room={} player_id={}",
            room_id, player_id
        ))
    }

    pub fn game_over(&mut self, winner: Option<&Winner>) -> io::Result<()> {
        let winner = winner.map_or_else(|| "unknown".to_string(), Winner::to_string);
        let text = if self.color {
            format!("{} winner={}", "game_over".bold().green(), winner.bold())
        } else {
            format!("game_over winner={}", winner)
        };
        self.line(text)
    }

    pub fn server_error(&mut self, message: &str) -> io::Result<()> {
        let text = if self.color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        };
        self.line(text)
    }

    pub fn discards(&mut self, piles: &DiscardPiles) -> io::Result<()> {
        if piles.is_empty() {
            self.line("discards".to_string())
        } else {
            self.line(format!("discards {}", piles))
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: String) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn plain_lines() {
        let mut printer = Printer::new(Vec::new(), false);
        printer.joining("room1", "p1").unwrap();
        printer.server_error("bad move").unwrap();
        printer.game_over(Some(&Winner::Name("p2".into()))).unwrap();
        assert_eq!(
            output(printer),
            "Rust client joining room=room1 player_id=p1\nerror: bad move\ngame_over winner=p2\n"
        );
    }

    #[test]
    fn missing_winner_is_reported_as_unknown() {
        let mut printer = Printer::new(Vec::new(), false);
        printer.game_over(None).unwrap();
        assert_eq!(output(printer), "game_over winner=unknown\n");
    }

    #[test]
    fn colored_lines_keep_the_text() {
        let mut printer = Printer::new(Vec::new(), true);
        printer.server_error("not your turn").unwrap();
        printer.game_over(Some(&Winner::Seat(3))).unwrap();
        let text = output(printer);
        assert!(text.contains("not your turn"));
        assert!(text.contains("winner="));
        assert!(text.contains('3'));
        assert!(text.contains('\u{1b}'));
    }
}
