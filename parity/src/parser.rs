use chumsky::error::Simple;
use chumsky::primitive::{choice, end, just, none_of};
use chumsky::text::TextParser;
use chumsky::{text, Parser};
use solver::Player;

use crate::{Node, ParityGame};

/// Parses a game in the PGSolver format:
///
/// ```text
/// parity <max id>;
/// <id> <priority> <owner> <successor>,<successor>,... "<name>";
/// ```
pub fn parse_parity_game(source: &str) -> Result<ParityGame, Vec<Simple<char>>> {
    let parity = just("parity").padded();
    let number = text::int(10)
        .try_map(|n: String, span| {
            n.parse::<usize>().map_err(|e| Simple::custom(span, format!("invalid number {n}: {e}")))
        })
        .padded();
    let comma = just(',').padded();
    let semi = just(';');
    let newline = text::newline();

    let header = parity.then(number).then(semi).then(newline);

    let player = choice((just('0').to(Player::P0), just('1').to(Player::P1)));
    let successors = number.separated_by(comma);
    // Node names are not needed for solving.
    let name = none_of(";").repeated();
    let row = number.then(number).then(player).then(successors).then_ignore(name);
    let row = row.map(|(((id, priority), player), successors)| Node {
        id,
        priority,
        player,
        successors,
    });

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let game = header
        .ignore_then(rows)
        .then_ignore(text::whitespace())
        .then_ignore(end())
        .map(|nodes| ParityGame { nodes });

    game.parse(source)
}
