use chumsky::error::Simple;
use chumsky::primitive::{choice, just, none_of};
use chumsky::text::{self, TextParser};
use chumsky::Parser;
use solver::Player;

use crate::{format_solution, parity_game_to_game, parse_parity_game};

fn parse_parity_sol(source: &str) -> Result<Vec<(usize, Player)>, Vec<Simple<char>>> {
    let paritysol = just("paritysol").padded();
    let number = text::int(10).map(|n: String| n.parse::<usize>().unwrap()).padded();
    let semi = just(';');
    let newline = text::newline();

    let header = paritysol.then(number).then(semi).then(newline);

    let player = choice((just('0').to(Player::P0), just('1').to(Player::P1)));
    let succ = none_of(";").repeated();
    let row = number.then(player).then_ignore(succ);

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let sol = header.ignore_then(rows);

    sol.parse(source)
}

fn run_test(input: &str, sol: &str) {
    let pg = parse_parity_game(input).unwrap();
    let (game, mapping) = parity_game_to_game(&pg).unwrap();
    let solution = solver::solve(&game).unwrap();

    let sol = parse_parity_sol(sol).unwrap();
    assert_eq!(sol.len(), game.node_count());

    for (id, winner) in sol {
        let node = mapping.node(id).unwrap();
        assert_eq!(solution.winner(node), winner, "wrong winner for node {id}");
    }
}

macro_rules! declare_test {
    ($($name:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let input = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name)));
                let sol = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name), ".sol"));
                run_test(input, sol)
            }
        )*
    };
}

#[test]
fn all() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/");
    for e in std::fs::read_dir(dir).unwrap() {
        let e = e.unwrap();

        let name = e.file_name().into_string().unwrap();
        let path = e.path();
        if name == ".gitignore" || path.extension() == Some("sol".as_ref()) {
            continue;
        }

        let input = std::fs::read_to_string(&path).unwrap();
        let sol = std::fs::read_to_string(path.with_extension("sol")).unwrap();

        if let Err(e) = std::panic::catch_unwind(|| run_test(&input, &sol)) {
            eprintln!("Test {name} failed");
            std::panic::resume_unwind(e);
        }
    }
}

declare_test! {
    ladder,
    sparse,
    mixed,
}

#[test]
fn parses_rows() {
    let pg = parse_parity_game("parity 1;\n0 3 1 0,1 \"a\";\n1 0 0 1;\n").unwrap();

    assert_eq!(pg.nodes.len(), 2);
    assert_eq!(pg.nodes[0].id, 0);
    assert_eq!(pg.nodes[0].priority, 3);
    assert_eq!(pg.nodes[0].player, Player::P1);
    assert_eq!(pg.nodes[0].successors, [0, 1]);
    assert_eq!(pg.nodes[1].player, Player::P0);
    assert_eq!(pg.nodes[1].successors, [1]);
}

#[test]
fn rejects_garbage() {
    assert!(parse_parity_game("parity 1;\n0 3 2 0;\n").is_err());
    assert!(parse_parity_game("game 1;\n0 3 1 0;\n").is_err());
}

#[test]
fn undeclared_successor() {
    let pg = parse_parity_game("parity 1;\n0 3 1 0,4;\n").unwrap();
    let err = parity_game_to_game(&pg).unwrap_err();
    assert!(err.to_string().contains("undeclared successor 4"), "{err}");
}

#[test]
fn duplicate_node() {
    let pg = parse_parity_game("parity 1;\n0 3 1 0;\n0 2 0 0;\n").unwrap();
    assert!(parity_game_to_game(&pg).is_err());
}

#[test]
fn node_without_successors() {
    let pg = parse_parity_game("parity 1;\n0 3 1 1;\n1 2 0;\n").unwrap();
    let (game, _) = parity_game_to_game(&pg).unwrap();
    assert!(solver::solve(&game).is_err());
}

#[test]
fn formats_solution() {
    let input = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/sparse"));
    let pg = parse_parity_game(input).unwrap();
    let (game, mapping) = parity_game_to_game(&pg).unwrap();
    let solution = solver::solve(&game).unwrap();

    assert_eq!(format_solution(&mapping, &solution), "paritysol 9;\n3 1;\n7 1;\n9 1;\n");
}
