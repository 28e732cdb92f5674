//! Simple interactive CLI mode
//!
//! The operator holds a secret word in their head; the solver guesses it.
//! Each turn the solver proposes a letter and the operator answers with the
//! positions where it occurs (empty answer = miss).

use crate::core::{Board, LetterSet};
use crate::solver::{Solver, Strategy};
use std::io::{self, Write};

/// Run the interactive solver loop
///
/// # Errors
///
/// Returns an error if reading user input fails or the operator's answers
/// contradict every dictionary word.
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Hangman Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a word; I'll guess it letter by letter.");
    println!("After each guess, answer with the 1-based positions where the");
    println!("letter occurs, separated by spaces, or press Enter for a miss.");
    println!("Commands: 'quit' to exit\n");

    let length: usize = loop {
        let answer = get_user_input("How many letters is your word?")?;
        if answer == "quit" {
            return Ok(());
        }
        match answer.parse() {
            Ok(n) if n > 0 => break n,
            _ => println!("Enter a positive number."),
        }
    };

    let mut board = Board::hidden(length);
    let mut used = LetterSet::new();
    let mut wrong = 0_usize;
    let mut turn = 1_usize;

    loop {
        let candidates_count = solver.count_candidates(&board, &used);
        if candidates_count == 0 {
            println!("\n❌ No dictionary word fits those answers.");
            println!("Either an answer was off, or I don't know your word.");
            return Err("no candidates remain".to_string());
        }

        let guess = solver
            .next_guess(&board, &used)
            .map_err(|e| e.to_string())?;

        println!("\nTurn {turn}  board: {board}  ({candidates_count} candidates, {wrong} misses)");

        if let Some(word) = &guess.word {
            let answer = get_user_input(&format!("Is your word '{word}'? (y/n)"))?;
            if answer == "quit" {
                return Ok(());
            }
            if answer.starts_with('y') {
                println!("\n🎉 Got it: {word}");
                return Ok(());
            }
            println!("\n❌ '{word}' was the only word left that fits.");
            return Err("no candidates remain".to_string());
        }

        let letter = guess.letter;
        // Re-prompt until the answer for this letter parses; nothing is
        // recorded for an unparsable answer
        loop {
            let answer = get_user_input(&format!(
                "I guess '{}'. Positions? (Enter for none)",
                letter as char
            ))?;
            if answer == "quit" {
                return Ok(());
            }

            match apply_answer(&board, &mut used, letter, &answer) {
                Some(next) => {
                    if answer.is_empty() {
                        wrong += 1;
                    }
                    board = next;
                    break;
                }
                None => {
                    println!("Positions must be numbers between 1 and {length}; answer again.");
                }
            }
        }

        if board.is_complete() {
            println!("\n🎉 Got it: {board}");
            return Ok(());
        }

        turn += 1;
    }
}

/// Apply one operator answer for `letter`
///
/// An empty answer is a miss; otherwise the answer must parse as 1-based
/// positions. The letter is recorded in `used` only once the answer is
/// accepted — an unparsable answer returns `None` and leaves both the board
/// and `used` untouched, so the turn can be retried.
fn apply_answer(board: &Board, used: &mut LetterSet, letter: u8, answer: &str) -> Option<Board> {
    if answer.is_empty() {
        used.push(letter);
        return Some(board.clone());
    }

    let positions = parse_positions(answer, board.len())?;
    used.push(letter);

    let mut next = board.clone();
    for i in positions {
        next = reveal_at(&next, i, letter);
    }
    Some(next)
}

/// Parse 1-based positions, rejecting anything out of range
fn parse_positions(answer: &str, length: usize) -> Option<Vec<usize>> {
    answer
        .split_whitespace()
        .map(|part| match part.parse::<usize>() {
            Ok(n) if (1..=length).contains(&n) => Some(n - 1),
            _ => None,
        })
        .collect()
}

/// Rebuild the board with one more cell revealed
fn reveal_at(board: &Board, position: usize, letter: u8) -> Board {
    let text: String = board
        .cells()
        .enumerate()
        .map(|(i, cell)| {
            if i == position {
                letter as char
            } else {
                cell.map_or('_', |ch| ch as char)
            }
        })
        .collect();

    // The rebuilt string only contains letters and placeholders
    Board::parse(&text).expect("board round-trip")
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}
