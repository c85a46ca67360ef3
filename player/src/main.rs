use std::num::NonZero;

use saccharin::{Board, Rules};

fn main() {
    env_logger::init();

    let mut rules = Rules::new(Board::new(NonZero::new(9).unwrap()));
    rules.prepare_new_game();
    println!("{}", rules.board());

    for turn in 1..=20 {
        let Some(suggested) = rules.random_valid_move() else {
            println!("no legal moves left after turn {}", turn - 1);
            break;
        };

        let neighbor = rules
            .board()
            .token_in_direction(suggested.token, suggested.direction)
            .unwrap();
        rules.board_mut().swap_tokens(suggested.token, neighbor);

        // drain cascades until the board settles
        loop {
            let groups = rules.find_crushes(None);
            if groups.is_empty() {
                break;
            }
            rules.remove_crushes(&groups);
            rules.collapse_and_refill();
        }

        println!(
            "turn {turn}: swapped the {:?} token at ({}, {}) {:?}, score {}",
            suggested.token.color,
            suggested.token.location.row(),
            suggested.token.location.col(),
            suggested.direction,
            rules.board().score(),
        );

        // nothing here animates, so the event batch is dropped
        rules.board_mut().take_events();
    }

    println!("{}", rules.board());
    println!("final score: {}", rules.board().score());
}
