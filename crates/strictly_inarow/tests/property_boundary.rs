//! Property tests for run boundaries.
//! Random games on every valid grid: no run may cross a grid edge, and the
//! incremental evaluator must agree with an independent 2-D scan.

use proptest::prelude::*;
use strictly_inarow::rules::{run_cells, run_length};
use strictly_inarow::{Axis, GameConfig, MoveLedger, Outcome, Player, evaluate};

/// Row/column of a flattened index, computed independently of the crate.
fn coords(index: usize, side: usize) -> (isize, isize) {
    ((index % side) as isize, (index / side) as isize)
}

fn owner_at(ledger: &MoveLedger, row: isize, column: isize) -> Option<Player> {
    let side = ledger.side() as isize;
    if row < 0 || column < 0 || row >= side || column >= side {
        return None;
    }
    ledger.owner_of((column * side + row) as usize)
}

/// Checks every K-long window through the last move on a 2-D grid.
fn brute_force_win(ledger: &MoveLedger, k: usize) -> bool {
    let (Some(last), Some(mover)) = (ledger.last_move(), ledger.last_mover()) else {
        return false;
    };
    let (row, column) = coords(last, ledger.side());
    let k = k as isize;
    [(1, 0), (0, 1), (1, 1), (-1, 1)].into_iter().any(|(dr, dc)| {
        (0..k).any(|offset| {
            let (start_row, start_column) = (row - offset * dr, column - offset * dc);
            (0..k).all(|i| owner_at(ledger, start_row + i * dr, start_column + i * dc) == Some(mover))
        })
    })
}

/// Grid side, run length, and a random playing order over every cell.
fn game_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (3usize..=25).prop_flat_map(|side| {
        let cells: Vec<usize> = (0..side * side).collect();
        (Just(side), 3..=side, Just(cells).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // Every run through the last move is made of physically adjacent cells
    // owned by the mover, stepping by exactly the axis delta.
    #[test]
    fn test_runs_stay_on_grid((side, k, order) in game_strategy()) {
        let config = GameConfig::new(side, k).unwrap();
        let mut ledger = MoveLedger::new(side);

        for cell in order {
            ledger.append(cell).unwrap();
            let mover = ledger.last_mover().unwrap();

            for axis in Axis::ALL {
                let cells = run_cells(&ledger, axis);
                prop_assert_eq!(cells.len(), run_length(&ledger, axis));
                prop_assert!(cells.contains(&cell));

                let (dr, dc) = axis.delta();
                for pair in cells.windows(2) {
                    let (r0, c0) = coords(pair[0], side);
                    let (r1, c1) = coords(pair[1], side);
                    prop_assert_eq!((r1 - r0, c1 - c0), (dr, dc), "{} run {:?}", axis, cells);
                }
                for &c in &cells {
                    prop_assert_eq!(ledger.owner_of(c), Some(mover));
                }
            }

            if evaluate(&ledger, &config) != Outcome::Ongoing {
                break;
            }
        }
    }

    // The incremental evaluator finds exactly the wins a full 2-D scan
    // finds, and declares a draw only on a full grid.
    #[test]
    fn test_evaluate_matches_brute_force((side, k, order) in game_strategy()) {
        let config = GameConfig::new(side, k).unwrap();
        let mut ledger = MoveLedger::new(side);

        for cell in order {
            ledger.append(cell).unwrap();
            let outcome = evaluate(&ledger, &config);
            let expected = if brute_force_win(&ledger, k) {
                Outcome::Win(ledger.last_mover().unwrap())
            } else if ledger.is_full() {
                Outcome::Draw
            } else {
                Outcome::Ongoing
            };
            prop_assert_eq!(outcome, expected, "ledger {:?}", ledger.moves());
            prop_assert_eq!(evaluate(&ledger, &config), outcome);

            if outcome != Outcome::Ongoing {
                break;
            }
        }
    }
}
