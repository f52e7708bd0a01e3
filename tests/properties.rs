#[cfg(test)]
mod tests {
    use conway::{Board, Cell, Error, Pattern, Schedule, Stepper};

    const N: i64 = 32;
    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn steppers() -> Vec<Stepper> {
        vec![
            Stepper::sequential(),
            Stepper::new(Schedule::default()).unwrap(),
            Stepper::new(Schedule::Tasks).unwrap(),
        ]
    }

    fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
        let mut result = vec![];
        for (r, row) in board.current().rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_alive() {
                    result.push((r, c));
                }
            }
        }
        result
    }

    #[test]
    fn dead_board_stays_dead() {
        for stepper in steppers() {
            for (w, h) in [(1, 1), (4, 7), (N, N)] {
                let mut board = Board::new(w, h).unwrap();
                stepper.step_and_swap(&mut board);
                assert_eq!(board.population(), 0, "w={} h={}", w, h);
            }
        }
    }

    #[test]
    fn isolated_cell_dies() {
        for stepper in steppers() {
            for wrap in [false, true] {
                let mut board = Board::new(9, 9).unwrap();
                board.set_boundary_policy(wrap);
                board.write_cell(4, 4, Cell::Alive).unwrap();
                stepper.step_and_swap(&mut board);
                assert_eq!(board.population(), 0, "wrap={}", wrap);

                board.write_cell(0, 0, Cell::Alive).unwrap();
                stepper.step_and_swap(&mut board);
                assert_eq!(board.population(), 0, "corner, wrap={}", wrap);
            }
        }
    }

    #[test]
    fn block_is_still_life() {
        for stepper in steppers() {
            for (size, offset) in [(4, 1), (6, 0), (6, 4)] {
                let mut board = Board::new(size, size).unwrap();
                board.load_pattern(&Pattern::block(), offset, offset).unwrap();
                let initial = board.current().clone();
                for _ in 0..10 {
                    stepper.step_and_swap(&mut board);
                    assert_eq!(board.current(), &initial);
                }
            }
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = Pattern::new(3, 3, &[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
        for stepper in steppers() {
            let mut board = Board::new(7, 7).unwrap();
            board.load_pattern(&horizontal, 2, 2).unwrap();
            assert_eq!(alive_cells(&board), vec![(3, 2), (3, 3), (3, 4)]);
            stepper.step_and_swap(&mut board);
            assert_eq!(alive_cells(&board), vec![(2, 3), (3, 3), (4, 3)]);
            stepper.step_and_swap(&mut board);
            assert_eq!(alive_cells(&board), vec![(3, 2), (3, 3), (3, 4)]);
        }
    }

    #[test]
    fn torus_corner_sees_opposite_corner() {
        let mut board = Board::new(3, 3).unwrap();
        board.write_cell(0, 0, Cell::Alive).unwrap();
        board.write_cell(2, 2, Cell::Alive).unwrap();

        board.set_boundary_policy(true);
        assert_eq!(conway::neighbor_count(board.current(), board.topology(), 0, 0), 1);
        assert_eq!(conway::neighbor_count(board.current(), board.topology(), 2, 2), 1);

        board.set_boundary_policy(false);
        assert_eq!(conway::neighbor_count(board.current(), board.topology(), 0, 0), 0);
        assert_eq!(conway::neighbor_count(board.current(), board.topology(), 2, 2), 0);
    }

    #[test]
    fn torus_wraps_births() {
        // Three live cells in the top row of a wide torus give birth in the
        // bottom row only when wrapping.
        for wrap in [false, true] {
            let mut board = Board::new(5, 6).unwrap();
            board.set_boundary_policy(wrap);
            for c in 1..4 {
                board.write_cell(0, c, Cell::Alive).unwrap();
            }
            Stepper::sequential().step_and_swap(&mut board);
            assert_eq!(board.read_cell(5, 2).unwrap().is_alive(), wrap);
            assert!(board.read_cell(1, 2).unwrap().is_alive());
        }
    }

    #[test]
    fn glider_travels_across_torus() {
        for stepper in steppers() {
            let mut board = Board::new(8, 8).unwrap();
            board.set_boundary_policy(true);
            board.load_pattern(&Pattern::glider(), 0, 0).unwrap();
            let start = alive_cells(&board);
            // One diagonal cell every 4 generations, 8 cells around the torus.
            stepper.run(&mut board, 4);
            let mut shifted = start
                .iter()
                .map(|&(r, c)| ((r + 1) % 8, (c + 1) % 8))
                .collect::<Vec<_>>();
            shifted.sort();
            assert_eq!(alive_cells(&board), shifted);
            stepper.run(&mut board, 28);
            assert_eq!(alive_cells(&board), start);
            assert_eq!(board.generation(), 32);
        }
    }

    #[test]
    fn swap_exposes_computed_generation() {
        let stepper = Stepper::sequential();
        let mut board = Board::new(N, N).unwrap();
        board.randomize(Some(SEED), FILL_RATE);
        let mut reference = Board::new(N, N).unwrap();
        reference.randomize(Some(SEED), FILL_RATE);

        stepper.step(&mut board);
        board.swap();
        let first = board.current().clone();
        for r in 0..N {
            for c in 0..N {
                let (row, col) = (r as usize, c as usize);
                let n = conway::neighbor_count(reference.current(), reference.topology(), row, col);
                let expected = reference.read_cell(r, c).unwrap().next_generation(n);
                assert_eq!(board.read_cell(r, c).unwrap(), expected, "r={} c={}", r, c);
            }
        }

        // The following step reads what the swap exposed.
        stepper.step_and_swap(&mut board);
        let mut from_first = Board::new(N, N).unwrap();
        for (r, row) in first.rows().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                from_first.write_cell(r as i64, c as i64, cell).unwrap();
            }
        }
        stepper.step_and_swap(&mut from_first);
        assert_eq!(board.current(), from_first.current());
    }

    #[test]
    fn out_of_bounds_load_leaves_board_unchanged() {
        let mut board = Board::new(10, 6).unwrap();
        board.randomize(Some(SEED), FILL_RATE);
        let before = board.current().clone();
        let gun = Pattern::gosper_glider_gun();
        let wide = Pattern::new(4, 1, &[[1u8, 1, 1, 1]]).unwrap();
        for (pattern, r, c) in [(&wide, 0, 7), (&wide, 6, 0), (&wide, -1, 0), (&gun, 0, 0)] {
            let result = board.load_pattern(pattern, r, c);
            assert!(matches!(result, Err(Error::OutOfBounds { .. })), "r={} c={}", r, c);
            assert_eq!(board.current(), &before);
        }
        board.load_pattern(&wide, 5, 6).unwrap();
        for c in 6..10 {
            assert!(board.read_cell(5, c).unwrap().is_alive());
        }
    }

    #[test]
    fn bulk_reads_outside_board_are_none() {
        let mut board = Board::new(3, 3).unwrap();
        board.write_cell(2, 1, Cell::Alive).unwrap();
        let grid = board.current();
        assert_eq!(grid.row(2), Some(&[Cell::Dead, Cell::Alive, Cell::Dead][..]));
        assert_eq!(grid.row(3), None);
        assert_eq!(grid.row(5), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn huge_boards_are_rejected() {
        for (w, h) in [(1 << 32, 1 << 32), (i64::MAX, i64::MAX)] {
            let result = Board::new(w, h);
            assert!(matches!(result, Err(Error::InvalidDimension { .. })), "w={} h={}", w, h);
        }
    }

    #[test]
    fn gun_fills_default_board() {
        let mut board = Board::new(80, 50).unwrap();
        board.set_boundary_policy(true);
        board.load_pattern(&Pattern::gosper_glider_gun(), 10, 10).unwrap();
        Stepper::default().run(&mut board, 30);
        // The gun has period 30 and has emitted one glider by then.
        assert_eq!(board.population(), 36 + 5);
    }
}
