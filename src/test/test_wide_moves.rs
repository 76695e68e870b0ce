mod test {
    use Direction::*;

    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn horizontal_push_moves_wide_boxes_in_line() {
        let level = r#"
#@[][].#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        game.assert_blocked(Right);

        game.assert_matches(
            r#"
#.@[][]#
"#,
        );
    }

    #[test]
    fn left_push_moves_wide_boxes_in_line() {
        let level = r#"
#.[][]@#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Left);

        game.assert_matches(
            r#"
#[][]@.#
"#,
        );
    }

    #[test]
    fn up_push_moves_both_halves_before_robot() {
        let level = r#"
.....
..[].
..@..
"#;
        let game = GameTestState::new(level);

        let plan = game
            .warehouse
            .plan(Up, game.warehouse.robot())
            .unwrap()
            .expect("push should succeed");

        let moves: Vec<PlannedMove> = plan.iter().copied().collect();
        assert_eq!(
            moves,
            vec![
                PlannedMove {
                    from: Position::new(2, 1),
                    to: Position::new(2, 0),
                },
                PlannedMove {
                    from: Position::new(3, 1),
                    to: Position::new(3, 0),
                },
                PlannedMove {
                    from: Position::new(2, 2),
                    to: Position::new(2, 1),
                },
            ]
        );
    }

    #[test]
    fn up_push_from_under_right_half_moves_whole_box() {
        let level = r#"
#####
#...#
#[].#
#.@.#
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Up);

        game.assert_matches(
            r#"
#####
#[].#
#.@.#
#...#
#####
"#,
        );
    }

    #[test]
    fn vertical_push_blocked_under_either_half() {
        let level = r#"
######
#.#..#
#.[].#
#.@..#
######
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Up);
        game.assert_moves(&[Right]);
        game.assert_blocked(Up);

        game.assert_matches(
            r#"
######
#.#..#
#.[].#
#..@.#
######
"#,
        );
    }

    #[test]
    fn shared_blocker_is_planned_once() {
        let level = r#"
##########
#........#
#...[]...#
#..[][]..#
#...[]...#
#....@...#
##########
"#;
        let mut game = GameTestState::new(level);

        let plan = game
            .warehouse
            .plan(Up, game.warehouse.robot())
            .unwrap()
            .expect("push should succeed");

        // four wide boxes, two halves each, plus the robot
        assert_eq!(plan.len(), 9);
        let blocker_moves = plan
            .iter()
            .filter(|m| m.from == Position::new(4, 2) || m.from == Position::new(5, 2))
            .count();
        assert_eq!(blocker_moves, 2);
        assert!(plan.contains(Position::new(4, 2), Position::new(4, 1)));
        assert!(plan.contains(Position::new(5, 2), Position::new(5, 1)));

        game.warehouse.apply(&plan).unwrap();
        game.assert_matches(
            r#"
##########
#...[]...#
#..[][]..#
#...[]...#
#....@...#
#........#
##########
"#,
        );
    }

    fn stacked_column(boxes: usize) -> String {
        let mut level = String::from("#####\n#...#\n");
        for _ in 0..boxes {
            level.push_str("#[].#\n");
        }
        level.push_str("#@..#\n#####\n");
        level
    }

    #[test]
    fn tall_stack_of_wide_boxes_plans_each_half_once() {
        let boxes = 40;
        let mut game = GameTestState::new(&stacked_column(boxes));

        let plan = game
            .warehouse
            .plan(Up, game.warehouse.robot())
            .unwrap()
            .expect("push should succeed");

        assert_eq!(plan.len(), 2 * boxes + 1);
        game.warehouse.apply(&plan).unwrap();
        assert_eq!(game.warehouse.robot(), Position::new(1, boxes as i32 + 1));
        assert_eq!(game.warehouse.box_count(), boxes);
        game.assert_blocked(Up);
    }

    #[test]
    fn wide_box_pushes_single_box_above_one_half() {
        let level = r#"
#####
#...#
#.O.#
#.[]#
#.@.#
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Up);

        game.assert_matches(
            r#"
#####
#.O.#
#.[]#
#.@.#
#...#
#####
"#,
        );
    }

    #[test]
    fn staggered_boxes_blocked_by_far_wall() {
        let level = r#"
#######
#..#..#
#..[].#
#.[]..#
#..@..#
#######
"#;
        let mut game = GameTestState::new(level);

        game.assert_blocked(Up);
        game.assert_matches(level);
    }

    #[test]
    fn wide_example_reaches_known_state() {
        let puzzle = r#"
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
"#;
        let mut game = GameTestState::from_puzzle(puzzle, BoxWidth::Double);
        let moves = game.moves.clone();

        let stats = simulate(&mut game.warehouse, &moves).unwrap();

        game.assert_matches(
            r#"
##############
##...[].##..##
##...@.[]...##
##....[]....##
##..........##
##..........##
##############
"#,
        );
        assert_eq!(
            stats,
            SimulationStats {
                moves_applied: 10,
                moves_blocked: 1,
                relocations: 22,
            }
        );
        assert_eq!(game.warehouse.gps_sum(), 618);
    }
}
