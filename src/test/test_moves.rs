#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = GameTestState::new(r#"
#@ #
"#);
        let outcome = game.assert_move(Right);

        assert_eq!(outcome, MoveOutcome::Moved { player: Vec2::new(0, 2), change: GameChangeType::PlayerMove });
        game.assert_matches(r#"
# @#
"#);
    }

    #[test]
    fn when_push_pushes() {
        let mut game = GameTestState::new(r#"
#@$ #
"#);
        let outcome = game.assert_move(Right);

        assert_eq!(outcome.player(), Vec2::new(0, 2));
        assert_eq!(outcome, MoveOutcome::Moved { player: Vec2::new(0, 2), change: GameChangeType::PlayerAndBoxMove });
        game.assert_matches(r#"
# @$#
"#);
    }

    #[test]
    fn when_enclosed_every_direction_is_blocked() {
        let mut game = GameTestState::new(r#"
###
#@#
###
"#);
        for direction in Direction::all() {
            let outcome = game.assert_blocked(direction);
            assert_eq!(outcome, MoveOutcome::Blocked { player: Vec2::new(1, 1), reason: BlockReason::Wall });
        }
        game.assert_matches(r#"
###
#@#
###
"#);
    }

    #[test]
    fn when_box_pushed_onto_last_target_level_is_won() {
        let mut game = GameTestState::new(r#"
#####
#   #
#@$.#
#   #
#####
"#);
        assert!(!game.game_state.is_won());

        game.assert_move(Right);

        assert_eq!(game.player(), Vec2::new(2, 2));
        assert_eq!(game.game_state.grid().get(&Vec2::new(2, 3)), Some(Cell::Box));
        assert_eq!(game.game_state.grid().count(Cell::Target), 0);
        assert!(game.game_state.is_won());
        game.assert_matches(r#"
#####
#   #
# @$#
#   #
#####
"#);
    }

    #[test]
    fn when_box_pushed_into_wall_nothing_moves() {
        let mut game = GameTestState::new(r#"
#####
#  .#
#@$##
#   #
#####
"#);
        let outcome = game.assert_blocked(Right);

        assert_eq!(outcome.reason(), Some(BlockReason::BoxObstructed));
        assert_eq!(game.player(), Vec2::new(2, 1));
        assert_eq!(game.game_state.grid().get(&Vec2::new(2, 2)), Some(Cell::Box));
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = GameTestState::new(r#"
#@$$ #
"#);
        game.assert_blocked(Right);

        game.assert_matches(r#"
#@$$ #
"#);
    }

    #[test]
    fn when_box_pushed_off_grid_move_is_blocked() {
        let mut game = GameTestState::new(r#"
@$
"#);
        let outcome = game.assert_blocked(Right);

        assert_eq!(outcome.reason(), Some(BlockReason::BoxObstructed));
    }

    #[test]
    fn when_player_steps_off_grid_error_is_raised() {
        let mut game = GameTestState::new(r#"
 @#
"#);
        let before = game.game_state.clone();

        let result = game.try_move(Up);

        assert_eq!(result, Err(RulesError::OutOfBounds { position: Vec2::new(-1, 1) }));
        assert_eq!(before, game.game_state);
    }

    #[test]
    fn when_player_walks_over_target_it_is_consumed() {
        let mut game = GameTestState::new(r#"
#@.  #
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# @  #
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
#  @ #
"#);
        assert!(game.game_state.is_won());
    }

    #[test]
    fn when_box_pushed_across_target_the_target_is_gone() {
        let mut game = GameTestState::new(r#"
#@$. .#
"#);
        game.assert_moves(&[Right, Right]);

        game.assert_matches(r#"
#  @$.#
"#);
        assert_eq!(game.game_state.grid().count(Cell::Target), 1);
        assert!(!game.game_state.is_won());
    }

    #[test]
    fn when_player_walks_loop_returns_to_same_state() {
        let level = r#"
######
#    #
#@$  #
# $  #
#    #
######
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_moves(&[Up, Right, Right, Right, Down, Down, Down, Left, Left, Left, Up, Up]);
        let new_state = game.game_state.clone();

        game.assert_matches(level);
        assert_eq!(original_state, new_state);
    }

    #[test]
    fn when_boxes_pushed_around_player_position_stays_in_sync() {
        let mut game = GameTestState::new(r#"
######
#    #
#@$  #
# $  #
#    #
######
"#);
        game.assert_moves(&[Right, Down, Left, Down, Right]);

        game.assert_matches(r#"
######
#    #
#  $ #
#    #
# @$ #
######
"#);
        assert_eq!(game.player(), Vec2::new(4, 2));
        assert_eq!(game.game_state.grid().count(Cell::Player), 1);
    }

    #[test]
    fn level_without_single_player_is_rejected() {
        let two_players = Grid::from_rows(vec![vec![Cell::Wall, Cell::Player, Cell::Player, Cell::Wall]]).unwrap();
        let no_player = Grid::from_rows(vec![vec![Cell::Wall, Cell::Empty, Cell::Wall]]).unwrap();

        assert_eq!(GameState::from_grid(two_players), Err(RulesError::PlayerCount { found: 2 }));
        assert_eq!(GameState::from_grid(no_player), Err(RulesError::PlayerCount { found: 0 }));
    }
}
