use crate::core::{BlockReason, Cell, Direction, GameChangeType, GameState, MoveOutcome, RulesError};

/// Resolve one step of player movement, pushing at most one box.
///
/// A blocked move returns `Ok(MoveOutcome::Blocked { .. })` and leaves the
/// grid untouched. Stepping off the grid is a precondition violation and is
/// reported as an error instead.
pub fn step(game: &mut GameState, direction: Direction) -> Result<MoveOutcome, RulesError> {
    let dir = direction.delta();
    let player = game.player;
    let next = player + dir;

    let Some(dest) = game.grid.get(&next) else {
        return Err(RulesError::OutOfBounds { position: next });
    };

    let blocked = |reason: BlockReason| -> Result<MoveOutcome, RulesError> {
        tracing::trace!(?direction, ?reason, "move blocked");
        Ok(MoveOutcome::Blocked { player, reason })
    };

    let pushing = match dest {
        Cell::Wall => return blocked(BlockReason::Wall),
        Cell::Box => true,
        Cell::Empty | Cell::Target => false,
        // only reachable if the grid holds a second player
        Cell::Player => return blocked(BlockReason::BoxObstructed),
    };

    if pushing {
        let beyond_pos = next + dir;
        let beyond = game.grid.get(&beyond_pos);
        if !beyond.is_some_and(|c| c.accepts_box()) {
            return blocked(BlockReason::BoxObstructed);
        }
        // a target under the box is not remembered
        game.grid[&beyond_pos] = Cell::Box;
    }

    game.grid[&player] = Cell::Empty;
    game.grid[&next] = Cell::Player;
    game.player = next;

    let change = if pushing {
        GameChangeType::PlayerAndBoxMove
    } else {
        GameChangeType::PlayerMove
    };
    tracing::trace!(?direction, ?change, i = next.i, j = next.j, "move resolved");

    Ok(MoveOutcome::Moved {
        player: next,
        change,
    })
}
