//! Turn Rotation & Ranking
//!
//! Who rolls next, who is left standing, and the final standings.

use serde::{Serialize, Deserialize};

use crate::game::state::{GameState, PlayerIndex, PlayerState};

/// Find the next player still in the game after `after`.
///
/// Scans cyclically starting at `after + 1`, so `after` itself is the last
/// seat probed. Returns `None` only when every player has finished.
pub fn next_active_player(players: &[PlayerState], after: PlayerIndex) -> Option<PlayerIndex> {
    let count = players.len();
    if count == 0 {
        return None;
    }
    (1..=count)
        .map(|step| (after.get() + step) % count)
        .find(|&i| players[i].is_active())
        .map(PlayerIndex)
}

/// The single player who has not finished, if exactly one remains.
pub fn last_standing(players: &[PlayerState]) -> Option<PlayerIndex> {
    let mut active = players.iter().filter(|p| p.is_active());
    match (active.next(), active.next()) {
        (Some(player), None) => Some(player.index),
        _ => None,
    }
}

/// One line of the final standings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based place
    pub place: u32,
    /// Player in that place
    pub player: PlayerIndex,
    /// Reached the final square (false for the loser and anyone still playing)
    pub finished: bool,
}

/// Current standings.
///
/// Finishers come first in the order they reached the final square. Players
/// still on the board follow, furthest along first, sharing the next place
/// number. Once the game has ended that is just the loser, in last place.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut table: Vec<Standing> = state
        .finish_order
        .iter()
        .enumerate()
        .map(|(i, player)| Standing {
            place: i as u32 + 1,
            player: *player,
            finished: true,
        })
        .collect();

    let next_place = table.len() as u32 + 1;
    let mut remaining: Vec<&PlayerState> = state.players.iter().filter(|p| p.is_active()).collect();
    remaining.sort_by(|a, b| b.position.cmp(&a.position).then(a.index.cmp(&b.index)));

    table.extend(remaining.into_iter().map(|p| Standing {
        place: next_place,
        player: p.index,
        finished: false,
    }));
    table
}
