use crate::domain::PlayerRating;

/// Goalkeepers first, everyone else after, original order kept within each
/// group. `sort_by_key` is stable, which is what preserves that order.
pub fn order(mut players: Vec<PlayerRating>) -> Vec<PlayerRating> {
    players.sort_by_key(|player| !player.is_goalkeeper());
    players
}
