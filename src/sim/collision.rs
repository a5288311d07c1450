//! Collision detection between the player and a wall
//!
//! The player is treated as its axis-aligned bounding box. A wall only blocks
//! outside its gap, so a hit needs horizontal overlap plus the body poking
//! above the gap top or below the gap bottom.

use super::state::{Player, Wall};

/// Whether the player's box overlaps the wall's horizontal span
#[inline]
pub fn overlaps_horizontally(player: &Player, wall: &Wall) -> bool {
    player.pos.x + player.radius > wall.x && player.pos.x - player.radius < wall.right()
}

/// Whether the player touches either wall segment
pub fn player_wall_collision(player: &Player, wall: &Wall) -> bool {
    if !overlaps_horizontally(player, wall) {
        return false;
    }
    player.pos.y - player.radius < wall.top_height || player.pos.y + player.radius > wall.bottom_y
}
