//! Collision detection and border reflection
//!
//! Enemies bounce off the inside of the border band; the player loses on
//! touching the band or overlapping any enemy.

use super::arena::Arena;
use super::entity::{Entity, Rect};
use super::state::LossCause;

/// Which wall an entity was reflected from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Walls hit during one reflection pass (at most one per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderContact {
    pub horizontal: Option<Wall>,
    pub vertical: Option<Wall>,
}

impl BorderContact {
    pub fn any(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }
}

/// Reflect an entity off the border and clamp it flush with the wall.
///
/// Axes are handled independently; the untouched axis keeps its velocity.
pub fn reflect_off_border(entity: &mut Entity, arena: &Arena) -> BorderContact {
    let mut contact = BorderContact::default();
    let border = arena.border();

    if entity.rect.min_x() < border {
        entity.reverse_vx();
        entity.rect.pos.x = border;
        contact.horizontal = Some(Wall::Left);
    } else if entity.rect.max_x() > arena.inner_right() {
        entity.reverse_vx();
        entity.rect.pos.x = arena.inner_right() - entity.rect.width();
        contact.horizontal = Some(Wall::Right);
    }

    if entity.rect.min_y() < border {
        entity.reverse_vy();
        entity.rect.pos.y = border;
        contact.vertical = Some(Wall::Top);
    } else if entity.rect.max_y() > arena.inner_bottom() {
        entity.reverse_vy();
        entity.rect.pos.y = arena.inner_bottom() - entity.rect.height();
        contact.vertical = Some(Wall::Bottom);
    }

    contact
}

/// True if the player has left the legal interior (edges may touch the band)
pub fn player_breaches_border(player: &Rect, arena: &Arena) -> bool {
    player.min_x() < arena.border()
        || player.max_x() > arena.inner_right()
        || player.min_y() < arena.border()
        || player.max_y() > arena.inner_bottom()
}

/// First enemy overlapping the player, if any
pub fn first_enemy_hit(player: &Rect, enemies: &[Entity]) -> Option<usize> {
    enemies.iter().position(|e| player.intersects(&e.rect))
}

/// Resolve one simulation step for every enemy.
///
/// Loss checks run against the world as it stood at the start of the step,
/// so a losing step leaves every enemy untouched. Otherwise each enemy moves
/// and is then reflected/clamped, which keeps all enemies inside the legal
/// interior after every step.
pub fn resolve_tick(player: &Rect, enemies: &mut [Entity], arena: &Arena) -> Option<LossCause> {
    if player_breaches_border(player, arena) {
        return Some(LossCause::Border);
    }
    if let Some(index) = first_enemy_hit(player, enemies) {
        return Some(LossCause::Enemy { index });
    }

    for enemy in enemies.iter_mut() {
        enemy.advance();
        let contact = reflect_off_border(enemy, arena);
        if contact.any() {
            log::trace!("enemy bounced: {contact:?}");
        }
    }
    None
}
