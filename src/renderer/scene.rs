//! Sprite list generation

use crate::assets::SpriteKind;
use crate::sim::collision::Aabb;
use crate::sim::state::GamePhase;

use super::Frame;

/// One sprite to blit, in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSprite {
    pub kind: SpriteKind,
    pub rect: Aabb,
}

/// Sprites for the play field, back to front
///
/// Nothing is drawn on the menu or after the explosion has finished. While
/// exploding, the explosion replaces the plane at the plane's position.
pub fn scene_sprites(frame: &Frame<'_>) -> Vec<DrawSprite> {
    if matches!(frame.phase, GamePhase::LevelSelect | GamePhase::GameOver) {
        return Vec::new();
    }

    let mut sprites: Vec<DrawSprite> = frame
        .bullets
        .iter()
        .map(|b| DrawSprite {
            kind: SpriteKind::Bullet,
            rect: b.bounds(),
        })
        .collect();

    let plane = if frame.plane.exploding {
        DrawSprite {
            kind: SpriteKind::Explosion,
            rect: Aabb::from_pos_size(frame.plane.pos, frame.sprites.explosion),
        }
    } else {
        DrawSprite {
            kind: SpriteKind::Plane,
            rect: frame.plane.bounds(),
        }
    };
    sprites.push(plane);
    sprites
}
