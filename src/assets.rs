//! Asset collaborator
//!
//! The simulation only needs sprite bounding sizes. Image decoding lives
//! outside this crate; a missing or broken sprite is replaced by a generated
//! placeholder of a known size.

use glam::IVec2;

use crate::error::{DodgeError, Result};
use crate::sim::state::SpriteSizes;

/// Sprites the core cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Plane,
    Bullet,
    Explosion,
}

impl SpriteKind {
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Plane => "plane",
            SpriteKind::Bullet => "bullet",
            SpriteKind::Explosion => "explosion",
        }
    }

    /// Size of the generated stand-in
    pub fn placeholder_size(&self) -> IVec2 {
        match self {
            SpriteKind::Plane => IVec2::new(100, 50),
            SpriteKind::Bullet => IVec2::new(30, 15),
            SpriteKind::Explosion => IVec2::new(100, 100),
        }
    }
}

/// Something that can report the size of a loaded sprite
pub trait AssetSource {
    fn sprite_size(&self, kind: SpriteKind) -> Result<IVec2>;
}

/// Sprites at the sizes they are scaled to after loading
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets {
    pub sizes: SpriteSizes,
}

impl AssetSource for BundledAssets {
    fn sprite_size(&self, kind: SpriteKind) -> Result<IVec2> {
        Ok(match kind {
            SpriteKind::Plane => self.sizes.plane,
            SpriteKind::Bullet => self.sizes.bullet,
            SpriteKind::Explosion => self.sizes.explosion,
        })
    }
}

/// A source with nothing in it (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn sprite_size(&self, kind: SpriteKind) -> Result<IVec2> {
        Err(DodgeError::Asset {
            name: kind.name().to_string(),
            reason: "no asset source".to_string(),
        })
    }
}

/// Resolve every sprite size, substituting placeholders for failures
pub fn resolve_sprites(source: &dyn AssetSource) -> SpriteSizes {
    let size_of = |kind: SpriteKind| match source.sprite_size(kind) {
        Ok(size) if size.x > 0 && size.y > 0 => size,
        Ok(size) => {
            log::warn!(
                "Sprite '{}' has empty size {}x{}, using placeholder",
                kind.name(),
                size.x,
                size.y
            );
            kind.placeholder_size()
        }
        Err(e) => {
            log::warn!("{}, using placeholder", e);
            kind.placeholder_size()
        }
    };

    SpriteSizes {
        plane: size_of(SpriteKind::Plane),
        bullet: size_of(SpriteKind::Bullet),
        explosion: size_of(SpriteKind::Explosion),
    }
}
