pub mod texture;
pub mod wrap;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{texture::*, wrap::*};
    pub use ard_formats::texture::{
        MagFilter, MinFilter, ShadowCompareMode, TextureKind, WrapAxis, WrapMode,
    };
}
