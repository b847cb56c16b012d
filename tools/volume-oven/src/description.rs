use ard_texture3d::{
    formats::texture::{MagFilter, MinFilter, ShadowCompareMode, TextureKind, WrapAxis},
    textures::prelude::*,
};
use serde::{Deserialize, Serialize};

/// Hand written description of a volume texture.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeDescription {
    pub name: Option<String>,
    pub kind: TextureKind,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    pub anisotropic_filter: u32,
    pub shadow_compare: ShadowCompareMode,
    pub wrap: WrapDescription,
}

/// Wrap modes by name. `all` is applied first, then any per-axis overrides.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapDescription {
    pub all: Option<String>,
    pub s: Option<String>,
    pub t: Option<String>,
    pub r: Option<String>,
}

impl VolumeDescription {
    pub fn build(&self) -> Result<Texture3D, WrapError> {
        let mut texture = Texture3D::new(self.kind);

        let base = texture.base_mut();
        base.name.clone_from(&self.name);
        base.min_filter = self.min_filter;
        base.mag_filter = self.mag_filter;
        base.anisotropic_filter = self.anisotropic_filter;
        base.shadow_compare = self.shadow_compare;

        let wrap = texture.wrap_state_mut();
        if let Some(all) = &self.wrap.all {
            wrap.try_set_wrap_all(Some(all.parse()?))?;
        }

        let overrides = [
            (WrapAxis::S, &self.wrap.s),
            (WrapAxis::T, &self.wrap.t),
            (WrapAxis::R, &self.wrap.r),
        ];
        for (axis, mode) in overrides {
            if let Some(mode) = mode {
                wrap.set_wrap_raw(axis.name(), mode)?;
            }
        }

        Ok(texture)
    }
}
