use ard_formats::texture::{MagFilter, MinFilter, ShadowCompareMode, TextureKind, WrapAxis, WrapMode};
use ard_save_load::{
    format::SaveFormat,
    record::{RecordReader, RecordWriter},
    SaveLoad,
};

use crate::wrap::{WrapError, WrapModeState};

/// Sampling state shared by every kind of texture.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextureBase {
    pub name: Option<String>,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    /// Anisotropic filtering level. `0` disables it.
    pub anisotropic_filter: u32,
    pub shadow_compare: ShadowCompareMode,
}

/// A texture addressed with three coordinates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Texture3D {
    base: TextureBase,
    kind: TextureKind,
    wrap: WrapModeState,
}

impl TextureBase {
    /// Copies the shared sampling state onto `target`.
    pub fn copy_into(&self, target: &mut TextureBase) {
        target.name.clone_from(&self.name);
        target.min_filter = self.min_filter;
        target.mag_filter = self.mag_filter;
        target.anisotropic_filter = self.anisotropic_filter;
        target.shadow_compare = self.shadow_compare;
    }

    pub fn save_fields<F: SaveFormat>(
        &self,
        writer: &mut RecordWriter<F>,
    ) -> Result<(), F::SerializeError> {
        writer.write("name", &self.name, &None)?;
        writer.write("minFilter", &self.min_filter, &MinFilter::default())?;
        writer.write("magFilter", &self.mag_filter, &MagFilter::default())?;
        writer.write("anisotropicFilter", &self.anisotropic_filter, &0)?;
        writer.write(
            "shadowCompareMode",
            &self.shadow_compare,
            &ShadowCompareMode::default(),
        )
    }

    pub fn load_fields<F: SaveFormat>(
        &mut self,
        reader: &RecordReader<F>,
    ) -> Result<(), F::DeserializeError> {
        self.name = reader.read("name", None)?;
        self.min_filter = reader.read("minFilter", MinFilter::default())?;
        self.mag_filter = reader.read("magFilter", MagFilter::default())?;
        self.anisotropic_filter = reader.read("anisotropicFilter", 0)?;
        self.shadow_compare = reader.read("shadowCompareMode", ShadowCompareMode::default())?;
        Ok(())
    }
}

impl Texture3D {
    pub fn new(kind: TextureKind) -> Self {
        Self {
            base: TextureBase::default(),
            kind,
            wrap: WrapModeState::default(),
        }
    }

    pub fn with_name(kind: TextureKind, name: impl Into<String>) -> Self {
        let mut texture = Self::new(kind);
        texture.base.name = Some(name.into());
        texture
    }

    #[inline(always)]
    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    #[inline(always)]
    pub fn name(&self) -> Option<&str> {
        self.base.name.as_deref()
    }

    #[inline(always)]
    pub fn base(&self) -> &TextureBase {
        &self.base
    }

    #[inline(always)]
    pub fn base_mut(&mut self) -> &mut TextureBase {
        &mut self.base
    }

    #[inline(always)]
    pub fn wrap_state(&self) -> &WrapModeState {
        &self.wrap
    }

    #[inline(always)]
    pub fn wrap_state_mut(&mut self) -> &mut WrapModeState {
        &mut self.wrap
    }

    #[inline(always)]
    pub fn wrap(&self, axis: WrapAxis) -> WrapMode {
        self.wrap.wrap(axis)
    }

    #[inline(always)]
    pub fn try_wrap(&self, axis: Option<WrapAxis>) -> Result<WrapMode, WrapError> {
        self.wrap.try_wrap(axis)
    }

    #[inline(always)]
    pub fn set_wrap(&mut self, axis: WrapAxis, mode: WrapMode) {
        self.wrap.set_wrap(axis, mode);
    }

    #[inline(always)]
    pub fn try_set_wrap(
        &mut self,
        axis: Option<WrapAxis>,
        mode: Option<WrapMode>,
    ) -> Result<(), WrapError> {
        self.wrap.try_set_wrap(axis, mode)
    }

    #[inline(always)]
    pub fn set_wrap_all(&mut self, mode: WrapMode) {
        self.wrap.set_wrap_all(mode);
    }

    #[inline(always)]
    pub fn try_set_wrap_all(&mut self, mode: Option<WrapMode>) -> Result<(), WrapError> {
        self.wrap.try_set_wrap_all(mode)
    }

    /// Makes an independent copy of this texture's sampling state.
    pub fn simple_clone(&self) -> Texture3D {
        self.simple_clone_into(Texture3D::new(self.kind))
    }

    /// Copies this texture's sampling state onto `target` and returns it. The target keeps its
    /// own kind.
    pub fn simple_clone_into(&self, mut target: Texture3D) -> Texture3D {
        // Base copy runs last.
        self.wrap.copy_into(&mut target.wrap);
        self.base.copy_into(&mut target.base);
        target
    }
}

impl SaveLoad for Texture3D {
    const TYPE_NAME: &'static str = "Texture3D";

    fn save_fields<F: SaveFormat>(
        &self,
        writer: &mut RecordWriter<F>,
    ) -> Result<(), F::SerializeError> {
        self.base.save_fields(writer)?;
        writer.write("kind", &self.kind, &TextureKind::default())?;
        self.wrap.save_fields(writer)
    }

    fn load_fields<F: SaveFormat>(
        &mut self,
        reader: &RecordReader<F>,
    ) -> Result<(), F::DeserializeError> {
        self.base.load_fields(reader)?;
        self.kind = reader.read("kind", TextureKind::default())?;
        self.wrap.load_fields(reader)
    }
}
