use ard_formats::texture::{ParseTextureEnumError, WrapAxis, WrapMode};
use ard_log::{trace, warn};
use ard_save_load::{
    format::SaveFormat,
    record::{RecordReader, RecordWriter},
    SaveLoad,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Wrap mode of each axis of a volumetric texture.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WrapModeState {
    wrap_s: WrapMode,
    wrap_t: WrapMode,
    wrap_r: WrapMode,
}

impl From<ParseTextureEnumError> for WrapError {
    fn from(value: ParseTextureEnumError) -> Self {
        WrapError::InvalidArgument(value.to_string())
    }
}

impl WrapError {
    fn rejected(msg: &str) -> Self {
        warn!("rejected wrap argument: {msg}");
        WrapError::InvalidArgument(msg.to_owned())
    }
}

impl WrapModeState {
    pub const DEFAULT_MODE: WrapMode = WrapMode::EdgeClamp;

    pub const FIELD_S: &'static str = "wrapS";
    pub const FIELD_T: &'static str = "wrapT";
    pub const FIELD_R: &'static str = "wrapR";

    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn uniform(mode: WrapMode) -> Self {
        Self {
            wrap_s: mode,
            wrap_t: mode,
            wrap_r: mode,
        }
    }

    #[inline(always)]
    pub const fn field_name(axis: WrapAxis) -> &'static str {
        match axis {
            WrapAxis::S => Self::FIELD_S,
            WrapAxis::T => Self::FIELD_T,
            WrapAxis::R => Self::FIELD_R,
        }
    }

    pub fn set_wrap(&mut self, axis: WrapAxis, mode: WrapMode) {
        trace!("setting wrap {axis} to {mode}");
        match axis {
            WrapAxis::S => self.wrap_s = mode,
            WrapAxis::T => self.wrap_t = mode,
            WrapAxis::R => self.wrap_r = mode,
        }
    }

    /// Validating form of [`WrapModeState::set_wrap`] for callers whose values may be absent.
    /// The mode is checked before the axis. Nothing changes on failure.
    pub fn try_set_wrap(
        &mut self,
        axis: Option<WrapAxis>,
        mode: Option<WrapMode>,
    ) -> Result<(), WrapError> {
        let mode = mode.ok_or_else(|| WrapError::rejected("mode can not be absent"))?;
        let axis = axis.ok_or_else(|| WrapError::rejected("axis can not be absent"))?;
        self.set_wrap(axis, mode);
        Ok(())
    }

    pub fn set_wrap_all(&mut self, mode: WrapMode) {
        trace!("setting all wrap axes to {mode}");
        *self = Self::uniform(mode);
    }

    pub fn try_set_wrap_all(&mut self, mode: Option<WrapMode>) -> Result<(), WrapError> {
        let mode = mode.ok_or_else(|| WrapError::rejected("mode can not be absent"))?;
        self.set_wrap_all(mode);
        Ok(())
    }

    #[inline(always)]
    pub fn wrap(&self, axis: WrapAxis) -> WrapMode {
        match axis {
            WrapAxis::S => self.wrap_s,
            WrapAxis::T => self.wrap_t,
            WrapAxis::R => self.wrap_r,
        }
    }

    pub fn try_wrap(&self, axis: Option<WrapAxis>) -> Result<WrapMode, WrapError> {
        match axis {
            Some(axis) => Ok(self.wrap(axis)),
            None => Err(WrapError::rejected("axis can not be absent")),
        }
    }

    /// Looks up an axis given by name, e.g. from a config file or script.
    pub fn wrap_raw(&self, axis: &str) -> Result<WrapMode, WrapError> {
        Ok(self.wrap(axis.parse()?))
    }

    /// Sets an axis from unchecked names. Both are parsed before anything is assigned.
    pub fn set_wrap_raw(&mut self, axis: &str, mode: &str) -> Result<(), WrapError> {
        let mode = mode.parse::<WrapMode>()?;
        let axis = axis.parse::<WrapAxis>()?;
        self.set_wrap(axis, mode);
        Ok(())
    }

    #[inline(always)]
    pub fn wrap_s(&self) -> WrapMode {
        self.wrap_s
    }

    #[inline(always)]
    pub fn wrap_t(&self) -> WrapMode {
        self.wrap_t
    }

    #[inline(always)]
    pub fn wrap_r(&self) -> WrapMode {
        self.wrap_r
    }

    #[inline(always)]
    pub fn set_wrap_s(&mut self, mode: WrapMode) {
        self.set_wrap(WrapAxis::S, mode);
    }

    #[inline(always)]
    pub fn set_wrap_t(&mut self, mode: WrapMode) {
        self.set_wrap(WrapAxis::T, mode);
    }

    #[inline(always)]
    pub fn set_wrap_r(&mut self, mode: WrapMode) {
        self.set_wrap(WrapAxis::R, mode);
    }

    /// `true` if every axis uses the same mode.
    pub fn is_uniform(&self) -> bool {
        self.wrap_s == self.wrap_t && self.wrap_t == self.wrap_r
    }

    pub fn iter(&self) -> impl Iterator<Item = (WrapAxis, WrapMode)> + '_ {
        WrapAxis::ALL.into_iter().map(|axis| (axis, self.wrap(axis)))
    }

    /// Copies every axis onto `target`.
    pub fn copy_into(&self, target: &mut WrapModeState) {
        self.iter()
            .for_each(|(axis, mode)| target.set_wrap(axis, mode));
    }
}

impl SaveLoad for WrapModeState {
    const TYPE_NAME: &'static str = "WrapModeState";

    fn save_fields<F: SaveFormat>(
        &self,
        writer: &mut RecordWriter<F>,
    ) -> Result<(), F::SerializeError> {
        for (axis, mode) in self.iter() {
            writer.write(Self::field_name(axis), &mode, &Self::DEFAULT_MODE)?;
        }
        Ok(())
    }

    fn load_fields<F: SaveFormat>(
        &mut self,
        reader: &RecordReader<F>,
    ) -> Result<(), F::DeserializeError> {
        self.wrap_s = reader.read(Self::FIELD_S, Self::DEFAULT_MODE)?;
        self.wrap_t = reader.read(Self::FIELD_T, Self::DEFAULT_MODE)?;
        self.wrap_r = reader.read(Self::FIELD_R, Self::DEFAULT_MODE)?;
        Ok(())
    }
}
