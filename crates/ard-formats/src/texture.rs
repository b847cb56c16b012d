use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing a texture enumeration from unchecked input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseTextureEnumError {
    #[error("invalid {kind}: {value}")]
    Unrecognized { kind: &'static str, value: String },
}

/// Texture coordinate dimension of a volumetric texture. Analogous to (U, V, W).
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WrapAxis {
    S,
    T,
    R,
}

/// Policy for resolving texture coordinates outside of `[0, 1]`.
#[derive(
    Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum WrapMode {
    /// Tile the texture.
    Repeat,
    /// Tile the texture, mirroring every other repetition.
    MirroredRepeat,
    /// Clamp to the outermost texel.
    #[default]
    EdgeClamp,
    /// Clamp to the border color.
    BorderClamp,
    /// Mirror once around zero, then clamp to the outermost texel.
    MirrorEdgeClamp,
    /// Mirror once around zero, then clamp to the border color.
    MirrorBorderClamp,
}

#[derive(
    Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum MinFilter {
    Nearest,
    #[default]
    BilinearNoMipMaps,
    NearestNearestMipMap,
    BilinearNearestMipMap,
    NearestLinearMipMap,
    Trilinear,
}

#[derive(
    Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum MagFilter {
    Nearest,
    #[default]
    Bilinear,
}

/// Depth comparison applied when sampling a shadow map.
#[derive(
    Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum ShadowCompareMode {
    #[default]
    Off,
    LessOrEqual,
    GreaterOrEqual,
}

/// Dimensionality of a texture that is addressed with three coordinates.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextureKind {
    ThreeDimensional { depth: u32 },
    TwoDimensionalArray { layers: u32 },
    CubeMap,
}

impl Default for TextureKind {
    fn default() -> Self {
        TextureKind::ThreeDimensional { depth: 1 }
    }
}

impl WrapAxis {
    pub const ALL: [WrapAxis; 3] = [WrapAxis::S, WrapAxis::T, WrapAxis::R];

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        match self {
            WrapAxis::S => "S",
            WrapAxis::T => "T",
            WrapAxis::R => "R",
        }
    }
}

impl WrapMode {
    pub const ALL: [WrapMode; 6] = [
        WrapMode::Repeat,
        WrapMode::MirroredRepeat,
        WrapMode::EdgeClamp,
        WrapMode::BorderClamp,
        WrapMode::MirrorEdgeClamp,
        WrapMode::MirrorBorderClamp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WrapMode::Repeat => "Repeat",
            WrapMode::MirroredRepeat => "MirroredRepeat",
            WrapMode::EdgeClamp => "EdgeClamp",
            WrapMode::BorderClamp => "BorderClamp",
            WrapMode::MirrorEdgeClamp => "MirrorEdgeClamp",
            WrapMode::MirrorBorderClamp => "MirrorBorderClamp",
        }
    }

    /// `true` if sampling outside of `[0, 1]` can read the border color.
    #[inline(always)]
    pub fn uses_border(&self) -> bool {
        matches!(self, WrapMode::BorderClamp | WrapMode::MirrorBorderClamp)
    }
}

impl TextureKind {
    /// Number of depth slices, array layers, or cube faces.
    pub fn depth_or_layers(&self) -> u32 {
        match self {
            TextureKind::ThreeDimensional { depth } => *depth,
            TextureKind::TwoDimensionalArray { layers } => *layers,
            TextureKind::CubeMap => 6,
        }
    }
}

impl fmt::Display for WrapAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WrapAxis {
    type Err = ParseTextureEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrapAxis::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTextureEnumError::Unrecognized {
                kind: "wrap axis",
                value: s.to_owned(),
            })
    }
}

impl FromStr for WrapMode {
    type Err = ParseTextureEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrapMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTextureEnumError::Unrecognized {
                kind: "wrap mode",
                value: s.to_owned(),
            })
    }
}

impl TryFrom<u32> for WrapAxis {
    type Error = ParseTextureEnumError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        WrapAxis::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| ParseTextureEnumError::Unrecognized {
                kind: "wrap axis",
                value: value.to_string(),
            })
    }
}

