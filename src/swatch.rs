use crate::color::HexColor;
use std::fmt;

/// Where a swatch sits in a palette relative to its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Tint,
    Shade,
    Base,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Tint => f.write_str("tint"),
            Role::Shade => f.write_str("shade"),
            Role::Base => f.write_str("base"),
        }
    }
}

/// A single color in a generated palette.
///
/// `step` is the percent distance from the base color (0 for the base itself),
/// and `label` is the derived display string, e.g. `shade-10`, `base`,
/// `tint-40`. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    role: Role,
    step: f64,
    hex: HexColor,
    label: String,
}

impl Swatch {
    pub(crate) fn new(role: Role, step: f64, hex: HexColor) -> Swatch {
        let label = match role {
            Role::Base => "base".to_string(),
            Role::Tint => format!("tint-{step}"),
            Role::Shade => format!("shade-{step}"),
        };

        Self {
            role,
            step,
            hex,
            label,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn hex(&self) -> &HexColor {
        &self.hex
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The step number used for display, on a 0-100-like scale.
    ///
    /// The stored step percent is treated as a 0-10 "level" and multiplied by
    /// 10, so step 10 displays as "100". Historical behavior, kept as is.
    pub fn step_label(&self) -> String {
        format_step_label(self.step)
    }
}

/// Scale a step percent to its display number.
pub fn format_step_label(step: f64) -> String {
    ((step * 10.0).round() as i64).to_string()
}
