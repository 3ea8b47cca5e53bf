//! Scan configuration and named-option parsing.
//!
//! Configuration normally arrives as typed structs. Callers that keep options
//! in a generic name/value store can feed them through [`Configurable`];
//! unrecognized names are ignored.

/// Value of a named option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionValue {
    Float(f32),
    Int(i64),
    Bool(bool),
}

impl OptionValue {
    fn as_f32(self) -> Option<f32> {
        match self {
            OptionValue::Float(v) => Some(v),
            OptionValue::Int(v) => Some(v as f32),
            OptionValue::Bool(_) => None,
        }
    }

    fn as_bool(self) -> Option<bool> {
        match self {
            OptionValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Float(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// Types that accept named options.
pub trait Configurable {
    /// Applies one option. Returns `false` when the name is unknown or the
    /// value has the wrong type; the configuration is then left unchanged.
    fn set_option(&mut self, name: &str, value: OptionValue) -> bool;

    /// Applies a batch of options and returns how many were recognized.
    fn apply_options<'a, I>(&mut self, options: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        options
            .into_iter()
            .filter(|(name, value)| self.set_option(name, *value))
            .count()
    }
}

/// Stride ratios of the exhaustive explorer.
///
/// Strides are fractions of the current window size, so every scale is scanned
/// with the same relative density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExhaustiveConfig {
    /// Horizontal step as a fraction of the window width.
    pub stride_x: f32,
    /// Vertical step as a fraction of the window height.
    pub stride_y: f32,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            stride_x: 0.1,
            stride_y: 0.1,
        }
    }
}

impl Configurable for ExhaustiveConfig {
    fn set_option(&mut self, name: &str, value: OptionValue) -> bool {
        let target = match name {
            "stride_x" | "dx" => &mut self.stride_x,
            "stride_y" | "dy" => &mut self.stride_y,
            _ => return false,
        };
        match value.as_f32() {
            Some(v) => {
                *target = v;
                true
            }
            None => false,
        }
    }
}

/// Scanner-level switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Stop after the first scale that produced a detection, and stop each
    /// scale at its first detection.
    pub stop_at_first_detection: bool,
    /// Report per-scale summaries at info level instead of debug.
    pub verbose: bool,
}

impl Configurable for ScanConfig {
    fn set_option(&mut self, name: &str, value: OptionValue) -> bool {
        let target = match name {
            "stop_at_first_detection" => &mut self.stop_at_first_detection,
            "verbose" => &mut self.verbose,
            _ => return false,
        };
        match value.as_bool() {
            Some(v) => {
                *target = v;
                true
            }
            None => false,
        }
    }
}
