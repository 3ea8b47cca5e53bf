//! Building blocks for custom evaluators.
//!
//! Most users only need the top-level `Scanner`, `Evaluator` and `Selector`
//! items; these helpers are for models that want the same window statistics
//! and template preparation the ZNCC evaluator uses.

pub use crate::image::integral::IntegralImage;
pub use crate::image::resample::resize_u8_bilinear;
pub use crate::template::TemplatePlan;
