//! winscan is a multi-scale sliding-window scanning engine.
//!
//! A [`Scanner`] drives a [`ScaleExplorer`] over a list of window sizes. The
//! explorer places windows inside a region of interest and hands each one to
//! an [`Evaluator`]; the shared [`ScanContext`] records counters and accepted
//! [`Candidate`]s. Once all scales ran, a [`Selector`] turns the candidates into
//! the final detections.
//!
//! The crate ships an exhaustive explorer, a pass-through selector and a ZNCC
//! template evaluator. Scoring models and fusion strategies plug in through the
//! traits.

pub mod candidate;
pub mod evaluator;
pub mod geometry;
pub mod image;
pub mod lowlevel;
pub mod search;
pub mod select;
pub mod template;
mod trace;
pub mod util;

pub use crate::image::{ImageView, OwnedImage};
pub use candidate::{Candidate, CandidateList};
pub use evaluator::{Evaluator, Verdict, ZnccConfig, ZnccEvaluator};
pub use geometry::{Rect, Size};
pub use search::{
    Configurable, ExhaustiveConfig, ExhaustiveExplorer, OptionValue, ScaleExplorer, ScaleFailure,
    ScaleReport, ScanConfig, ScanContext, ScanReport, ScanStats, Scanner,
};
pub use select::{DummySelector, Selector};
pub use template::Template;
pub use util::{ScanError, ScanResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
