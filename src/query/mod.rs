//! Query resolution: segmentation, scoring and selection.

pub mod config;
pub mod modifier;
pub mod resolver;
pub mod scorer;
pub mod segmenter;

pub use self::config::ResolverConfig;
pub use self::modifier::{Modifier, ModifierMode, strip_modifier};
pub use self::resolver::{Outcome, PassthroughReason, Resolution, SpaceQueryResolver};
pub use self::scorer::{MatchCountScorer, ScoredCandidate, Unit, select_best};
pub use self::segmenter::{Grouping, Segmentations, generate};
