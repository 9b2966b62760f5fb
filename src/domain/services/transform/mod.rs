//! Script transform pipeline
//!
//! Converts plain JavaScript into the hackmud dialect (`forward`) and back
//! into an approximation of the original (`reverse`). Both directions are an
//! ordered list of pure `text -> text` stages matched on surface syntax only.
//!
//! The two directions are asymmetric: `forward` drops comments
//! and the top-level function name, and `reverse` turns every `#` into `$`,
//! not only the ones `forward` produced.

mod comments;
mod function_name;
mod markers;

pub use comments::StripComments;
pub use function_name::{NameFunction, StripFunctionName, PLACEHOLDER_NAME};
pub use markers::{MarkersToRemote, RestoreMarkers};

/// A single rewrite step.
///
/// Stages never fail: a stage whose pattern does not match returns its input
/// unchanged.
pub trait TransformStage: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    fn apply(&self, content: &str) -> String;
}

/// Ordered list of stages applied one after the other.
pub struct Pipeline {
    stages: Vec<Box<dyn TransformStage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn TransformStage>>) -> Self {
        Self { stages }
    }

    /// Local to remote. With `transform_enabled == false` only comments are
    /// stripped.
    pub fn forward(transform_enabled: bool) -> Self {
        let mut stages: Vec<Box<dyn TransformStage>> = vec![Box::new(StripComments)];
        if transform_enabled {
            stages.push(Box::new(MarkersToRemote));
            stages.push(Box::new(StripFunctionName));
        }
        Self::new(stages)
    }

    /// Remote to local. Always applies both stages.
    pub fn reverse() -> Self {
        Self::new(vec![Box::new(RestoreMarkers), Box::new(NameFunction)])
    }

    pub fn apply(&self, content: &str) -> String {
        self.stages
            .iter()
            .fold(content.to_string(), |text, stage| stage.apply(&text))
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Convert one script to the remote dialect
pub fn forward(content: &str, transform_enabled: bool) -> String {
    Pipeline::forward(transform_enabled).apply(content)
}

/// Convert one script from the remote dialect
pub fn reverse(content: &str) -> String {
    Pipeline::reverse().apply(content)
}
