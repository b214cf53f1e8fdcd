use std::sync::Arc;

use crate::pipeline::Pipeline;
use crate::traits::Processor;

/// Build the processor for an ordered list of stages.
///
/// - no stages: `None`, there is nothing to run;
/// - one stage: that stage itself, unwrapped, so single-stage routes skip
///   snapshotting and stop evaluation entirely;
/// - two or more: a [`Pipeline`] over all of them.
pub fn build(mut processors: Vec<Arc<dyn Processor>>) -> Option<Arc<dyn Processor>> {
    match processors.len() {
        0 => None,
        1 => processors.pop(),
        _ => Some(Arc::new(Pipeline::new(processors))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::RecordingProcessor;

    fn stage(name: &str) -> Arc<dyn Processor> {
        Arc::new(RecordingProcessor::passthrough(name))
    }

    #[test]
    fn empty_yields_nothing() {
        assert!(build(vec![]).is_none());
    }

    #[test]
    fn single_stage_is_returned_unwrapped() {
        let only = stage("only");
        let built = build(vec![only.clone()]).unwrap();
        assert!(Arc::ptr_eq(&built, &only));
        assert_eq!(built.name(), "only");
    }

    #[test]
    fn many_stages_become_a_pipeline() {
        let built = build(vec![stage("a"), stage("b"), stage("c")]).unwrap();
        assert_eq!(built.name(), "Pipeline");
    }
}
