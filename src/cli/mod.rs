pub mod orchestration;

pub use orchestration::{
    classify_release, load_event_release, run_release_workflow, Classification,
    ReleaseWorkflowArgs, WorkflowResult,
};
