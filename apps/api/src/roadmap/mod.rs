// Roadmap progress: completed-milestone skills, readiness score and next steps.

pub mod handlers;
pub mod progress;
