// Role matching: skill taxonomy, role catalog, deterministic and AI-augmented matchers.
// All LLM calls go through the `CompletionService` seam in llm_client.

pub mod ai_matcher;
pub mod handlers;
pub mod prompts;
pub mod role_matcher;
pub mod roles;
pub mod taxonomy;
