pub mod prompt;
pub mod request;

pub use prompt::{
    build_phase_context, build_prompt, build_system_prompt, build_user_prompt, ChatCompletionRequest,
    ChatMessage, ChatRole, ReportPrompt, DEFAULT_MODEL,
};
pub use request::{ReportError, ReportRequest, ValidatedReport};
