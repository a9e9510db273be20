// Career-advisor chat.
// Stateless: the caller resends its history on every request.

pub mod handlers;
pub mod history;
pub mod prompts;
