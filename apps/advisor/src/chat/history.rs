//! Conversation window sent upstream on each chat turn.

use crate::chat::prompts::CHAT_SYSTEM;
use crate::llm_client::ChatMessage;

/// Number of prior turns forwarded with each message.
pub const HISTORY_WINDOW: usize = 4;

/// The most recent `HISTORY_WINDOW` entries, in their original order.
pub fn recent_history(history: &[ChatMessage]) -> &[ChatMessage] {
    &history[history.len().saturating_sub(HISTORY_WINDOW)..]
}

/// System persona, then the trimmed history, then the new user message last.
pub fn build_chat_messages(history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let recent = recent_history(history);
    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(CHAT_SYSTEM));
    messages.extend_from_slice(recent);
    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    fn turns(n: usize) -> Vec<ChatMessage> {
        (0..n)
            .map(|i| ChatMessage {
                role: if i % 2 == 0 { Role::User } else { Role::Assistant },
                content: format!("turn {i}"),
            })
            .collect()
    }

    #[test]
    fn test_short_history_is_kept_whole() {
        let history = turns(3);
        assert_eq!(recent_history(&history), &history[..]);
        assert!(recent_history(&[]).is_empty());
    }

    #[test]
    fn test_long_history_keeps_last_four_in_order() {
        let history = turns(6);
        let contents: Vec<&str> = recent_history(&history)
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["turn 2", "turn 3", "turn 4", "turn 5"]);
    }

    #[test]
    fn test_messages_wrap_history_with_system_and_user() {
        let messages = build_chat_messages(&turns(6), "How do I prep?");
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0], ChatMessage::system(CHAT_SYSTEM));
        assert_eq!(messages[1].content, "turn 2");
        assert_eq!(messages[4].content, "turn 5");
        assert_eq!(messages[5], ChatMessage::user("How do I prep?"));
    }

    #[test]
    fn test_empty_history_yields_two_messages() {
        let messages = build_chat_messages(&[], "hi");
        assert_eq!(messages, vec![ChatMessage::system(CHAT_SYSTEM), ChatMessage::user("hi")]);
    }
}
