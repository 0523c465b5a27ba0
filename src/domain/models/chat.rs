#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::fmt;

pub const CHAT_FAILURE_MESSAGE: &str = "Sorry, I couldn't get a response. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sender::User => return write!(f, "You"),
            Sender::Bot => return write!(f, "Assistant"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> ChatMessage {
        return ChatMessage {
            sender,
            text: text.to_string().replace('\t', "  "),
        };
    }

    pub fn user(text: &str) -> ChatMessage {
        return ChatMessage::new(Sender::User, text);
    }

    pub fn bot(text: &str) -> ChatMessage {
        return ChatMessage::new(Sender::Bot, text);
    }

    /// Word wraps the message to fit within `line_max_width` columns.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if word_len + char_count + 1 > line_max_width && !current_lines.is_empty() {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word_len + 1;
                } else {
                    current_lines.push(word);
                    char_count += word_len + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}

/// Append-only chat history. Messages are never edited or removed.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return &self.messages;
    }
}
