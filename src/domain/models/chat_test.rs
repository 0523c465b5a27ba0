use super::ChatMessage;
use super::Sender;
use super::Transcript;

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = ChatMessage::bot("\t\tHi there!");
    assert_eq!(msg.sender, Sender::Bot);
    assert_eq!(msg.sender.to_string(), "Assistant");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_wraps_lines() {
    let msg = ChatMessage::user("What is the game [Ready or Not] about?");
    assert_eq!(
        msg.as_string_lines(17),
        vec![
            "What is the game".to_string(),
            "[Ready or Not]".to_string(),
            "about?".to_string(),
        ]
    );
}

#[test]
fn it_keeps_blank_lines() {
    let msg = ChatMessage::bot("First\n\nSecond");
    assert_eq!(
        msg.as_string_lines(50),
        vec!["First".to_string(), " ".to_string(), "Second".to_string()]
    );
}

#[test]
fn it_does_not_emit_empty_lines_for_long_words() {
    let msg = ChatMessage::bot("Supercalifragilistic");
    assert_eq!(
        msg.as_string_lines(5),
        vec!["Supercalifragilistic".to_string()]
    );
}

#[test]
fn it_appends_to_transcript() {
    let mut transcript = Transcript::default();
    assert!(transcript.messages().is_empty());

    transcript.push(ChatMessage::user("Hello"));
    transcript.push(ChatMessage::bot("Hi!"));

    assert_eq!(transcript.messages().len(), 2);
    assert_eq!(transcript.messages()[0].sender, Sender::User);
    assert_eq!(transcript.messages()[1], ChatMessage::bot("Hi!"));
}
