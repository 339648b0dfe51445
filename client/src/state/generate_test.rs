use super::*;

fn code(id: &str, content: &str) -> QrCode {
    serde_json::from_value(serde_json::json!({ "_id": id, "content": content, "type": "text" })).unwrap()
}

#[test]
fn invalid_url_sets_inline_error_and_issues_nothing() {
    let mut state = GenerateState::default();
    state.set_content("not a url".to_owned());

    assert_eq!(state.prepare_submit(), None);
    assert_eq!(state.draft().error.as_deref(), Some("Please enter a valid URL"));
    assert!(!state.submitting);
}

#[test]
fn empty_text_is_rejected() {
    let mut state = GenerateState::default();
    state.set_mode(QrCodeType::Text);
    assert_eq!(state.prepare_submit(), None);
    assert_eq!(state.draft().error.as_deref(), Some("Please enter some text"));

    state.set_content("   ".to_owned());
    assert_eq!(state.prepare_submit(), None);
}

#[test]
fn editing_content_clears_inline_error() {
    let mut state = GenerateState::default();
    state.prepare_submit();
    state.set_content("https://example.com".to_owned());
    assert_eq!(state.draft().error, None);
}

#[test]
fn valid_url_builds_request_without_blank_title() {
    let mut state = GenerateState::default();
    state.set_content("  https://example.com/a  ".to_owned());
    state.set_title("   ".to_owned());

    let request = state.prepare_submit().unwrap();

    assert_eq!(request.content, "https://example.com/a");
    assert_eq!(request.kind, QrCodeType::Url);
    assert_eq!(request.title, None);
    assert!(state.submitting);
    assert_eq!(state.prepare_submit(), None);
}

#[test]
fn modes_keep_separate_drafts() {
    let mut state = GenerateState::default();
    state.set_content("https://example.com".to_owned());
    state.set_title("Site".to_owned());
    state.set_mode(QrCodeType::Text);
    assert_eq!(state.draft(), &Draft::default());

    state.set_content("hello".to_owned());
    state.set_mode(QrCodeType::Url);
    assert_eq!(state.draft().content, "https://example.com");
    assert_eq!(state.text.content, "hello");
}

#[test]
fn generated_text_renders_preview_from_content() {
    let mut state = GenerateState::default();
    state.set_mode(QrCodeType::Text);
    state.set_content("hello".to_owned());
    let request = state.prepare_submit().unwrap();

    let toast = state.apply_generated(code("q1", "hello"), request.content);

    let generated = state.generated.as_ref().unwrap();
    assert_eq!(generated.code.id, "q1");
    assert!(generated.image_url.contains("data=hello"));
    assert!(generated.image_url.contains("size=200x200"));
    assert_eq!(toast.title, "QR Code Generated");
    assert!(!state.submitting);
}

#[test]
fn generation_failure_resets_submitting() {
    let mut state = GenerateState { submitting: true, ..GenerateState::default() };
    let toast = state.apply_generate_error(&ApiError::Status { status: 400, message: Some("Bad content".to_owned()) });
    assert_eq!(toast.title, "Generation Failed");
    assert_eq!(toast.description, "Failed to generate QR code. Please try again.");
    assert!(!state.submitting);
    assert!(state.generated.is_none());
}

#[test]
fn share_requires_generated_code_and_email() {
    let mut state = GenerateState::default();
    state.share_email = "friend@example.com".to_owned();
    assert_eq!(state.prepare_share(), None);

    state.apply_generated(code("q1", "hello"), "hello".to_owned());
    state.share_email = "  ".to_owned();
    assert_eq!(state.prepare_share(), None);
    assert!(!state.sharing);

    state.share_email = " friend@example.com ".to_owned();
    assert_eq!(state.prepare_share(), Some(("q1".to_owned(), "friend@example.com".to_owned())));
    assert!(state.sharing);
    assert_eq!(state.prepare_share(), None);
}

#[test]
fn successful_share_clears_email() {
    let mut state = GenerateState { sharing: true, share_email: "friend@example.com".to_owned(), ..GenerateState::default() };
    let toast = state.apply_shared("friend@example.com");
    assert_eq!(toast.description, "Your QR code has been shared to friend@example.com.");
    assert!(state.share_email.is_empty());
    assert!(!state.sharing);
}

#[test]
fn failed_share_keeps_email() {
    let mut state = GenerateState { sharing: true, share_email: "friend@example.com".to_owned(), ..GenerateState::default() };
    let toast = state.apply_share_error(&ApiError::Network("offline".to_owned()));
    assert_eq!(toast.title, "Sharing Failed");
    assert_eq!(toast.description, "Failed to share QR code via email. Please try again.");
    assert_eq!(state.share_email, "friend@example.com");
}
