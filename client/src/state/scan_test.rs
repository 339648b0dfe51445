use super::*;

#[test]
fn start_moves_to_scanning_once() {
    let mut state = ScanState::default();
    let attempt = state.start().unwrap();
    assert!(state.is_scanning());
    assert_eq!(state.start(), None);

    state.handle(attempt, ScanEvent::Decoded("x".to_owned()));
    assert!(state.start().is_some());
}

#[test]
fn decoded_event_yields_result_and_toast() {
    let mut state = ScanState::default();
    let attempt = state.start().unwrap();

    let toast = state.handle(attempt, ScanEvent::Decoded(SIMULATED_RESULT.to_owned())).unwrap();

    assert_eq!(state.result(), Some(SIMULATED_RESULT));
    assert_eq!(toast.title, "QR Code Scanned");
    assert_eq!(toast.description, "Successfully scanned a QR code");
}

#[test]
fn failed_event_records_reason() {
    let mut state = ScanState::default();
    let attempt = state.start().unwrap();

    let toast = state.handle(attempt, ScanEvent::Failed("camera unavailable".to_owned())).unwrap();

    assert_eq!(state.phase, ScanPhase::Failed("camera unavailable".to_owned()));
    assert_eq!(toast.description, "camera unavailable");
    assert_eq!(state.result(), None);
}

#[test]
fn event_for_superseded_attempt_is_ignored() {
    let mut state = ScanState::default();
    let first = state.start().unwrap();
    state.reset();
    let second = state.start().unwrap();

    assert_eq!(state.handle(first, ScanEvent::Decoded("old".to_owned())), None);
    assert!(state.is_scanning());
    assert!(state.handle(second, ScanEvent::Decoded("new".to_owned())).is_some());
    assert_eq!(state.result(), Some("new"));
}

#[test]
fn event_after_reset_is_ignored() {
    let mut state = ScanState::default();
    let attempt = state.start().unwrap();
    state.reset();
    assert_eq!(state.handle(attempt, ScanEvent::Decoded("late".to_owned())), None);
    assert_eq!(state.phase, ScanPhase::Idle);
}

#[test]
fn only_http_results_can_be_opened() {
    assert!(can_open("https://example.com/scanned-url"));
    assert!(can_open("http://example.com"));
    assert!(!can_open("WIFI:S:home;;"));
    assert!(!can_open(""));
}

#[tokio::test]
async fn simulated_decoder_reports_fixed_url() {
    let decoder = SimulatedDecoder::default();
    assert_eq!(decoder.delay_ms, 3_000);
    assert_eq!(decoder.decode().await, ScanEvent::Decoded(SIMULATED_RESULT.to_owned()));
}
