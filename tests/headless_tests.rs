use calctty::controller::DEFAULT_MAX_INPUT_LEN;
use calctty::error::CalcError;
use calctty::headless;

#[test]
fn test_headless_run() {
    let report = headless::run("12+3=", DEFAULT_MAX_INPUT_LEN).expect("run failed");
    assert_eq!(report.rendered.display, "15");
    assert_eq!(report.state.stacked_operand, 12.0);
}

#[test]
fn test_headless_memory_labels() {
    let report = headless::run("4 M+ M+ C", DEFAULT_MAX_INPUT_LEN).expect("run failed");
    assert_eq!(report.rendered.memory, "8");
    assert_eq!(report.rendered.display, "0");
}

#[test]
fn test_headless_json_shape() {
    let report = headless::run("7/0=", DEFAULT_MAX_INPUT_LEN).expect("run failed");
    let json = serde_json::to_value(&report).expect("serialize failed");
    assert_eq!(json["state"]["display"]["kind"], "divide_by_zero");
    assert_eq!(json["state"]["last_operator"], "Divide");
    assert_eq!(json["rendered"]["display"], "Error! Can not divide by 0!");
}

#[test]
fn test_headless_unknown_key() {
    let err = headless::run("5 % 2", DEFAULT_MAX_INPUT_LEN).unwrap_err();
    assert!(matches!(err, CalcError::UnknownKey(_)));
}

#[test]
fn test_headless_report_to_json() {
    let report = headless::run("5+3=", DEFAULT_MAX_INPUT_LEN).expect("run failed");
    let json = report.to_json().expect("serialize failed");
    assert!(json.contains("\"display\": \"8\""));
}
