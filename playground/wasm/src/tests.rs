use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_success_result() {
    assert_eq!(
        run_glint_internal("print + 1 2"),
        RunResult {
            success: true,
            output: "<span class=\"keyword\">print</span> <span class=\"number\">3</span>"
                .to_owned(),
            error: None,
            error_type: None,
            code: None,
            span: None,
        }
    );
}

#[test]
fn test_runtime_error_result() {
    let result = run_glint_internal("/ 4 0");
    assert!(!result.success);
    assert_eq!(result.output, "Error: division by zero");
    assert_eq!(result.error_type, Some("runtime"));
    assert_eq!(result.code, Some("E6003"));
    assert_eq!(result.span, Some([4, 5]));
}

#[test]
fn test_error_output_is_escaped() {
    let result = run_glint_internal("1 < 2");
    assert_eq!(result.error_type, Some("lex"));
    assert_eq!(result.output, "Error: invalid character `&lt;`");
    assert_eq!(result.error.as_deref(), Some("invalid character `<`"));
}

#[test]
fn test_json_shape() {
    let json = run_glint("+ 1");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
    assert_eq!(value["success"], serde_json::json!(false));
    assert_eq!(value["error_type"], serde_json::json!("parse"));
    assert_eq!(value["code"], serde_json::json!("E1002"));
}

#[test]
fn test_statements_without_output_render_empty() {
    let result = run_glint_internal("x = 1");
    assert!(result.success);
    assert_eq!(result.output, "");
}

#[test]
fn test_pasted_nbsp_runs() {
    let result = run_glint_internal("print\u{a0}1");
    assert!(result.success, "{result:?}");
}
