use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_defaults_to_html() {
    assert_eq!(
        parse_run_args(&args(&["main.gl"])),
        Ok(("main.gl".to_owned(), RunOptions::default()))
    );
    assert_eq!(RunOptions::default().format, OutputFormat::Html);
}

#[test]
fn test_format_flags_anywhere() {
    let plain = RunOptions {
        format: OutputFormat::Plain,
    };
    assert_eq!(
        parse_run_args(&args(&["--plain", "main.gl"])),
        Ok(("main.gl".to_owned(), plain.clone()))
    );
    assert_eq!(
        parse_run_args(&args(&["main.gl", "--html", "--plain"])),
        Ok(("main.gl".to_owned(), plain))
    );
}

#[test]
fn test_stdin_dash_is_a_path() {
    assert_eq!(
        parse_run_args(&args(&["-", "--plain"])).map(|(p, _)| p),
        Ok("-".to_owned())
    );
}

#[test]
fn test_errors() {
    assert_eq!(parse_run_args(&args(&[])), Err(ArgsError::MissingPath));
    assert_eq!(
        parse_run_args(&args(&["a.gl", "--json"])),
        Err(ArgsError::UnknownOption("--json".to_owned()))
    );
    assert_eq!(
        parse_run_args(&args(&["a.gl", "b.gl"])),
        Err(ArgsError::UnexpectedArgument("b.gl".to_owned()))
    );
}

#[test]
fn test_format_display() {
    assert_eq!(OutputFormat::Html.to_string(), "html");
    assert_eq!(OutputFormat::Plain.to_string(), "plain");
}
