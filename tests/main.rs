use scanflags::{FlagHandle, FlagSet, ParseError, Value};
use std::env;
use std::process::{Command, Output};

// Set when this test binary is re-run to exercise `FlagSet::parse` in a child process.
const PARSE_CHILD: &str = "SCANFLAGS_PARSE_CHILD";

#[test]
fn facade_parses() {
    let mut flags = FlagSet::new();
    let count = flags.create("count", "How many.", 0i32, false).unwrap();
    let name = flags.create("name", "Who.", "x", false).unwrap();

    flags.parse_tokens(&["-count=42"], false).unwrap();

    assert!(flags.parsed());
    assert_eq!(count.get::<i32>(), Some(42));
    assert_eq!(name.value(), Some(Value::from("x")));
}

#[test]
fn facade_fatal_errors() {
    let mut flags = FlagSet::new();
    flags.create("ratio", "The ratio.", 1.5f64, false).unwrap();

    let error = flags
        .parse_tokens(&["-ratio=notanumber"], false)
        .unwrap_err();
    assert_eq!(error.exit_code(), 1);

    let error = flags.parse_tokens(&["-ratio"], false).unwrap_err();
    assert!(matches!(error, ParseError::UndefinedFlagProvided { .. }));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn facade_create_var() {
    let mut flags = FlagSet::new();
    let mut slot: Option<FlagHandle> = None;

    flags.create_var(&mut slot, "h", "Collides with help.", 0u8, false);
    assert!(slot.is_none());

    flags.create_var(&mut slot, "level", "The level.", 0u8, false);
    flags.parse_tokens(&["-level=3"], false).unwrap();
    assert_eq!(slot.and_then(|handle| handle.get::<u8>()), Some(3));
}

#[test]
fn parse_in_child() {
    if env::var_os(PARSE_CHILD).is_none() {
        return;
    }

    let mut flags = FlagSet::new();
    let count = flags.create("count", "How many.", 1u32, false).unwrap();
    flags.parse(false);
    println!("count: {}", count.get::<u32>().unwrap());
}

// The libtest arguments don't start with `-count`, so only the trailing token is matched.
fn run_parse(token: &str) -> Output {
    Command::new(env::current_exe().unwrap())
        .args(["--exact", "parse_in_child", "--nocapture", "--", token])
        .env(PARSE_CHILD, "1")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn parse_exits_on_conversion_failure() {
    let output = run_parse("-count=two");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Parse error: cannot convert 'two' to u32 for flag '-count'."),
        "{stderr}"
    );
}

#[test]
fn parse_exits_on_bare_name() {
    let output = run_parse("-count");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("flag provided but not defined: -count"),
        "{stderr}"
    );
}

#[test]
fn parse_returns_on_success() {
    let output = run_parse("-count=3");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("count: 3"), "{stdout}");
}
