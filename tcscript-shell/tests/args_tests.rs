use clap::Parser;
use tcscript_shell::{Args, DelayModeArg, LayoutArg};

#[test]
fn test_args_parse_input_only() {
    let args = Args::parse_from(["script2bytes", "-i", "tests/data/flash_test.scr"]);
    assert_eq!(args.input.to_string_lossy(), "tests/data/flash_test.scr");
    assert!(args.output.is_none());
    assert!(args.delay_mode.is_none());
    assert!(args.layout.is_none());
    assert!(!args.allow_errors);
}

#[test]
fn test_args_input_is_required() {
    assert!(Args::try_parse_from(["script2bytes"]).is_err());
}

#[test]
fn test_args_parse_all_long_flags() {
    let args = Args::parse_from([
        "script2bytes",
        "--input",
        "a.scr",
        "--output",
        "a.txt",
        "--delay-file",
        "a.dly",
        "--delay-mode",
        "one-shot",
        "--layout",
        "split",
        "--config",
        "c.toml",
        "--allow-errors",
        "--verbose",
    ]);

    assert_eq!(args.output.unwrap().to_string_lossy(), "a.txt");
    assert_eq!(args.delay_file.unwrap().to_string_lossy(), "a.dly");
    assert_eq!(args.delay_mode, Some(DelayModeArg::OneShot));
    assert_eq!(args.layout, Some(LayoutArg::Split));
    assert_eq!(args.config.unwrap().to_string_lossy(), "c.toml");
    assert!(args.allow_errors);
    assert!(args.verbose);
}

#[test]
fn test_args_reject_unknown_delay_mode() {
    assert!(
        Args::try_parse_from(["script2bytes", "-i", "a.scr", "--delay-mode", "never"]).is_err()
    );
}
