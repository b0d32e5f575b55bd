//! Tests for:
//! - Errors are counted per line and never abort the run
//! - Unknown commands
//! - Invalid literals report the failing argument
//! - Validated view of the output

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tcscript_compiler::DiagnosticKind;
use tcscript_packet::{EncodeError, HexLiteralFault, Opcode};
use validated::Validated;

#[test]
fn test_one_malformed_line_between_valid_lines() {
    let source = "\
Send_POWER_OFF(0,0,0,0,0,0)
Send_CHANGE_PARAM(x1234)
Send_READ_PARAM(x0010,x0000)
";
    let output = compile(source);

    assert_eq!(output.packets.len(), 2);
    assert_eq!(output.error_count(), 1);
    assert_eq!(output.byte_stream().len(), 24);

    let diag = &output.diagnostics[0];
    assert_eq!(diag.line, 2);
    assert_eq!(diag.text, "Send_CHANGE_PARAM(x1234)");
    assert_eq!(
        diag.kind,
        DiagnosticKind::Encode(EncodeError::ArgumentCountMismatch {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_unknown_keyword_emits_nothing() {
    let output = compile("Send_SELF_DESTRUCT(1,2,3,4,5,6)");

    assert_eq!(output.error_count(), 1);
    assert!(output.byte_stream().is_empty());
    assert!(matches!(
        &output.diagnostics[0].kind,
        DiagnosticKind::UnknownCommand { keyword } if keyword == "Send_SELF_DESTRUCT"
    ));
}

#[test]
fn test_invalid_hex_names_argument() {
    let output = compile("\n# comment\nSend_FLASH_ERASE(x1, x2G, x3, x4)\n");

    assert_eq!(output.error_count(), 1);
    assert_eq!(output.diagnostics[0].line, 3);
    assert_eq!(
        output.diagnostics[0].kind,
        DiagnosticKind::Encode(EncodeError::InvalidHexLiteral {
            position: 2,
            text: "x2G".to_string(),
            fault: HexLiteralFault::NotHex,
        })
    );
    assert!(
        output.diagnostics[0]
            .to_string()
            .contains("argument 2 `x2G` is not a valid hexadecimal number")
    );
}

#[test]
fn test_every_bad_line_counts_once() {
    let source = "\
Send_POWER_OFF(0,0,0,0,0)
Send_POWER_OFF(a,0,0,0,0,0)
Send_FLASH_DUMP(1,2,3)
Wait_us(later)
Bogus
Send_GET_STATUS
Send_GET_STATUS(0,0,0,0,0,0)
";
    let output = compile(source);

    assert_eq!(output.error_count(), 6);
    assert_eq!(output.packets.len(), 1);
    assert_eq!(output.packets[0].packet.opcode, Opcode::GET_STATUS);
    let lines: Vec<usize> = output.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_clean_run_is_good() {
    let output = compile("Send_POWER_OFF(0,0,0,0,0,0)\n");
    assert!(output.is_clean());

    match output.into_validated() {
        Validated::Good(packets) => assert_eq!(packets.len(), 1),
        Validated::Fail(_) => panic!("expected a clean compilation"),
    }
}

#[test]
fn test_failed_run_keeps_partial_output() {
    let output = compile("Send_POWER_OFF(0,0,0,0,0,0)\nnope\n");
    let expected_packets = output.packets.clone();

    assert!(matches!(output.into_validated(), Validated::Fail(_)));
    assert_eq!(expected_packets.len(), 1);
}
