//! Tests for:
//! - Delay placement on the first byte of a packet
//! - Sticky delay (default)
//! - One-shot delay
//! - Delay updates between commands

mod common;

use common::*;
use pretty_assertions::assert_eq;

const TWO_COMMANDS: &str = "\
Wait_us(500)
Send_START_SC_ACQ(0,0,0,0,0,0)
Send_GET_STATUS(0,0,0,0,0,0)
";

#[test]
fn test_initial_delay_is_zero() {
    let output = compile("Send_POWER_OFF(0,0,0,0,0,0)");
    assert_eq!(output.delay_stream(), vec![0; 12]);
}

#[test]
fn test_one_shot_delay_applies_to_first_command_only() {
    let output = compile_one_shot(TWO_COMMANDS);

    assert_eq!(output.packets.len(), 2);
    assert_eq!(output.delay_stream().len(), 24);
    assert_eq!(delayed_bytes(&output), vec![(0, 500)]);
}

#[test]
fn test_sticky_delay_repeats_on_every_packet() {
    let output = compile(TWO_COMMANDS);

    assert_eq!(delayed_bytes(&output), vec![(0, 500), (12, 500)]);
}

#[test]
fn test_delay_changes_between_commands() {
    let source = "\
Wait_us(100)
Send_POWER_OFF(0,0,0,0,0,0)
Wait_us(2000)
Send_POWER_OFF(0,0,0,0,0,0)
Wait_us(0)
Send_POWER_OFF(0,0,0,0,0,0)
";
    let output = compile(source);

    assert_eq!(output.error_count(), 0);
    assert_eq!(delayed_bytes(&output), vec![(0, 100), (12, 2000)]);
}

#[test]
fn test_delay_survives_failed_lines() {
    let source = "\
Wait_us(75)
Send_POWER_OFF(0,0,0)
Send_UNDEFINED()
Send_POWER_OFF(0,0,0,0,0,0)
";
    let output = compile_one_shot(source);

    assert_eq!(output.error_count(), 2);
    assert_eq!(delayed_bytes(&output), vec![(0, 75)]);
}
