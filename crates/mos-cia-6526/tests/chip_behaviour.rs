//! Behaviour of CIA #1 as seen from the bus, the main loop and the input
//! layer.

use emu_core::{LineLatch, Ticks};
use mos_cia_6526::{Cia1, KeyCode, Register, RunMode, TimerId, TimerState, control, icr};

const PRA: u8 = 0x00;
const PRB: u8 = 0x01;
const TALO: u8 = 0x04;
const TAHI: u8 = 0x05;
const TBLO: u8 = 0x06;
const TBHI: u8 = 0x07;
const TOD_TENTHS: u8 = 0x08;
const TOD_SECONDS: u8 = 0x09;
const TOD_MINUTES: u8 = 0x0A;
const TOD_HOURS: u8 = 0x0B;
const ICR: u8 = 0x0D;
const CRA: u8 = 0x0E;
const CRB: u8 = 0x0F;

fn chip() -> (Cia1, LineLatch) {
    (Cia1::new(), LineLatch::new())
}

#[test]
fn timer_latch_round_trip() {
    let (mut cia, _) = chip();
    for v in [0x00, 0x5A, 0xFF] {
        cia.poke(TALO, v);
        let bank = cia.registers_mut();
        bank.real_to_latch(Register::TimerALo);
        bank.latch_to_real(Register::TimerALo);
        assert_eq!(bank.real(Register::TimerALo), v);
        assert_eq!(bank.latched(Register::TimerALo), v);
    }
}

#[test]
fn force_reload_while_running() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x00);
    cia.poke(TAHI, 0x10);
    cia.poke(CRA, control::START);

    cia.update_at(Ticks(0x100), &mut lines);
    assert_eq!(cia.counter(TimerId::A), 0x0F00);

    cia.poke(CRA, control::START | control::FORCE_LOAD);
    assert_eq!(cia.counter(TimerId::A), 0x1000);
    assert_eq!(
        cia.timer_state(TimerId::A),
        TimerState::Running(RunMode::Continuous)
    );
}

#[test]
fn force_reload_timer_b() {
    let (mut cia, mut lines) = chip();
    cia.poke(TBLO, 0x80);
    cia.poke(TBHI, 0x00);
    cia.poke(CRB, control::START);
    cia.update_at(Ticks(0x20), &mut lines);
    assert_eq!(cia.counter(TimerId::B), 0x60);

    cia.poke(CRB, control::FORCE_LOAD);
    assert_eq!(cia.counter(TimerId::B), 0x80);
    assert_eq!(cia.timer_state(TimerId::B), TimerState::Stopped);
}

#[test]
fn icr_masked_write() {
    let (mut cia, _) = chip();
    cia.poke(ICR, 0x81);
    assert_eq!(cia.interrupt_mask(), 0x01);
    cia.poke(ICR, 0x01);
    assert_eq!(cia.interrupt_mask(), 0x00);

    cia.poke(ICR, 0x86);
    cia.poke(ICR, 0x81);
    cia.poke(ICR, 0x04);
    assert_eq!(cia.interrupt_mask(), 0x03);
}

#[test]
fn underflow_wraps_sets_status_and_raises_irq_once() {
    let (mut cia, mut lines) = chip();
    // Reload value 0xFFFF, live count 5.
    cia.poke(TALO, 0xFF);
    cia.poke(TAHI, 0xFF);
    cia.registers_mut().set_real(Register::TimerALo, 0x05);
    cia.registers_mut().set_real(Register::TimerAHi, 0x00);
    cia.poke(ICR, 0x80 | icr::TIMER_A);
    cia.poke(CRA, control::START);

    cia.update_at(Ticks(6), &mut lines);

    assert_eq!(cia.counter(TimerId::A), 0xFFFF);
    assert_eq!(cia.peek(ICR), icr::IRQ | icr::TIMER_A);
    assert_eq!(lines.irqs, 1);
    assert_eq!(lines.nmis, 0);
}

#[test]
fn masked_underflow_sets_status_without_irq() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x05);
    cia.poke(TAHI, 0x00);
    cia.poke(CRA, control::START);

    cia.update_at(Ticks(6), &mut lines);

    assert_eq!(cia.counter(TimerId::A), 0x0005);
    assert_eq!(cia.peek(ICR), icr::TIMER_A);
    assert_eq!(lines.irqs, 0);
}

#[test]
fn one_shot_stops_after_underflow() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x05);
    cia.poke(TAHI, 0x00);
    cia.poke(CRA, control::START | control::ONE_SHOT);

    cia.update_at(Ticks(6), &mut lines);
    assert_eq!(cia.peek(CRA) & control::START, 0);
    assert_eq!(cia.peek(CRA), control::ONE_SHOT);
    assert_eq!(cia.timer_state(TimerId::A), TimerState::Stopped);
    assert_eq!(cia.counter(TimerId::A), 5);

    cia.update_at(Ticks(9), &mut lines);
    cia.update_at(Ticks(100), &mut lines);
    assert_eq!(cia.counter(TimerId::A), 5);

    // Restarting resumes counting from the reloaded value.
    cia.poke(CRA, control::START | control::ONE_SHOT);
    cia.update_at(Ticks(102), &mut lines);
    assert_eq!(cia.counter(TimerId::A), 3);
}

#[test]
fn cascade_counts_this_update_underflow_exactly_once() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x02);
    cia.poke(TAHI, 0x00);
    cia.poke(TBLO, 0x0A);
    cia.poke(TBHI, 0x00);
    cia.poke(CRB, control::START | control::CRB_INPUT_TIMER_A);
    cia.poke(CRA, control::START | control::ONE_SHOT);

    cia.update_at(Ticks(3), &mut lines);
    assert_eq!(cia.interrupt_status() & icr::TIMER_A, icr::TIMER_A);
    assert_eq!(cia.counter(TimerId::B), 9);

    // Timer A has stopped; its old status bit must not keep feeding B.
    cia.update_at(Ticks(10), &mut lines);
    cia.update_at(Ticks(20), &mut lines);
    assert_eq!(cia.counter(TimerId::B), 9);
}

#[test]
fn cascade_without_underflow_holds_timer_b() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x00);
    cia.poke(TAHI, 0x01);
    cia.poke(TBLO, 0x03);
    cia.poke(TBHI, 0x00);
    cia.poke(CRA, control::START);
    cia.poke(CRB, control::START | control::CRB_INPUT_TIMER_A);

    cia.update_at(Ticks(0x80), &mut lines);
    assert_eq!(cia.counter(TimerId::A), 0x80);
    assert_eq!(cia.counter(TimerId::B), 3);
}

#[test]
fn cascaded_timer_b_underflows_and_interrupts() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x01);
    cia.poke(TAHI, 0x00);
    cia.poke(TBLO, 0x01);
    cia.poke(TBHI, 0x00);
    cia.poke(ICR, 0x80 | icr::TIMER_B);
    cia.poke(CRA, control::START);
    cia.poke(CRB, control::START | control::CRB_INPUT_TIMER_A);

    // A underflows each batch; B counts 1 -> 0, then 0 -> underflow.
    cia.update_at(Ticks(2), &mut lines);
    assert_eq!(cia.counter(TimerId::B), 0);
    assert_eq!(lines.irqs, 0);

    cia.update_at(Ticks(4), &mut lines);
    assert_eq!(cia.counter(TimerId::B), 1);
    assert_eq!(
        cia.interrupt_status(),
        icr::IRQ | icr::TIMER_A | icr::TIMER_B
    );
    assert_eq!(lines.irqs, 1);
}

#[test]
fn keyboard_scan_sees_pressed_key_in_driven_column() {
    let (mut cia, mut lines) = chip();
    cia.key_down(KeyCode(b'A'), &mut lines);

    // 'A' is column 1, row 2.
    cia.poke(PRA, !0x02);
    assert_eq!(cia.peek(PRB), !0x04);

    cia.poke(PRA, !0x01);
    assert_eq!(cia.peek(PRB), 0xFF);

    cia.poke(PRA, !0x02);
    cia.key_up(KeyCode(b'A'));
    assert_eq!(cia.peek(PRB), 0xFF);
}

#[test]
fn keyboard_scan_with_every_column_driven() {
    let (mut cia, mut lines) = chip();
    cia.key_down(KeyCode::RETURN, &mut lines);
    cia.key_down(KeyCode::SPACE, &mut lines);

    cia.poke(PRA, 0x00);
    assert_eq!(cia.peek(PRB), !(0x02 | 0x10));

    cia.poke(PRA, 0xFF);
    assert_eq!(cia.peek(PRB), 0xFF);
}

#[test]
fn tod_latch_freezes_until_tenths_read() {
    let (mut cia, _) = chip();
    let set = |cia: &mut Cia1, h, m, s, t| {
        let bank = cia.registers_mut();
        bank.set_real(Register::TodHours, h);
        bank.set_real(Register::TodMinutes, m);
        bank.set_real(Register::TodSeconds, s);
        bank.set_real(Register::TodTenths, t);
    };
    set(&mut cia, 0x09, 0x59, 0x58, 0x07);

    assert_eq!(cia.peek(TOD_HOURS), 0x09);
    set(&mut cia, 0x10, 0x00, 0x00, 0x00);
    assert_eq!(cia.peek(TOD_MINUTES), 0x59);
    assert_eq!(cia.peek(TOD_SECONDS), 0x58);
    assert_eq!(cia.peek(TOD_TENTHS), 0x07);

    assert_eq!(cia.peek(TOD_MINUTES), 0x00);
    assert_eq!(cia.peek(TOD_TENTHS), 0x00);
}

// Real 6526 parts clear the status on read. This chip deliberately does
// not; this test pins that behaviour.
#[test]
fn status_is_not_cleared_by_reading_icr() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x01);
    cia.poke(TAHI, 0x00);
    cia.poke(CRA, control::START);
    cia.update_at(Ticks(2), &mut lines);

    assert_eq!(cia.peek(ICR), icr::TIMER_A);
    assert_eq!(cia.peek(ICR), icr::TIMER_A);
    assert_eq!(cia.interrupt_status(), icr::TIMER_A);
}

#[test]
fn replaying_the_same_calls_gives_the_same_chip() {
    fn run() -> (Cia1, LineLatch) {
        let (mut cia, mut lines) = chip();
        cia.poke(TALO, 0x10);
        cia.poke(TAHI, 0x00);
        cia.poke(ICR, 0x81);
        cia.poke(CRA, control::START);
        cia.key_down(KeyCode(b'Z'), &mut lines);
        for t in (0..200).step_by(7) {
            cia.update_at(Ticks(t), &mut lines);
        }
        cia.key_down(KeyCode::RESTORE, &mut lines);
        (cia, lines)
    }
    assert_eq!(run(), run());
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_restores_running_chip() {
    let (mut cia, mut lines) = chip();
    cia.poke(TALO, 0x40);
    cia.poke(TAHI, 0x00);
    cia.poke(CRA, control::START);
    cia.key_down(KeyCode(b'Q'), &mut lines);
    cia.update_at(Ticks(0x10), &mut lines);

    let saved = serde_json::to_string(&cia).expect("serialize");
    let mut restored: Cia1 = serde_json::from_str(&saved).expect("deserialize");
    assert_eq!(restored, cia);

    cia.update_at(Ticks(0x20), &mut lines);
    restored.update_at(Ticks(0x20), &mut lines);
    assert_eq!(restored.counter(TimerId::A), 0x20);
    assert_eq!(restored, cia);
}
