use super::*;

#[test]
fn only_the_last_armed_generation_fires() {
    let gate = DebounceGate::new();
    // Keystrokes at t=0, t=200, t=400 each arm a generation.
    let g0 = gate.arm();
    let g1 = gate.arm();
    let g2 = gate.arm();
    // When the timers wake, only the t=400 generation is still current.
    assert!(!gate.is_current(g0));
    assert!(!gate.is_current(g1));
    assert!(gate.is_current(g2));
}

#[test]
fn cancel_invalidates_pending_generations() {
    let gate = DebounceGate::new();
    let g = gate.arm();
    gate.cancel();
    assert!(!gate.is_current(g));
}

#[test]
fn clones_share_the_same_gate() {
    let gate = DebounceGate::new();
    let clone = gate.clone();
    let g = gate.arm();
    assert!(clone.is_current(g));
    clone.arm();
    assert!(!gate.is_current(g));
}
