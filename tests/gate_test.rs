/*!
 * Gate Tests
 * Admission order, skip behavior, and failure semantics of the gate scheduler
 */

use gate_scheduler::{Class, EntityId, Gate, GateConfig, GateError, ServicePattern};
use pretty_assertions::assert_eq;

fn serve_classes(gate: &mut Gate, n: usize) -> Vec<Class> {
    (0..n).map(|_| gate.serve_with_class().unwrap().0).collect()
}

#[test]
fn test_fifo_within_class() {
    let mut gate: Gate = Gate::new();
    for i in 0..10 {
        gate.enqueue(Class::Regular, format!("r{}", i)).unwrap();
    }

    for i in 0..10 {
        assert_eq!(gate.serve().unwrap(), EntityId::from(format!("r{}", i)));
    }
}

#[test]
fn test_canonical_pattern_repeats() {
    let mut gate: Gate = Gate::new();
    for i in 0..3 {
        gate.enqueue(Class::Fastpass, format!("f{}", i)).unwrap();
    }
    for i in 0..9 {
        gate.enqueue(Class::Regular, format!("r{}", i)).unwrap();
    }

    let cycle = vec![Class::Fastpass, Class::Regular, Class::Regular, Class::Regular];
    for _ in 0..3 {
        assert_eq!(serve_classes(&mut gate, 4), cycle);
    }
    assert!(gate.is_empty());
}

#[test]
fn test_scenario_five_riders() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Fastpass, "A").unwrap();
    for id in ["B", "C", "D", "E"] {
        gate.enqueue(Class::Regular, id).unwrap();
    }

    // Four serves consume one full F,R,R,R cycle; the fifth skips the empty fastpass slot
    let served: Vec<String> = (0..5).map(|_| gate.serve().unwrap().to_string()).collect();
    assert_eq!(served, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(gate.serve(), Err(GateError::EmptyGate));
}

#[test]
fn test_fastpass_empty_skips_but_advances() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Regular, "X").unwrap();
    gate.enqueue(Class::Regular, "Y").unwrap();
    gate.enqueue(Class::Regular, "Z").unwrap();

    // Slot 0 is visited and skipped, regular is drawn from slot 1
    assert_eq!(gate.serve().unwrap(), "X");
    assert_eq!(gate.cursor(), Some(1));
    assert_eq!(gate.serve().unwrap(), "Y");
    assert_eq!(gate.cursor(), Some(2));
    assert_eq!(gate.serve().unwrap(), "Z");
    assert_eq!(gate.cursor(), Some(3));

    assert_eq!(gate.serve(), Err(GateError::EmptyGate));
    assert_eq!(gate.cursor(), Some(3));
}

#[test]
fn test_regular_empty_serves_fastpass_back_to_back() {
    let mut gate: Gate = Gate::new();
    for id in ["A", "B", "C"] {
        gate.enqueue(Class::Fastpass, id).unwrap();
    }

    assert_eq!(gate.serve().unwrap(), "A");
    assert_eq!(gate.serve().unwrap(), "B");
    assert_eq!(gate.serve().unwrap(), "C");
    assert_eq!(gate.stats().slots_skipped, 6);
}

#[test]
fn test_interleaving_survives_enqueues_between_serves() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Fastpass, "A").unwrap();
    gate.enqueue(Class::Regular, "B").unwrap();

    assert_eq!(gate.serve().unwrap(), "A");

    // A new fastpass arrival does not jump the remaining regular slots
    gate.enqueue(Class::Fastpass, "F2").unwrap();
    gate.enqueue(Class::Regular, "C").unwrap();
    gate.enqueue(Class::Regular, "D").unwrap();

    assert_eq!(gate.serve().unwrap(), "B");
    assert_eq!(gate.serve().unwrap(), "C");
    assert_eq!(gate.serve().unwrap(), "D");
    assert_eq!(gate.serve().unwrap(), "F2");
}

#[test]
fn test_fresh_gate_is_empty() {
    let mut gate: Gate = Gate::new();
    assert_eq!(gate.peek_next_class(), None);
    assert_eq!(gate.serve(), Err(GateError::EmptyGate));
    assert!(GateError::EmptyGate.is_recoverable());
}

#[test]
fn test_peek_is_idempotent() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Regular, "B").unwrap();
    gate.serve().unwrap();
    gate.enqueue(Class::Fastpass, "A").unwrap();
    gate.enqueue(Class::Regular, "C").unwrap();

    let first = gate.peek_next_class();
    for _ in 0..10 {
        assert_eq!(gate.peek_next_class(), first);
    }
    assert_eq!(first, Some(Class::Regular));
    assert_eq!(gate.cursor(), Some(1));
}

#[test]
fn test_invalid_class_has_no_side_effect() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Regular, "B").unwrap();
    let before = gate.peek_next_class();

    let err = gate.enqueue_str("standby", "Q").unwrap_err();
    assert_eq!(err, GateError::InvalidClass("standby".into()));
    assert!(!err.is_recoverable());

    assert_eq!(gate.total_len(), 1);
    assert_eq!(gate.peek_next_class(), before);
    assert_eq!(gate.cursor(), None);
}

#[test]
fn test_failed_calls_leave_state_identical() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Fastpass, "A").unwrap();
    gate.serve().unwrap();

    let stats = gate.stats();
    let peeked = gate.peek_next_class();

    assert_eq!(gate.serve(), Err(GateError::EmptyGate));
    assert!(gate.enqueue_str("vip", "Q").is_err());

    assert_eq!(gate.stats(), stats);
    assert_eq!(gate.peek_next_class(), peeked);
    assert_eq!(gate.cursor(), Some(0));
}

#[test]
fn test_custom_pattern() {
    let pattern: ServicePattern = "F,F,R".parse().unwrap();
    let mut gate: Gate = Gate::with_pattern(pattern);
    for i in 0..4 {
        gate.enqueue(Class::Fastpass, format!("f{}", i)).unwrap();
        gate.enqueue(Class::Regular, format!("r{}", i)).unwrap();
    }

    assert_eq!(
        serve_classes(&mut gate, 6),
        vec![
            Class::Fastpass,
            Class::Fastpass,
            Class::Regular,
            Class::Fastpass,
            Class::Fastpass,
            Class::Regular,
        ]
    );
}

#[test]
fn test_single_class_gate_from_config() {
    let config = GateConfig::with_pattern(vec![Class::Regular]).recognize(vec![Class::Regular]);
    let mut gate: Gate = Gate::from_config(&config).unwrap();

    assert!(!gate.recognizes(Class::Fastpass));
    assert!(gate.enqueue(Class::Fastpass, "A").is_err());
    gate.enqueue(Class::Regular, "B").unwrap();
    assert_eq!(gate.serve().unwrap(), "B");
}

#[test]
fn test_stats_serialize() {
    let mut gate: Gate = Gate::new();
    gate.enqueue(Class::Fastpass, "A").unwrap();
    gate.serve().unwrap();

    let json = serde_json::to_value(gate.stats()).unwrap();
    assert_eq!(json["fastpass"]["served"], 1);
    assert_eq!(json["cursor"], 0);
    assert_eq!(json["pattern_len"], 4);
}
