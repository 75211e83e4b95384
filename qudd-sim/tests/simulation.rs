//! End-to-end simulation tests
//!
//! Each test drives the full pipeline: circuit construction, compilation to
//! QMDDs, state evolution, and strong enumeration or weak sampling.

use approx::assert_abs_diff_eq;
use qudd_core::{Circuit, Control, Gate, InitialState, Operation, QubitId};
use qudd_engine::NormRule;
use qudd_gates::{Hadamard, PauliX, SDagger, TGate};
use qudd_sim::{Amplitude, Simulator, SimulatorConfig, SimulatorError};
use std::sync::Arc;

const SQRT_HALF: f64 = std::f64::consts::FRAC_1_SQRT_2;

fn q(i: usize) -> QubitId {
    QubitId::new(i)
}

fn h(target: usize) -> Operation {
    Operation::single(Arc::new(Hadamard), q(target))
}

fn x(target: usize) -> Operation {
    Operation::single(Arc::new(PauliX), q(target))
}

fn cx(control: usize, target: usize) -> Operation {
    Operation::controlled(Arc::new(PauliX), q(target), vec![Control::new(q(control))]).unwrap()
}

fn states(amps: &[Amplitude]) -> Vec<&str> {
    amps.iter().map(|a| a.state.as_str()).collect()
}

#[test]
fn bell_state() {
    // H(0); CX(0,1) from |00⟩.
    let mut circuit = Circuit::new(2).unwrap();
    circuit.push(h(0)).unwrap();
    circuit.push(cx(0, 1)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["00", "11"]);
    for a in &amps {
        assert_abs_diff_eq!(a.re, SQRT_HALF, epsilon = 1e-4);
        assert_eq!(a.im, 0.0);
    }
}

#[test]
fn ghz_state() {
    // H(0); CX(0,1); CX(1,2); CX(2,3) from |0000⟩.
    let mut circuit = Circuit::new(4).unwrap();
    circuit.push(h(0)).unwrap();
    circuit.push(cx(0, 1)).unwrap();
    circuit.push(cx(1, 2)).unwrap();
    circuit.push(cx(2, 3)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["0000", "1111"]);
    for a in &amps {
        assert_abs_diff_eq!(a.re, SQRT_HALF, epsilon = 1e-4);
        assert_eq!(a.im, 0.0);
    }
}

#[test]
fn interference_signs() {
    // H(0); CX(0,1); H(0) from |00⟩: four amplitudes of 1/2, one negative.
    let mut circuit = Circuit::new(2).unwrap();
    circuit.push(h(0)).unwrap();
    circuit.push(cx(0, 1)).unwrap();
    circuit.push(h(0)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["00", "10", "01", "11"]);
    assert_eq!(amps[0].re, 0.5);
    assert_eq!(amps[1].re, 0.5);
    assert_eq!(amps[2].re, 0.5);
    assert_eq!(amps[3].re, -0.5);
    for a in &amps {
        assert_eq!(a.im, 0.0);
    }
}

#[test]
fn mcx_with_negative_controls() {
    // Initial "10000" (qubit 4 set), then X on qubit 3 controlled by qubits
    // 0, 1 and 2 all being |0⟩.
    let controls = Control::from_state(&[q(0), q(1), q(2)], "000").unwrap();
    let mut circuit = Circuit::new(5).unwrap();
    circuit
        .push(Operation::controlled(Arc::new(PauliX), q(3), controls).unwrap())
        .unwrap();

    let result = Simulator::default()
        .run_with_state(&circuit, &InitialState::Bits("10000".into()))
        .unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(amps.len(), 1);
    assert_eq!(amps[0].state, "11000");
    assert_eq!(amps[0].re, 1.0);
    assert_eq!(amps[0].im, 0.0);
}

#[test]
fn parallel_step() {
    // X(0), H(1), S†(3) applied as one uncontrolled step on 5 qubits.
    let gates: Vec<Arc<dyn Gate>> = vec![
        Arc::new(PauliX),
        Arc::new(Hadamard),
        Arc::new(SDagger),
    ];
    let mut circuit = Circuit::new(5).unwrap();
    circuit
        .push(Operation::parallel(gates, &[q(0), q(1), q(3)]).unwrap())
        .unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["00001", "00011"]);
    for a in &amps {
        assert_abs_diff_eq!(a.re, SQRT_HALF, epsilon = 1e-4);
        assert_eq!(a.im, 0.0);
    }
}

#[test]
fn operator_on_deep_qubit_skips_levels() {
    // A gate acting only on qubit 2 of a 5-qubit register: the state
    // diagram skips the untouched levels and the enumeration restores them.
    let mut circuit = Circuit::new(5).unwrap();
    circuit.push(h(2)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["00000", "00100"]);
    for a in &amps {
        assert_abs_diff_eq!(a.re, SQRT_HALF, epsilon = 1e-4);
    }
}

#[test]
fn amplitudes_are_normalized() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.push(h(0)).unwrap();
    circuit
        .push(Operation::single(Arc::new(TGate), q(0)))
        .unwrap();
    circuit.push(cx(0, 1)).unwrap();
    circuit.push(h(2)).unwrap();
    circuit.push(cx(2, 0)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    let total: f64 = result
        .amplitudes(10)
        .unwrap()
        .map(|a| a.probability())
        .sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn normalization_rules_agree() {
    let build = || {
        let mut circuit = Circuit::new(3).unwrap();
        circuit.push(h(0)).unwrap();
        circuit.push(cx(0, 1)).unwrap();
        circuit.push(h(2)).unwrap();
        circuit
    };

    let r1 = Simulator::new(SimulatorConfig::default().with_norm_rule(NormRule::FirstNonZero))
        .run(&build())
        .unwrap();
    let r3 =
        Simulator::new(SimulatorConfig::default().with_norm_rule(NormRule::LargestMagnitude))
            .run(&build())
            .unwrap();

    let a1: Vec<Amplitude> = r1.amplitudes(8).unwrap().collect();
    let a3: Vec<Amplitude> = r3.amplitudes(8).unwrap().collect();
    assert_eq!(a1, a3);
}

#[test]
fn initial_state_alphabet() {
    // |−⟩ on qubit 1, |1⟩ on qubit 0: amplitudes ±√½ at "01" and "11".
    let circuit = Circuit::new(2).unwrap();
    let result = Simulator::default()
        .run_with_state(&circuit, &InitialState::Bits("-1".into()))
        .unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(states(&amps), vec!["01", "11"]);
    assert_abs_diff_eq!(amps[0].re, SQRT_HALF, epsilon = 1e-4);
    assert_abs_diff_eq!(amps[1].re, -SQRT_HALF, epsilon = 1e-4);
}

#[test]
fn integer_initial_state() {
    // |5⟩ over 4 qubits is "0101".
    let circuit = Circuit::new(4).unwrap();
    let result = Simulator::default()
        .run_with_state(&circuit, &InitialState::Integer(5))
        .unwrap();
    let amps: Vec<Amplitude> = result.amplitudes(4).unwrap().collect();

    assert_eq!(amps.len(), 1);
    assert_eq!(amps[0].state, "0101");
    assert_eq!(amps[0].re, 1.0);
}

#[test]
fn basis_state_preservation() {
    // Preparing and measuring a basis state yields that state every shot.
    let circuit = Circuit::new(4).unwrap();
    let mut result = Simulator::new(SimulatorConfig::default().with_seed(5))
        .run_with_state(&circuit, &InitialState::Bits("1011".into()))
        .unwrap();

    let counts = result.sample(200).unwrap();
    assert_eq!(counts.len(), 1);
    let record = counts.get("1011").unwrap();
    assert_eq!(record.occurrences, 200);
    assert_eq!(record.re, 1.0);
    assert_eq!(record.im, 0.0);
}

#[test]
fn weak_sampling_converges() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.push(h(0)).unwrap();
    circuit.push(cx(0, 1)).unwrap();

    let mut result = Simulator::new(SimulatorConfig::default().with_seed(2024))
        .run(&circuit)
        .unwrap();
    let counts = result.sample(8192).unwrap();

    // Only the two Bell outcomes appear, at roughly equal frequency, and
    // the recorded amplitudes are exact.
    assert_eq!(counts.len(), 2);
    for state in ["00", "11"] {
        assert_abs_diff_eq!(counts.frequency(state), 0.5, epsilon = 0.03);
        let record = counts.get(state).unwrap();
        assert_abs_diff_eq!(record.re, SQRT_HALF, epsilon = 1e-12);
        assert_abs_diff_eq!(record.im, 0.0);
    }
}

#[test]
fn sampling_is_seed_deterministic() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.push(h(0)).unwrap();
    circuit.push(h(1)).unwrap();
    circuit.push(cx(1, 2)).unwrap();

    let run = || {
        let mut result = Simulator::new(SimulatorConfig::default().with_seed(77))
            .run(&circuit)
            .unwrap();
        result.sample(256).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn precision_bounds() {
    let circuit = Circuit::new(1).unwrap();
    let result = Simulator::default().run(&circuit).unwrap();
    assert!(matches!(
        result.amplitudes(11).unwrap_err(),
        SimulatorError::InvalidPrecision(11)
    ));
    assert!(result.amplitudes(0).is_ok());
}

#[test]
fn zero_shots_rejected() {
    let circuit = Circuit::new(1).unwrap();
    let mut result = Simulator::default().run(&circuit).unwrap();
    assert!(matches!(
        result.sample(0).unwrap_err(),
        SimulatorError::InvalidShots(0)
    ));
}

#[test]
fn fully_uniform_state_is_terminal_edge() {
    // H on the only qubit collapses the whole diagram into the terminal;
    // the enumeration contract rejects that root.
    let mut circuit = Circuit::new(1).unwrap();
    circuit.push(h(0)).unwrap();

    let result = Simulator::default().run(&circuit).unwrap();
    assert!(matches!(
        result.amplitudes(4).unwrap_err(),
        SimulatorError::TerminalEdge
    ));
}

#[test]
fn repeated_sampling_continues_stream() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.push(h(0)).unwrap();

    let mut result = Simulator::new(SimulatorConfig::default().with_seed(11))
        .run(&circuit)
        .unwrap();
    let first = result.sample(100).unwrap();
    let second = result.sample(100).unwrap();
    // Same distribution, advancing stream: totals match, sequences need not.
    assert_eq!(first.total_shots(), 100);
    assert_eq!(second.total_shots(), 100);
}
