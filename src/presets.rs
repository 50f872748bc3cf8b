//! Ready-made demonstration circuits
//!
//! Each builder returns a fresh [`Circuit`] with new ids. Multi-bit buses are
//! wired most significant bit first, so `A3` of a 4-bit operand lands on `a0`.

use crate::error::{CircuitError, Result};
use crate::nodes::graph::Circuit;
use crate::nodes::node::{Node, NodeId, NodeKind};
use std::fmt;
use std::str::FromStr;

/// Available preset circuits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    HalfAdder,
    FullAdder,
    Comparator,
    PriorityEncoder,
    Decoder,
    Multiplexer,
    Demultiplexer,
    SrLatch,
    BinaryClock,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::HalfAdder,
        Preset::FullAdder,
        Preset::Comparator,
        Preset::PriorityEncoder,
        Preset::Decoder,
        Preset::Multiplexer,
        Preset::Demultiplexer,
        Preset::SrLatch,
        Preset::BinaryClock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::HalfAdder => "half-adder",
            Preset::FullAdder => "full-adder",
            Preset::Comparator => "comparator",
            Preset::PriorityEncoder => "priority-encoder",
            Preset::Decoder => "decoder",
            Preset::Multiplexer => "multiplexer",
            Preset::Demultiplexer => "demultiplexer",
            Preset::SrLatch => "sr-latch",
            Preset::BinaryClock => "binary-clock",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::HalfAdder => "Half adder from an XOR and an AND gate",
            Preset::FullAdder => "Full adder built from XOR, AND and OR gates",
            Preset::Comparator => "4-bit magnitude comparator",
            Preset::PriorityEncoder => "8:3 priority encoder with valid flag",
            Preset::Decoder => "3:8 decoder with enable",
            Preset::Multiplexer => "4:1 multiplexer with enable",
            Preset::Demultiplexer => "1:4 demultiplexer from a 2:4 decoder and AND gates",
            Preset::SrLatch => "SR latch from cross-coupled NOR gates",
            Preset::BinaryClock => "Binary clock driving three 6-LED bars",
        }
    }

    pub fn build(&self) -> Result<Circuit> {
        match self {
            Preset::HalfAdder => half_adder(),
            Preset::FullAdder => full_adder(),
            Preset::Comparator => comparator(),
            Preset::PriorityEncoder => priority_encoder(),
            Preset::Decoder => decoder(),
            Preset::Multiplexer => multiplexer(),
            Preset::Demultiplexer => demultiplexer(),
            Preset::SrLatch => sr_latch(),
            Preset::BinaryClock => binary_clock(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| CircuitError::UnknownPreset(s.to_string()))
    }
}

/// Build a preset by name
pub fn preset(name: &str) -> Result<Circuit> {
    name.parse::<Preset>()?.build()
}

fn switch(circuit: &mut Circuit, label: &str, on: bool) -> NodeId {
    circuit.add_node(Node::switch(label, on))
}

fn switches(circuit: &mut Circuit, labels: &[String]) -> Vec<NodeId> {
    labels.iter().map(|label| switch(circuit, label, false)).collect()
}

/// LED fed from `source` at `handle`
fn led(circuit: &mut Circuit, label: &str, source: &str, handle: Option<&str>) -> Result<NodeId> {
    let id = circuit.add(NodeKind::Led, label);
    circuit.connect(source, handle, &id, Some("in"))?;
    Ok(id)
}

/// Two-input gate fed on `in1` and `in2`
fn gate(circuit: &mut Circuit, kind: NodeKind, label: &str, in1: &str, in2: &str) -> Result<NodeId> {
    let id = circuit.add(kind, label);
    circuit.connect(in1, None, &id, Some("in1"))?;
    circuit.connect(in2, None, &id, Some("in2"))?;
    Ok(id)
}

fn labels(prefix: &str, indices: impl Iterator<Item = usize>) -> Vec<String> {
    indices.map(|i| format!("{}{}", prefix, i)).collect()
}

fn half_adder() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let a = switch(&mut circuit, "Input A", false);
    let b = switch(&mut circuit, "Input B", false);
    let xor = gate(&mut circuit, NodeKind::Xor, "XOR", &a, &b)?;
    let and = gate(&mut circuit, NodeKind::And, "AND", &a, &b)?;
    led(&mut circuit, "Sum", &xor, None)?;
    led(&mut circuit, "Carry", &and, None)?;
    Ok(circuit)
}

fn full_adder() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let a = switch(&mut circuit, "Input A", false);
    let b = switch(&mut circuit, "Input B", false);
    let cin = switch(&mut circuit, "Carry In", false);
    let xor1 = gate(&mut circuit, NodeKind::Xor, "XOR 1", &a, &b)?;
    let and1 = gate(&mut circuit, NodeKind::And, "AND 1", &a, &b)?;
    let xor2 = gate(&mut circuit, NodeKind::Xor, "XOR 2", &xor1, &cin)?;
    let and2 = gate(&mut circuit, NodeKind::And, "AND 2", &xor1, &cin)?;
    let or = gate(&mut circuit, NodeKind::Or, "OR", &and1, &and2)?;
    led(&mut circuit, "Sum", &xor2, None)?;
    led(&mut circuit, "Carry Out", &or, None)?;
    Ok(circuit)
}

fn comparator() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let a = switches(&mut circuit, &labels("A", (0..4).rev()));
    let b = switches(&mut circuit, &labels("B", (0..4).rev()));
    let cmp = circuit.add(NodeKind::comparator(4), "4-bit Comparator");
    for (i, (a, b)) in a.iter().zip(&b).enumerate() {
        circuit.connect(a, None, &cmp, Some(format!("a{}", i).as_str()))?;
        circuit.connect(b, None, &cmp, Some(format!("b{}", i).as_str()))?;
    }
    led(&mut circuit, "A=B", &cmp, Some("equal"))?;
    led(&mut circuit, "A>B", &cmp, Some("greater"))?;
    led(&mut circuit, "A<B", &cmp, Some("less"))?;
    Ok(circuit)
}

fn priority_encoder() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let inputs = switches(&mut circuit, &labels("I", 0..8));
    let enc = circuit.add(NodeKind::encoder(8), "Priority Encoder");
    for (i, input) in inputs.iter().enumerate() {
        circuit.connect(input, None, &enc, Some(format!("in{}", i).as_str()))?;
    }
    for k in 0..3 {
        led(&mut circuit, &format!("Y{}", 2 - k), &enc, Some(format!("out{}", k).as_str()))?;
    }
    led(&mut circuit, "Valid", &enc, Some("valid"))?;
    Ok(circuit)
}

fn decoder() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let inputs = switches(&mut circuit, &labels("A", (0..3).rev()));
    let enable = switch(&mut circuit, "Enable", true);
    let dec = circuit.add(NodeKind::decoder(3), "3:8 Decoder");
    for (j, input) in inputs.iter().enumerate() {
        circuit.connect(input, None, &dec, Some(format!("in{}", j).as_str()))?;
    }
    circuit.connect(&enable, None, &dec, Some("enable"))?;
    for i in 0..8 {
        led(&mut circuit, &format!("Y{}", i), &dec, Some(format!("out{}", i).as_str()))?;
    }
    Ok(circuit)
}

fn multiplexer() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let data = switches(&mut circuit, &labels("D", 0..4));
    let select = switches(&mut circuit, &labels("S", (0..2).rev()));
    let enable = switch(&mut circuit, "Enable", true);
    let mux = circuit.add(NodeKind::multiplexer(2), "4:1 MUX");
    for (i, d) in data.iter().enumerate() {
        circuit.connect(d, None, &mux, Some(format!("data{}", i).as_str()))?;
    }
    for (j, s) in select.iter().enumerate() {
        circuit.connect(s, None, &mux, Some(format!("select{}", j).as_str()))?;
    }
    circuit.connect(&enable, None, &mux, Some("enable"))?;
    led(&mut circuit, "Output", &mux, Some("output"))?;
    Ok(circuit)
}

fn demultiplexer() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let data = switch(&mut circuit, "Data In", false);
    let select = switches(&mut circuit, &labels("S", (0..2).rev()));
    let enable = switch(&mut circuit, "Enable", true);
    let dec = circuit.add(NodeKind::decoder(2), "2:4 Decoder");
    for (j, s) in select.iter().enumerate() {
        circuit.connect(s, None, &dec, Some(format!("in{}", j).as_str()))?;
    }
    circuit.connect(&enable, None, &dec, Some("enable"))?;
    for i in 0..4 {
        let and = circuit.add(NodeKind::And, &format!("AND{}", i));
        circuit.connect(&data, None, &and, Some("in1"))?;
        circuit.connect(&dec, Some(format!("out{}", i).as_str()), &and, Some("in2"))?;
        led(&mut circuit, &format!("Y{}", i), &and, None)?;
    }
    Ok(circuit)
}

fn sr_latch() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let s = switch(&mut circuit, "S (Set)", false);
    let r = switch(&mut circuit, "R (Reset)", false);
    let nor1 = circuit.add(NodeKind::Nor, "NOR1");
    let nor2 = circuit.add(NodeKind::Nor, "NOR2");
    circuit.connect(&s, None, &nor1, Some("in1"))?;
    circuit.connect(&r, None, &nor2, Some("in1"))?;
    circuit.connect(&nor2, None, &nor1, Some("in2"))?;
    circuit.connect(&nor1, None, &nor2, Some("in2"))?;
    led(&mut circuit, "Q", &nor2, None)?;
    led(&mut circuit, "Q'", &nor1, None)?;
    Ok(circuit)
}

fn binary_clock() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let clock = circuit.add(NodeKind::BinaryClock, "Binary Clock");
    for (label, field) in [("Hours", "hour"), ("Minutes", "minute"), ("Seconds", "second")] {
        let bar = circuit.add(NodeKind::multi_led(6), label);
        for i in 0..6 {
            circuit.connect(
                &clock,
                Some(format!("{}{}", field, i).as_str()),
                &bar,
                Some(format!("led{}", i).as_str()),
            )?;
        }
    }
    Ok(circuit)
}
