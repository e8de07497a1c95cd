use tracing_subscriber::EnvFilter;
use vulcan::{Circuit, CircuitError, Signal, WireId};

/// Demo: an 8-input selector network. Three OR trees expose, in binary,
/// the index of the highest-numbered asserted input line:
/// Y0 = I1|I3|I5|I7, Y1 = I2|I3|I6|I7, Y2 = I4|I5|I6|I7.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pattern = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "00000100".to_string());
    let stimulus = match parse_pattern(&pattern) {
        Ok(bits) if bits.len() == 8 => bits,
        Ok(bits) => {
            eprintln!("expected 8 stimulus bits, got {}", bits.len());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("invalid stimulus {:?}: {}", pattern, e);
            std::process::exit(1);
        }
    };

    println!("Vulcan — discrete-event logic simulation");
    println!("stimulus: {}", pattern);
    println!();

    let mut c = Circuit::new();
    c.set_verbosity(2);

    let inputs: Vec<WireId> = (0..8).map(|i| c.add_wire(format!("I{}", i))).collect();

    let y0 = or_tree(&mut c, &[inputs[1], inputs[3], inputs[5], inputs[7]]);
    let y1 = or_tree(&mut c, &[inputs[2], inputs[3], inputs[6], inputs[7]]);
    let y2 = or_tree(&mut c, &[inputs[4], inputs[5], inputs[6], inputs[7]]);

    c.rename_wire(y0, "Y0");
    c.rename_wire(y1, "Y1");
    c.rename_wire(y2, "Y2");

    c.probe(y0);
    c.probe(y1);
    c.probe(y2);

    for (wire, signal) in inputs.iter().zip(&stimulus) {
        c.set_signal(*wire, *signal);
    }

    let report = c.propagate();
    print!("{}", report);
}

/// OR together a slice of wires, left to right.
fn or_tree(c: &mut Circuit, wires: &[WireId]) -> WireId {
    let (first, rest) = wires.split_first().expect("or_tree needs at least one wire");
    rest.iter().fold(*first, |acc, &w| c.or_gate(acc, w))
}

/// Parse a string of 0/1 digits into signals, rejecting anything else.
fn parse_pattern(pattern: &str) -> Result<Vec<Signal>, CircuitError> {
    pattern
        .chars()
        .map(|ch| {
            let bit = ch.to_digit(10).map(|d| d as u8).unwrap_or(u8::MAX);
            Signal::try_from(bit)
        })
        .collect()
}
