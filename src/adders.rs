/// Composite adders built from the gate primitives.
///
/// Pure composition: nothing here touches the agenda or the dispatch
/// machinery directly — only the public wire/gate contracts.

use crate::circuit::Circuit;
use crate::wire::WireId;

/// Wire a half adder: `sum = a XOR b`, `carry = a AND b`.
pub fn half_adder(c: &mut Circuit, a: WireId, b: WireId, sum: WireId, carry: WireId) {
    c.and_gate_into(a, b, carry);
    c.xor_gate_into(a, b, sum);
}

/// Wire a full adder: `sum = a + b + c_in (mod 2)`, `c_out` the carry.
///
/// Built as two half adders plus an OR over their carries, with fresh
/// internal wires for the first stage's sum and both carries.
pub fn full_adder(
    c: &mut Circuit,
    a: WireId,
    b: WireId,
    c_in: WireId,
    sum: WireId,
    c_out: WireId,
) {
    let s = c.add_wire("s");
    let c1 = c.add_wire("c1");
    let c2 = c.add_wire("c2");
    half_adder(c, b, c_in, s, c1);
    half_adder(c, a, s, sum, c2);
    c.or_gate_into(c1, c2, c_out);
}
