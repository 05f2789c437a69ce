//! Black-box end-to-end scenarios for the numeric bitwise opcode family,
//! driven through a small in-memory variable environment rather than a
//! real ECMA object model (out of scope for this crate).

use ejs_core::opcode::{execute, BitwiseOp, Completion, Frame, VariableEnvironment};
use std::collections::HashMap;

#[derive(Default)]
struct MapEnv {
    vars: HashMap<u8, f64>,
}

impl VariableEnvironment for MapEnv {
    type Value = f64;

    fn get_variable(&mut self, idx: u8, throw_on_missing: bool) -> Completion<f64> {
        match self.vars.get(&idx) {
            Some(&v) => Completion::Normal(v),
            None if throw_on_missing => Completion::Throw(f64::NAN),
            None => Completion::Normal(0.0),
        }
    }

    fn set_variable(&mut self, _pc: usize, idx: u8, value: f64) -> Completion<f64> {
        self.vars.insert(idx, value);
        Completion::Normal(value)
    }

    fn to_number(&mut self, value: &f64) -> Result<f64, f64> {
        Ok(*value)
    }

    fn number_value(&self, n: f64) -> f64 {
        n
    }
}

fn exec_into(env: &mut MapEnv, op: BitwiseOp, pc: usize) -> (Completion<f64>, usize) {
    let mut scratch = 0.0;
    let mut frame = Frame {
        pc,
        scratch_number: &mut scratch,
        env,
    };
    let completion = execute(op, &mut frame);
    (completion, frame.pc)
}

#[test]
fn shl_opcode_end_to_end_scenario() {
    // `Shl dst=0 left=1 right=2` with idx=1 -> 3, idx=2 -> 33: 3 << 1 = 6.
    let mut env = MapEnv::default();
    env.vars.insert(1, 3.0);
    env.vars.insert(2, 33.0);

    let (completion, pc) = exec_into(
        &mut env,
        BitwiseOp::Shl {
            dst: 0,
            left: 1,
            right: 2,
        },
        0,
    );

    assert_eq!(completion, Completion::Normal(6.0));
    assert_eq!(env.vars[&0], 6.0);
    assert_eq!(pc, 1);
}

#[test]
fn and_or_xor_through_the_environment() {
    let mut env = MapEnv::default();
    env.vars.insert(1, 0b1100 as f64);
    env.vars.insert(2, 0b1010 as f64);

    let (_, _) = exec_into(
        &mut env,
        BitwiseOp::And {
            dst: 0,
            left: 1,
            right: 2,
        },
        0,
    );
    assert_eq!(env.vars[&0], 0b1000 as f64);

    let (_, _) = exec_into(
        &mut env,
        BitwiseOp::Or {
            dst: 3,
            left: 1,
            right: 2,
        },
        1,
    );
    assert_eq!(env.vars[&3], 0b1110 as f64);

    let (_, pc) = exec_into(
        &mut env,
        BitwiseOp::Xor {
            dst: 4,
            left: 1,
            right: 2,
        },
        2,
    );
    assert_eq!(env.vars[&4], 0b0110 as f64);
    assert_eq!(pc, 3);
}

#[test]
fn not_complements_a_single_operand() {
    let mut env = MapEnv::default();
    env.vars.insert(5, 0.0);

    let (completion, pc) = exec_into(&mut env, BitwiseOp::Not { dst: 0, right: 5 }, 0);
    assert_eq!(completion, Completion::Normal(-1.0));
    assert_eq!(pc, 1);
}

#[test]
fn missing_operand_throws_without_advancing_pc_or_storing() {
    let mut env = MapEnv::default();
    let (completion, pc) = exec_into(&mut env, BitwiseOp::Not { dst: 0, right: 9 }, 7);
    assert!(matches!(completion, Completion::Throw(_)));
    assert_eq!(pc, 7);
    assert!(!env.vars.contains_key(&0));
}

#[test]
fn wire_format_round_trips_through_decode() {
    let op = BitwiseOp::decode([0, 2, 0, 1]).unwrap();
    assert_eq!(
        op,
        BitwiseOp::And {
            dst: 2,
            left: 0,
            right: 1
        }
    );

    let not_op = BitwiseOp::decode([6, 3, 0, 4]).unwrap();
    assert_eq!(not_op, BitwiseOp::Not { dst: 3, right: 4 });

    assert!(BitwiseOp::decode([7, 0, 0, 0]).is_err());
}

#[test]
fn shift_by_33_is_shift_by_1_end_to_end() {
    let mut a = MapEnv::default();
    a.vars.insert(1, 8.0);
    a.vars.insert(2, 33.0);
    exec_into(
        &mut a,
        BitwiseOp::Sar {
            dst: 0,
            left: 1,
            right: 2,
        },
        0,
    );

    let mut b = MapEnv::default();
    b.vars.insert(1, 8.0);
    b.vars.insert(2, 1.0);
    exec_into(
        &mut b,
        BitwiseOp::Sar {
            dst: 0,
            left: 1,
            right: 2,
        },
        0,
    );

    assert_eq!(a.vars[&0], b.vars[&0]);
}
