//! Benchmarks of the numeric bitwise opcode family's shared coercion
//! pipeline, driven through a minimal in-memory variable environment.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ejs_core::opcode::{execute, BitwiseOp, Completion, Frame, VariableEnvironment};

struct ArrayEnv {
    vars: [f64; 4],
}

impl VariableEnvironment for ArrayEnv {
    type Value = f64;

    fn get_variable(&mut self, idx: u8, _throw_on_missing: bool) -> Completion<f64> {
        Completion::Normal(self.vars[idx as usize])
    }

    fn set_variable(&mut self, _pc: usize, idx: u8, value: f64) -> Completion<f64> {
        self.vars[idx as usize] = value;
        Completion::Normal(value)
    }

    fn to_number(&mut self, value: &f64) -> Result<f64, f64> {
        Ok(*value)
    }

    fn number_value(&self, n: f64) -> f64 {
        n
    }
}

fn run_shl(env: &mut ArrayEnv) {
    let mut scratch = 0.0;
    let mut frame = Frame {
        pc: 0,
        scratch_number: &mut scratch,
        env,
    };
    execute(
        BitwiseOp::Shl {
            dst: 0,
            left: 1,
            right: 2,
        },
        &mut frame,
    );
}

fn shl_opcode(c: &mut Criterion) {
    let mut env = ArrayEnv {
        vars: [0.0, 3.0, 33.0, 0.0],
    };
    c.bench_function("Shl (opcode)", |b| b.iter(|| run_shl(black_box(&mut env))));
}

fn and_opcode(c: &mut Criterion) {
    c.bench_function("And (eval core)", |b| {
        b.iter(|| ejs_core::opcode::eval::and(black_box(0xFFFF_FFFF_u32 as f64), black_box(0x0F0F_0F0F_u32 as f64)))
    });
}

criterion_group!(bitwise, shl_opcode, and_opcode);
criterion_main!(bitwise);
