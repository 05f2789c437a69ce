//! The numeric bitwise opcode family: `And`, `Or`, `Xor`, `Shl`, `Sar`,
//! `Shr`, `Not`. Seven opcodes sharing one coercion pipeline — resolve
//! operand identifiers to values, `ToNumber`, `ToInt32`/`ToUint32`, apply
//! the bitwise op, store the result back through the variable environment.
//!
//! The opcode family is generic over its host environment rather than
//! calling free functions into a concrete object model: [`VariableEnvironment`]
//! is the Rust rendering of "external collaborator accessed through an
//! interface", the same way this lineage's interpreter threads a
//! `Context`/`Interpreter` parameter through its own opcode execution
//! functions instead of reaching for globals.

use std::convert::TryFrom;
use std::fmt;

/// The ECMA-262 completion-value sum type: `Normal(v) | Throw(v) | Return(v)
/// | Break | Continue | Empty`. Every opcode handler in this family returns
/// one of these instead of unwinding through a host exception mechanism.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<V> {
    Normal(V),
    Throw(V),
    Return(V),
    Break,
    Continue,
    Empty,
}

impl<V> Completion<V> {
    /// `true` for any variant other than `Normal`: the enclosing construct
    /// must stop evaluating and propagate this completion unchanged.
    #[must_use]
    pub fn is_abrupt(&self) -> bool {
        !matches!(self, Completion::Normal(_))
    }
}

/// Propagates an abrupt completion out of the current function, binding the
/// wrapped value on `Completion::Normal`. Mirrors the original engine's
/// `ECMA_TRY_CATCH`/`ECMA_FINALIZE` macro pair, translated into ownership:
/// every intermediate here is a bare stack value with no separate release
/// step, so ownership structurally subsumes what that macro pair existed to
/// guarantee (see DESIGN.md).
macro_rules! try_completion {
    ($e:expr) => {
        match $e {
            Completion::Normal(v) => v,
            other => return other,
        }
    };
}

/// The external collaborator this opcode family reads operands from and
/// writes results through. `Value` is left abstract — the ECMA object
/// model that would define it is out of scope for this crate (§1).
pub trait VariableEnvironment {
    type Value: Clone;

    /// Resolves an 8-bit operand index to a value. `throw_on_missing`
    /// mirrors unresolved-reference semantics (reading an undeclared
    /// binding in non-strict code is not always an error).
    fn get_variable(&mut self, idx: u8, throw_on_missing: bool) -> Completion<Self::Value>;

    /// Stores `value` at `idx`. `pc` is the opcode's program counter, passed
    /// through for diagnostics (e.g. attributing a `TypeError` on a
    /// const-reassignment to the instruction that caused it).
    fn set_variable(&mut self, pc: usize, idx: u8, value: Self::Value) -> Completion<Self::Value>;

    /// `ToNumber` (ECMA-262 §9.3). Only `Normal`/`Throw` are reachable
    /// outcomes for this algorithm, so this models the general completion
    /// sum type as a plain `Result` rather than the full `Completion<T>` —
    /// a deliberate, documented simplification (see DESIGN.md).
    fn to_number(&mut self, value: &Self::Value) -> Result<f64, Self::Value>;

    /// Wraps a computed `f64` back into a host value so it can be handed to
    /// `set_variable`.
    fn number_value(&self, n: f64) -> Self::Value;
}

/// ECMA-262 §9.5 `ToInt32`.
#[must_use]
pub fn to_int32(n: f64) -> i32 {
    to_uint32(n) as i32
}

/// ECMA-262 §9.6 `ToUint32`.
#[must_use]
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    let pos_int = n.trunc();
    // `rem_euclid` keeps the result in `[0, 2^32)` regardless of sign,
    // matching "modulo 2^32" in the spec text.
    let int32_bit = pos_int.rem_euclid(4_294_967_296.0);
    int32_bit as u32
}

#[must_use]
pub fn int32_to_number(n: i32) -> f64 {
    f64::from(n)
}

#[must_use]
pub fn uint32_to_number(n: u32) -> f64 {
    f64::from(n)
}

/// Masks a `ToUint32`-coerced shift count to 5 bits: "shift by 33 equals
/// shift by 1".
fn shift_count(n: u32) -> u32 {
    n & 0x1F
}

/// The pure numeric core of each opcode, decoupled from the environment —
/// this is what §8's `exec(op, a, b)` testable properties exercise
/// directly, and what the environment-threading handlers below call after
/// resolving and coercing their operands.
pub mod eval {
    use super::{shift_count, to_int32, to_uint32};

    #[must_use]
    pub fn and(a: f64, b: f64) -> f64 {
        super::int32_to_number((to_uint32(a) & to_uint32(b)) as i32)
    }

    #[must_use]
    pub fn or(a: f64, b: f64) -> f64 {
        super::int32_to_number((to_uint32(a) | to_uint32(b)) as i32)
    }

    #[must_use]
    pub fn xor(a: f64, b: f64) -> f64 {
        super::int32_to_number((to_uint32(a) ^ to_uint32(b)) as i32)
    }

    #[must_use]
    pub fn shl(a: f64, b: f64) -> f64 {
        let count = shift_count(to_uint32(b));
        super::int32_to_number(to_int32(a).wrapping_shl(count))
    }

    #[must_use]
    pub fn sar(a: f64, b: f64) -> f64 {
        let count = shift_count(to_uint32(b));
        super::int32_to_number(to_int32(a).wrapping_shr(count))
    }

    #[must_use]
    pub fn shr(a: f64, b: f64) -> f64 {
        let count = shift_count(to_uint32(b));
        super::uint32_to_number(to_uint32(a).wrapping_shr(count))
    }

    #[must_use]
    pub fn not(a: f64) -> f64 {
        super::int32_to_number(!to_uint32(a) as i32)
    }
}

/// One of the seven numeric bitwise opcodes, already decoded from its wire
/// operands. Binary opcodes carry `{dst, left, right}`; `Not` carries only
/// `{dst, right}` (its wire encoding still reserves a `left` byte, fixed at
/// zero, to keep every opcode in this family at a uniform 4 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseOp {
    And { dst: u8, left: u8, right: u8 },
    Or { dst: u8, left: u8, right: u8 },
    Xor { dst: u8, left: u8, right: u8 },
    Shl { dst: u8, left: u8, right: u8 },
    Sar { dst: u8, left: u8, right: u8 },
    Shr { dst: u8, left: u8, right: u8 },
    Not { dst: u8, right: u8 },
}

/// The one-byte tag of the wire format's first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpcodeTag {
    And = 0,
    Or = 1,
    Xor = 2,
    Shl = 3,
    Sar = 4,
    Shr = 5,
    Not = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOpcodeError {
    value: u8,
}

impl fmt::Display for InvalidOpcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bitwise opcode tag: {:#04x}", self.value)
    }
}

impl std::error::Error for InvalidOpcodeError {}

impl TryFrom<u8> for OpcodeTag {
    type Error = InvalidOpcodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OpcodeTag::And),
            1 => Ok(OpcodeTag::Or),
            2 => Ok(OpcodeTag::Xor),
            3 => Ok(OpcodeTag::Shl),
            4 => Ok(OpcodeTag::Sar),
            5 => Ok(OpcodeTag::Shr),
            6 => Ok(OpcodeTag::Not),
            _ => Err(InvalidOpcodeError { value }),
        }
    }
}

impl BitwiseOp {
    /// Decodes the 4-byte wire format `{opcode_tag, dst, left, right}`
    /// (`Not` ignores `left`, which the code generator is required to emit
    /// as zero).
    pub fn decode(bytes: [u8; 4]) -> Result<Self, InvalidOpcodeError> {
        let [tag, dst, left, right] = bytes;
        Ok(match OpcodeTag::try_from(tag)? {
            OpcodeTag::And => BitwiseOp::And { dst, left, right },
            OpcodeTag::Or => BitwiseOp::Or { dst, left, right },
            OpcodeTag::Xor => BitwiseOp::Xor { dst, left, right },
            OpcodeTag::Shl => BitwiseOp::Shl { dst, left, right },
            OpcodeTag::Sar => BitwiseOp::Sar { dst, left, right },
            OpcodeTag::Shr => BitwiseOp::Shr { dst, left, right },
            OpcodeTag::Not => BitwiseOp::Not { dst, right },
        })
    }

    #[must_use]
    pub fn dst(self) -> u8 {
        match self {
            BitwiseOp::And { dst, .. }
            | BitwiseOp::Or { dst, .. }
            | BitwiseOp::Xor { dst, .. }
            | BitwiseOp::Shl { dst, .. }
            | BitwiseOp::Sar { dst, .. }
            | BitwiseOp::Shr { dst, .. }
            | BitwiseOp::Not { dst, .. } => dst,
        }
    }
}

/// The interpreter frame as seen by this opcode family: `{pc,
/// scratch_number, env}`. `scratch_number` is a transient slot the
/// coercion pipeline writes its intermediate `f64` into before handing the
/// final value to `set_variable` — borrowed mutably for the duration of one
/// opcode and released before `execute` returns, per the resource model.
pub struct Frame<'a, E: VariableEnvironment> {
    pub pc: usize,
    pub scratch_number: &'a mut f64,
    pub env: &'a mut E,
}

impl<'a, E: VariableEnvironment> Frame<'a, E> {
    fn resolve(&mut self, idx: u8) -> Completion<f64> {
        let value = try_completion!(self.env.get_variable(idx, true));
        match self.env.to_number(&value) {
            Ok(n) => Completion::Normal(n),
            Err(exc) => Completion::Throw(exc),
        }
    }

    fn store(&mut self, dst: u8, result: f64) -> Completion<E::Value> {
        *self.scratch_number = result;
        let value = self.env.number_value(result);
        self.env.set_variable(self.pc, dst, value)
    }
}

/// Executes one bitwise opcode against `frame`: resolve operands, coerce,
/// compute, store, advance `pc`. Returns the completion of the store (the
/// final `set_variable` call), matching "on success, advance program
/// counter by one and return the result of the store".
pub fn execute<E: VariableEnvironment>(op: BitwiseOp, frame: &mut Frame<'_, E>) -> Completion<E::Value> {
    let result = match op {
        BitwiseOp::And { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::and(a, b)
        }
        BitwiseOp::Or { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::or(a, b)
        }
        BitwiseOp::Xor { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::xor(a, b)
        }
        BitwiseOp::Shl { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::shl(a, b)
        }
        BitwiseOp::Sar { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::sar(a, b)
        }
        BitwiseOp::Shr { left, right, .. } => {
            let a = try_completion!(frame.resolve(left));
            let b = try_completion!(frame.resolve(right));
            eval::shr(a, b)
        }
        BitwiseOp::Not { right, .. } => {
            let a = try_completion!(frame.resolve(right));
            eval::not(a)
        }
    };

    let completion = frame.store(op.dst(), result);
    if !completion.is_abrupt() {
        frame.pc += 1;
    }
    completion
}
