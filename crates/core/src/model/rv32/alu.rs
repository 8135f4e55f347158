//! Integer ALU for the reference core.
//!
//! Covers the RV32I register and immediate arithmetic groups. Shift amounts use the low five
//! bits of the second operand.

use super::opcodes::{funct3, funct7};

/// Shift amount mask for 32-bit operands.
const SHAMT_MASK: u32 = 0x1F;

/// ALU operation selected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Signed less-than (1 or 0).
    Slt,
    /// Unsigned less-than (1 or 0).
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

impl AluOp {
    /// Selects the operation for an OP (register-register) instruction.
    pub const fn from_reg(f3: u32, f7: u32) -> Self {
        let alt = f7 == funct7::ALT;
        match f3 {
            funct3::ADD_SUB if alt => Self::Sub,
            funct3::SLL => Self::Sll,
            funct3::SLT => Self::Slt,
            funct3::SLTU => Self::Sltu,
            funct3::XOR => Self::Xor,
            funct3::SRL_SRA if alt => Self::Sra,
            funct3::SRL_SRA => Self::Srl,
            funct3::OR => Self::Or,
            funct3::AND => Self::And,
            _ => Self::Add,
        }
    }

    /// Selects the operation for an OP-IMM instruction.
    ///
    /// There is no SUBI; only the shift-right group reads the alternate bit.
    pub const fn from_imm(f3: u32, f7: u32) -> Self {
        match f3 {
            funct3::ADD_SUB => Self::Add,
            _ => Self::from_reg(f3, f7),
        }
    }
}

/// Stateless integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes `op` on two 32-bit operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclesim_core::model::rv32::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        let shamt = b & SHAMT_MASK;
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a << shamt,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            AluOp::Xor => a ^ b,
            AluOp::Srl => a >> shamt,
            AluOp::Sra => ((a as i32) >> shamt) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
        }
    }

    /// Evaluates a conditional branch comparison.
    ///
    /// Reserved `funct3` encodings are never taken.
    pub const fn branch_taken(f3: u32, a: u32, b: u32) -> bool {
        match f3 {
            funct3::BEQ => a == b,
            funct3::BNE => a != b,
            funct3::BLT => (a as i32) < (b as i32),
            funct3::BGE => (a as i32) >= (b as i32),
            funct3::BLTU => a < b,
            funct3::BGEU => a >= b,
            _ => false,
        }
    }
}
