//! RV32I instruction decoder.
//!
//! Splits a 32-bit encoding into register indices, function codes, and the sign-extended
//! immediate for its format (I, S, B, U, J).

use super::opcodes::{OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_AUIPC, OP_LUI, OP_STORE};

/// Instruction width in bits.
const INSTRUCTION_WIDTH: u32 = 32;

const OPCODE_MASK: u32 = 0x7F;
const REG_MASK: u32 = 0x1F;
const FUNCT3_MASK: u32 = 0x7;
const FUNCT7_MASK: u32 = 0x7F;

/// I-Type immediate: bits 31-20.
const I_IMM_SHIFT: u32 = 20;

/// Mask selecting the U-Type immediate (bits 31-12, not shifted).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Fields of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoded {
    /// Raw encoding.
    pub raw: u32,
    /// Major opcode (bits 6-0).
    pub opcode: u32,
    /// Destination register.
    pub rd: usize,
    /// First source register.
    pub rs1: usize,
    /// Second source register.
    pub rs2: usize,
    /// Minor opcode (bits 14-12).
    pub funct3: u32,
    /// R-Type function code (bits 31-25).
    pub funct7: u32,
    /// Sign-extended immediate; zero for formats without one.
    pub imm: i32,
}

/// Decodes a 32-bit instruction.
///
/// # Arguments
///
/// * `inst` - The instruction encoding.
///
/// # Returns
///
/// The extracted fields. Unknown opcodes decode with a zero immediate.
pub const fn decode(inst: u32) -> Decoded {
    let opcode = inst & OPCODE_MASK;

    let imm = match opcode {
        OP_IMM | OP_LOAD | OP_JALR => i_imm(inst),
        OP_STORE => s_imm(inst),
        OP_BRANCH => b_imm(inst),
        OP_LUI | OP_AUIPC => (inst & U_IMM_MASK) as i32,
        OP_JAL => j_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: ((inst >> 7) & REG_MASK) as usize,
        rs1: ((inst >> 15) & REG_MASK) as usize,
        rs2: ((inst >> 20) & REG_MASK) as usize,
        funct3: (inst >> 12) & FUNCT3_MASK,
        funct7: (inst >> 25) & FUNCT7_MASK,
        imm,
    }
}

/// `imm[11:0] | rs1 | funct3 | rd | opcode`
const fn i_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const fn s_imm(inst: u32) -> i32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, 12)
}

/// `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const fn b_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;
    sign_extend(
        (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1),
        13,
    )
}

/// `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const fn j_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;
    sign_extend(
        (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1),
        21,
    )
}

/// Sign-extends the low `bits` of `val`.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
