//! RV32I encoding constants.
//!
//! Major opcodes (bits 6-0), `funct3` minor opcodes (bits 14-12), and the `funct7` alternate
//! encoding bit used by SUB and SRA.

/// Load instructions (LW).
pub const OP_LOAD: u32 = 0b0000011;
/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;
/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;
/// Store instructions (SW).
pub const OP_STORE: u32 = 0b0100011;
/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;
/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;
/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;
/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;
/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// `funct3` values.
pub mod funct3 {
    /// Load Word.
    pub const LW: u32 = 0b010;
    /// Store Word.
    pub const SW: u32 = 0b010;

    /// Branch Equal.
    pub const BEQ: u32 = 0b000;
    /// Branch Not Equal.
    pub const BNE: u32 = 0b001;
    /// Branch Less Than (signed).
    pub const BLT: u32 = 0b100;
    /// Branch Greater or Equal (signed).
    pub const BGE: u32 = 0b101;
    /// Branch Less Than Unsigned.
    pub const BLTU: u32 = 0b110;
    /// Branch Greater or Equal Unsigned.
    pub const BGEU: u32 = 0b111;

    /// Add / Subtract.
    pub const ADD_SUB: u32 = 0b000;
    /// Shift Left Logical.
    pub const SLL: u32 = 0b001;
    /// Set Less Than (signed).
    pub const SLT: u32 = 0b010;
    /// Set Less Than Unsigned.
    pub const SLTU: u32 = 0b011;
    /// Bitwise XOR.
    pub const XOR: u32 = 0b100;
    /// Shift Right Logical / Arithmetic.
    pub const SRL_SRA: u32 = 0b101;
    /// Bitwise OR.
    pub const OR: u32 = 0b110;
    /// Bitwise AND.
    pub const AND: u32 = 0b111;
}

/// `funct7` values.
pub mod funct7 {
    /// Default operation (ADD, SRL).
    pub const DEFAULT: u32 = 0b0000000;
    /// Alternate operation (SUB, SRA).
    pub const ALT: u32 = 0b0100000;
}
