//! Reference single-cycle RV32I processor model.
//!
//! A behavioural stand-in for a compiled single-cycle processor description. It performs:
//! 1. **Combinational settle:** Fetch, decode, ALU, and next-PC logic computed from the current
//!    architectural state on every evaluation.
//! 2. **Clocked commit:** PC, register, and memory updates latched on the rising clock edge.
//! 3. **Asynchronous reset:** Active-low `rst_n` clears PC, registers, and data memory.
//!
//! Debug ports `x0`..`x31` and `data_mem_0` expose the architectural state for reports.

/// Integer ALU.
pub mod alu;

/// Instruction decoder.
pub mod decode;

/// `$readmemh` instruction memory images.
pub mod image;

/// Encoding constants.
pub mod opcodes;

/// Register file and data memory.
pub mod regfile;

use std::path::Path;

use tracing::trace;

use crate::common::{Level, PortValue, Result, SignalDecl};
use crate::model::CircuitModel;

use self::alu::{Alu, AluOp};
use self::decode::decode;
use self::opcodes::{
    OP_AUIPC, OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_REG, OP_STORE, funct3,
};
use self::regfile::{DataMemory, NUM_REGS, RegisterFile};

/// Width of every datapath signal and debug port.
pub const XLEN: u32 = 32;

/// Name of the data-memory debug port (word 0).
pub const DATA_MEM_PORT: &str = "data_mem_0";

/// Built-in program: exercises arithmetic, a store/load round trip, a taken branch, and ends
/// in a self-loop so extra cycles leave state untouched.
///
/// Final state: `x1=5 x2=10 x3=15 x4=5 x5=0 x6=15 x7=15 x10=42`, `data_mem_0=15`.
pub const DEMO_PROGRAM: [u32; 12] = [
    0x00500093, // addi x1, x0, 5
    0x00a00113, // addi x2, x0, 10
    0x002081b3, // add  x3, x1, x2
    0x40110233, // sub  x4, x2, x1
    0x0020f2b3, // and  x5, x1, x2
    0x0020e333, // or   x6, x1, x2
    0x00302023, // sw   x3, 0(x0)
    0x00002383, // lw   x7, 0(x0)
    0x00718463, // beq  x3, x7, +8
    0x00100513, // addi x10, x0, 1   (skipped)
    0x02a00513, // addi x10, x0, 42
    0x0000006f, // jal  x0, 0
];

/// Signals traced ahead of the register file, with their widths.
const CORE_SIGNALS: [(&str, u32); 7] = [
    ("clk", 1),
    ("rst_n", 1),
    ("pc", XLEN),
    ("instr", XLEN),
    ("alu_result", XLEN),
    ("reg_write", 1),
    ("mem_write", 1),
];

/// Outputs of the combinational datapath for the instruction at the current PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Datapath {
    /// Fetched instruction.
    pub instr: u32,
    /// PC latched on the next rising edge.
    pub next_pc: u32,
    /// ALU output (effective address for loads and stores).
    pub alu_result: u32,
    /// Register write-back `(rd, value)`, if any.
    pub writeback: Option<(usize, u32)>,
    /// Memory store `(address, value)`, if any.
    pub store: Option<(u32, u32)>,
}

/// Single-cycle RV32I core.
#[derive(Debug, Clone)]
pub struct SingleCycleCore {
    clk: Level,
    prev_clk: Level,
    rst_n: bool,
    pc: u32,
    imem: Vec<u32>,
    regs: RegisterFile,
    dmem: DataMemory,
    comb: Datapath,
}

impl SingleCycleCore {
    /// Creates a core whose instruction memory holds `program` from address zero.
    ///
    /// Inputs start with the clock low and reset asserted.
    pub fn new(program: Vec<u32>) -> Self {
        let mut core = Self {
            clk: Level::Low,
            prev_clk: Level::Low,
            rst_n: false,
            pc: 0,
            imem: program,
            regs: RegisterFile::new(),
            dmem: DataMemory::new(),
            comb: Datapath::default(),
        };
        core.comb = core.datapath();
        core
    }

    /// Creates a core running [`DEMO_PROGRAM`].
    pub fn demo() -> Self {
        Self::new(DEMO_PROGRAM.to_vec())
    }

    /// Creates a core from a `$readmemh` image file.
    ///
    /// # Errors
    ///
    /// See [`image::load_hex_image`].
    pub fn from_image_file(path: &Path) -> Result<Self> {
        let program = image::load_hex_image(path)?;
        tracing::info!(
            path = %path.display(),
            words = program.len(),
            "instruction memory loaded"
        );
        Ok(Self::new(program))
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Reads an integer register.
    pub const fn reg(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Reads the data-memory word containing `addr`.
    pub fn mem_word(&self, addr: u32) -> u32 {
        self.dmem.read(addr)
    }

    /// Settled datapath outputs.
    pub const fn datapath_outputs(&self) -> Datapath {
        self.comb
    }

    /// Instruction at `pc`; addresses past the image read as zero.
    fn fetch(&self, pc: u32) -> u32 {
        self.imem.get((pc >> 2) as usize).copied().unwrap_or(0)
    }

    /// Computes the combinational datapath from the current architectural state.
    fn datapath(&self) -> Datapath {
        let instr = self.fetch(self.pc);
        let d = decode(instr);
        let rs1 = self.regs.read(d.rs1);
        let rs2 = self.regs.read(d.rs2);
        let imm = d.imm as u32;
        let pc4 = self.pc.wrapping_add(4);
        let target = self.pc.wrapping_add(imm);

        let mut dp = Datapath {
            instr,
            next_pc: pc4,
            ..Datapath::default()
        };

        match d.opcode {
            OP_LUI => {
                dp.alu_result = imm;
                dp.writeback = Some((d.rd, imm));
            }
            OP_AUIPC => {
                dp.alu_result = target;
                dp.writeback = Some((d.rd, target));
            }
            OP_JAL => {
                dp.alu_result = target;
                dp.next_pc = target;
                dp.writeback = Some((d.rd, pc4));
            }
            OP_JALR => {
                let dest = rs1.wrapping_add(imm) & !1;
                dp.alu_result = dest;
                dp.next_pc = dest;
                dp.writeback = Some((d.rd, pc4));
            }
            OP_BRANCH => {
                dp.alu_result = Alu::execute(AluOp::Sub, rs1, rs2);
                if Alu::branch_taken(d.funct3, rs1, rs2) {
                    dp.next_pc = target;
                }
            }
            OP_LOAD if d.funct3 == funct3::LW => {
                let addr = rs1.wrapping_add(imm);
                dp.alu_result = addr;
                dp.writeback = Some((d.rd, self.dmem.read(addr)));
            }
            OP_STORE if d.funct3 == funct3::SW => {
                let addr = rs1.wrapping_add(imm);
                dp.alu_result = addr;
                dp.store = Some((addr, rs2));
            }
            OP_IMM => {
                let value = Alu::execute(AluOp::from_imm(d.funct3, d.funct7), rs1, imm);
                dp.alu_result = value;
                dp.writeback = Some((d.rd, value));
            }
            OP_REG => {
                let value = Alu::execute(AluOp::from_reg(d.funct3, d.funct7), rs1, rs2);
                dp.alu_result = value;
                dp.writeback = Some((d.rd, value));
            }
            // Unsupported encodings fall through to PC + 4.
            _ => {}
        }

        if matches!(dp.writeback, Some((0, _))) {
            dp.writeback = None;
        }
        dp
    }

    /// Latches the datapath outputs into architectural state.
    fn commit(&mut self) {
        let dp = self.datapath();
        trace!(pc = self.pc, instr = dp.instr, "commit");
        if let Some((rd, value)) = dp.writeback {
            self.regs.write(rd, value);
        }
        if let Some((addr, value)) = dp.store {
            self.dmem.write(addr, value);
        }
        self.pc = dp.next_pc;
    }

    fn reset_state(&mut self) {
        self.pc = 0;
        self.regs.reset();
        self.dmem.reset();
    }
}

impl Default for SingleCycleCore {
    fn default() -> Self {
        Self::demo()
    }
}

impl CircuitModel for SingleCycleCore {
    #[allow(
        clippy::unnecessary_literal_bound,
        reason = "signature is fixed by the trait"
    )]
    fn name(&self) -> &str {
        "single_cycle_processor"
    }

    fn set_clock(&mut self, level: Level) {
        self.clk = level;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.rst_n = !asserted;
    }

    fn eval(&mut self) {
        let rising = self.clk.is_high() && !self.prev_clk.is_high();
        self.prev_clk = self.clk;

        if !self.rst_n {
            self.reset_state();
        } else if rising {
            self.commit();
        }
        self.comb = self.datapath();
    }

    fn signals(&self) -> Vec<SignalDecl> {
        let mut decls: Vec<SignalDecl> = CORE_SIGNALS
            .iter()
            .map(|(name, width)| SignalDecl::new(*name, *width))
            .collect();
        decls.extend(self.debug_ports());
        decls
    }

    fn sample(&self, values: &mut Vec<u64>) {
        values.extend([
            self.clk.bit(),
            u64::from(self.rst_n),
            u64::from(self.pc),
            u64::from(self.comb.instr),
            u64::from(self.comb.alu_result),
            u64::from(self.comb.writeback.is_some()),
            u64::from(self.comb.store.is_some()),
        ]);
        values.extend((0..NUM_REGS).map(|i| u64::from(self.regs.read(i))));
        values.push(u64::from(self.dmem.read(0)));
    }

    fn debug_ports(&self) -> Vec<SignalDecl> {
        (0..NUM_REGS)
            .map(|i| SignalDecl::new(format!("x{i}"), XLEN))
            .chain(std::iter::once(SignalDecl::new(DATA_MEM_PORT, XLEN)))
            .collect()
    }

    fn debug_port(&self, name: &str) -> Option<PortValue> {
        let value = if name == DATA_MEM_PORT {
            self.dmem.read(0)
        } else {
            let idx: usize = name.strip_prefix('x')?.parse().ok()?;
            if idx >= NUM_REGS || name != format!("x{idx}") {
                return None;
            }
            self.regs.read(idx)
        };
        Some(PortValue {
            value: u64::from(value),
            width: XLEN,
        })
    }
}
