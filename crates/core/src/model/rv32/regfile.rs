//! Register file and data memory of the reference core.

/// Number of integer registers.
pub const NUM_REGS: usize = 32;

/// Words of data memory.
pub const DMEM_WORDS: usize = 256;

/// Integer register file. Register `x0` is hardwired to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register at zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads register `idx`; `x0` always reads zero.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx % NUM_REGS] }
    }

    /// Writes register `idx`; writes to `x0` are ignored.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx % NUM_REGS] = val;
        }
    }

    /// Clears every register.
    pub const fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Word-addressed data memory. Addresses wrap at the memory size; the low two bits are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<u32>,
}

impl DataMemory {
    /// Creates a zeroed memory of [`DMEM_WORDS`] words.
    pub fn new() -> Self {
        Self {
            words: vec![0; DMEM_WORDS],
        }
    }

    const fn index(&self, addr: u32) -> usize {
        (addr >> 2) as usize % self.words.len()
    }

    /// Reads the word containing byte address `addr`.
    pub fn read(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    /// Writes the word containing byte address `addr`.
    pub fn write(&mut self, addr: u32, val: u32) {
        let idx = self.index(addr);
        self.words[idx] = val;
    }

    /// Clears every word.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}
