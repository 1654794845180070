//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the structures produced by the decoder:
//! the instruction class, the five immediate views, and the decoded field set.

use crate::isa::rv32i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Bit 5 distinguishes the alternate encodings (SUB, SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Instruction class, determined solely by the opcode field.
///
/// The classes are mutually exclusive. Opcodes outside this list decode to no class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Register-register arithmetic.
    AluReg,
    /// Register-immediate arithmetic.
    AluImm,
    /// Conditional branch.
    Branch,
    /// Jump and link register.
    Jalr,
    /// Jump and link.
    Jal,
    /// Add upper immediate to PC.
    Auipc,
    /// Load upper immediate.
    Lui,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// ECALL/EBREAK and the rest of the system opcode; executes as a halt.
    System,
}

impl InstructionClass {
    /// Every class, in opcode-table order.
    pub const ALL: [Self; 10] = [
        Self::AluReg,
        Self::AluImm,
        Self::Branch,
        Self::Jalr,
        Self::Jal,
        Self::Auipc,
        Self::Lui,
        Self::Load,
        Self::Store,
        Self::System,
    ];

    /// Maps a 7-bit opcode to its class, or `None` for undecodable opcodes.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::AluReg),
            opcodes::OP_IMM => Some(Self::AluImm),
            opcodes::OP_BRANCH => Some(Self::Branch),
            opcodes::OP_JALR => Some(Self::Jalr),
            opcodes::OP_JAL => Some(Self::Jal),
            opcodes::OP_AUIPC => Some(Self::Auipc),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_LOAD => Some(Self::Load),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_SYSTEM => Some(Self::System),
            _ => None,
        }
    }

    /// Returns the major opcode of this class.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::AluReg => opcodes::OP_REG,
            Self::AluImm => opcodes::OP_IMM,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Jalr => opcodes::OP_JALR,
            Self::Jal => opcodes::OP_JAL,
            Self::Auipc => opcodes::OP_AUIPC,
            Self::Lui => opcodes::OP_LUI,
            Self::Load => opcodes::OP_LOAD,
            Self::Store => opcodes::OP_STORE,
            Self::System => opcodes::OP_SYSTEM,
        }
    }
}

/// The five immediate views of an instruction word.
///
/// All five are computed for every instruction, whatever its class; each is the
/// 32-bit two's-complement value after sign extension from instruction bit 31.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Immediates {
    /// U-type: bits 31-12 in place, low 12 bits zero.
    pub u: u32,
    /// I-type: bits 31-20, sign-extended.
    pub i: u32,
    /// S-type: bits 31-25 and 11-7, sign-extended.
    pub s: u32,
    /// B-type: even branch offset, sign-extended.
    pub b: u32,
    /// J-type: even jump offset, sign-extended.
    pub j: u32,
}

/// Decoded instruction structure containing all extracted fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Instruction class, or `None` when the opcode is not decodable.
    pub class: Option<InstructionClass>,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// All immediate views.
    pub imm: Immediates,
}

impl Decoded {
    fn is(&self, class: InstructionClass) -> bool {
        self.class == Some(class)
    }

    /// Register-register ALU instruction.
    pub fn is_alu_reg(&self) -> bool {
        self.is(InstructionClass::AluReg)
    }

    /// Register-immediate ALU instruction.
    pub fn is_alu_imm(&self) -> bool {
        self.is(InstructionClass::AluImm)
    }

    /// Conditional branch.
    pub fn is_branch(&self) -> bool {
        self.is(InstructionClass::Branch)
    }

    /// JALR.
    pub fn is_jalr(&self) -> bool {
        self.is(InstructionClass::Jalr)
    }

    /// JAL.
    pub fn is_jal(&self) -> bool {
        self.is(InstructionClass::Jal)
    }

    /// AUIPC.
    pub fn is_auipc(&self) -> bool {
        self.is(InstructionClass::Auipc)
    }

    /// LUI.
    pub fn is_lui(&self) -> bool {
        self.is(InstructionClass::Lui)
    }

    /// Load.
    pub fn is_load(&self) -> bool {
        self.is(InstructionClass::Load)
    }

    /// Store.
    pub fn is_store(&self) -> bool {
        self.is(InstructionClass::Store)
    }

    /// System opcode (halt).
    pub fn is_system(&self) -> bool {
        self.is(InstructionClass::System)
    }

    /// Returns the class flags in [`InstructionClass::ALL`] order.
    pub fn flags(&self) -> [bool; 10] {
        InstructionClass::ALL.map(|class| self.is(class))
    }
}
