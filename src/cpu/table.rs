/*!
table.rs - The 256-entry opcode table.

Purpose
=======
Maps every opcode byte to an `InstructionDescriptor { mnemonic, mode,
cycles }`. The table is total: the 105 bytes the NMOS 6502 leaves undefined
decode to `Mnemonic::Illegal` with Implied addressing and a 2-cycle cost,
which the execution engine treats as a no-op.

Design
------
- `OPCODE_TABLE` is a `const`-built `[InstructionDescriptor; 256]`, so lookup
  is a single index and the table lives in read-only data.
- `Mnemonic` and `AddressingMode` are plain enums; dispatch matches on
  `Mnemonic` exhaustively, so adding a variant without a handler is a compile
  error rather than a silent fallthrough.
- `cycles` is the documented base count. Page-cross and branch penalties are
  added at dispatch time (see `cycles.rs`).

The rows below follow the published NMOS 6502 reference, grouped by
mnemonic rather than by opcode value to keep each family reviewable.
*/

use std::fmt;

use crate::cpu::addressing::AddressingMode;

/// One variant per documented mnemonic, plus `Illegal` for undefined bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Illegal,
}

/// How an instruction uses the byte at its effective address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Operand byte is read (loads, ALU, compares, read-modify-write).
    Read,
    /// Operand address is written without a prior read (stores).
    Write,
    /// Only the address matters (jumps, branches) or there is no operand.
    None,
}

impl Mnemonic {
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }

    /// Operand access kind; drives whether the resolver reads memory.
    pub fn access(self) -> Access {
        use Mnemonic::*;
        if self.is_rmw() {
            // The old value is read before the write-back.
            return Access::Read;
        }
        match self {
            Adc | And | Bit | Cmp | Cpx | Cpy | Eor | Lda | Ldx | Ldy | Ora | Sbc => Access::Read,
            Sta | Stx | Sty => Access::Write,
            _ => Access::None,
        }
    }

    /// Read-modify-write memory instructions (also valid on the accumulator
    /// for the shifts/rotates).
    pub fn is_rmw(self) -> bool {
        matches!(
            self,
            Mnemonic::Asl
                | Mnemonic::Lsr
                | Mnemonic::Rol
                | Mnemonic::Ror
                | Mnemonic::Inc
                | Mnemonic::Dec
        )
    }

    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub cycles: u8,
}

impl InstructionDescriptor {
    const ILLEGAL: Self = Self::new(Mnemonic::Illegal, AddressingMode::Implied, 2);

    pub const fn new(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Self {
        Self {
            mnemonic,
            mode,
            cycles,
        }
    }

    /// Instruction length in bytes (opcode + operand).
    pub fn byte_len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Descriptor for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static InstructionDescriptor {
    &OPCODE_TABLE[opcode as usize]
}

pub static OPCODE_TABLE: [InstructionDescriptor; 256] = build_table();

const fn build_table() -> [InstructionDescriptor; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [InstructionDescriptor::ILLEGAL; 256];

    macro_rules! op {
        ($code:expr, $m:expr, $mode:expr, $cycles:expr) => {
            t[$code] = InstructionDescriptor::new($m, $mode, $cycles);
        };
    }

    // Load / store
    op!(0xA9, Lda, Immediate, 2);
    op!(0xA5, Lda, Zeropage, 3);
    op!(0xB5, Lda, ZeropageX, 4);
    op!(0xAD, Lda, Absolute, 4);
    op!(0xBD, Lda, AbsoluteX, 4);
    op!(0xB9, Lda, AbsoluteY, 4);
    op!(0xA1, Lda, IndirectX, 6);
    op!(0xB1, Lda, IndirectY, 5);

    op!(0xA2, Ldx, Immediate, 2);
    op!(0xA6, Ldx, Zeropage, 3);
    op!(0xB6, Ldx, ZeropageY, 4);
    op!(0xAE, Ldx, Absolute, 4);
    op!(0xBE, Ldx, AbsoluteY, 4);

    op!(0xA0, Ldy, Immediate, 2);
    op!(0xA4, Ldy, Zeropage, 3);
    op!(0xB4, Ldy, ZeropageX, 4);
    op!(0xAC, Ldy, Absolute, 4);
    op!(0xBC, Ldy, AbsoluteX, 4);

    op!(0x85, Sta, Zeropage, 3);
    op!(0x95, Sta, ZeropageX, 4);
    op!(0x8D, Sta, Absolute, 4);
    op!(0x9D, Sta, AbsoluteX, 5);
    op!(0x99, Sta, AbsoluteY, 5);
    op!(0x81, Sta, IndirectX, 6);
    op!(0x91, Sta, IndirectY, 6);

    op!(0x86, Stx, Zeropage, 3);
    op!(0x96, Stx, ZeropageY, 4);
    op!(0x8E, Stx, Absolute, 4);

    op!(0x84, Sty, Zeropage, 3);
    op!(0x94, Sty, ZeropageX, 4);
    op!(0x8C, Sty, Absolute, 4);

    // Arithmetic
    op!(0x69, Adc, Immediate, 2);
    op!(0x65, Adc, Zeropage, 3);
    op!(0x75, Adc, ZeropageX, 4);
    op!(0x6D, Adc, Absolute, 4);
    op!(0x7D, Adc, AbsoluteX, 4);
    op!(0x79, Adc, AbsoluteY, 4);
    op!(0x61, Adc, IndirectX, 6);
    op!(0x71, Adc, IndirectY, 5);

    op!(0xE9, Sbc, Immediate, 2);
    op!(0xE5, Sbc, Zeropage, 3);
    op!(0xF5, Sbc, ZeropageX, 4);
    op!(0xED, Sbc, Absolute, 4);
    op!(0xFD, Sbc, AbsoluteX, 4);
    op!(0xF9, Sbc, AbsoluteY, 4);
    op!(0xE1, Sbc, IndirectX, 6);
    op!(0xF1, Sbc, IndirectY, 5);

    // Logical
    op!(0x29, And, Immediate, 2);
    op!(0x25, And, Zeropage, 3);
    op!(0x35, And, ZeropageX, 4);
    op!(0x2D, And, Absolute, 4);
    op!(0x3D, And, AbsoluteX, 4);
    op!(0x39, And, AbsoluteY, 4);
    op!(0x21, And, IndirectX, 6);
    op!(0x31, And, IndirectY, 5);

    op!(0x09, Ora, Immediate, 2);
    op!(0x05, Ora, Zeropage, 3);
    op!(0x15, Ora, ZeropageX, 4);
    op!(0x0D, Ora, Absolute, 4);
    op!(0x1D, Ora, AbsoluteX, 4);
    op!(0x19, Ora, AbsoluteY, 4);
    op!(0x01, Ora, IndirectX, 6);
    op!(0x11, Ora, IndirectY, 5);

    op!(0x49, Eor, Immediate, 2);
    op!(0x45, Eor, Zeropage, 3);
    op!(0x55, Eor, ZeropageX, 4);
    op!(0x4D, Eor, Absolute, 4);
    op!(0x5D, Eor, AbsoluteX, 4);
    op!(0x59, Eor, AbsoluteY, 4);
    op!(0x41, Eor, IndirectX, 6);
    op!(0x51, Eor, IndirectY, 5);

    op!(0x24, Bit, Zeropage, 3);
    op!(0x2C, Bit, Absolute, 4);

    // Shifts / rotates (Implied = accumulator form)
    op!(0x0A, Asl, Implied, 2);
    op!(0x06, Asl, Zeropage, 5);
    op!(0x16, Asl, ZeropageX, 6);
    op!(0x0E, Asl, Absolute, 6);
    op!(0x1E, Asl, AbsoluteX, 7);

    op!(0x4A, Lsr, Implied, 2);
    op!(0x46, Lsr, Zeropage, 5);
    op!(0x56, Lsr, ZeropageX, 6);
    op!(0x4E, Lsr, Absolute, 6);
    op!(0x5E, Lsr, AbsoluteX, 7);

    op!(0x2A, Rol, Implied, 2);
    op!(0x26, Rol, Zeropage, 5);
    op!(0x36, Rol, ZeropageX, 6);
    op!(0x2E, Rol, Absolute, 6);
    op!(0x3E, Rol, AbsoluteX, 7);

    op!(0x6A, Ror, Implied, 2);
    op!(0x66, Ror, Zeropage, 5);
    op!(0x76, Ror, ZeropageX, 6);
    op!(0x6E, Ror, Absolute, 6);
    op!(0x7E, Ror, AbsoluteX, 7);

    // Compare
    op!(0xC9, Cmp, Immediate, 2);
    op!(0xC5, Cmp, Zeropage, 3);
    op!(0xD5, Cmp, ZeropageX, 4);
    op!(0xCD, Cmp, Absolute, 4);
    op!(0xDD, Cmp, AbsoluteX, 4);
    op!(0xD9, Cmp, AbsoluteY, 4);
    op!(0xC1, Cmp, IndirectX, 6);
    op!(0xD1, Cmp, IndirectY, 5);

    op!(0xE0, Cpx, Immediate, 2);
    op!(0xE4, Cpx, Zeropage, 3);
    op!(0xEC, Cpx, Absolute, 4);

    op!(0xC0, Cpy, Immediate, 2);
    op!(0xC4, Cpy, Zeropage, 3);
    op!(0xCC, Cpy, Absolute, 4);

    // Increment / decrement
    op!(0xE6, Inc, Zeropage, 5);
    op!(0xF6, Inc, ZeropageX, 6);
    op!(0xEE, Inc, Absolute, 6);
    op!(0xFE, Inc, AbsoluteX, 7);

    op!(0xC6, Dec, Zeropage, 5);
    op!(0xD6, Dec, ZeropageX, 6);
    op!(0xCE, Dec, Absolute, 6);
    op!(0xDE, Dec, AbsoluteX, 7);

    op!(0xE8, Inx, Implied, 2);
    op!(0xC8, Iny, Implied, 2);
    op!(0xCA, Dex, Implied, 2);
    op!(0x88, Dey, Implied, 2);

    // Branches
    op!(0x90, Bcc, Relative, 2);
    op!(0xB0, Bcs, Relative, 2);
    op!(0xF0, Beq, Relative, 2);
    op!(0x30, Bmi, Relative, 2);
    op!(0xD0, Bne, Relative, 2);
    op!(0x10, Bpl, Relative, 2);
    op!(0x50, Bvc, Relative, 2);
    op!(0x70, Bvs, Relative, 2);

    // Jump / call / return
    op!(0x4C, Jmp, Absolute, 3);
    op!(0x6C, Jmp, Indirect, 5);
    op!(0x20, Jsr, Absolute, 6);
    op!(0x60, Rts, Implied, 6);
    op!(0x00, Brk, Implied, 7);
    op!(0x40, Rti, Implied, 6);

    // Stack
    op!(0x48, Pha, Implied, 3);
    op!(0x08, Php, Implied, 3);
    op!(0x68, Pla, Implied, 4);
    op!(0x28, Plp, Implied, 4);

    // Transfers
    op!(0xAA, Tax, Implied, 2);
    op!(0xA8, Tay, Implied, 2);
    op!(0x8A, Txa, Implied, 2);
    op!(0x98, Tya, Implied, 2);
    op!(0xBA, Tsx, Implied, 2);
    op!(0x9A, Txs, Implied, 2);

    // Flags
    op!(0x38, Sec, Implied, 2);
    op!(0xF8, Sed, Implied, 2);
    op!(0x78, Sei, Implied, 2);
    op!(0x18, Clc, Implied, 2);
    op!(0xD8, Cld, Implied, 2);
    op!(0x58, Cli, Implied, 2);
    op!(0xB8, Clv, Implied, 2);

    op!(0xEA, Nop, Implied, 2);

    t
}
