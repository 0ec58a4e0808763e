/*!
cycles.rs - Cycle timing rules layered on top of the table's base counts.

Purpose
=======
`InstructionDescriptor::cycles` carries the documented base count. This
module holds the conditional extras the dispatcher adds at run time, plus the
fixed costs of the non-instruction operations (reset, interrupt entry, DMA).

Rules
=====
- Page cross: +1 for read-type instructions (LDA/LDX/LDY, ADC/SBC,
  AND/ORA/EOR, CMP) in AbsoluteX / AbsoluteY / IndirectY when the index add
  changed the high byte. Stores and read-modify-write opcodes already include
  the extra cycle in their base count and never pay it twice.
- Branches: +1 when taken, +1 more when the target is on a different page
  than the instruction following the branch.
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::table::Mnemonic;

/// Reset sequence cost.
pub const RESET_CYCLES: u32 = 7;
/// IRQ / NMI entry cost (BRK's 7 comes from the table).
pub const INTERRUPT_CYCLES: u32 = 7;
/// Fixed cost paid once, with the first DMA byte.
pub const DMA_SETUP_CYCLES: u32 = 2;
/// One read plus one write per transferred byte.
pub const DMA_BYTE_CYCLES: u32 = 2;
/// Full 256-byte transfer.
pub const DMA_TOTAL_CYCLES: u32 = DMA_SETUP_CYCLES + 256 * DMA_BYTE_CYCLES;

/// Instructions that pay the page-cross penalty in indexed modes.
#[inline]
pub(crate) fn pays_page_penalty(mnemonic: Mnemonic) -> bool {
    use Mnemonic::*;
    matches!(
        mnemonic,
        Lda | Ldx | Ldy | Adc | Sbc | And | Ora | Eor | Cmp
    )
}

/// Extra cycle owed for an indexed access that crossed a page.
#[inline]
pub(crate) fn page_cross_penalty(mnemonic: Mnemonic, mode: AddressingMode, crossed: bool) -> u32 {
    let indexed = matches!(
        mode,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
    );
    (crossed && indexed && pays_page_penalty(mnemonic)) as u32
}

/// Extra cycles for a resolved branch.
#[inline]
pub(crate) fn branch_penalty(taken: bool, crossed: bool) -> u32 {
    match (taken, crossed) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}
