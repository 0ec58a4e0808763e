/*!
cpu::mod - Public façade for the 2A03 / 6502 CPU core.

Layout:

```text
state.rs        - Register file, status / pending flag sets.
regs.rs         - `CpuRegs` trait the execution helpers are generic over.
stack.rs        - Page-$01 push / pull helpers.
addressing.rs   - Addressing modes and operand resolution.
table.rs        - 256-entry opcode table (mnemonic, mode, base cycles).
cycles.rs       - Page-cross / branch extras and fixed sequence costs.
execute.rs      - Instruction semantic helpers (ALU, flags, RMW).
dispatch/       - Per-family handlers behind one exhaustive match.
interrupt.rs    - Reset / IRQ / NMI sequencing.
dma.rs          - OAM DMA transfer progress.
core/           - `Cpu`: the per-clock step driver.
```

Downstream code should go through `Cpu`; the internal module layout may
change.

Feature flags:
- `trace-fetch`: `log::trace!` one line per dispatched instruction.

Usage:
```rust
use nescpu::{Cpu, SystemBus};

let mut bus = SystemBus::new();
bus.load(0x8000, &[0xA9, 0x01]).unwrap();
bus.set_vectors(0x8000, 0x8000, 0x8000);

let mut cpu = Cpu::new();
cpu.reset(&mut bus);
assert_eq!(cpu.step_instruction(&mut bus), 7); // reset sequence
cpu.step(&mut bus); // LDA #$01 dispatches on this clock
assert_eq!(cpu.a(), 0x01);
assert_eq!(cpu.cycles(), 1);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub mod dma;
pub(crate) mod execute;
pub mod interrupt;
pub mod regs;
pub(crate) mod stack;
pub mod state;
pub mod table;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Status / Pending flag sets
pub use crate::cpu::addressing::{AddressingMode, FetchContext};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::dma::TransferContext;
pub use crate::cpu::interrupt::{Interrupt, InterruptState};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{CpuState, Pending, Status};
pub use crate::cpu::table::{InstructionDescriptor, Mnemonic, OPCODE_TABLE, lookup};
