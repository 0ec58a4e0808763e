#![doc = r#"
nescpu library crate.

A cycle-stepped emulation of the Ricoh 2A03 processor (a 6502 without
decimal mode) as used in the NES, with its OAM DMA unit.

Modules:
- bus: the `CpuBus` / `OamWriter` traits the core is generic over, plus a
  concrete NES-style bus (2 KiB mirrored RAM, OAM window, $4014 DMA port,
  flat program space)
- cpu: 6502 CPU core (facade + state + addressing + table + dispatch +
  interrupt / DMA sequencing)

In tests, a flat 64 KiB bus and boot helpers are available under
`crate::test_utils`.
"#]

// Core modules
pub mod bus;
pub mod cpu;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{CpuBus, OamWriter, SystemBus};
pub use cpu::core::Cpu;
pub use cpu::interrupt::Interrupt;
pub use cpu::state::{Pending, Status};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
