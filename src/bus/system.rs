/*!
SystemBus - concrete CPU address decoder used by the demo binary and tests.

Address map (CPU):
- $0000-$07FF: 2KB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF
- $2000-$3FFF: picture unit registers, mirrored every 8 bytes. Only OAMADDR
               ($2003) and OAMDATA ($2004) are modeled; the rest read 0 and
               ignore writes.
- $4000-$4013, $4015-$401F: APU / controller / test registers (stubbed: read 0)
- $4014: OAM DMA - a write latches the source page; the CPU collects it via
         `CpuBus::take_dma_request` and starts the transfer.
- $4020-$FFFF: program space. Stands in for cartridge PRG RAM/ROM; flat and
               writable, filled by `load`.

Cartridge mapping and bank switching are out of scope for this crate; a real
cartridge would sit behind the same `CpuBus` trait.
*/

use anyhow::{Result, bail};
use log::debug;

use crate::bus::oam::ObjectMemory;
use crate::bus::ram::Ram;
use crate::bus::{CpuBus, OAM_DMA, OamWriter};
use crate::cpu::interrupt::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

pub const PROGRAM_START: u16 = 0x4020;
const PROGRAM_SIZE: usize = 0x1_0000 - PROGRAM_START as usize;

pub struct SystemBus {
    ram: Ram,
    pub oam: ObjectMemory,
    program: Vec<u8>,
    dma_request: Option<u8>,
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBus {
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            oam: ObjectMemory::new(),
            program: vec![0; PROGRAM_SIZE],
            dma_request: None,
        }
    }

    /// Clear RAM, OAM and any latched DMA request. Program space is kept.
    pub fn reset(&mut self) {
        self.ram.reset();
        self.oam.reset();
        self.dma_request = None;
    }

    /// Copy `image` into program space starting at `addr`.
    pub fn load(&mut self, addr: u16, image: &[u8]) -> Result<()> {
        if addr < PROGRAM_START {
            bail!(
                "load address ${:04X} is below program space (${:04X})",
                addr,
                PROGRAM_START
            );
        }
        let start = (addr - PROGRAM_START) as usize;
        let end = start + image.len();
        if end > PROGRAM_SIZE {
            bail!(
                "image of {} bytes at ${:04X} overruns the address space by {} bytes",
                image.len(),
                addr,
                end - PROGRAM_SIZE
            );
        }
        self.program[start..end].copy_from_slice(image);
        debug!("loaded {} bytes at ${:04X}", image.len(), addr);
        Ok(())
    }

    /// Write the NMI / RESET / IRQ vectors at $FFFA-$FFFF.
    pub fn set_vectors(&mut self, nmi: u16, reset: u16, irq: u16) {
        for (vector, target) in [(NMI_VECTOR, nmi), (RESET_VECTOR, reset), (IRQ_VECTOR, irq)] {
            self.write(vector, target as u8);
            self.write(vector + 1, (target >> 8) as u8);
        }
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    #[inline]
    fn program_index(addr: u16) -> usize {
        (addr - PROGRAM_START) as usize
    }
}

impl CpuBus for SystemBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => match addr & 0x0007 {
                0x0004 => self.oam.read_data(),
                _ => 0,
            },
            0x4000..=0x401F => 0,
            PROGRAM_START..=0xFFFF => self.program[Self::program_index(addr)],
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, value),
            0x2000..=0x3FFF => match addr & 0x0007 {
                0x0003 => self.oam.set_addr(value),
                0x0004 => self.oam.write_data(value),
                _ => {}
            },
            OAM_DMA => self.dma_request = Some(value),
            0x4000..=0x401F => {}
            PROGRAM_START..=0xFFFF => self.program[Self::program_index(addr)] = value,
        }
    }

    fn take_dma_request(&mut self) -> Option<u8> {
        self.dma_request.take()
    }
}

impl OamWriter for SystemBus {
    #[inline]
    fn write_oam(&mut self, index: u8, value: u8) {
        self.oam.write_oam(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_mirrors_through_bus() {
        let mut bus = SystemBus::new();
        bus.write(0x0002, 0x7E);
        assert_eq!(bus.read(0x1002), 0x7E);
    }

    #[test]
    fn oam_registers_are_mirrored() {
        let mut bus = SystemBus::new();
        bus.write(0x2003, 0x10);
        bus.write(0x200C, 0xAB); // mirror of $2004
        assert_eq!(bus.oam.as_slice()[0x10], 0xAB);
        bus.write(0x3FFB, 0x10); // mirror of $2003
        assert_eq!(bus.read(0x2004), 0xAB);
    }

    #[test]
    fn dma_register_latches_once() {
        let mut bus = SystemBus::new();
        assert_eq!(bus.take_dma_request(), None);
        bus.write(OAM_DMA, 0x02);
        assert_eq!(bus.take_dma_request(), Some(0x02));
        assert_eq!(bus.take_dma_request(), None);
        assert_eq!(bus.read(OAM_DMA), 0);
    }

    #[test]
    fn load_and_vectors() {
        let mut bus = SystemBus::new();
        bus.load(0x8000, &[0xA9, 0x01]).unwrap();
        bus.set_vectors(0x9000, 0x8000, 0xA000);
        assert_eq!(bus.read(0x8001), 0x01);
        assert_eq!(bus.read_word(NMI_VECTOR), 0x9000);
        assert_eq!(bus.read_word(RESET_VECTOR), 0x8000);
        assert_eq!(bus.read_word(IRQ_VECTOR), 0xA000);
    }

    #[test]
    fn reset_clears_volatile_state_but_keeps_program() {
        let mut bus = SystemBus::new();
        bus.load(0x8000, &[0xEA, 0x4C]).unwrap();
        bus.write(0x0042, 0x17);
        bus.write(0x2003, 0x08);
        bus.write(0x2004, 0x99);
        bus.write(OAM_DMA, 0x03);

        bus.reset();
        assert_eq!(bus.read(0x0042), 0x00);
        assert_eq!(bus.oam.addr(), 0);
        assert!(bus.oam.as_slice().iter().all(|&b| b == 0));
        assert_eq!(bus.take_dma_request(), None);
        assert_eq!(bus.read(0x8000), 0xEA);
        assert_eq!(bus.read(0x8001), 0x4C);
    }

    #[test]
    fn load_rejects_out_of_range_images() {
        let mut bus = SystemBus::new();
        assert!(bus.load(0x0200, &[0x00]).is_err());
        assert!(bus.load(0xFFFF, &[0x00, 0x00]).is_err());
        assert!(bus.load(0xFFFF, &[0x00]).is_ok());
    }
}
