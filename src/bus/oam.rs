//! Object attribute memory as seen from the CPU side.
//!
//! The picture unit itself is an external collaborator; this type only
//! models the 256-byte sprite table and the two CPU registers that reach it:
//! $2003 (OAMADDR) and $2004 (OAMDATA, which auto-increments OAMADDR on
//! write). OAM DMA bypasses OAMADDR and addresses bytes directly through
//! `OamWriter`.

use crate::bus::OamWriter;

pub const OAM_SIZE: usize = 256;

#[derive(Clone)]
pub struct ObjectMemory {
    data: [u8; OAM_SIZE],
    addr: u8,
}

impl Default for ObjectMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectMemory {
    pub fn new() -> Self {
        Self {
            data: [0; OAM_SIZE],
            addr: 0,
        }
    }

    pub fn reset(&mut self) {
        self.data.fill(0);
        self.addr = 0;
    }

    /// $2003 write.
    pub fn set_addr(&mut self, addr: u8) {
        self.addr = addr;
    }

    pub fn addr(&self) -> u8 {
        self.addr
    }

    /// $2004 read (does not increment).
    pub fn read_data(&self) -> u8 {
        self.data[self.addr as usize]
    }

    /// $2004 write; OAMADDR increments and wraps.
    pub fn write_data(&mut self, value: u8) {
        self.data[self.addr as usize] = value;
        self.addr = self.addr.wrapping_add(1);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl OamWriter for ObjectMemory {
    #[inline]
    fn write_oam(&mut self, index: u8, value: u8) {
        self.data[index as usize] = value;
    }
}
