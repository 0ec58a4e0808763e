/*!
Work RAM behind the CPU's lowest 8 KiB.

Only $0000-$07FF is backed; $0800-$1FFF folds back onto it, so `read(0x1801)`
and `read(0x0001)` see the same cell. Page $00 doubles as the zero page and
page $01 as the hardware stack; `stack_page` exposes the latter for
inspection.
*/

/// Backed bytes.
pub const RAM_SIZE: usize = 0x0800;
const RAM_MASK: u16 = (RAM_SIZE - 1) as u16;

#[derive(Clone)]
pub struct Ram {
    cells: Box<[u8; RAM_SIZE]>,
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; RAM_SIZE]),
        }
    }

    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.cells[Self::fold(addr)]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.cells[Self::fold(addr)] = value;
    }

    pub fn stack_page(&self) -> &[u8] {
        &self.cells[0x100..0x200]
    }

    /// Bytes currently on the stack for a given SP, top first.
    pub fn stack_contents(&self, sp: u8) -> &[u8] {
        &self.stack_page()[sp as usize + 1..]
    }

    #[inline]
    fn fold(addr: u16) -> usize {
        (addr & RAM_MASK) as usize
    }
}
