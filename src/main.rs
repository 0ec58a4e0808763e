use std::env;
use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record, info};
use nescpu::{Cpu, CpuBus, Pending, SystemBus};

const DEFAULT_LOAD_ADDR: u16 = 0x8000;
const DEFAULT_MAX_OPERATIONS: usize = 100_000;

/// Minimal stderr logger; level comes from `NESCPU_LOG` (default: info).
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!("[{}] {}: {}", tag, record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `NESCPU_LOG`, or info when unset.
fn parse_level(value: Option<&str>) -> Result<LevelFilter> {
    match value {
        Some(v) => LevelFilter::from_str(v)
            .with_context(|| format!("NESCPU_LOG={:?} is not a log level", v)),
        None => Ok(LevelFilter::Info),
    }
}

fn init_logging() -> Result<()> {
    let level = parse_level(env::var("NESCPU_LOG").ok().as_deref())?;
    log::set_logger(&LOGGER).context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}

fn demo_program() -> Vec<u8> {
    vec![
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0xA9, 0x02, // LDA #$02
        0x8D, 0x14, 0x40, // STA $4014 => OAM DMA from page $02
        0x4C, 0x0F, 0x80, // JMP $800F (park)
    ]
}

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (image, origin) = match args.first() {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path))?;
            let origin = match args.get(1) {
                Some(a) => u16::from_str_radix(a.trim_start_matches("0x").trim_start_matches('$'), 16)
                    .with_context(|| format!("invalid load address {:?}", a))?,
                None => DEFAULT_LOAD_ADDR,
            };
            (bytes, origin)
        }
        None => (demo_program(), DEFAULT_LOAD_ADDR),
    };
    let max_operations = match args.get(2) {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("invalid operation count {:?}", n))?,
        None => DEFAULT_MAX_OPERATIONS,
    };

    let mut bus = SystemBus::new();
    bus.load(origin, &image)?;
    // Images that reach the vector table bring their own vectors.
    if (origin as usize) + image.len() <= 0xFFFA {
        bus.set_vectors(origin, origin, origin);
    }
    info!(
        "loaded {} bytes at ${:04X}, running up to {} operations",
        image.len(),
        origin,
        max_operations
    );

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    let mut clocks: u64 = 0;
    let mut operations = 0;
    while operations < max_operations {
        let pc_before = cpu.pc();
        let transferring = cpu.is_pending(Pending::TRANSFER);
        clocks += cpu.step_instruction(&mut bus) as u64;
        operations += 1;
        // The first operation drains the reset sequence.
        if operations > 1 && !transferring && cpu.pc() == pc_before {
            info!("parked at ${:04X}", pc_before);
            break;
        }
    }

    // Inspect state
    let m0200 = bus.read(0x0200);
    println!("operations: {}", operations);
    println!("clocks: {}", clocks);
    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("mem[0x0200]: 0x{:02X}", m0200);
    println!("stack: {:02X?}", bus.ram().stack_contents(cpu.sp()));
    println!("OAM[0..8]: {:02X?}", &bus.oam.as_slice()[..8]);
    Ok(())
}
