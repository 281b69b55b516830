#![no_std]

use core::fmt::Write;

pub static KERNEL_LOGGER: NocturneLogger = NocturneLogger;


pub fn initialize_logger() {
    log::set_logger(&KERNEL_LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Info);
}


// Records render through core::fmt straight onto the firmware
// console; no allocator exists in this kernel to format into.
struct SbiWriter;

impl Write for SbiWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for ch in s.bytes() {
            nocturne_sbi::legacy::console_putchar(ch);
        }
        Ok(())
    }
}


pub struct NocturneLogger;


impl log::Log for NocturneLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut console = SbiWriter;
        let _ = writeln!(
            console,
            "{} ({}) :: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}
