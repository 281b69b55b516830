#![no_std]

//!
//! Nocturne Bootloader :: Stage0
//!
//! Owns the very first instructions after the firmware drops us in
//! S-mode, and the hart's final resting loop. The firmware is
//! trusted to hand over a valid stack pointer; stage0 sets up no
//! stack of its own.
//!

extern "C" {
    fn NOCTURNE_kern_start();
}

/// Park the hart forever. `wfi` instead of a busy spin, since no
/// interrupt handler exists to ever resume useful work here.
pub fn idle() -> ! {
    loop {
        riscv::asm::wfi();
    }
}

#[cfg(all(target_arch = "riscv64", target_os = "none", feature = "clear-bss"))]
fn zero_bss() {
    extern "C" {
        static mut __bss: u8;
        static mut __bss_end: u8;
    }

    unsafe {
        let start = core::ptr::addr_of_mut!(__bss);
        let end = core::ptr::addr_of_mut!(__bss_end);
        let mut cursor = start;
        while cursor < end {
            cursor.write_volatile(0);
            cursor = cursor.add(1);
        }
    }
}

/// First instruction target after reset, placed by kernel.ld.
#[cfg(all(target_arch = "riscv64", target_os = "none"))]
#[no_mangle]
#[link_section = ".text._start"]
pub extern "C" fn _start() -> ! {
    #[cfg(feature = "clear-bss")]
    zero_bss();

    unsafe {
        NOCTURNE_kern_start();
    }

    // The kernel entry never legitimately returns. If it does
    // anyway, park here rather than run off into unmapped memory.
    idle()
}
