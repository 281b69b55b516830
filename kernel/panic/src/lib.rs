#![no_std]

// Only the bare-metal build provides the panic lang item; host
// builds of the workspace get theirs from std.
#[cfg(target_os = "none")]
#[panic_handler]
pub fn nocturne_panic_handle(info: &core::panic::PanicInfo) -> ! {
    use nocturne_sbi::legacy::console_putchar;

    let prefix = "NOCTURNE PANIC :: ";

    for ch in prefix.bytes() {
        console_putchar(ch);
    }

    if let Some(message) = info.message().as_str() {
        for ch in message.bytes() {
            console_putchar(ch);
        }
    }

    console_putchar(b'\n');

    loop {}
}
