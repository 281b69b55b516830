#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod boot {
    // stage0 carries _start, kpanic the panic handler. Both have to
    // be pulled in explicitly or the linker never sees them.
    use nocturne_kernel_stage0 as _;
    use nocturne_kpanic as _;

    #[no_mangle]
    extern "C" fn NOCTURNE_kern_start() {
        nocturne_kernel::kernel_main();
    }
}

// The real entry chain starts in stage0; there is nothing to run
// when this target is built on the host.
#[cfg(not(target_os = "none"))]
fn main() {}
