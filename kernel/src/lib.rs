#![no_std]

use nocturne_kprint::printf;

/// The kernel routine proper: announce ourselves over the firmware
/// console, then park the hart for good.
pub fn kernel_main() -> ! {
    nocturne_klog::initialize_logger();
    log::info!("nocturne online");

    printf("Hello, %s!\n", &["World".into()]);

    nocturne_kernel_stage0::idle()
}
