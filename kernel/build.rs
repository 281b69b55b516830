fn main() {

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    // The kernel layout only applies to the bare-metal target; host
    // builds (tests) link normally.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        println!("cargo:rustc-link-arg=-T{manifest_dir}/kernel.ld");
    }

    // Ensure cargo rebuilds if the linker script changes
    println!("cargo:rerun-if-changed=kernel.ld");
}
