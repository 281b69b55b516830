#![cfg_attr(not(test), no_std)]

//!
//! The Nocturne SBI gateway
//!
//! Everything the kernel ever asks of the firmware goes through
//! `sbi_call`: eight machine words in, two machine words out,
//! one `ecall` in between.
//!

pub mod legacy;

///
/// One SBI request, built fresh for every call
///
/// The six generic arguments land in a0..a5, the function
/// selector in a6 and the extension selector in a7.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SbiRequest {
    pub args: [usize; 6],
    pub function: usize,
    pub extension: usize,
}

/// The a0/a1 pair the firmware hands back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SbiRet {
    pub error: isize,
    pub value: isize,
}

/// Anything that can play the part of the firmware beneath us.
pub trait Gateway {
    fn call(&mut self, request: SbiRequest) -> SbiRet;
}

/// The real firmware, reached with a trapping `ecall`.
pub struct Firmware;

impl Gateway for Firmware {
    #[cfg(all(target_arch = "riscv64", target_os = "none"))]
    fn call(&mut self, request: SbiRequest) -> SbiRet {
        let mut a0 = request.args[0];
        let mut a1 = request.args[1];

        // a0 and a1 are the only registers the firmware may hand
        // back modified. The asm block is deliberately not marked
        // `nomem`: the firmware can touch memory, so the call has
        // to stay a full ordering barrier and can never be elided
        // or duplicated by the optimizer.
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") a0,
                inlateout("a1") a1,
                in("a2") request.args[2],
                in("a3") request.args[3],
                in("a4") request.args[4],
                in("a5") request.args[5],
                in("a6") request.function,
                in("a7") request.extension,
            );
        }

        SbiRet {
            error: a0 as isize,
            value: a1 as isize,
        }
    }

    // Host stand-in so the marshaling layers above can be unit
    // tested off target. Reports success and nothing else.
    #[cfg(not(all(target_arch = "riscv64", target_os = "none")))]
    fn call(&mut self, _request: SbiRequest) -> SbiRet {
        SbiRet { error: 0, value: 0 }
    }
}

/// Issue one synchronous SBI call. Blocks for however long the
/// firmware takes; there is no retry and no timeout at this layer.
pub fn sbi_call(request: SbiRequest) -> SbiRet {
    Firmware.call(request)
}
