//!
//! Legacy console operations
//!
//! fid=1 / eid=0 is the one selector pair this kernel assigns a
//! meaning to; every other pair belongs to the firmware.
//!

use crate::{Firmware, Gateway, SbiRequest};

pub const LEGACY_EID: usize = 0;
pub const CONSOLE_PUTCHAR_FID: usize = 1;

/// Write one byte to the firmware console.
///
/// One call per byte, no buffering. The firmware's error code is
/// dropped on the floor here; there is nobody above to report it to.
pub fn console_putchar(ch: u8) {
    putchar_via(&mut Firmware, ch);
}

pub(crate) fn putchar_via<G: Gateway>(gateway: &mut G, ch: u8) {
    let _ = gateway.call(SbiRequest {
        args: [ch as usize, 0, 0, 0, 0, 0],
        function: CONSOLE_PUTCHAR_FID,
        extension: LEGACY_EID,
    });
}
