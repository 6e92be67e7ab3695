#![no_main]

use libfuzzer_sys::fuzz_target;
use dotbind::prelude::*;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok((identity, _)) = AssemblyIdentity::parse_display_name(text) {
        let _ = DesktopComparer::default().compare_display_name(text, &identity, false);
        let _ = AssemblyIdentity::parse(&identity.display_name());
    }
});
