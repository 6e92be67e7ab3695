#![no_main]

use libfuzzer_sys::fuzz_target;
use dotbind::unification::PortabilityPolicy;

fuzz_target!(|data: &[u8]| {
    let _ = PortabilityPolicy::load_from_xml(data);
});
