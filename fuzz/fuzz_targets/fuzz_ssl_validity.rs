#![no_main]

use bbl::domain::value_objects::SslKeyPair;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Certificate checks on untrusted PEM should never panic
        let (cert, ip) = content.split_once('\n').unwrap_or((content, "1.2.3.4"));
        let _ = SslKeyPair::new(cert, "").is_valid_for_ip(ip);
    }
});
