#![no_main]

use libfuzzer_sys::fuzz_target;
use phc_hash::{decode, EncodedHash};

fuzz_target!(|data: &str| {
    // Decoding arbitrary input should never panic
    let _ = decode(data);

    // Anything that parses must re-encode to the same string
    if let Ok(parsed) = EncodedHash::try_from(data) {
        assert_eq!(parsed.to_string(), data);
    }
});
