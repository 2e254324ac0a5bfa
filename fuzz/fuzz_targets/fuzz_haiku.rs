// Copyright 2024 Saorsa Labs Limited
//
// This software is dual-licensed under:
// - GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)
// - Commercial License
//
// For AGPL-3.0 license, see LICENSE-AGPL-3.0
// For commercial licensing, contact: saorsalabs@gmail.com
//
// Unless required by applicable law or agreed to in writing, software
// distributed under these licenses is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.

#![no_main]

use libfuzzer_sys::fuzz_target;
use saorsa_haiku::HaikuCodec;

fuzz_target!(|data: &[u8]| {
    let Ok(codec) = HaikuCodec::new() else {
        return;
    };

    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary text as an address
        if let Ok(haiku) = codec.encode(s) {
            // Anything that encodes must decode again
            assert!(codec.decode(&haiku).is_ok());
        }

        // Arbitrary text as a haiku
        let _ = codec.decode(s);
        let _ = codec.decode(&s.to_uppercase());
    }
});
