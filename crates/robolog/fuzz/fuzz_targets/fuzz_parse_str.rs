// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for console output structuring
//!
//! This fuzzes `parse_str` and the render step, which must accept any text.

#![no_main]

use libfuzzer_sys::fuzz_target;

use robolog::{CollapseState, parse_str, render};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Structuring should never panic
        let forest = parse_str(input);

        // Neither should rendering it
        let _ = render(&forest, &CollapseState::new());
    }
});
