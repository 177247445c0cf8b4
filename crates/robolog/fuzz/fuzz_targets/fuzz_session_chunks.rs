// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the incremental session
//!
//! Feeds arbitrary chunk boundaries to `LogSession` and checks the result
//! against a one-shot parse of the same text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use robolog::{LogSession, parse_lines};

#[derive(Arbitrary, Debug)]
struct Input {
    chunks: Vec<String>,
}

fuzz_target!(|input: Input| {
    let mut session = LogSession::new();
    for chunk in &input.chunks {
        session.push_chunk(chunk);
        let _ = session.forest();
    }
    session.finish();

    let lines = session.lines().to_vec();
    assert_eq!(session.forest(), parse_lines(&lines).as_slice());
});
