#![allow(dead_code)]

use origin_gate::{Headers, ResponseHeaderDelta};

pub fn assert_emitted(outcome: Option<ResponseHeaderDelta>) -> Headers {
    match outcome {
        Some(delta) => delta.into_headers(),
        None => panic!("expected an emitted header delta, got none"),
    }
}

pub fn assert_absent(outcome: Option<ResponseHeaderDelta>) {
    if let Some(delta) = outcome {
        panic!("expected no header delta, got {:?}", delta);
    }
}
