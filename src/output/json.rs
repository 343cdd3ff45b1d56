//
//  createsend
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output helpers.

use std::io::{self, Write};

use serde::Serialize;

/// Pretty-prints `value` to stdout followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Pretty-prints `value` to `writer` followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Pretty-prints a raw response body when it is JSON; returns it unchanged
/// otherwise. Empty bodies stay empty.
pub fn pretty_body(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to() {
        let mut out = Vec::new();
        write_json_to(&mut out, &serde_json::json!({"Credits": 3})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"Credits\": 3\n}\n");
    }

    #[test]
    fn test_pretty_body() {
        assert_eq!(pretty_body(b"[1]"), "[\n  1\n]");
        assert_eq!(pretty_body(b"<html>"), "<html>");
        assert_eq!(pretty_body(b""), "");
    }
}
