//! NDJSON output: one JSON object per line, each carrying an `event` field.

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Wrap a serializable payload as `{"event": .., "command": .., ..payload}`
pub fn event_with<T: Serialize>(
    event: &str,
    command: &str,
    payload: &T,
) -> io::Result<serde_json::Value> {
    let mut value =
        serde_json::to_value(payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("event".to_string(), event.into());
        map.insert("command".to_string(), command.into());
        Ok(value)
    } else {
        Ok(serde_json::json!({ "event": event, "command": command, "data": value }))
    }
}
