use std::io::{self, Write};

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

/// Serialize `payload` and tag it with `"event": name`.
///
/// Non-object payloads are nested under `"data"`.
pub fn tagged<T: serde::Serialize>(name: &str, payload: &T) -> serde_json::Value {
    match serde_json::to_value(payload).unwrap_or(serde_json::Value::Null) {
        serde_json::Value::Object(mut map) => {
            map.insert("event".to_string(), serde_json::Value::from(name));
            serde_json::Value::Object(map)
        }
        other => serde_json::json!({ "event": name, "data": other }),
    }
}
