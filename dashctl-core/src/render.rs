use std::io::Write;

use serde::Serialize;

use crate::error::{DashError, Result};

/// Write `value` as JSON, indented by `pretty` spaces (0 = compact), followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    pretty: usize,
) -> Result<()> {
    if pretty > 0 {
        let indent = vec![b' '; pretty];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_slice());
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|err| DashError::render("json", err))?;
    } else {
        serde_json::to_writer(&mut *writer, value).map_err(|err| DashError::render("json", err))?;
    }

    writer
        .write_all(b"\n")
        .map_err(|err| DashError::render("json", err))?;
    Ok(())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, value, pretty)?;
    String::from_utf8(buf).map_err(|err| DashError::render("json", err))
}

pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|err| DashError::render("yaml", err))
}
