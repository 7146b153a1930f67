use std::io::Write;

use crate::{cycle, ByteString, Dictionary, Error, List, Value};

/// Serialize `value` to `sink`.
///
/// For a composite value the subtree is first checked for reference cycles;
/// if one is found nothing is written for this call. Encoding is a pure read
/// of the tree.
///
/// # Errors
///
/// Returns [`Error::CircularReference`] on a cycle, or [`Error::Io`] from
/// the sink.
pub fn encode_into<W: Write>(value: &Value, sink: &mut W) -> Result<(), Error> {
    cycle::ensure_acyclic(value)?;
    write_value(value, sink)
}

/// Serialize `value` into a fresh byte vector.
///
/// # Errors
///
/// Returns [`Error::CircularReference`] on a cycle.
pub fn encode_to_vec(value: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Recursive writer. The cycle check has already passed for the whole
/// subtree, so it is not re-run at inner nodes.
fn write_value<W: Write>(value: &Value, sink: &mut W) -> Result<(), Error> {
    match value {
        Value::ByteString(b) => write_byte_string(b, sink),
        Value::Integer(v) => {
            write!(sink, "i{v}e")?;
            Ok(())
        }
        Value::List(l) => write_list(l, sink),
        Value::Dictionary(d) => write_dictionary(d, sink),
    }
}

fn write_byte_string<W: Write>(b: &ByteString, sink: &mut W) -> Result<(), Error> {
    write!(sink, "{}", b.len())?;
    sink.write_all(&[ByteString::DELIMITER])?;
    sink.write_all(b.as_bytes())?;
    Ok(())
}

fn write_list<W: Write>(list: &List, sink: &mut W) -> Result<(), Error> {
    sink.write_all(&[List::PREFIX])?;
    list.with_elements(|elements| {
        for element in elements {
            write_value(element, sink)?;
        }
        Ok::<(), Error>(())
    })?;
    sink.write_all(&[Value::END])?;
    Ok(())
}

fn write_dictionary<W: Write>(dict: &Dictionary, sink: &mut W) -> Result<(), Error> {
    sink.write_all(&[Dictionary::PREFIX])?;
    dict.with_entries(|entries| {
        for (key, value) in entries {
            write_byte_string(key, sink)?;
            write_value(value, sink)?;
        }
        Ok::<(), Error>(())
    })?;
    sink.write_all(&[Value::END])?;
    Ok(())
}
