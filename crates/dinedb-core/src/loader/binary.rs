// crates/dinedb-core/src/loader/binary.rs
use crate::error::Result;
use crate::model::Restaurant;
use bincode::Options;
use std::io::{Read, Write};

/// Upper bound on a decoded cache, so a corrupt length prefix cannot make us
/// allocate without limit.
const MAX_CACHE_BYTES: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_CACHE_BYTES)
}

/// Decode catalog records from a bincode stream.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Restaurant>> {
    Ok(options().deserialize_from(reader)?)
}

/// Encode catalog records into a bincode stream. The caller finishes the stream.
pub fn write_records<W: Write>(writer: &mut W, records: &[Restaurant]) -> Result<()> {
    options().serialize_into(writer, records)?;
    Ok(())
}
