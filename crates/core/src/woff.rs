//! WOFF 1.0 unwrapping.
//!
//! A WOFF file is an sfnt with each table optionally zlib-compressed. The
//! tables are inflated and reassembled into a plain sfnt with
//! [`FontBuilder`], keeping the original flavor (`0x00010000` or `OTTO`).

use std::{borrow::Cow, io::Read};

use flate2::read::ZlibDecoder;
use log::debug;
use skrifa::raw::{FontData, ReadError};
use write_fonts::{FontBuilder, types::Tag};

use crate::{Error, Result};

const WOFF_SIGNATURE: &[u8; 4] = b"wOFF";
const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";
const HEADER_LEN: usize = 44;
const TABLE_ENTRY_LEN: usize = 20;

/// Font bytes as an sfnt: WOFF is unpacked, WOFF2 rejected, anything else
/// passed through untouched.
pub fn sfnt_data(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    match data.get(..4) {
        Some(sig) if sig == WOFF_SIGNATURE => Ok(Cow::Owned(decode_woff(data)?)),
        Some(sig) if sig == WOFF2_SIGNATURE => Err(Error::UnsupportedContainer("WOFF2")),
        _ => Ok(Cow::Borrowed(data)),
    }
}

fn decode_woff(data: &[u8]) -> Result<Vec<u8>> {
    let woff = FontData::new(data);
    let flavor: u32 = woff.read_at(4)?;
    let num_tables: u16 = woff.read_at(12)?;

    let mut builder = FontBuilder::new();
    for i in 0..usize::from(num_tables) {
        let entry = HEADER_LEN + i * TABLE_ENTRY_LEN;
        let tag = Tag::from_u32(woff.read_at(entry)?);
        let offset = woff.read_at::<u32>(entry + 4)? as usize;
        let comp_length = woff.read_at::<u32>(entry + 8)? as usize;
        let orig_length = woff.read_at::<u32>(entry + 12)? as usize;

        let stored = woff
            .slice(offset..offset + comp_length)
            .ok_or(ReadError::OutOfBounds)?
            .as_bytes();
        let table = if comp_length < orig_length {
            inflate(tag, stored, orig_length)?
        } else if comp_length == orig_length {
            stored.to_vec()
        } else {
            return Err(Error::Woff(format!(
                "table '{tag}' is stored larger than its original size"
            )));
        };
        debug!("WOFF table '{tag}': {comp_length} -> {orig_length} bytes");
        builder.add_raw(tag, table);
    }

    let mut sfnt = builder.build();
    sfnt[..4].copy_from_slice(&flavor.to_be_bytes());
    Ok(sfnt)
}

fn inflate(tag: Tag, stored: &[u8], orig_length: usize) -> Result<Vec<u8>> {
    let mut table = Vec::with_capacity(orig_length);
    ZlibDecoder::new(stored)
        .read_to_end(&mut table)
        .map_err(|e| Error::Woff(format!("table '{tag}': {e}")))?;
    if table.len() != orig_length {
        return Err(Error::Woff(format!(
            "table '{tag}' inflated to {} bytes, expected {orig_length}",
            table.len()
        )));
    }
    Ok(table)
}
