//! Ledger codec - binary layout of the high-score file
//!
//! Each slot is stored as:
//!
//! ```text
//! name bytes | 0x00 | score: i32 | timestamp: i64
//! ```
//!
//! Integers use the host byte order, so files are not portable between hosts
//! with a different endianness. There is no length prefix on the name; the
//! reader scans for the terminator.
//!
//! Version 1 files start with an 8-byte header:
//!
//! ```text
//! 0x89 'T' 'S' 'C' | version: u16 LE | slot count: u16 LE
//! ```
//!
//! Files without the header are read as version 0 (the older headerless
//! layout). The first magic byte is not printable and can never start a
//! version 0 file, whose first byte is either a name character or the
//! terminator of an empty name.
//!
//! Decoding is all-or-nothing: any malformed slot fails the whole table.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{LedgerError, Result};
use crate::ledger::ScoreLedger;
use crate::record::{PlayerName, ScoreRecord};
use crate::types::{LEDGER_CAPACITY, MAX_NAME_BYTES, SENTINEL_SCORE};

/// File magic of versioned score files.
pub const MAGIC: [u8; 4] = [0x89, b'T', b'S', b'C'];

/// Size of the version 1 header in bytes.
pub const HEADER_LEN: usize = 8;

/// On-disk layout revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// Headerless records, as written by earlier releases.
    Legacy = 0,
    /// Records preceded by magic, version, and slot count.
    V1 = 1,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion::V1;

    /// Identify the layout of `bytes` from its first bytes.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&MAGIC) {
            FormatVersion::V1
        } else {
            FormatVersion::Legacy
        }
    }
}

/// Encode a ledger in the current format.
pub fn encode(ledger: &ScoreLedger) -> Vec<u8> {
    encode_with_version(ledger, FormatVersion::CURRENT)
}

/// Encode a ledger in a specific format.
pub fn encode_with_version(ledger: &ScoreLedger, version: FormatVersion) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(ledger, version));
    // Writing into a Vec cannot fail.
    let _ = write_ledger(&mut out, ledger, version);
    out
}

/// Write a ledger to any byte sink.
pub fn write_ledger<W: Write>(
    out: &mut W,
    ledger: &ScoreLedger,
    version: FormatVersion,
) -> io::Result<()> {
    if version == FormatVersion::V1 {
        out.write_all(&MAGIC)?;
        out.write_u16::<LittleEndian>(version as u16)?;
        out.write_u16::<LittleEndian>(LEDGER_CAPACITY as u16)?;
    }
    for slot in ledger.slots() {
        write_record(out, slot)?;
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &ScoreRecord) -> io::Result<()> {
    out.write_all(record.name.as_bytes())?;
    out.write_u8(0)?;
    out.write_i32::<NativeEndian>(record.score)?;
    out.write_i64::<NativeEndian>(record.timestamp)?;
    Ok(())
}

fn encoded_len(ledger: &ScoreLedger, version: FormatVersion) -> usize {
    let header = match version {
        FormatVersion::V1 => HEADER_LEN,
        FormatVersion::Legacy => 0,
    };
    let records: usize = ledger
        .slots()
        .iter()
        .map(|slot| slot.name.as_bytes().len() + 1 + 4 + 8)
        .sum();
    header + records
}

/// Decode a ledger, validating the structure of every slot.
///
/// Trailing bytes after the last slot are ignored.
pub fn decode(bytes: &[u8]) -> Result<ScoreLedger> {
    let mut rd = match FormatVersion::detect(bytes) {
        FormatVersion::V1 => {
            let mut header = &bytes[MAGIC.len()..];
            let version = header
                .read_u16::<LittleEndian>()
                .map_err(|e| short_read(e, 0, "header"))?;
            if version != FormatVersion::V1 as u16 {
                return Err(LedgerError::UnsupportedVersion(version));
            }
            let count = header
                .read_u16::<LittleEndian>()
                .map_err(|e| short_read(e, 0, "header"))?;
            if usize::from(count) != LEDGER_CAPACITY {
                return Err(LedgerError::SlotCountMismatch {
                    expected: LEDGER_CAPACITY,
                    actual: usize::from(count),
                });
            }
            header
        }
        FormatVersion::Legacy => bytes,
    };

    let mut slots = [ScoreRecord::sentinel(); LEDGER_CAPACITY];
    for (index, slot) in slots.iter_mut().enumerate() {
        *slot = read_record(&mut rd, index)?;
    }
    Ok(ScoreLedger::from_slots(slots))
}

fn read_record<R: Read>(rd: &mut R, slot: usize) -> Result<ScoreRecord> {
    let mut name = [0u8; MAX_NAME_BYTES];
    let mut len = 0;
    loop {
        let ch = rd.read_u8().map_err(|e| short_read(e, slot, "name"))?;
        if ch == 0 {
            break;
        }
        if len >= MAX_NAME_BYTES {
            return Err(LedgerError::NameTooLong {
                slot,
                max: MAX_NAME_BYTES,
            });
        }
        name[len] = ch;
        len += 1;
    }

    let score = rd
        .read_i32::<NativeEndian>()
        .map_err(|e| short_read(e, slot, "score"))?;
    if score < SENTINEL_SCORE {
        return Err(LedgerError::InvalidScore { slot, score });
    }
    let timestamp = rd
        .read_i64::<NativeEndian>()
        .map_err(|e| short_read(e, slot, "timestamp"))?;

    Ok(ScoreRecord::new(
        PlayerName::from_bytes(&name[..len]),
        score,
        timestamp,
    ))
}

fn short_read(err: io::Error, slot: usize, field: &'static str) -> LedgerError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        LedgerError::Truncated { slot, field }
    } else {
        LedgerError::Io(err)
    }
}
