//! Streaming parser for one source XML entry file.
//!
//! Source entries are property-list-style XML documents: a flat sequence of
//! `<key>` elements each followed by a `<date>`, `<string>` or bare
//! `<true/>`/`<false/>` value. The parser walks the token stream once, in
//! document order, with constant memory per file, and extracts exactly the
//! fields the output schema needs; all other structure is ignored.

use crate::constants::{KEY_CREATION_DATE, KEY_ENTRY_TEXT, KEY_UUID};
use crate::errors::AppResult;
use crate::model::Entry;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// State of the key/value extraction machine.
///
/// The machine is armed by `<key>`, `<date>` and `<string>` start tags and
/// disarmed by the character data that follows them; everything else leaves it
/// in `Idle`, which is what lets the parser skip arbitrary surrounding
/// structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Not inside a recognized element; character data is ignored.
    Idle,
    /// A `<key>` start tag was seen; the next character data is a dictionary key.
    AwaitingKey,
    /// A `<date>` or `<string>` start tag was seen; the next character data is
    /// the value for the most recently captured key.
    AwaitingValue,
}

/// Parses one source XML file into an [`Entry`].
///
/// Populates `creation_date`/`modified_date` (the same string), `uuid`,
/// `text` and `starred`; every other field is left at its zero default for
/// the enricher to fill in.
///
/// Values are entity-unescaped but otherwise passed through verbatim; the
/// creation timestamp in particular is treated as an opaque string and never
/// parsed. A missing UUID is not an error and leaves `uuid` empty.
///
/// Bare `<true/>`/`<false/>` markers set `starred` wherever they appear,
/// without regard to the preceding key; when a document carries several, the
/// last one wins. The source corpus only ever carries one.
///
/// # Errors
///
/// Returns `AppError::Xml` if the file cannot be opened or the token stream
/// fails for any reason other than reaching end-of-input, which terminates
/// the loop successfully.
pub fn parse_entry(path: &Path) -> AppResult<Entry> {
    let mut reader = Reader::from_file(path)?;
    let mut buf = Vec::new();

    let mut state = ParseState::Idle;
    let mut key = String::new();
    let mut entry = Entry::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"key" => state = ParseState::AwaitingKey,
                b"date" | b"string" => state = ParseState::AwaitingValue,
                b"true" => entry.starred = true,
                b"false" => entry.starred = false,
                _ => {}
            },
            // Boolean markers are normally self-closing.
            Event::Empty(e) => match e.name().as_ref() {
                b"true" => entry.starred = true,
                b"false" => entry.starred = false,
                _ => {}
            },
            Event::Text(t) => match state {
                ParseState::AwaitingKey => {
                    key = t.unescape()?.into_owned();
                    state = ParseState::Idle;
                }
                ParseState::AwaitingValue => {
                    let value = t.unescape()?.into_owned();
                    state = ParseState::Idle;
                    assign_value(&mut entry, &key, value);
                }
                ParseState::Idle => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entry)
}

/// Dispatches a captured dictionary value onto the entry, keyed by the most
/// recently captured dictionary key. Unrecognized keys are discarded.
fn assign_value(entry: &mut Entry, key: &str, value: String) {
    match key {
        KEY_CREATION_DATE => {
            // The source has no separate modification timestamp.
            entry.creation_date = value.clone();
            entry.modified_date = value;
        }
        KEY_ENTRY_TEXT => entry.text = value,
        KEY_UUID => entry.uuid = value,
        _ => {}
    }
}
