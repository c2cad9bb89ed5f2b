//! Reader for the message entries of gettext PO and POT files.
//!
//! Only what id extraction needs is kept: `msgctxt`, `msgid` and
//! `msgid_plural`. Comments, translations and obsolete (`#~`) entries are
//! skipped, and the header entry is returned like any other entry with an
//! empty `msgid`. Header fields are never interpreted, so templates with
//! placeholder headers or no header at all read fine.

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgid_plural: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct PoSyntaxError {
    pub line: usize,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    IdPlural,
    Str,
}

/// Entry being read, with the fields seen so far.
#[derive(Default)]
struct Pending {
    msgctxt: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    has_msgstr: bool,
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.msgctxt.is_none() && self.msgid.is_none()
    }
}

pub fn parse_po(content: &str) -> Result<Vec<PoEntry>, PoSyntaxError> {
    let mut entries = Vec::new();
    let mut pending = Pending::default();
    let mut field: Option<Field> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        let error = |message: &str| PoSyntaxError {
            line: line_no,
            message: message.to_string(),
        };

        if line.is_empty() {
            finish(&mut pending, &mut entries, line_no)?;
            field = None;
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgctxt") {
            // A new keyword after msgstr starts the next entry even without a
            // blank line in between.
            if pending.has_msgstr || pending.msgid.is_some() {
                finish(&mut pending, &mut entries, line_no)?;
            }
            pending.msgctxt = Some(quoted(rest).ok_or_else(|| error("malformed msgctxt"))?);
            field = Some(Field::Context);
        } else if let Some(rest) = line.strip_prefix("msgid_plural") {
            if pending.msgid.is_none() {
                return Err(error("msgid_plural without msgid"));
            }
            pending.msgid_plural =
                Some(quoted(rest).ok_or_else(|| error("malformed msgid_plural"))?);
            field = Some(Field::IdPlural);
        } else if let Some(rest) = line.strip_prefix("msgid") {
            if pending.msgid.is_some() {
                finish(&mut pending, &mut entries, line_no)?;
            }
            pending.msgid = Some(quoted(rest).ok_or_else(|| error("malformed msgid"))?);
            field = Some(Field::Id);
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            if pending.msgid.is_none() {
                return Err(error("msgstr without msgid"));
            }
            let rest = strip_plural_index(rest).ok_or_else(|| error("malformed msgstr index"))?;
            quoted(rest).ok_or_else(|| error("malformed msgstr"))?;
            pending.has_msgstr = true;
            field = Some(Field::Str);
        } else if line.starts_with('"') {
            let text = quoted(line).ok_or_else(|| error("unterminated string"))?;
            let target = match field {
                Some(Field::Context) => pending.msgctxt.as_mut(),
                Some(Field::Id) => pending.msgid.as_mut(),
                Some(Field::IdPlural) => pending.msgid_plural.as_mut(),
                Some(Field::Str) => None,
                None => return Err(error("string outside of an entry")),
            };
            if let Some(target) = target {
                target.push_str(&text);
            }
        } else {
            return Err(error("unexpected content"));
        }
    }

    finish(&mut pending, &mut entries, content.lines().count() + 1)?;
    Ok(entries)
}

fn finish(
    pending: &mut Pending,
    entries: &mut Vec<PoEntry>,
    line: usize,
) -> Result<(), PoSyntaxError> {
    if pending.is_empty() {
        return Ok(());
    }
    let Pending {
        msgctxt,
        msgid,
        msgid_plural,
        ..
    } = std::mem::take(pending);
    let msgid = msgid.ok_or_else(|| PoSyntaxError {
        line,
        message: "msgctxt without msgid".to_string(),
    })?;
    entries.push(PoEntry {
        msgctxt,
        msgid,
        msgid_plural,
    });
    Ok(())
}

/// `[N] "..."` -> `"..."`, or the input unchanged when there is no index.
fn strip_plural_index(rest: &str) -> Option<&str> {
    match rest.strip_prefix('[') {
        Some(indexed) => {
            let (index, rest) = indexed.split_once(']')?;
            index.parse::<usize>().ok()?;
            Some(rest)
        }
        None => Some(rest),
    }
}

/// Content of a `"..."` literal (surrounding whitespace allowed), unescaped.
fn quoted(text: &str) -> Option<String> {
    let text = text.trim();
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    unescape(inner)
}

fn unescape(text: &str) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => result.push('\n'),
                't' => result.push('\t'),
                'r' => result.push('\r'),
                'a' => result.push('\u{7}'),
                'b' => result.push('\u{8}'),
                'f' => result.push('\u{c}'),
                'v' => result.push('\u{b}'),
                other => result.push(other),
            },
            // An unescaped quote ends the literal early.
            '"' => return None,
            _ => result.push(c),
        }
    }
    Some(result)
}
