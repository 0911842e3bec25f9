//! CSV reader.
//!
//! Splits input into records of raw fields (RFC 4180 quoting, `\n` or
//! `\r\n` line endings), then maps records onto [`NewContact`]s.

use rolodex_core::NewContact;

use crate::{CsvRow, Error, ParsedCsv, Result};

/// One CSV record and the line it started on (1-based).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Record {
  pub line:   usize,
  pub fields: Vec<String>,
}

impl Record {
  fn is_blank(&self) -> bool {
    self.fields.iter().all(|f| f.trim().is_empty())
  }

  fn field(&self, index: usize) -> &str {
    self.fields.get(index).map_or("", |f| f.trim())
  }
}

pub(crate) fn parse(input: &str) -> Result<ParsedCsv> {
  let mut parsed = ParsedCsv::default();

  for record in split_records(input)?.into_iter().skip(1) {
    if record.is_blank() {
      continue;
    }
    let contact = NewContact::new(
      record.field(0),
      record.field(1),
      record.field(2),
      record.field(3),
    );
    if contact.first_name.is_empty() && contact.last_name.is_empty() {
      parsed.dropped_lines.push(record.line);
    } else {
      parsed.rows.push(CsvRow { line: record.line, contact });
    }
  }

  Ok(parsed)
}

pub(crate) fn split_records(input: &str) -> Result<Vec<Record>> {
  let input = input.strip_prefix('\u{feff}').unwrap_or(input);

  let mut records = Vec::new();
  let mut fields = Vec::new();
  let mut field = String::new();
  let mut in_quotes = false;
  let mut line = 1;
  let mut record_line = 1;

  let mut chars = input.chars().peekable();
  while let Some(c) = chars.next() {
    if in_quotes {
      match c {
        '"' if chars.peek() == Some(&'"') => {
          chars.next();
          field.push('"');
        }
        '"' => in_quotes = false,
        '\n' => {
          line += 1;
          field.push(c);
        }
        _ => field.push(c),
      }
      continue;
    }

    match c {
      ',' => fields.push(std::mem::take(&mut field)),
      // A quote only opens a quoted field at the start of the field.
      '"' if field.is_empty() => in_quotes = true,
      '\r' if chars.peek() == Some(&'\n') => {}
      '\n' => {
        fields.push(std::mem::take(&mut field));
        records.push(Record {
          line:   record_line,
          fields: std::mem::take(&mut fields),
        });
        line += 1;
        record_line = line;
      }
      _ => field.push(c),
    }
  }

  if in_quotes {
    return Err(Error::UnterminatedQuote { line: record_line });
  }
  if !field.is_empty() || !fields.is_empty() {
    fields.push(field);
    records.push(Record { line: record_line, fields });
  }

  Ok(records)
}
