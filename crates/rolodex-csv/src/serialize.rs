//! CSV writer.

use rolodex_core::Contact;

use crate::HEADER;

pub(crate) fn serialize(contacts: &[Contact]) -> String {
  let mut out = String::with_capacity(HEADER.len() + 1 + contacts.len() * 48);
  out.push_str(HEADER);
  out.push('\n');

  for c in contacts {
    let fields = [&c.first_name, &c.last_name, &c.email, &c.mobile];
    for (i, field) in fields.into_iter().enumerate() {
      if i > 0 {
        out.push(',');
      }
      push_field(&mut out, field);
    }
    out.push('\n');
  }

  out
}

/// Append `field`, quoting it only when it contains a delimiter, a quote or
/// a line break.
fn push_field(out: &mut String, field: &str) {
  if !field.contains([',', '"', '\r', '\n']) {
    out.push_str(field);
    return;
  }
  out.push('"');
  for c in field.chars() {
    if c == '"' {
      out.push('"');
    }
    out.push(c);
  }
  out.push('"');
}
