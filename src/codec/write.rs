//! Content-line writer.

use crate::model::{Component, Parameter, Property, BEGIN, END};

/// Maximum octets per physical line, excluding the CRLF.
const FOLD_LIMIT: usize = 75;

/// Serializes components to iCalendar text with CRLF line endings.
///
/// Lines longer than 75 octets are folded; a fold never splits a UTF-8
/// character.
#[must_use]
pub fn write(components: &[Component]) -> String {
    let mut out = String::new();
    for component in components {
        write_component(&mut out, component);
    }
    out
}

fn write_component(out: &mut String, component: &Component) {
    push_folded(out, &format!("{BEGIN}:{}", component.name()));
    for property in component.properties() {
        push_folded(out, &content_line(property));
    }
    for child in component.components() {
        write_component(out, child);
    }
    push_folded(out, &format!("{END}:{}", component.name()));
}

fn content_line(property: &Property) -> String {
    let mut line = property.name.clone();
    for param in &property.params {
        line.push(';');
        push_param(&mut line, param);
    }
    line.push(':');
    line.push_str(&property.value);
    line
}

fn push_param(line: &mut String, param: &Parameter) {
    line.push_str(&param.name);
    line.push('=');
    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        if value.contains([':', ';', ',']) {
            line.push('"');
            line.push_str(value);
            line.push('"');
        } else {
            line.push_str(value);
        }
    }
}

fn push_folded(out: &mut String, line: &str) {
    let mut rest = line;
    // The leading space of a continuation line counts against the limit.
    let mut limit = FOLD_LIMIT;
    while rest.len() > limit {
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        out.push_str(&rest[..split]);
        out.push_str("\r\n ");
        rest = &rest[split..];
        limit = FOLD_LIMIT - 1;
    }
    out.push_str(rest);
    out.push_str("\r\n");
}
