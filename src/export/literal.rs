// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Object literal serialization.
//!
//! ```text
//! value  --string_literal-->  "va\"lue"      (one escape layer)
//! pairs  --object_literal-->  {"K":"V",...}  (assembled, never re-encoded)
//! ```
//!
//! Each key and value is escaped exactly once, so quotes and backslashes
//! that belong to a value survive into the script unchanged in meaning.
//! The result is both a JavaScript object literal and a JSON object.

/// Encodes `value` as a double-quoted string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

/// Assembles an object literal from already-stringified pairs.
#[must_use]
pub fn object_literal<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let body = pairs
        .into_iter()
        .map(|(key, value)| format!("{}:{}", string_literal(key), string_literal(value)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{body}}}")
}

/// Renders the assignment statement written to the runtime script.
#[must_use]
pub fn assignment<'a, I>(global_name: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    format!("{global_name} = {};\n", object_literal(pairs))
}
