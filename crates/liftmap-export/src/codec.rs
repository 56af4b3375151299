//! Text codec for `name={v,v,...}` assignment statements.
//!
//! Encoding produces one statement preceded by a line break, ready to be
//! appended to a configuration file. Decoding recognises a statement on a
//! single line and keeps its values as raw tokens; they are only parsed as
//! integers when a caller asks for them, so unrelated settings never cause
//! errors.

use crate::error::ExportError;

/// Written before every appended statement.
///
/// A bare line feed; [`decode_statement`] trims surrounding whitespace, so
/// files whose statements were written with `\r\n` separators read back the
/// same.
pub const STATEMENT_PREFIX: &str = "\n";

/// Whether `name` is an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Reject names that [`is_valid_name`] does not accept.
pub fn check_name(name: &str) -> Result<(), ExportError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ExportError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Encode `name={v1,v2,...}` with the leading [`STATEMENT_PREFIX`].
///
/// # Examples
///
/// ```
/// use liftmap_export::codec::encode_statement;
///
/// let text = encode_statement("elevatorcoords", [0, 0, 2, 0]).unwrap();
/// assert_eq!(text, "\nelevatorcoords={0,0,2,0}");
/// ```
pub fn encode_statement(
    name: &str,
    values: impl IntoIterator<Item = u32>,
) -> Result<String, ExportError> {
    check_name(name)?;
    let mut out = String::with_capacity(STATEMENT_PREFIX.len() + name.len() + 3);
    out.push_str(STATEMENT_PREFIX);
    out.push_str(name);
    out.push_str("={");
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&v.to_string());
    }
    out.push('}');
    Ok(out)
}

/// One decoded `name={...}` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Statement name.
    pub name: String,
    /// Comma-separated values, trimmed, not yet parsed.
    pub tokens: Vec<String>,
}

impl Assignment {
    /// Parse every token as an integer.
    pub fn integers(&self) -> Result<Vec<i64>, ExportError> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token.parse().map_err(|_| ExportError::MalformedValue {
                    name: self.name.clone(),
                    index,
                    token: token.clone(),
                })
            })
            .collect()
    }
}

/// Decode one line, or `None` if it is not an assignment statement.
///
/// Surrounding whitespace is ignored, as is whitespace around the name,
/// the `=`, and each value.
pub fn decode_statement(line: &str) -> Option<Assignment> {
    let (name, rest) = line.trim().split_once('=')?;
    let name = name.trim();
    if !is_valid_name(name) {
        return None;
    }
    let body = rest.trim().strip_prefix('{')?.strip_suffix('}')?.trim();
    let tokens = if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').map(|t| t.trim().to_string()).collect()
    };
    Some(Assignment {
        name: name.to_string(),
        tokens,
    })
}
