//! Chain tokenizing.
//!
//! Reverses [`StandardEntityEncoder`](super::StandardEntityEncoder): splits
//! an `X-ProxiedEntitiesChain` value back into identities. Useful for
//! receivers and for inspecting a chain from the command line.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use super::types::EncodeError;

/// Split a chain such as `<alice><service-b>` into its identities.
///
/// An empty chain yields no identities; `<>` yields the anonymous
/// (empty) identity.
///
/// Backslashes are not escaped on the wire, so an identity ending in `\`
/// (e.g. `C:\`) encodes to `<C:\>`, which reads back as an escaped `>`.
/// Such chains cannot be tokenized and are reported as malformed.
pub fn tokenize_chain(chain: &str) -> Result<Vec<String>, EncodeError> {
    let mut identities = Vec::new();
    let mut chars = chain.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '<' {
            return Err(EncodeError::MalformedChain(format!(
                "expected '<' at byte {offset}, found {c:?}"
            )));
        }

        if matches!(chars.peek(), Some((_, '<'))) {
            chars.next();
            let mut encoded = String::new();
            loop {
                match chars.next() {
                    Some((_, '>')) => break,
                    Some((_, ch)) => encoded.push(ch),
                    None => {
                        return Err(EncodeError::MalformedChain(format!(
                            "unterminated base64 entry starting at byte {offset}"
                        )))
                    }
                }
            }
            if !matches!(chars.next(), Some((_, '>'))) {
                return Err(EncodeError::MalformedChain(format!(
                    "base64 entry at byte {offset} is missing its closing '>'"
                )));
            }
            identities.push(decode_base64_entry(&encoded)?);
            continue;
        }

        let mut escaped = String::new();
        loop {
            match chars.next() {
                Some((_, '\\')) => match chars.peek() {
                    Some(&(_, next @ ('<' | '>'))) => {
                        escaped.push('\\');
                        escaped.push(next);
                        chars.next();
                    }
                    _ => escaped.push('\\'),
                },
                Some((_, '>')) => break,
                Some((pos, '<')) => {
                    return Err(EncodeError::MalformedChain(format!(
                        "unescaped '<' at byte {pos}"
                    )))
                }
                Some((_, ch)) => escaped.push(ch),
                None => {
                    return Err(EncodeError::MalformedChain(format!(
                        "unterminated entry starting at byte {offset}"
                    )))
                }
            }
        }
        identities.push(unescape(&escaped));
    }

    Ok(identities)
}

fn decode_base64_entry(encoded: &str) -> Result<String, EncodeError> {
    let bytes = BASE64_STANDARD
        .decode(encoded)
        .map_err(|e| EncodeError::MalformedChain(format!("invalid base64 entry: {e}")))?;
    let escaped = String::from_utf8(bytes)
        .map_err(|_| EncodeError::MalformedChain("base64 entry is not UTF-8".into()))?;
    Ok(unescape(&escaped))
}

fn unescape(escaped: &str) -> String {
    escaped.replace("\\<", "<").replace("\\>", ">")
}
