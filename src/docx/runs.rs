//! Text-run collection over `word/document.xml`.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::trace;

use super::{TEXT_LOCAL_NAME, W_NS};

/// An element currently open in the event stream.
struct Frame {
    /// Index into the collected runs when this element is a text run.
    run: Option<usize>,
    /// Still inside the element's leading text (no child element seen yet).
    leading: bool,
}

fn is_text_run(ns: &ResolveResult, e: &BytesStart) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == W_NS.as_bytes())
        && e.local_name().as_ref() == TEXT_LOCAL_NAME
}

/// Reject malformed, duplicated or unescapable attributes, and raw `<` in
/// attribute values.
fn check_attributes(e: &BytesStart) -> Result<()> {
    let mut attributes = e.attributes();
    attributes.with_checks(true);

    for attr in attributes {
        let attr = attr.map_err(|err| Error::XmlParse(err.to_string()))?;
        if attr.value.contains(&b'<') {
            return Err(Error::XmlParse(format!(
                "'<' not allowed in value of attribute '{}'",
                String::from_utf8_lossy(attr.key.as_ref())
            )));
        }
        attr.unescape_value()?;
    }
    Ok(())
}

/// Only whitespace may appear outside the document element.
fn check_outside_root(text: &[u8]) -> Result<()> {
    if text.iter().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n')) {
        Ok(())
    } else {
        Err(Error::XmlParse("text outside the document element".to_string()))
    }
}

fn check_prefix(ns: &ResolveResult) -> Result<()> {
    match ns {
        ResolveResult::Unknown(prefix) => Err(Error::XmlParse(format!(
            "unbound namespace prefix '{}'",
            String::from_utf8_lossy(prefix)
        ))),
        _ => Ok(()),
    }
}

/// Collect the text payload of every `w:t` element, in document order.
///
/// Elements are matched by resolved namespace URI, so any prefix bound to
/// the WordprocessingML namespace works. A run's payload is its text up to
/// its first child element. Runs with an empty or absent payload are left
/// out of the result. The root element itself is never treated as a run.
///
/// Fails if `xml` is not well-formed: mismatched or unclosed tags, an
/// unbound prefix, malformed or duplicated attributes, a missing root, a
/// second root, or non-whitespace text outside the root element.
pub fn collect_text_runs(xml: &str) -> Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);

    let mut runs: Vec<String> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                check_prefix(&ns)?;
                check_attributes(&e)?;
                let run = open_element(&mut stack, &mut seen_root, &ns, &e, &mut runs)?;
                stack.push(Frame { run, leading: true });
            }
            (ns, Event::Empty(e)) => {
                check_prefix(&ns)?;
                check_attributes(&e)?;
                // A self-closing run reserves a slot that stays empty.
                open_element(&mut stack, &mut seen_root, &ns, &e, &mut runs)?;
            }
            (_, Event::Text(e)) => match stack.last() {
                Some(Frame {
                    run: Some(index),
                    leading: true,
                }) => runs[*index].push_str(&e.unescape()?),
                Some(_) => {}
                None => check_outside_root(&e)?,
            },
            (_, Event::CData(e)) => match stack.last() {
                Some(Frame {
                    run: Some(index),
                    leading: true,
                }) => runs[*index].push_str(&String::from_utf8_lossy(&e)),
                Some(_) => {}
                None => {
                    return Err(Error::XmlParse(
                        "CDATA outside the document element".to_string(),
                    ))
                }
            },
            (_, Event::End(_)) => {
                stack.pop();
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::XmlParse(format!(
            "unexpected end of document: {} unclosed element(s)",
            stack.len()
        )));
    }
    if !seen_root {
        return Err(Error::XmlParse("no root element found".to_string()));
    }

    let total = runs.len();
    let runs: Vec<String> = runs.into_iter().filter(|r| !r.is_empty()).collect();
    trace!(total, non_empty = runs.len(), "collected text runs");
    Ok(runs)
}

/// Account for a newly opened element and reserve a run slot if it is a
/// text run below the root.
fn open_element(
    stack: &mut [Frame],
    seen_root: &mut bool,
    ns: &ResolveResult,
    e: &BytesStart,
    runs: &mut Vec<String>,
) -> Result<Option<usize>> {
    let Some(parent) = stack.last_mut() else {
        if *seen_root {
            return Err(Error::XmlParse("junk after document element".to_string()));
        }
        *seen_root = true;
        return Ok(None);
    };
    parent.leading = false;

    if is_text_run(ns, e) {
        runs.push(String::new());
        Ok(Some(runs.len() - 1))
    } else {
        Ok(None)
    }
}
