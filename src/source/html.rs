use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Elements whose content is never prose.
const SKIPPED: &[&[u8]] = &[b"script", b"style", b"head", b"noscript", b"template", b"svg"];

/// Elements that end a run of text, so words either side never merge.
const BLOCKS: &[&[u8]] = &[
    b"address", b"article", b"aside", b"blockquote", b"br", b"dd", b"div", b"dl", b"dt",
    b"figcaption", b"footer", b"h1", b"h2", b"h3", b"h4", b"h5", b"h6", b"header", b"hr", b"li",
    b"main", b"nav", b"ol", b"p", b"pre", b"section", b"table", b"td", b"th", b"tr", b"ul",
];

/// Reduces an HTML page to its readable text. Markup that the lenient reader
/// still cannot get through leaves the input unchanged.
pub fn html_to_text(html: &str) -> String {
    match extract(html) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(target: "source", %err, "html extraction failed, using raw body");
            html.to_owned()
        }
    }
}

fn extract(html: &str) -> quick_xml::Result<String> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut out = String::with_capacity(html.len() / 2);
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_ascii_lowercase();
                if is_one_of(&name, SKIPPED) {
                    skip_depth += 1;
                } else if is_one_of(&name, BLOCKS) {
                    out.push('\n');
                }
            }
            Event::End(e) => {
                let name = e.local_name().as_ref().to_ascii_lowercase();
                if is_one_of(&name, SKIPPED) {
                    skip_depth = skip_depth.saturating_sub(1);
                } else if is_one_of(&name, BLOCKS) {
                    out.push('\n');
                }
            }
            Event::Empty(e) => {
                if is_one_of(&e.local_name().as_ref().to_ascii_lowercase(), BLOCKS) {
                    out.push('\n');
                }
            }
            Event::Text(e) if skip_depth == 0 => {
                out.push_str(&reader.decoder().decode(&e)?);
            }
            Event::CData(e) if skip_depth == 0 => {
                out.push_str(&reader.decoder().decode(&e)?);
            }
            Event::GeneralRef(e) if skip_depth == 0 => {
                let entity = format!("&{};", e.decode()?);
                // unknown entities are kept verbatim
                match unescape_with(&entity, resolve_html5_entity) {
                    Ok(resolved) => out.push_str(&resolved),
                    Err(_) => out.push_str(&entity),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

fn is_one_of(name: &[u8], set: &[&[u8]]) -> bool {
    set.iter().any(|candidate| *candidate == name)
}
