use std::ops::RangeInclusive;

/// Parse a page range string like "1,3-5" into inclusive 0-indexed page spans.
///
/// Input is 1-indexed (user-facing). Output is 0-indexed (internal).
/// Only the syntax is checked here. Spans are expanded and checked against
/// the page count once the document has been opened.
pub fn parse_page_range(input: &str) -> Result<Vec<RangeInclusive<usize>>, String> {
    let mut spans = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_page(start_str)?;
            let end = parse_page(end_str)?;
            if start > end {
                return Err(format!("invalid page range: '{part}'"));
            }
            spans.push(start - 1..=end - 1);
        } else {
            let page = parse_page(part)?;
            spans.push(page - 1..=page - 1);
        }
    }

    if spans.is_empty() {
        return Err(format!("no pages selected: '{input}'"));
    }
    Ok(spans)
}

fn parse_page(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let page: usize = s
        .parse()
        .map_err(|_| format!("invalid page number: '{s}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    Ok(page)
}
