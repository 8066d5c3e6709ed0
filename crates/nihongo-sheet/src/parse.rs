use nihongo_types::VocabularyRecord;

/// Parse the sheet export into records.
///
/// The first line is the header and is skipped. Every other line is split on
/// `,` and the trimmed fields are taken as headword, reading, meaning and tags
/// in that order. Lines without a headword are dropped.
///
/// Quoting is not understood: a field containing a comma or a line break is
/// split apart.
pub fn parse_records(text: &str) -> Vec<VocabularyRecord> {
    text.split('\n')
        .skip(1)
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<VocabularyRecord> {
    let mut fields = line.split(',').map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let headword = next();
    if headword.is_empty() {
        return None;
    }

    let reading = next();
    let meaning = next();
    let tags = Some(next()).filter(|t| !t.is_empty());

    Some(VocabularyRecord {
        headword,
        reading,
        meaning,
        tags,
    })
}
