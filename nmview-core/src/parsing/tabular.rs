/// Splits one line of `nmcli` tabular output into its columns.
///
/// Columns are separated by runs of two or more spaces; a single space stays
/// inside its token (`"195 Mbit/s"`). Empty tokens at either end are dropped,
/// so blank input gives an empty vector.
pub fn split_columns(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b' ' && bytes.get(i + 1) == Some(&b' ') {
            let end = i;
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            if end > start {
                tokens.push(&line[start..end]);
            }
            start = i;
        } else {
            i += 1;
        }
    }

    if start < bytes.len() {
        tokens.push(&line[start..]);
    }
    tokens
}
