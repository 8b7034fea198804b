use crate::structs::PropertyMap;

/// Splits a `key: value` line at its colons.
///
/// Lines with fewer than two non-empty colon-separated pieces are not
/// properties and give `None`. When the value itself holds colons (a hardware
/// address, an IPv6 address) everything after the key is stitched back
/// together, keeping empty pieces inside the value so `fe80::1` survives.
fn split_property(line: &str) -> Option<(&str, String)> {
    let pieces: Vec<&str> = line.split(':').collect();
    let key_at = pieces.iter().position(|p| !p.is_empty())?;
    let rest = &pieces[key_at + 1..];
    let first = rest.iter().position(|p| !p.is_empty())?;
    let last = rest.iter().rposition(|p| !p.is_empty())?;

    let value = rest[first..=last].join(":");
    Some((pieces[key_at].trim(), value.trim().to_string()))
}

/// Parses the `key: value` dump `nmcli` prints for a device or connection.
///
/// Keys keep their first-seen order; a repeated key takes the last value.
pub fn parse_properties(output: &str) -> PropertyMap {
    let mut map = PropertyMap::new();
    for (key, value) in output.lines().filter_map(split_property) {
        map.insert(key, value);
    }
    map
}

/// Parses `nmcli device show <name>`.
pub fn parse_device_properties(output: &str) -> PropertyMap {
    parse_properties(output)
}

/// Parses `nmcli connection show <id>`.
pub fn parse_connection_properties(output: &str) -> PropertyMap {
    parse_properties(output)
}
