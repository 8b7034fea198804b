use indexmap::IndexMap;
use serde::Serialize;

/// Value `nmcli` prints for an unknown or absent field.
pub const PLACEHOLDER: &str = "--";

/// One row of `nmcli device`.
/// `nmcli device` 输出中的一行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub name: String,
    pub kind: String,  // "wifi", "ethernet", "loopback" ...
    pub state: String, // "connected", "disconnected", "unavailable" ...
    pub connection_name: String,
}

impl DeviceRecord {
    pub fn is_connected(&self) -> bool {
        self.state == "connected"
    }

    /// The connection bound to this device, `None` when `nmcli` shows `--`.
    pub fn connection(&self) -> Option<&str> {
        (self.connection_name != PLACEHOLDER).then_some(self.connection_name.as_str())
    }
}

/// One row of `nmcli connection show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRecord {
    pub name: String,
    pub uuid: String, // opaque, never validated
    pub kind: String,
    pub device_name: String,
}

impl ConnectionRecord {
    pub fn device(&self) -> Option<&str> {
        (self.device_name != PLACEHOLDER).then_some(self.device_name.as_str())
    }
}

/// Properties printed by `nmcli device show <name>` or `nmcli connection show <id>`.
///
/// Keys keep the order of their first appearance. Inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap(IndexMap<String, String>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values of the numbered keys `prefix[1]`, `prefix[2]`, ... sorted by index.
    ///
    /// `nmcli` prints multi-valued properties such as `IP4.ADDRESS[1]` and
    /// `IP4.DNS[2]` this way. Keys with a non-numeric index are ignored.
    pub fn indexed(&self, prefix: &str) -> Vec<&str> {
        let mut found: Vec<(u32, &str)> = self
            .0
            .iter()
            .filter_map(|(key, value)| {
                let index = key
                    .strip_prefix(prefix)?
                    .strip_prefix('[')?
                    .strip_suffix(']')?
                    .parse()
                    .ok()?;
                Some((index, value.as_str()))
            })
            .collect();
        found.sort_by_key(|(index, _)| *index);
        found.into_iter().map(|(_, value)| value).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A single access point from `nmcli device wifi list`.
/// Wi-Fi 扫描时单个网络的具体信息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiScanRecord {
    pub is_active: bool,
    pub bssid: String,
    pub ssid: String,
    pub mode: String,
    pub channel: u32,
    pub rate: String,
    pub signal: u8, // 信号强度，0到100
    pub bars: String,
    pub security: String, // "WPA2", "WPA1 WPA2", "--" ...
}

impl WifiScanRecord {
    /// Whether the scan entry is incomplete: its bssid, ssid or security is
    /// the tool's placeholder.
    pub fn is_placeholder(&self, placeholder: &str) -> bool {
        self.bssid == placeholder || self.ssid == placeholder || self.security == placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_properties_follow_numeric_order() {
        let map: PropertyMap = [
            ("IP4.ADDRESS[2]", "10.0.0.7/8"),
            ("IP4.GATEWAY", "192.168.1.1"),
            ("IP4.ADDRESS[10]", "172.16.0.1/12"),
            ("IP4.ADDRESS[1]", "192.168.1.5/24"),
            ("IP4.ADDRESS[x]", "ignored"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            map.indexed("IP4.ADDRESS"),
            vec!["192.168.1.5/24", "10.0.0.7/8", "172.16.0.1/12"]
        );
        assert!(map.indexed("IP6.ADDRESS").is_empty());
    }

    #[test]
    fn duplicate_key_keeps_first_position() {
        let map: PropertyMap = [("A", "1"), ("B", "2"), ("A", "3")].into_iter().collect();
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn placeholder_device_connection() {
        let device = DeviceRecord {
            name: "eth0".into(),
            kind: "ethernet".into(),
            state: "unavailable".into(),
            connection_name: "--".into(),
        };
        assert_eq!(device.connection(), None);
        assert!(!device.is_connected());
    }
}
