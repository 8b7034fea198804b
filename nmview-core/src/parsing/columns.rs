use super::tabular::split_columns;
use crate::structs::{ConnectionRecord, DeviceRecord};

const DEVICE_HEADER: [&str; 4] = ["DEVICE", "TYPE", "STATE", "CONNECTION"];

/// Yields every line of `output` that splits into exactly `N` columns.
/// Header rows with a different width, blank lines and anything else that
/// does not fit are skipped without comment.
fn fixed_rows<const N: usize>(output: &str) -> impl Iterator<Item = [&str; N]> {
    output
        .lines()
        .filter_map(|line| <[&str; N]>::try_from(split_columns(line).as_slice()).ok())
}

/// Parses `nmcli device` output.
///
/// ```text
/// DEVICE  TYPE      STATE      CONNECTION
/// wlan0   wifi      connected  HomeNet
/// lo      loopback  unmanaged  --
/// ```
pub fn parse_device_list(output: &str) -> Vec<DeviceRecord> {
    fixed_rows::<4>(output)
        .filter(|row| *row != DEVICE_HEADER)
        .map(|[name, kind, state, connection_name]| DeviceRecord {
            name: name.to_string(),
            kind: kind.to_string(),
            state: state.to_string(),
            connection_name: connection_name.to_string(),
        })
        .collect()
}

/// Parses `nmcli connection show` output.
///
/// ```text
/// NAME     UUID                                  TYPE      DEVICE
/// HomeNet  0d5b7e5a-3c1e-4a43-9d0e-2f7c1f1f6b4a  wifi      wlan0
/// ```
pub fn parse_connection_list(output: &str) -> Vec<ConnectionRecord> {
    fixed_rows::<4>(output)
        .filter(|[_, uuid, _, _]| *uuid != "UUID")
        .map(|[name, uuid, kind, device_name]| ConnectionRecord {
            name: name.to_string(),
            uuid: uuid.to_string(),
            kind: kind.to_string(),
            device_name: device_name.to_string(),
        })
        .collect()
}
