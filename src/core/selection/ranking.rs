// src/core/selection/ranking.rs

use std::cmp::Ordering;

use crate::core::models::AccessPoint;

/// Orders by signed RSSI, strongest first.
///
/// The stored byte is reinterpreted as `i8`, so `0x7f` (127) beats `0x0a`
/// (10), which beats `0x80` (-128).
pub fn compare_rssi(a: &AccessPoint, b: &AccessPoint) -> Ordering {
    b.rssi_dbm().cmp(&a.rssi_dbm())
}

/// Sorts strongest first. The sort is stable: APs with equal RSSI keep
/// their scan order.
pub fn sort_by_rssi(aps: &mut [AccessPoint]) {
    aps.sort_by(compare_rssi);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{BssDescription, BssidId};
    use proptest::prelude::*;

    fn ap(tag: u8, rssi: u8) -> AccessPoint {
        AccessPoint::from_scan(&BssDescription {
            bssid: BssidId([0, 0, 0, 0, 0, tag]),
            ssid: format!("ap-{tag}"),
            rssi_measurement: rssi,
            channel: 1,
            beacon_period: 100,
            rsn: None,
        })
    }

    #[test]
    fn sorts_by_signed_value() {
        let mut aps = vec![ap(0, 0x0a), ap(1, 0x80), ap(2, 0x7f)];
        sort_by_rssi(&mut aps);
        let order: Vec<u8> = aps.iter().map(|a| a.last_rssi()).collect();
        assert_eq!(order, vec![0x7f, 0x0a, 0x80]);
    }

    #[test]
    fn negative_readings_rank_below_zero() {
        let mut aps = vec![ap(0, 0xb0), ap(1, 0x00), ap(2, 0xf6)];
        sort_by_rssi(&mut aps);
        let order: Vec<i8> = aps.iter().map(|a| a.rssi_dbm()).collect();
        assert_eq!(order, vec![0, -10, -80]);
    }

    #[test]
    fn ties_keep_scan_order() {
        let mut aps = vec![ap(0, 0xc4), ap(1, 0xd0), ap(2, 0xc4), ap(3, 0xd0), ap(4, 0xc4)];
        sort_by_rssi(&mut aps);
        let tags: Vec<u8> = aps.iter().map(|a| a.bssid().0[5]).collect();
        assert_eq!(tags, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn unknown_rssi_sorts_as_minus_one() {
        let unknown = AccessPoint::new(&BssDescription {
            bssid: BssidId([0; 6]),
            ssid: String::new(),
            rssi_measurement: 0x00,
            channel: 1,
            beacon_period: 100,
            rsn: None,
        });
        let mut aps = vec![ap(1, 0xfe), unknown, ap(2, 0x00)];
        sort_by_rssi(&mut aps);
        let order: Vec<i8> = aps.iter().map(|a| a.rssi_dbm()).collect();
        assert_eq!(order, vec![0, -1, -2]);
    }

    proptest! {
        #[test]
        fn prop_sorted_is_non_increasing(rssi in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut aps: Vec<AccessPoint> = rssi.iter().enumerate().map(|(i, r)| ap(i as u8, *r)).collect();
            sort_by_rssi(&mut aps);
            for pair in aps.windows(2) {
                prop_assert!(pair[0].rssi_dbm() >= pair[1].rssi_dbm());
            }
        }

        #[test]
        fn prop_equal_rssi_keeps_input_order(rssi in proptest::collection::vec(0u8..4, 0..64)) {
            let mut aps: Vec<AccessPoint> = rssi.iter().enumerate().map(|(i, r)| ap(i as u8, *r)).collect();
            sort_by_rssi(&mut aps);
            for pair in aps.windows(2) {
                if pair[0].rssi_dbm() == pair[1].rssi_dbm() {
                    prop_assert!(pair[0].bssid().0[5] < pair[1].bssid().0[5]);
                }
            }
        }

        #[test]
        fn prop_sort_is_a_permutation(rssi in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut aps: Vec<AccessPoint> = rssi.iter().enumerate().map(|(i, r)| ap(i as u8, *r)).collect();
            sort_by_rssi(&mut aps);
            let mut tags: Vec<u8> = aps.iter().map(|a| a.bssid().0[5]).collect();
            tags.sort_unstable();
            prop_assert_eq!(tags, (0..rssi.len() as u8).collect::<Vec<u8>>());
        }
    }
}
