#![cfg(test)]
use std::fs;

use netsense_common::config::{Backend, Config};
use netsense_common::connectivity::{self, ProviderError};
use netsense_common::network::descriptor::{RawNetworkDescriptor, subtype};
use netsense_common::network::state::NetworkClassification;
use netsense_core::system;

use super::util::{ScriptedProvider, mobile_only, offline, wifi_only};

#[test]
fn wifi_device_answers_every_query() {
    let provider = wifi_only();

    assert_eq!(connectivity::current_state(&provider), Ok(NetworkClassification::WiFi));
    assert_eq!(connectivity::is_wifi(&provider), Ok(true));
    assert_eq!(connectivity::is_mobile(&provider), Ok(false));
    assert_eq!(connectivity::is_4g(&provider), Ok(false));
    assert_eq!(connectivity::is_wifi_connected(&provider), Ok(true));
    assert_eq!(connectivity::is_gps_enabled(&provider), Ok(false));
    assert!(connectivity::is_network_available(&provider));
}

#[test]
fn lte_device_with_data() {
    let provider = mobile_only(subtype::LTE, true);

    assert_eq!(connectivity::current_state(&provider), Ok(NetworkClassification::Cellular4G));
    assert_eq!(connectivity::is_mobile(&provider), Ok(true));
    assert_eq!(connectivity::is_4g(&provider), Ok(true));
    assert_eq!(connectivity::is_wifi_connected(&provider), Ok(false));
    assert_eq!(connectivity::is_gps_enabled(&provider), Ok(true));
    assert!(connectivity::is_network_available(&provider));
}

#[test]
fn mobile_without_data_bearer_is_not_available() {
    let provider = mobile_only(subtype::HSPAP, false);

    assert_eq!(connectivity::current_state(&provider), Ok(NetworkClassification::Cellular3G));
    assert!(!connectivity::is_network_available(&provider));
}

#[test]
fn generations_for_every_mobile_code() {
    let expectations: [(i32, NetworkClassification); 6] = [
        (subtype::GPRS, NetworkClassification::Cellular2G),
        (subtype::IDEN, NetworkClassification::Cellular2G),
        (subtype::EVDO_0, NetworkClassification::Cellular3G),
        (subtype::EHRPD, NetworkClassification::Cellular3G),
        (subtype::LTE, NetworkClassification::Cellular4G),
        (subtype::NR, NetworkClassification::Unknown),
    ];

    for (code, expected) in expectations {
        let provider = mobile_only(code, true);
        assert_eq!(connectivity::current_state(&provider), Ok(expected), "code {code}");
    }
}

#[test]
fn offline_device() {
    let provider = offline();

    assert_eq!(connectivity::current_state(&provider), Ok(NetworkClassification::None));
    assert_eq!(connectivity::is_wifi(&provider), Ok(false));
    assert_eq!(connectivity::is_wifi_connected(&provider), Ok(false));
    assert_eq!(
        connectivity::is_gps_enabled(&provider),
        Err(ProviderError::Unsupported("gps"))
    );
    assert!(!connectivity::is_network_available(&provider));
}

#[test]
fn connecting_ethernet_is_unknown() {
    let provider = ScriptedProvider {
        active: Some(RawNetworkDescriptor::other(true)),
        ..Default::default()
    };
    assert_eq!(connectivity::current_state(&provider), Ok(NetworkClassification::Unknown));
}

#[test]
fn failures_surface_except_for_availability() {
    let provider = ScriptedProvider {
        failing: Some(ProviderError::PermissionDenied),
        ..wifi_only()
    };

    assert_eq!(connectivity::current_state(&provider), Err(ProviderError::PermissionDenied));
    assert_eq!(connectivity::is_4g(&provider), Err(ProviderError::PermissionDenied));
    assert!(!connectivity::is_network_available(&provider));
}

#[test]
fn every_query_goes_back_to_the_provider() {
    let provider = wifi_only();

    let _ = connectivity::current_state(&provider);
    let _ = connectivity::current_state(&provider);
    let _ = connectivity::is_wifi(&provider);
    assert_eq!(provider.queries.get(), 3);
}

#[test]
fn sysfs_backend_without_default_route() {
    let base = std::env::temp_dir().join(format!("netsense-it-{}", std::process::id()));
    let procfs = base.join("proc");
    fs::create_dir_all(procfs.join("net")).unwrap();
    fs::write(
        procfs.join("net").join("route"),
        "Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT\n",
    )
    .unwrap();

    let cfg = Config {
        backend: Backend::Sysfs,
        sysfs_root: base.join("sys"),
        procfs_root: procfs,
        ..Default::default()
    };
    let provider = system::select_provider(&cfg).unwrap();

    assert_eq!(provider.name(), "sysfs");
    assert_eq!(
        connectivity::current_state(provider.as_ref()),
        Ok(NetworkClassification::None)
    );
    assert_eq!(
        connectivity::is_gps_enabled(provider.as_ref()),
        Err(ProviderError::Unsupported("gps"))
    );
}
