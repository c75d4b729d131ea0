#![cfg(test)]
use std::cell::Cell;

use netsense_common::connectivity::{ConnectivityProvider, ProviderError, ProviderResult};
use netsense_common::network::descriptor::{MajorType, RawNetworkDescriptor};

/// In-memory provider describing one device snapshot.
#[derive(Default)]
pub struct ScriptedProvider {
    pub active: Option<RawNetworkDescriptor>,
    pub networks: Vec<RawNetworkDescriptor>,
    pub data_connected: bool,
    pub gps: Option<bool>,
    pub failing: Option<ProviderError>,
    pub queries: Cell<usize>,
}

impl ScriptedProvider {
    fn answer<T>(&self, value: T) -> ProviderResult<T> {
        self.queries.set(self.queries.get() + 1);
        match &self.failing {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }
}

impl ConnectivityProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn active_network(&self) -> ProviderResult<Option<RawNetworkDescriptor>> {
        self.answer(self.active)
    }

    fn network(&self, kind: MajorType) -> ProviderResult<Option<RawNetworkDescriptor>> {
        let found = self
            .networks
            .iter()
            .find(|descriptor| descriptor.major_type == kind)
            .copied();
        self.answer(found)
    }

    fn mobile_data_connected(&self) -> ProviderResult<bool> {
        self.answer(self.data_connected)
    }

    fn gps_enabled(&self) -> ProviderResult<bool> {
        self.answer(())?;
        self.gps.ok_or(ProviderError::Unsupported("gps"))
    }
}

pub fn wifi_only() -> ScriptedProvider {
    let wifi = RawNetworkDescriptor::wifi(true);
    ScriptedProvider {
        active: Some(wifi),
        networks: vec![wifi],
        gps: Some(false),
        ..Default::default()
    }
}

pub fn mobile_only(subtype: i32, data_connected: bool) -> ScriptedProvider {
    let mobile = RawNetworkDescriptor::mobile(true, subtype);
    ScriptedProvider {
        active: Some(mobile),
        networks: vec![RawNetworkDescriptor::wifi(false), mobile],
        data_connected,
        gps: Some(true),
        ..Default::default()
    }
}

pub fn offline() -> ScriptedProvider {
    ScriptedProvider {
        networks: vec![RawNetworkDescriptor::wifi(false)],
        ..Default::default()
    }
}
