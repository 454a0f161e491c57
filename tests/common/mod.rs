// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted in-memory companion shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use ac_companion::command::{Command, ConfigurationCommand};
use ac_companion::controller::Controller;
use ac_companion::manager::CompanionConfig;
use ac_companion::protocol::{CommandResponse, DeviceClient, DeviceInfo, StatusResponse};
use ac_companion::types::{LearnSlot, ModelToken};
use ac_companion::ProtocolError;
use parking_lot::Mutex;

pub const TOKEN: &str = "0123456789abcdef0123456789abcdef";
pub const MODEL: &str = "010500978022222102";
pub const MAC: &str = "AA:BB:CC:DD:EE:FF";

/// A call received by the fake device.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Info,
    Status,
    On,
    Off,
    Configuration(serde_json::Value),
    Raw(String),
    Infrared { model: String, code: String },
    LearnStart(u32),
    LearnPoll(u32),
    LearnStop(u32),
}

impl Call {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::On | Self::Off | Self::Configuration(_) | Self::Raw(_) | Self::Infrared { .. }
        )
    }
}

#[derive(Default)]
struct Script {
    calls: Mutex<Vec<Call>>,
    info_fault: Mutex<Option<ProtocolError>>,
    statuses: Mutex<VecDeque<Result<StatusResponse, ProtocolError>>>,
    replies: Mutex<VecDeque<Result<CommandResponse, ProtocolError>>>,
    captures: Mutex<VecDeque<CommandResponse>>,
}

/// Cloneable handle to a scripted companion.
///
/// Mutating calls answer with the queued replies, then with the success
/// token. Status polls answer with the queued statuses, then time out.
#[derive(Clone, Default)]
pub struct FakeCompanion {
    script: Arc<Script>,
}

impl FakeCompanion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_info(&self, error: ProtocolError) {
        *self.script.info_fault.lock() = Some(error);
    }

    pub fn push_status(&self, status: Result<StatusResponse, ProtocolError>) {
        self.script.statuses.lock().push_back(status);
    }

    pub fn push_reply(&self, reply: Result<CommandResponse, ProtocolError>) {
        self.script.replies.lock().push_back(reply);
    }

    pub fn push_capture(&self, code: &str) {
        self.script
            .captures
            .lock()
            .push_back(CommandResponse::message(code));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.calls.lock().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutating).collect()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.script.calls.lock().iter().filter(|c| matches(c)).count()
    }

    pub fn clear_calls(&self) {
        self.script.calls.lock().clear();
    }

    fn record(&self, call: Call) {
        self.script.calls.lock().push(call);
    }

    fn reply(&self, call: Call) -> Result<CommandResponse, ProtocolError> {
        self.record(call);
        let next = self.script.replies.lock().pop_front();
        next.unwrap_or_else(|| Ok(CommandResponse::ok()))
    }
}

impl DeviceClient for FakeCompanion {
    async fn info(&self) -> Result<DeviceInfo, ProtocolError> {
        self.record(Call::Info);
        let fault = self.script.info_fault.lock().clone();
        match fault {
            Some(e) => Err(e),
            None => Ok(DeviceInfo {
                model: "lumi.acpartner.v3".to_string(),
                mac_address: MAC.to_string(),
                firmware_version: "1.4.1_148".to_string(),
                hardware_version: "AC".to_string(),
            }),
        }
    }

    async fn status(&self) -> Result<StatusResponse, ProtocolError> {
        self.record(Call::Status);
        let next = self.script.statuses.lock().pop_front();
        next.unwrap_or(Err(ProtocolError::Timeout(5000)))
    }

    async fn on(&self) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::On)
    }

    async fn off(&self) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::Off)
    }

    async fn send_configuration(
        &self,
        command: &ConfigurationCommand,
    ) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::Configuration(command.params()))
    }

    async fn send_raw_command(&self, code: &str) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::Raw(code.to_string()))
    }

    async fn send_ir_code(
        &self,
        model: &ModelToken,
        code: &str,
    ) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::Infrared {
            model: model.to_string(),
            code: code.to_string(),
        })
    }

    async fn learn_start(&self, slot: LearnSlot) -> Result<CommandResponse, ProtocolError> {
        self.reply(Call::LearnStart(slot.value()))
    }

    async fn learn_poll(&self, slot: LearnSlot) -> Result<CommandResponse, ProtocolError> {
        self.record(Call::LearnPoll(slot.value()));
        let next = self.script.captures.lock().pop_front();
        Ok(next.unwrap_or_else(|| CommandResponse::message("(null)")))
    }

    async fn learn_stop(&self, slot: LearnSlot) -> Result<CommandResponse, ProtocolError> {
        self.record(Call::LearnStop(slot.value()));
        Ok(CommandResponse::ok())
    }
}

/// Builds a status payload from device codes.
///
/// `mode`: 0 heat, 1 cool, 2 auto, 3 dehumidify, 4 ventilate.
/// `fan`: 0 low, 1 medium, 2 high, 3 auto. `swing`: 0 on, 1 off.
pub fn status(power_on: bool, mode: u8, fan: u8, swing: u8, temperature: u8) -> StatusResponse {
    let power = u8::from(power_on);
    StatusResponse::new(vec![
        MODEL.to_string(),
        format!("01{power}{mode}{fan}{swing}{temperature:02X}A"),
        "120".to_string(),
    ])
}

pub fn config() -> CompanionConfig {
    CompanionConfig::new("192.168.1.40", TOKEN, "sensor.living_room_temperature")
}

pub async fn connect(fake: &FakeCompanion) -> Controller<FakeCompanion> {
    let controller = Controller::connect(fake.clone(), &config()).await.unwrap();
    fake.clear_calls();
    controller
}

/// Connects and performs one successful poll of a unit that is on in cool
/// mode, fan low, swing off, 24 °C.
pub async fn connect_polled(fake: &FakeCompanion) -> Controller<FakeCompanion> {
    let controller = connect(fake).await;
    fake.push_status(Ok(status(true, 1, 0, 1, 24)));
    assert!(controller.update().await);
    fake.clear_calls();
    controller
}
