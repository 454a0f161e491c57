// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller tests against a scripted companion.

mod common;

use std::sync::Arc;
use std::time::Duration;

use ac_companion::command::ConfigurationCommand;
use ac_companion::controller::Controller;
use ac_companion::event::{ClimateEvent, Notice};
use ac_companion::telemetry::SensorEvent;
use ac_companion::types::{FanMode, HvacMode, OperationMode, SwingMode};
use ac_companion::{Error, ProtocolError, ValueError};
use chrono::{Duration as ChronoDuration, Utc};
use common::{Call, FakeCompanion, MAC, MODEL};
use serde_json::json;

// ============================================================================
// Handshake
// ============================================================================

mod handshake {
    use super::*;

    #[tokio::test]
    async fn unique_id_is_model_and_mac() {
        let fake = FakeCompanion::new();
        let controller = Controller::connect(fake.clone(), &common::config())
            .await
            .unwrap();

        assert_eq!(controller.unique_id(), format!("lumi.acpartner.v3-{MAC}"));
        assert_eq!(controller.name(), "Xiaomi AC Companion");
        assert!(!controller.is_available());
        assert_eq!(fake.calls(), vec![Call::Info]);
    }

    #[tokio::test]
    async fn fault_is_not_ready() {
        let fake = FakeCompanion::new();
        fake.fail_info(ProtocolError::Timeout(5000));

        let err = Controller::connect(fake, &common::config())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotReady(ProtocolError::Timeout(5000))));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_any_call() {
        let fake = FakeCompanion::new();
        let config = common::config().with_temperature_range(30.0, 16.0);

        let err = Controller::connect(fake.clone(), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidConfiguration(_))));
        assert!(fake.calls().is_empty());
    }
}

// ============================================================================
// Poll cycle
// ============================================================================

mod poll {
    use super::*;

    #[tokio::test]
    async fn first_poll_learns_model_and_state() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        let state = controller.state();
        assert!(state.is_available());
        assert_eq!(state.model().unwrap().as_str(), MODEL);
        assert_eq!(state.hvac_mode(), Some(HvacMode::Cool));
        assert_eq!(state.fan_mode(), Some(FanMode::Low));
        assert_eq!(state.swing_mode(), Some(SwingMode::Off));
        assert_eq!(state.target_temperature(), Some(24.0));

        let attrs = controller.attributes();
        assert_eq!(attrs.load_power, Some(120.0));
        assert_eq!(attrs.led, Some(false));
    }

    #[tokio::test]
    async fn fault_marks_unavailable_and_success_recovers() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        fake.push_status(Err(ProtocolError::Timeout(5000)));
        assert!(!controller.update().await);
        assert!(!controller.is_available());
        assert!(controller.state().last_snapshot().is_some());

        // A partial report only carries power and mode.
        fake.push_status(Ok(ac_companion::StatusResponse::new(vec![
            MODEL.to_string(),
            "0113".to_string(),
        ])));
        assert!(controller.update().await);

        let state = controller.state();
        assert!(state.is_available());
        assert_eq!(state.hvac_mode(), Some(HvacMode::Dry));
        assert_eq!(state.target_temperature(), Some(24.0));
        assert_eq!(state.fan_mode(), Some(FanMode::Low));
        assert_eq!(state.last_snapshot().unwrap().load_power_watts, 120.0);
    }

    #[tokio::test]
    async fn unknown_device_value_marks_unavailable() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        fake.push_status(Ok(ac_companion::StatusResponse::new(vec![
            MODEL.to_string(),
            "01171".to_string(),
        ])));
        assert!(!controller.update().await);
        assert!(!controller.is_available());
        assert_eq!(controller.state().hvac_mode(), Some(HvacMode::Cool));
    }

    #[tokio::test]
    async fn poll_overrides_pending_edit() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        controller.set_fan_mode(FanMode::High).await.unwrap();
        assert_eq!(controller.state().fan_mode(), Some(FanMode::High));

        fake.push_status(Ok(common::status(true, 1, 0, 1, 24)));
        controller.update().await;
        assert_eq!(controller.state().fan_mode(), Some(FanMode::Low));
    }

    #[tokio::test]
    async fn availability_events_are_published_on_transitions() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;
        let mut events = controller.subscribe();

        fake.push_status(Ok(common::status(false, 0, 3, 0, 20)));
        controller.update().await;
        fake.push_status(Err(ProtocolError::ConnectionFailed("refused".into())));
        controller.update().await;
        fake.push_status(Err(ProtocolError::ConnectionFailed("refused".into())));
        controller.update().await;

        let mut availability = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let ClimateEvent::AvailabilityChanged { available, .. } = event {
                availability.push(available);
            }
        }
        assert_eq!(availability, vec![true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_loop_runs_on_interval() {
        let fake = FakeCompanion::new();
        let controller = Arc::new(common::connect(&fake).await);
        for _ in 0..5 {
            fake.push_status(Ok(common::status(true, 1, 0, 1, 24)));
        }

        let handle = controller.spawn_poll_loop();
        tokio::time::sleep(Duration::from_secs(31)).await;
        handle.abort();

        assert_eq!(fake.count(|c| *c == Call::Status), 3);
        assert!(controller.is_available());
    }
}

// ============================================================================
// Setters
// ============================================================================

mod setters {
    use super::*;

    #[tokio::test]
    async fn turn_on_resumes_last_operation() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;
        fake.push_status(Ok(common::status(false, 1, 0, 1, 24)));
        controller.update().await;
        assert_eq!(controller.state().hvac_mode(), Some(HvacMode::Off));

        assert!(controller.turn_on().await);

        let command = ConfigurationCommand::compose(&controller.state()).unwrap();
        assert_eq!(command.mode, OperationMode::Cool);
        assert_eq!(fake.mutating_calls(), vec![Call::On]);
    }

    #[tokio::test]
    async fn turn_off_keeps_last_operation() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        assert!(controller.turn_off().await);

        let state = controller.state();
        assert!(!state.is_on());
        assert_eq!(state.hvac_mode(), Some(HvacMode::Off));
        assert_eq!(state.last_on_operation(), Some(OperationMode::Cool));
        assert_eq!(fake.mutating_calls(), vec![Call::Off]);
    }

    #[tokio::test]
    async fn temperature_below_range_is_rejected() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;
        let before = controller.state();

        let err = controller.set_temperature(Some(15.0), None).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::TemperatureOutOfRange { .. })
        ));
        assert_eq!(controller.state(), before);
        assert!(fake.calls().is_empty());

        assert!(controller.set_temperature(Some(16.0), None).await.unwrap());
        assert_eq!(
            fake.mutating_calls(),
            vec![Call::Configuration(json!([MODEL, 1, 1, 16, 0, 1, "A"]))]
        );
    }

    #[tokio::test]
    async fn temperature_with_mode_sends_one_configuration() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        assert!(
            controller
                .set_temperature(Some(21.5), Some(HvacMode::Heat))
                .await
                .unwrap()
        );
        assert_eq!(
            fake.mutating_calls(),
            vec![Call::Configuration(json!([MODEL, 1, 0, 21, 0, 1, "A"]))]
        );
    }

    #[tokio::test]
    async fn mode_without_temperature_keeps_target() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        assert!(
            controller
                .set_temperature(None, Some(HvacMode::Heat))
                .await
                .unwrap()
        );
        assert_eq!(controller.state().target_temperature(), Some(24.0));
        assert_eq!(
            fake.mutating_calls(),
            vec![Call::Configuration(json!([MODEL, 1, 0, 24, 0, 1, "A"]))]
        );
    }

    #[tokio::test]
    async fn hvac_mode_sets_power_and_last_on() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;
        fake.push_status(Ok(common::status(false, 1, 2, 0, 26)));
        controller.update().await;

        assert!(controller.set_hvac_mode(HvacMode::FanOnly).await.unwrap());

        let state = controller.state();
        assert!(state.is_on());
        assert_eq!(state.last_on_operation(), Some(OperationMode::Ventilate));
        assert_eq!(
            fake.mutating_calls(),
            vec![Call::Configuration(json!([MODEL, 1, 4, 26, 2, 0, "A"]))]
        );
    }

    #[tokio::test]
    async fn hvac_off_turns_off_then_sends_configuration() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;

        assert!(controller.set_hvac_mode(HvacMode::Off).await.unwrap());
        assert_eq!(
            fake.mutating_calls(),
            vec![
                Call::Off,
                Call::Configuration(json!([MODEL, 0, 1, 24, 0, 1, "A"])),
            ]
        );
    }

    #[tokio::test]
    async fn failed_off_sends_no_configuration() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;
        fake.push_reply(Err(ProtocolError::Timeout(5000)));

        assert!(!controller.set_hvac_mode(HvacMode::Off).await.unwrap());
        assert_eq!(fake.mutating_calls(), vec![Call::Off]);
        assert!(!controller.is_available());
        assert_eq!(controller.state().hvac_mode(), Some(HvacMode::Cool));
    }

    #[tokio::test]
    async fn mismatched_response_marks_unavailable() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;
        fake.push_reply(Ok(ac_companion::CommandResponse::message("error")));

        assert!(!controller.set_swing_mode(SwingMode::On).await.unwrap());
        assert!(!controller.is_available());
        // The edit is kept until the next poll.
        assert_eq!(controller.state().swing_mode(), Some(SwingMode::On));
    }

    #[tokio::test]
    async fn unknown_model_refuses_configuration() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;
        let mut events = controller.subscribe();

        let err = controller.set_fan_mode(FanMode::Auto).await.unwrap_err();
        assert!(matches!(err, Error::ModelUnknown));
        assert!(fake.calls().is_empty());

        let notices: Vec<Notice> = std::iter::from_fn(|| events.try_recv().ok())
            .filter_map(|event| event.notice().cloned())
            .collect();
        assert_eq!(notices, vec![Notice::ConfigurationNotSent]);
    }

    #[tokio::test]
    async fn state_events_carry_the_change() {
        let fake = FakeCompanion::new();
        let controller = common::connect_polled(&fake).await;
        let mut events = controller.subscribe();

        controller.set_fan_mode(FanMode::Medium).await.unwrap();

        match events.try_recv().unwrap() {
            ClimateEvent::StateUpdated {
                change, attributes, ..
            } => {
                assert_eq!(
                    change,
                    Some(ac_companion::StateChange::FanMode(FanMode::Medium))
                );
                assert_eq!(attributes.fan_mode, Some(FanMode::Medium));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}

// ============================================================================
// Sensors
// ============================================================================

mod sensors {
    use super::*;

    #[tokio::test]
    async fn temperature_reading_updates_current_temperature() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;

        assert!(controller.sensor_changed(&SensorEvent::new("71.6").with_unit("°F")));
        let current = controller.state().current_temperature().unwrap();
        assert!((current - 22.0).abs() < 1e-9);
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_readings_are_ignored() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;

        assert!(!controller.sensor_changed(&SensorEvent::new("unavailable")));
        assert!(!controller.sensor_changed(&SensorEvent::new("warm")));
        assert!(controller.state().current_temperature().is_none());
    }

    #[tokio::test]
    async fn older_reading_does_not_overwrite_newer() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;
        let now = Utc::now();

        assert!(controller.sensor_changed(&SensorEvent::new("23").observed_at(now)));
        assert!(!controller.sensor_changed(
            &SensorEvent::new("19").observed_at(now - ChronoDuration::seconds(10))
        ));
        assert_eq!(controller.state().current_temperature(), Some(23.0));
    }

    #[tokio::test]
    async fn power_sensor_is_recorded_without_device_call() {
        let fake = FakeCompanion::new();
        let controller = common::connect(&fake).await;

        assert!(controller.power_sensor_changed(&SensorEvent::new("on")));
        assert_eq!(controller.attributes().power_sensor_on, Some(true));
        assert!(fake.calls().is_empty());
    }
}
