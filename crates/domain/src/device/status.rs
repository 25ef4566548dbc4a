//! Device status — the binary power state of a device.

use serde::{Deserialize, Serialize};

/// Whether a device is powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    On,
    #[default]
    Off,
}

impl DeviceStatus {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(DeviceStatus::default(), DeviceStatus::Off);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(DeviceStatus::On.to_string(), "on");
        assert_eq!(DeviceStatus::Off.to_string(), "off");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&DeviceStatus::On).unwrap();
        assert_eq!(json, "\"on\"");
        let parsed: DeviceStatus = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(parsed, DeviceStatus::Off);
    }

    #[test]
    fn should_report_is_on_only_for_on() {
        assert!(DeviceStatus::On.is_on());
        assert!(!DeviceStatus::Off.is_on());
    }
}
