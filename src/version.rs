// This file is part of the terraform-provider-fortios project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! FortiOS firmware versions and the ranges fields are available in

use std::fmt::Display;
use std::str::FromStr;

/// Firmware version of a FortiGate unit (`v7.2.4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FirmwareVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version as reported by the REST API
    ///
    /// Accepts an optional `v` prefix, missing minor/patch components,
    /// and trailing build information (`v7.2.4,build1396`).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix(['v', 'V']).unwrap_or(text);
        let text = text.split([',', ' ', '-']).next()?;

        let mut parts = text.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(patch) => patch.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }
}

impl FromStr for FirmwareVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid firmware version `{}`", s))
    }
}

impl Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Inclusive range of firmware versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionRange {
    pub min: Option<FirmwareVersion>,
    pub max: Option<FirmwareVersion>,
}

impl VersionRange {
    /// Every firmware version
    pub const ANY: Self = Self {
        min: None,
        max: None,
    };

    pub fn contains(&self, version: &FirmwareVersion) -> bool {
        self.min.map_or(true, |min| min <= *version) && self.max.map_or(true, |max| *version <= max)
    }

    pub fn is_any(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (None, None) => f.write_str("any version"),
            (Some(min), None) => write!(f, ">= {}", min),
            (None, Some(max)) => write!(f, "<= {}", max),
            (Some(min), Some(max)) => write!(f, "{} to {}", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_api_versions() {
        assert_eq!(
            FirmwareVersion::parse("v7.2.4"),
            Some(FirmwareVersion::new(7, 2, 4))
        );
        assert_eq!(
            FirmwareVersion::parse("6.4"),
            Some(FirmwareVersion::new(6, 4, 0))
        );
        assert_eq!(
            FirmwareVersion::parse("v7.0.12,build0523"),
            Some(FirmwareVersion::new(7, 0, 12))
        );
        assert_eq!(FirmwareVersion::parse("latest"), None);
        assert_eq!(FirmwareVersion::parse("7.2.4.1"), None);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(FirmwareVersion::new(7, 0, 10) > FirmwareVersion::new(7, 0, 9));
        assert!(FirmwareVersion::new(6, 4, 15) < FirmwareVersion::new(7, 0, 0));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = VersionRange {
            min: Some(FirmwareVersion::new(6, 4, 0)),
            max: Some(FirmwareVersion::new(7, 0, 0)),
        };
        assert!(range.contains(&FirmwareVersion::new(6, 4, 0)));
        assert!(range.contains(&FirmwareVersion::new(7, 0, 0)));
        assert!(!range.contains(&FirmwareVersion::new(7, 0, 1)));
        assert!(!range.contains(&FirmwareVersion::new(6, 2, 9)));
        assert!(VersionRange::ANY.contains(&FirmwareVersion::default()));
        assert_eq!(range.to_string(), "v6.4.0 to v7.0.0");
    }
}
