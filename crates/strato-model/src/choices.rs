//! Closed choice enums. No runtime extension: adding a variant is a code
//! change, and every match over these stays exhaustive.

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application runtime for an app service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Python,
    Nodejs,
    Dotnet,
}

impl Runtime {
    pub const ALL: [Runtime; 3] = [Runtime::Python, Runtime::Nodejs, Runtime::Dotnet];
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Python => write!(f, "python"),
            Runtime::Nodejs => write!(f, "nodejs"),
            Runtime::Dotnet => write!(f, "dotnet"),
        }
    }
}

impl FromStr for Runtime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Runtime::Python),
            "nodejs" => Ok(Runtime::Nodejs),
            "dotnet" => Ok(Runtime::Dotnet),
            other => Err(ValidationError::UnknownRuntime(other.to_owned())),
        }
    }
}

/// Deployment region for an app service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EastUS")]
    EastUs,
    WestEurope,
    CentralIndia,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::EastUs, Region::WestEurope, Region::CentralIndia];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::EastUs => write!(f, "EastUS"),
            Region::WestEurope => write!(f, "WestEurope"),
            Region::CentralIndia => write!(f, "CentralIndia"),
        }
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EastUS" => Ok(Region::EastUs),
            "WestEurope" => Ok(Region::WestEurope),
            "CentralIndia" => Ok(Region::CentralIndia),
            other => Err(ValidationError::UnknownRegion(other.to_owned())),
        }
    }
}

/// Cache eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvictionPolicy {
    Lru,
    Fifo,
    Lfu,
}

impl EvictionPolicy {
    pub const ALL: [EvictionPolicy; 3] = [
        EvictionPolicy::Lru,
        EvictionPolicy::Fifo,
        EvictionPolicy::Lfu,
    ];
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Lru => write!(f, "LRU"),
            EvictionPolicy::Fifo => write!(f, "FIFO"),
            EvictionPolicy::Lfu => write!(f, "LFU"),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LRU" => Ok(EvictionPolicy::Lru),
            "FIFO" => Ok(EvictionPolicy::Fifo),
            "LFU" => Ok(EvictionPolicy::Lfu),
            other => Err(ValidationError::UnknownEvictionPolicy(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_round_trips_through_display() {
        for rt in Runtime::ALL {
            assert_eq!(rt.to_string().parse::<Runtime>().unwrap(), rt);
        }
    }

    #[test]
    fn region_round_trips_through_display() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn eviction_policy_round_trips_through_display() {
        for policy in EvictionPolicy::ALL {
            assert_eq!(policy.to_string().parse::<EvictionPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&Runtime::Python).unwrap(), "\"python\"");
        assert_eq!(serde_json::to_string(&Region::EastUs).unwrap(), "\"EastUS\"");
        assert_eq!(
            serde_json::to_string(&EvictionPolicy::Lru).unwrap(),
            "\"LRU\""
        );

        let region: Region = serde_json::from_str("\"CentralIndia\"").unwrap();
        assert_eq!(region, Region::CentralIndia);
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert_eq!(
            "java".parse::<Runtime>(),
            Err(ValidationError::UnknownRuntime("java".to_owned()))
        );
        assert_eq!(
            "NorthPole".parse::<Region>(),
            Err(ValidationError::UnknownRegion("NorthPole".to_owned()))
        );
        assert_eq!(
            "RANDOM".parse::<EvictionPolicy>(),
            Err(ValidationError::UnknownEvictionPolicy("RANDOM".to_owned()))
        );
    }
}
