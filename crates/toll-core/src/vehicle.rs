//! Vehicle classes and per-section speed limits.
//!
//! The vehicle class never reaches the toll aggregator directly.  Callers
//! use it to derive the per-kilometre base rate and to check speed limits.

use std::str::FromStr;

use crate::TollError;

/// The class of vehicle making the trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleType {
    #[default]
    Car,
    Truck,
    Suv,
    /// Emergency vehicle: zero base rate, no speed limits.
    Ambulance,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Car,
        VehicleType::Truck,
        VehicleType::Suv,
        VehicleType::Ambulance,
    ];

    /// INR per km charged at full congestion (level 1.0).
    pub fn base_rate_factor(self) -> f64 {
        match self {
            VehicleType::Car       => 0.25,
            VehicleType::Truck     => 0.50,
            VehicleType::Suv       => 0.35,
            VehicleType::Ambulance => 0.00,
        }
    }

    /// Speed limit in km/h for `section`, or `None` when the vehicle is
    /// unrestricted.
    pub fn speed_limit(self, section: Section) -> Option<f64> {
        let [a, b, c] = match self {
            VehicleType::Car       => [80.0, 100.0, 120.0],
            VehicleType::Suv       => [90.0, 110.0, 120.0],
            VehicleType::Truck     => [70.0, 80.0, 90.0],
            VehicleType::Ambulance => return None,
        };
        Some(match section {
            Section::A => a,
            Section::B => b,
            Section::C => c,
        })
    }

    /// `true` if the vehicle has no speed limit on any section.
    #[inline]
    pub fn is_exempt(self) -> bool {
        matches!(self, VehicleType::Ambulance)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Car       => "Car",
            VehicleType::Truck     => "Truck",
            VehicleType::Suv       => "SUV",
            VehicleType::Ambulance => "Ambulance",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car"       => Ok(VehicleType::Car),
            "truck"     => Ok(VehicleType::Truck),
            "suv"       => Ok(VehicleType::Suv),
            "ambulance" => Ok(VehicleType::Ambulance),
            other => Err(TollError::Parse(format!(
                "invalid vehicle type {other:?}: expected car, truck, suv, or ambulance"
            ))),
        }
    }
}

/// A speed-monitored section of the road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    A,
    B,
    C,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::A, Section::B, Section::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::A => "Section A",
            Section::B => "Section B",
            Section::C => "Section C",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
