//! Vehicle profiles and selection.

use crate::price::FuelPrices;
use serde::Serialize;
use tripcalc_core::config::{FuelType, ProfileConfig, VehiclesConfig};

/// The three vehicle types a row can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Motorcycle,
    Car,
    Pickup,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Motorcycle, VehicleKind::Car, VehicleKind::Pickup];

    /// Picks the vehicle from the row flags.
    ///
    /// Motorcycle wins over pickup when both are set; neither means car.
    #[inline]
    pub fn select(is_motorcycle: bool, is_pickup: bool) -> Self {
        if is_motorcycle {
            VehicleKind::Motorcycle
        } else if is_pickup {
            VehicleKind::Pickup
        } else {
            VehicleKind::Car
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Car => "car",
            VehicleKind::Pickup => "pickup",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Speed and consumption constants for one vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleProfile {
    pub speed_kmh: f64,
    pub liters_per_100km: f64,
    pub fuel: FuelType,
}

impl From<&ProfileConfig> for VehicleProfile {
    fn from(config: &ProfileConfig) -> Self {
        Self {
            speed_kmh: config.speed_kmh,
            liters_per_100km: config.liters_per_100km,
            fuel: config.fuel,
        }
    }
}

/// The profile table for a batch. Built once, then only borrowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fleet {
    pub motorcycle: VehicleProfile,
    pub car: VehicleProfile,
    pub pickup: VehicleProfile,
}

impl Fleet {
    /// The built-in profiles: motorcycle 60 km/h 5 l, car 80 km/h 10 l,
    /// pickup 70 km/h 12 l diesel.
    pub fn standard() -> Self {
        Self::from(&VehiclesConfig::default())
    }

    #[inline]
    pub fn profile(&self, kind: VehicleKind) -> &VehicleProfile {
        match kind {
            VehicleKind::Motorcycle => &self.motorcycle,
            VehicleKind::Car => &self.car,
            VehicleKind::Pickup => &self.pickup,
        }
    }

    /// Resolves the row flags to a vehicle, its profile and the price it pays.
    pub fn resolve(&self, is_motorcycle: bool, is_pickup: bool, prices: &FuelPrices) -> Resolved<'_> {
        let kind = VehicleKind::select(is_motorcycle, is_pickup);
        let profile = self.profile(kind);
        Resolved {
            kind,
            profile,
            price_per_liter: prices.price_for(profile.fuel),
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<&VehiclesConfig> for Fleet {
    fn from(config: &VehiclesConfig) -> Self {
        Self {
            motorcycle: (&config.motorcycle).into(),
            car: (&config.car).into(),
            pickup: (&config.pickup).into(),
        }
    }
}

/// Outcome of vehicle and price resolution for one row.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub kind: VehicleKind,
    pub profile: &'a VehicleProfile,
    pub price_per_liter: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_priority() {
        assert_eq!(VehicleKind::select(true, false), VehicleKind::Motorcycle);
        assert_eq!(VehicleKind::select(true, true), VehicleKind::Motorcycle);
        assert_eq!(VehicleKind::select(false, true), VehicleKind::Pickup);
        assert_eq!(VehicleKind::select(false, false), VehicleKind::Car);
    }

    #[test]
    fn test_standard_fleet() {
        let fleet = Fleet::standard();
        assert_eq!(fleet.motorcycle.speed_kmh, 60.0);
        assert_eq!(fleet.motorcycle.liters_per_100km, 5.0);
        assert_eq!(fleet.motorcycle.fuel, FuelType::Gasoline);
        assert_eq!(fleet.car.speed_kmh, 80.0);
        assert_eq!(fleet.car.liters_per_100km, 10.0);
        assert_eq!(fleet.car.fuel, FuelType::Gasoline);
        assert_eq!(fleet.pickup.speed_kmh, 70.0);
        assert_eq!(fleet.pickup.liters_per_100km, 12.0);
        assert_eq!(fleet.pickup.fuel, FuelType::Diesel);
    }

    #[test]
    fn test_price_follows_fuel() {
        let fleet = Fleet::standard();
        let prices = FuelPrices::new(1000.0, 1500.0);

        let car = fleet.resolve(false, false, &prices);
        assert_eq!(car.kind, VehicleKind::Car);
        assert_eq!(car.price_per_liter, 1000.0);

        let pickup = fleet.resolve(false, true, &prices);
        assert_eq!(pickup.kind, VehicleKind::Pickup);
        assert_eq!(pickup.price_per_liter, 1500.0);

        let moto = fleet.resolve(true, true, &prices);
        assert_eq!(moto.kind, VehicleKind::Motorcycle);
        assert_eq!(moto.price_per_liter, 1000.0);
    }

    #[test]
    fn test_fleet_from_config() {
        let mut config = VehiclesConfig::default();
        config.car = ProfileConfig::new(90.0, 8.0, FuelType::Diesel);

        let fleet = Fleet::from(&config);
        assert_eq!(fleet.profile(VehicleKind::Car).speed_kmh, 90.0);
        assert_eq!(fleet.profile(VehicleKind::Car).fuel, FuelType::Diesel);
        assert_eq!(fleet.profile(VehicleKind::Pickup), &Fleet::standard().pickup);
    }
}
