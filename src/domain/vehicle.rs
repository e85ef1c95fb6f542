use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::info;

/// The regional configuration a vehicle is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States specification.
    Us,
    /// European Union specification.
    Eu,
}

impl Region {
    /// Every region, in demo order.
    pub const ALL: [Self; 2] = [Self::Us, Self::Eu];

    /// The spec label stamped on vehicles built for this region.
    #[must_use]
    pub const fn spec(self) -> &'static str {
        match self {
            Self::Us => "US Spec",
            Self::Eu => "EU Spec",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Us => f.write_str("US"),
            Self::Eu => f.write_str("EU"),
        }
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// Error returned when text does not name a known region.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown region '{0}': expected 'us' or 'eu'")]
pub struct ParseRegionError(String);

/// What sort of vehicle to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// A car.
    Car,
    /// A motorcycle.
    Motorcycle,
}

impl VehicleKind {
    const fn started(self) -> &'static str {
        match self {
            Self::Car => "engine started",
            Self::Motorcycle => "motor started",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Error returned when text does not name a known vehicle kind.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown vehicle kind '{0}': expected 'car' or 'motorcycle'")]
pub struct ParseKindError(String);

/// A vehicle built for a particular region.
///
/// The display label is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    make: String,
    model: String,
    kind: VehicleKind,
    region: Region,
    label: String,
}

impl Vehicle {
    /// Builds a vehicle of the given kind for the given region.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{Region, Vehicle, VehicleKind};
    ///
    /// let car = Vehicle::build(VehicleKind::Car, Region::Eu, "Volkswagen", "Golf");
    /// assert_eq!(car.label(), "Volkswagen Golf (EU Spec)");
    /// ```
    #[must_use]
    pub fn build(
        kind: VehicleKind,
        region: Region,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let make = make.into();
        let model = model.into();
        let label = format!("{make} {model} ({})", region.spec());
        Self {
            make,
            model,
            kind,
            region,
            label,
        }
    }

    /// The manufacturer.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// The model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Car or motorcycle.
    #[must_use]
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// The region this vehicle was built for.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// `"<make> <model> (<region> Spec)"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Starts the engine, logging and returning the start message.
    pub fn start_engine(&self) -> String {
        let message = format!("{}: {}", self.label, self.kind.started());
        info!("{message}");
        message
    }
}

/// Builds vehicles for a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factory {
    region: Region,
}

impl Factory {
    /// A factory for the given region.
    #[must_use]
    pub const fn new(region: Region) -> Self {
        Self { region }
    }

    /// The region this factory builds for.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Builds a car.
    #[must_use]
    pub fn create_car(&self, make: impl Into<String>, model: impl Into<String>) -> Vehicle {
        Vehicle::build(VehicleKind::Car, self.region, make, model)
    }

    /// Builds a motorcycle.
    #[must_use]
    pub fn create_motorcycle(&self, make: impl Into<String>, model: impl Into<String>) -> Vehicle {
        Vehicle::build(VehicleKind::Motorcycle, self.region, make, model)
    }

    /// The showroom line-up for this factory's region: one car and one
    /// motorcycle.
    #[must_use]
    pub fn demo_fleet(&self) -> [Vehicle; 2] {
        match self.region {
            Region::Us => [
                self.create_car("Ford", "Mustang"),
                self.create_motorcycle("Harley-Davidson", "Sportster"),
            ],
            Region::Eu => [
                self.create_car("Volkswagen", "Golf"),
                self.create_motorcycle("Ducati", "Panigale"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(VehicleKind::Car, Region::Us, "Ford Mustang (US Spec): engine started"; "us car")]
    #[test_case(VehicleKind::Car, Region::Eu, "Ford Mustang (EU Spec): engine started"; "eu car")]
    #[test_case(VehicleKind::Motorcycle, Region::Us, "Ford Mustang (US Spec): motor started"; "us motorcycle")]
    #[test_case(VehicleKind::Motorcycle, Region::Eu, "Ford Mustang (EU Spec): motor started"; "eu motorcycle")]
    fn build_covers_every_cell(kind: VehicleKind, region: Region, expected: &str) {
        let vehicle = Vehicle::build(kind, region, "Ford", "Mustang");
        assert_eq!(vehicle.kind(), kind);
        assert_eq!(vehicle.region(), region);
        assert_eq!(vehicle.start_engine(), expected);
    }

    #[test]
    fn factory_stamps_its_region() {
        let factory = Factory::new(Region::Eu);
        let bike = factory.create_motorcycle("Ducati", "Panigale");
        assert_eq!(bike.label(), "Ducati Panigale (EU Spec)");
        assert_eq!(bike.make(), "Ducati");
        assert_eq!(bike.model(), "Panigale");
    }

    #[test]
    fn us_demo_fleet() {
        let messages: Vec<_> = Factory::new(Region::Us)
            .demo_fleet()
            .iter()
            .map(Vehicle::start_engine)
            .collect();
        assert_eq!(
            messages,
            [
                "Ford Mustang (US Spec): engine started",
                "Harley-Davidson Sportster (US Spec): motor started",
            ]
        );
    }

    #[test]
    fn eu_demo_fleet() {
        let labels: Vec<_> = Factory::new(Region::Eu)
            .demo_fleet()
            .iter()
            .map(|v| v.label().to_string())
            .collect();
        assert_eq!(
            labels,
            ["Volkswagen Golf (EU Spec)", "Ducati Panigale (EU Spec)"]
        );
    }

    #[test_case("us", Region::Us; "lowercase us")]
    #[test_case("EU", Region::Eu; "uppercase eu")]
    #[test_case(" Us ", Region::Us; "padded")]
    fn region_parses(input: &str, expected: Region) {
        assert_eq!(input.parse::<Region>().unwrap(), expected);
    }

    #[test]
    fn unknown_region_is_an_error() {
        assert_eq!(
            "uk".parse::<Region>().unwrap_err(),
            ParseRegionError("uk".to_string())
        );
    }

    #[test_case("car", VehicleKind::Car; "car")]
    #[test_case("Motorcycle", VehicleKind::Motorcycle; "motorcycle")]
    fn kind_parses(input: &str, expected: VehicleKind) {
        assert_eq!(input.parse::<VehicleKind>().unwrap(), expected);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!("truck".parse::<VehicleKind>().is_err());
    }
}
