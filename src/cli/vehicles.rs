use std::io::{self, Write};

use catalog::{Config, Factory, Region};
use tracing::instrument;

use super::{
    parse_region,
    terminal::{Painter, Tone},
};

#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// Only build for this region (us, eu). Defaults to the configured
    /// region, or every region if none is configured.
    #[arg(long, short, value_parser = parse_region)]
    region: Option<Region>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let stdout = io::stdout();
        self.write_to(config, &mut stdout.lock(), Painter::detect())?;
        Ok(())
    }

    fn regions(&self, config: &Config) -> Vec<Region> {
        self.region.map_or_else(|| config.regions(), |region| vec![region])
    }

    fn write_to(&self, config: &Config, out: &mut impl Write, painter: Painter) -> io::Result<()> {
        for region in self.regions(config) {
            for vehicle in Factory::new(region).demo_fleet() {
                writeln!(out, "{}", painter.paint(&vehicle.start_engine(), Tone::Info))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: &Command, config: &Config) -> Vec<String> {
        let mut out = Vec::new();
        command
            .write_to(config, &mut out, Painter::new(false))
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn builds_every_region_by_default() {
        let lines = render(&Command::default(), &Config::default());
        assert_eq!(
            lines,
            [
                "Ford Mustang (US Spec): engine started",
                "Harley-Davidson Sportster (US Spec): motor started",
                "Volkswagen Golf (EU Spec): engine started",
                "Ducati Panigale (EU Spec): motor started",
            ]
        );
    }

    #[test]
    fn configured_region_limits_the_fleet() {
        let mut config = Config::default();
        config.region = Some(Region::Eu);
        let lines = render(&Command::default(), &config);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.contains("(EU Spec)")));
    }

    #[test]
    fn flag_overrides_configured_region() {
        let mut config = Config::default();
        config.region = Some(Region::Eu);
        let command = Command {
            region: Some(Region::Us),
        };
        let lines = render(&command, &config);
        assert_eq!(lines[0], "Ford Mustang (US Spec): engine started");
        assert_eq!(lines.len(), 2);
    }
}
