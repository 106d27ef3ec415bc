use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOverrides {
    preset: Option<PathBuf>,
    tick_ms: Option<u64>,
    seed: Option<u64>,
}

impl CliOverrides {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = CliOverrides::default();
        let mut iter = args.into_iter();
        let _ = iter.next(); // skip program name if present
        while let Some(raw_flag) = iter.next() {
            let flag = raw_flag.as_ref();
            if !flag.starts_with("--") {
                bail!("Unexpected argument '{flag}'. Use --preset/--tick-ms/--seed with values.");
            }
            let key = &flag[2..];
            let value = iter
                .next()
                .ok_or_else(|| anyhow!("Expected a value after '{flag}'"))?
                .as_ref()
                .to_string();
            match key {
                "preset" => {
                    overrides.preset = Some(PathBuf::from(value));
                }
                "tick-ms" => {
                    let ms = value
                        .parse::<u64>()
                        .with_context(|| format!("Invalid tick interval '{value}'"))?;
                    if ms == 0 {
                        bail!("Tick interval must be at least 1 ms");
                    }
                    overrides.tick_ms = Some(ms);
                }
                "seed" => {
                    overrides.seed = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("Invalid seed '{value}'"))?,
                    );
                }
                _ => bail!("Unknown flag '{flag}'. Supported flags: --preset, --tick-ms, --seed."),
            }
        }
        Ok(overrides)
    }

    pub fn preset(&self) -> Option<&Path> {
        self.preset.as_deref()
    }

    pub fn tick_ms(&self) -> Option<u64> {
        self.tick_ms
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
