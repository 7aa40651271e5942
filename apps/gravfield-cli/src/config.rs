use std::path::Path;

use anyhow::Context;
use gravfield_input::LookConfig;
use gravfield_kernel::{PlayerConfig, SceneConfig};
use serde::{Deserialize, Serialize};

/// Everything a run needs, loadable from a JSON file. Missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub scene: SceneConfig,
    pub player: PlayerConfig,
    pub look: LookConfig,
}

impl DemoConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.scene.validate().context("invalid scene")?;
        self.player.validate().context("invalid player")?;
        self.look.validate().context("invalid look")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn nested_partial_json() {
        let c: DemoConfig = serde_json::from_str(
            r#"{ "scene": { "seed": 3, "spawn": [1.0, 2.0, 3.0] }, "look": { "pointer_speed": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(c.scene.seed, 3);
        assert_eq!(c.scene.field_size, 100);
        assert_eq!(c.scene.spawn, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c.look.pointer_speed, 2.0);
        assert_eq!(c.player, PlayerConfig::default());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let c: DemoConfig =
            serde_json::from_str(r#"{ "player": { "friction": 3.0 } }"#).unwrap();
        let err = c.validate().unwrap_err();
        assert!(format!("{err:#}").contains("friction"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
