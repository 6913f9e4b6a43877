// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::path::Path;
use serde::{Serialize, Deserialize};
use figment::{Figment, Error, providers::{Format, Json, Yaml, Env, Serialized}};

use crate::constant::ENV_PREFIX;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Settings read (never written) by every conversion
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Namespace the generated Argo CD cluster secrets are placed in
    #[serde(default)]
    pub argo_namespace: String,
    /// Prefix generated cluster names with the namespace of the source secret
    #[serde(default)]
    pub enable_namespaced_names: bool,
    /// Also write take-along annotations onto the generated secret
    #[serde(default)]
    pub propagate_annotations: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            argo_namespace: "argocd".to_string(),
            enable_namespaced_names: false,
            propagate_annotations: false,
        }
    }
}

pub struct AppConfigBuilder {
    figment: Figment,
}

impl AppConfigBuilder {
    pub fn with_file(&mut self, path: &str) -> &mut Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        self.figment = match extension {
            "json" => self.figment.clone().merge(Json::file(path)),
            "yaml" | "yml" => self.figment.clone().merge(Yaml::file(path)),
            _ => self.figment.clone(),
        };
        self
    }

    pub fn with_env(&mut self) -> &mut Self {
        self.figment = self.figment.clone().merge(Env::prefixed(&format!("{}__", ENV_PREFIX)).split("__"));
        self
    }

    pub fn with_override_option<V: Serialize>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.figment = self.figment.clone().merge(Serialized::default(key, value));
        }
        self
    }

    pub fn build(&self) -> Result<AppConfig, Error> {
        self.figment.extract()
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        AppConfigBuilder {
            figment: Figment::from(Serialized::defaults(AppConfig::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = AppConfigBuilder::default().with_env().build()?;

            assert_eq!(config.conversion.argo_namespace, "argocd");
            assert!(!config.conversion.enable_namespaced_names);
            assert!(!config.conversion.propagate_annotations);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("CAPI2ARGO__CONVERSION__ARGO_NAMESPACE", "gitops");
            jail.set_env("CAPI2ARGO__CONVERSION__ENABLE_NAMESPACED_NAMES", "true");
            jail.set_env("CAPI2ARGO__CONVERSION__PROPAGATE_ANNOTATIONS", "true");

            let config = AppConfigBuilder::default().with_env().build()?;

            assert_eq!(config.conversion.argo_namespace, "gitops");
            assert!(config.conversion.enable_namespaced_names);
            assert!(config.conversion.propagate_annotations);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_then_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "capi2argo.yaml",
                "conversion:\n  argo_namespace: from-file\n  enable_namespaced_names: true\n",
            )?;
            jail.set_env("CAPI2ARGO__CONVERSION__ARGO_NAMESPACE", "from-env");

            let from_file = AppConfigBuilder::default()
                .with_file("capi2argo.yaml")
                .build()?;
            assert_eq!(from_file.conversion.argo_namespace, "from-file");
            assert!(from_file.conversion.enable_namespaced_names);

            let layered = AppConfigBuilder::default()
                .with_file("capi2argo.yaml")
                .with_env()
                .with_override_option("conversion.enable_namespaced_names", Some(false))
                .build()?;
            assert_eq!(layered.conversion.argo_namespace, "from-env");
            assert!(!layered.conversion.enable_namespaced_names);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_extension_is_ignored() {
        Jail::expect_with(|jail| {
            jail.create_file("capi2argo.ini", "argo_namespace = elsewhere\n")?;

            let config = AppConfigBuilder::default()
                .with_file("capi2argo.ini")
                .with_override_option::<&str>("conversion.argo_namespace", None)
                .build()?;

            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }
}
