// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

mod cli;

use std::fs;
use std::process;
use anyhow::Context as _;
use clap::Parser;
use clap::CommandFactory;
use k8s_openapi::api::core::v1::Secret;
use kube::core::DynamicObject;

use capi2argo_common::config::{AppConfig, AppConfigBuilder};
use capi2argo_common::telemetry::{error, info, setup_logging};
use capi2argo_controller::argo::convert;

use crate::cli::{CliArgs, Commands, ConfigArgs, ConvertArgs};

// Defaults, then the optional config file, then the environment
fn config_builder(args: &ConfigArgs) -> AppConfigBuilder {
    let mut builder = AppConfigBuilder::default();
    if let Some(path) = args.config.as_deref() {
        builder.with_file(path);
    }
    builder.with_env();
    builder
}

fn read_manifest<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path))
}

// Manifests written without a namespace land in the namespace they are applied to
fn with_default_namespace(mut secret: Secret, namespace: &str) -> Secret {
    secret.metadata.namespace.get_or_insert_with(|| namespace.to_string());
    secret
}

fn run_convert(args: &ConvertArgs) -> anyhow::Result<String> {
    let config: AppConfig = config_builder(&args.config)
        .with_override_option("conversion.argo_namespace", args.argo_namespace.as_deref())
        .with_override_option("conversion.enable_namespaced_names", args.namespaced_names.then_some(true))
        .with_override_option("conversion.propagate_annotations", args.propagate_annotations.then_some(true))
        .build()
        .context("failed to load configuration")?;

    let secret = with_default_namespace(read_manifest(&args.secret)?, &args.namespace);
    let cluster: Option<DynamicObject> = args.cluster.as_deref().map(read_manifest::<DynamicObject>).transpose()?;

    info!(
        event = "Converting",
        secret = args.secret.as_str(),
        argo_namespace = config.conversion.argo_namespace.as_str(),
    );

    let argo_secret = convert(&secret, cluster.as_ref().map(|c| &c.metadata), &config.conversion)?;
    Ok(serde_yaml::to_string(&argo_secret)?)
}

fn run_config(args: &ConfigArgs) -> anyhow::Result<String> {
    let config = config_builder(args).build().context("failed to load configuration")?;
    Ok(serde_yaml::to_string(&config)?)
}

fn main() {
    let args = CliArgs::parse();

    setup_logging();

    let output = match &args.cmd {
        Some(Commands::Convert(convert_args)) => run_convert(convert_args),
        Some(Commands::Config(config_args)) => run_config(config_args),
        None => {
            let mut cmd = CliArgs::command();
            let _ = cmd.print_help();
            process::exit(1);
        },
    };

    match output {
        Ok(manifest) => print!("{}", manifest),
        Err(e) => {
            error!(
                event = "Error",
                error = %format!("{:#}", e),
            );
            process::exit(1);
        },
    }
}
