// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[
    clap(
        name = "capi2argo",
        version,
        author,
        about = "Convert Cluster API kubeconfig secrets into Argo CD cluster secrets"
    )
]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[
        clap(
            name = "convert",
            about = "Generate the Argo CD cluster secret for a CAPI kubeconfig secret"
        )
    ]
    Convert(ConvertArgs),
    #[
        clap(
            name = "config",
            about = "Print the effective configuration"
        )
    ]
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file (.json, .yaml or .yml)
    #[clap(long, env = "CAPI2ARGO_CONFIG")]
    pub config: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Manifest of the CAPI `<cluster>-kubeconfig` secret
    #[clap(long)]
    pub secret: String,
    /// Manifest of the CAPI Cluster to take labels and annotations from
    #[clap(long)]
    pub cluster: Option<String>,
    /// Namespace of the kubeconfig secret when its manifest does not set one
    #[clap(long, short = 'n', default_value = "default")]
    pub namespace: String,
    #[clap(flatten)]
    pub config: ConfigArgs,
    /// Namespace to place the generated secret in
    #[clap(long)]
    pub argo_namespace: Option<String>,
    /// Prefix cluster names with the namespace of the kubeconfig secret
    #[clap(long)]
    pub namespaced_names: bool,
    /// Write take-along annotations onto the generated secret
    #[clap(long)]
    pub propagate_annotations: bool,
}
