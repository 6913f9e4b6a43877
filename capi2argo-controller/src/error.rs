// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::result;
use thiserror::Error;

use crate::argo::meta::MetaKind;

/// Errors that abort a single conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("missing object key: {0}")]
    MissingObjectKeyError(&'static str),
    #[error("kubeconfig is not valid utf-8: {0}")]
    KubeconfigEncodingError(#[from] std::str::Utf8Error),
    #[error("failed to parse kubeconfig: {0}")]
    KubeconfigParseError(#[from] serde_norway::Error),
    #[error("kubeconfig has no {0}")]
    EmptyKubeconfigError(&'static str),
    #[error("failed to serialize cluster config: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Non-fatal take-along problems, reported back to the caller as diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TakeAlongError {
    #[error("invalid take-along {kind}: missing key after prefix: {key}")]
    MalformedKeyError { kind: MetaKind, key: String },
    #[error("take-along {kind} '{key}' not found on source resource. Ignoring")]
    MissingTargetWarning { kind: MetaKind, key: String },
}

pub type Result<T> = result::Result<T, ConversionError>;
