// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

pub static APP_NAME: &str = "capi2argo";
pub static ENV_PREFIX: &str = "CAPI2ARGO";
