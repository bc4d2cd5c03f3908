// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Controller configuration and defaults.
//!
//! Binaries fill these in from the command line; library users can build
//! them directly.

use crate::{ElementSpec, GraphBlueprint};

/// Media played when no URI is configured.
pub const DEFAULT_MEDIA_URI: &str =
    "https://gstreamer.freedesktop.org/data/media/sintel_trailer-480p.webm";

/// Name given to manually built pipelines.
pub const DEFAULT_PIPELINE_NAME: &str = "test-pipeline";

/// Configuration of the watch-driven controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingConfig {
    pub uri: String,
    /// The single element doing all the work; it must have a `uri` property.
    pub player: ElementSpec,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MEDIA_URI.to_owned(),
            player: ElementSpec::new("playbin", "playbin"),
        }
    }
}

/// Configuration of the polling, dynamically linked controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicConfig {
    pub uri: String,
    pub blueprint: GraphBlueprint,
}

impl Default for DynamicConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MEDIA_URI.to_owned(),
            blueprint: GraphBlueprint::default(),
        }
    }
}
