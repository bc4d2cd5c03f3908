// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use playctl::config::{DEFAULT_MEDIA_URI, DynamicConfig, StreamingConfig};

#[derive(Debug, Parser, Clone)]
#[command(version, about = "Play a media URI through GStreamer")]
pub struct Args {
    /// Media URI to play.
    #[arg(long, env = "PLAYCTL_URI", default_value = DEFAULT_MEDIA_URI)]
    pub uri: String,

    /// Log everything, down to trace level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn streaming_config(&self) -> StreamingConfig {
        StreamingConfig {
            uri: self.uri.clone(),
            ..StreamingConfig::default()
        }
    }

    pub fn dynamic_config(&self) -> DynamicConfig {
        DynamicConfig {
            uri: self.uri.clone(),
            ..DynamicConfig::default()
        }
    }
}
