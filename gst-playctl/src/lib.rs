//! GStreamer Playback Controllers
//!
//! This crate binds the framework-independent controllers of `playctl` to
//! GStreamer and ships two programs built on them:
//!
//! - **streaming-playback**: a single `playbin` element driven by an
//!   asynchronous bus watch inside a GLib main loop. Reacts to buffering and
//!   clock loss, stops on error or end-of-stream.
//! - **dynamic-pipeline**: a manually built `uridecodebin` graph whose output
//!   pads are linked to pre-built audio and video branches as they appear,
//!   with a blocking loop polling the bus.
//!
//! ## GStreamer Concepts (for non-GStreamer developers)
//! - **Element**: A processing unit in a pipeline (source, filter, or sink)
//! - **Pad**: An element's input or output; linked pads carry data
//! - **Caps (Capabilities)**: Media format descriptions, e.g. `audio/x-raw`
//! - **Bus**: The channel on which a pipeline posts messages to the application

// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use gstreamer as gst;
use playctl::Error;

/// Pipeline, bus and message adapters
pub mod backend;

/// Command line arguments shared by both programs
pub mod cli;

/// Poll-driven controller with runtime pad linking
pub mod dynamic;

/// Element construction and branch pads
pub mod graph;

/// Watch-driven controller on a GLib main loop
pub mod streaming;

/// GStreamer debug category for backend-level messages.
///
/// Used with gst::debug!, gst::info!, gst::warning! macros.
/// Set GST_DEBUG=playctl:5 to see TRACE-level logs.
pub(crate) static CAT: LazyLock<gst::DebugCategory> = LazyLock::new(|| {
    gst::DebugCategory::new(
        "playctl",
        gst::DebugColorFlags::empty(),
        Some("Playback controllers"),
    )
});

/// Initializes GStreamer.
///
/// Must be called once before any other function of this crate.
///
/// # Errors
/// Returns [`Error::Init`] if the GStreamer core could not be loaded.
pub fn init() -> playctl::Result<()> {
    gst::init().map_err(|err| Error::Init(err.to_string()))
}

/// Installs the console log subscriber.
///
/// Logs go to stdout, one line per event. The default level is INFO
/// (TRACE with `verbose`); `RUST_LOG` overrides it.
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::filter::LevelFilter;

    let level = if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .try_init();
}
