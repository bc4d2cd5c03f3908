//! Poll-Driven Controller With Runtime Pad Linking
//!
//! Builds the graph below, starts it and blocks on the bus until an error
//! or end-of-stream message arrives:
//!
//! ```text
//! uridecodebin ┄┄► audioconvert ! audioresample ! autoaudiosink
//!              ┄┄► videoconvert ! autovideosink
//! ```
//!
//! The dashed links do not exist when the pipeline starts. `uridecodebin`
//! only creates its source pads once it has identified the streams; each new
//! pad is handed to a `StreamRouter`, which links it to the matching branch.
//!
//! ## Threading
//! `pad-added` is emitted from a streaming thread while the main thread is
//! blocked in `timed_pop_filtered`. The router is the only state shared
//! between the two, and it is internally synchronized.

// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use gst::prelude::*;
use gstreamer as gst;
use playctl::{
    LinkOutcome, PipelineGuard, Result, StreamRouter, Termination, assemble,
    config::DynamicConfig, play_and_poll,
};

use crate::CAT;
use crate::graph::{BranchPad, GstBackend, set_uri};

/// Plays `config.uri` through a manually assembled graph.
///
/// Returns how playback ended. Stream errors posted on the bus end playback
/// in an orderly way and are returned as [`Termination::Error`].
///
/// # Errors
/// - `Error::Construction` if any element is missing (nothing was started)
/// - `Error::Link` if a branch cannot be linked
/// - `Error::MissingProperty` if the source takes no `uri`
/// - `Error::StateTransition` if the pipeline refuses to go to PLAYING
///
/// The pipeline is set to NULL before this function returns, on every path.
pub fn run(config: &DynamicConfig) -> Result<Termination> {
    let graph = assemble(&GstBackend, &config.blueprint)?;

    let source = graph.source.clone();
    set_uri(&source, &config.uri)?;

    let audio = BranchPad::of(graph.audio_head())?;
    let video = BranchPad::of(graph.video_head())?;

    let pipeline = PipelineGuard::new(graph.pipeline);
    let router = StreamRouter::new(audio, video);
    source.connect_pad_added(move |src, pad| {
        on_pad_added(&router, src, pad);
    });

    let bus = pipeline.pipeline().bus()?;
    play_and_poll(pipeline.pipeline(), &bus)
}

/// Routes a pad announced by the source.
fn on_pad_added(
    router: &StreamRouter<BranchPad>,
    src: &gst::Element,
    pad: &gst::Pad,
) -> LinkOutcome {
    tracing::info!("Received new pad '{}' from '{}'", pad.name(), src.name());

    let caps = pad.current_caps();
    gst::debug!(CAT, obj = pad, "New pad caps: {:?}", caps);
    let media_type = caps
        .as_ref()
        .and_then(|caps| caps.structure(0))
        .map(|structure| structure.name().to_string());

    router.route(&pad.name(), media_type.as_deref(), pad)
}
