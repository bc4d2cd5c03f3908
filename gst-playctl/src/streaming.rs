//! Watch-Driven Controller on a GLib Main Loop
//!
//! Plays a URI through a single `playbin` element. Bus messages are
//! delivered by an asynchronous watch to a `playctl::WatchSession`, which
//! pauses while the network buffers, restarts playback when the clock is
//! lost and quits the main loop on error or end-of-stream.
//!
//! ## Threading
//! The watch and the loop share a private main context, so every message is
//! handled on the thread that called [`run`], one at a time. The session is
//! owned by the watch closure and never shared.

// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use gstreamer as gst;
use playctl::{Error, Flow, GraphBackend, PipelineGuard, Result, WatchSession, config::StreamingConfig};

use crate::CAT;
use crate::backend::GstPipeline;
use crate::graph::{GstBackend, set_uri};

/// Plays `config.uri` until an error or end-of-stream.
///
/// Stream errors end playback in an orderly way and are not returned; they
/// have been logged by the time this function returns.
///
/// # Errors
/// - [`Error::Construction`] if `playbin` is not available
/// - [`Error::MissingProperty`] if the player element takes no `uri`
/// - [`Error::StateTransition`] if the pipeline refuses to go to PLAYING
///
/// The pipeline is set to NULL before this function returns, on every path.
pub fn run(config: &StreamingConfig) -> Result<()> {
    play(make_player(config)?)
}

/// Creates the player element and hands it the URI.
fn make_player(config: &StreamingConfig) -> Result<gst::Element> {
    let player = GstBackend.make_element(&config.player)?;
    set_uri(&player, &config.uri)?;
    Ok(player)
}

/// Starts `element` and watches its bus to the end.
fn play(element: gst::Element) -> Result<()> {
    let pipeline = PipelineGuard::new(GstPipeline::new(element));
    let bus = pipeline.pipeline().bus()?;
    let session = WatchSession::start(pipeline.pipeline().clone())?;

    let context = glib::MainContext::new();
    context
        .with_thread_default(|| {
            let main_loop = glib::MainLoop::new(Some(&context), false);
            let _watch = bus.add_watch({
                let main_loop = main_loop.clone();
                let mut session = session;
                move |message| {
                    let flow = session.dispatch(message);
                    if flow == Flow::Quit {
                        main_loop.quit();
                    }
                    flow
                }
            })?;

            gst::debug!(CAT, "Running main loop");
            main_loop.run();
            Ok(())
        })
        .map_err(|err| Error::Watch(err.to_string()))?
}
