// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Stream-kind router for dynamically discovered source pads.
//!
//! Demuxing sources only create their output pads once they have looked at
//! the stream. The router takes each new pad, classifies it by the media type
//! of its negotiated caps and links it to the matching, pre-built branch:
//!
//! ```text
//!                   ┌─► audio/x-raw* ─► audio branch (convert ! resample ! sink)
//! source pad ──────►┤
//!                   ├─► video/x-raw* ─► video branch (convert ! sink)
//!                   └─► anything else ─► logged, ignored
//! ```
//!
//! Each branch is linked at most once. A second pad of the same kind is
//! ignored, and a branch whose link attempt failed stays unconnected.
//!
//! ## Threading
//! Pad discovery is signalled from a streaming thread, so [`StreamRouter`]
//! is `Sync` and keeps the per-branch bookkeeping behind a mutex.

use std::fmt;
use std::sync::Mutex;

/// Media type prefix routed to the audio branch.
pub const AUDIO_RAW_PREFIX: &str = "audio/x-raw";

/// Media type prefix routed to the video branch.
pub const VIDEO_RAW_PREFIX: &str = "video/x-raw";

/// Content category of a discovered pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Audio,
    Video,
}

impl StreamKind {
    /// Classifies a media type by exact, case-sensitive prefix.
    pub fn classify(media_type: &str) -> Option<StreamKind> {
        if media_type.starts_with(AUDIO_RAW_PREFIX) {
            Some(StreamKind::Audio)
        } else if media_type.starts_with(VIDEO_RAW_PREFIX) {
            Some(StreamKind::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Audio => f.write_str("Audio"),
            StreamKind::Video => f.write_str("Video"),
        }
    }
}

/// Input pad at the head of a pre-built branch.
pub trait BranchSink {
    /// Source pad type the branch can be linked from.
    type SrcPad;

    /// True if something is already linked to this pad.
    fn is_linked(&self) -> bool;

    /// Links `pad` to this sink pad.
    ///
    /// # Errors
    ///
    /// Returns a description of why the framework refused the link.
    fn link_from(&self, pad: &Self::SrcPad) -> std::result::Result<(), String>;
}

/// Result of routing one discovered pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The pad was linked to its branch.
    Linked(StreamKind),
    /// The branch already has an upstream pad; nothing was done.
    AlreadyLinked(StreamKind),
    /// An earlier attempt on this branch failed; nothing was done.
    PreviouslyFailed(StreamKind),
    /// The framework refused the link.
    Failed { kind: StreamKind, reason: String },
    /// The pad has no caps, or a media type no branch accepts.
    Unknown(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BranchState {
    #[default]
    Unattempted,
    Linked,
    Failed,
}

struct Branch<S> {
    sink: S,
    state: Mutex<BranchState>,
}

impl<S> Branch<S> {
    fn new(sink: S) -> Self {
        Self {
            sink,
            state: Mutex::new(BranchState::default()),
        }
    }
}

/// Routes discovered source pads to the audio and video branches.
pub struct StreamRouter<S: BranchSink> {
    audio: Branch<S>,
    video: Branch<S>,
}

impl<S: BranchSink> StreamRouter<S> {
    pub fn new(audio: S, video: S) -> Self {
        Self {
            audio: Branch::new(audio),
            video: Branch::new(video),
        }
    }

    /// Routes a newly discovered pad.
    ///
    /// `media_type` is the name of the first structure of the pad's current
    /// caps, or `None` if the pad has no caps yet.
    pub fn route(&self, pad_name: &str, media_type: Option<&str>, pad: &S::SrcPad) -> LinkOutcome {
        let Some(media_type) = media_type else {
            tracing::warn!("Pad '{}' has no caps. Ignoring.", pad_name);
            return LinkOutcome::Unknown(None);
        };
        let Some(kind) = StreamKind::classify(media_type) else {
            tracing::info!("Unknown pad type '{}'. Ignoring.", media_type);
            return LinkOutcome::Unknown(Some(media_type.to_owned()));
        };

        let branch = match kind {
            StreamKind::Audio => &self.audio,
            StreamKind::Video => &self.video,
        };

        // Held across the link so concurrent discoveries of the same kind
        // cannot both attempt it.
        let mut state = match branch.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        if *state == BranchState::Linked || branch.sink.is_linked() {
            tracing::info!("{} pad already linked. Ignoring.", kind);
            return LinkOutcome::AlreadyLinked(kind);
        }
        if *state == BranchState::Failed {
            tracing::info!("{} branch failed to link earlier. Ignoring.", kind);
            return LinkOutcome::PreviouslyFailed(kind);
        }

        match branch.sink.link_from(pad) {
            Ok(()) => {
                *state = BranchState::Linked;
                tracing::info!("{} pad linked successfully (type {}).", kind, media_type);
                LinkOutcome::Linked(kind)
            }
            Err(reason) => {
                *state = BranchState::Failed;
                tracing::warn!("{} pad link failed (type {}): {}", kind, media_type, reason);
                LinkOutcome::Failed { kind, reason }
            }
        }
    }
}
