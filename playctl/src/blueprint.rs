// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Static description of a dynamic-source playback graph, and its assembly.
//!
//! ```text
//! source (unlinked until pads appear)
//! audio branch: audioconvert ! audioresample ! autoaudiosink
//! video branch: videoconvert ! autovideosink
//! ```
//!
//! [`assemble`] creates every element before it creates the pipeline, so a
//! missing plugin aborts the build before anything else happened.

use crate::{Error, Pipeline, Result, config::DEFAULT_PIPELINE_NAME};

/// One element to be created from a named factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub factory: String,
    pub name: String,
}

impl ElementSpec {
    pub fn new(factory: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            factory: factory.into(),
            name: name.into(),
        }
    }
}

/// Elements and topology of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphBlueprint {
    pub pipeline_name: String,
    /// Source whose output pads appear at runtime.
    pub source: ElementSpec,
    /// Audio branch, linked in order. The first element receives audio pads.
    pub audio: Vec<ElementSpec>,
    /// Video branch, linked in order. The first element receives video pads.
    pub video: Vec<ElementSpec>,
}

impl Default for GraphBlueprint {
    fn default() -> Self {
        Self {
            pipeline_name: DEFAULT_PIPELINE_NAME.to_owned(),
            source: ElementSpec::new("uridecodebin", "source"),
            audio: vec![
                ElementSpec::new("audioconvert", "a_convert"),
                ElementSpec::new("audioresample", "a_resample"),
                ElementSpec::new("autoaudiosink", "a_sink"),
            ],
            video: vec![
                ElementSpec::new("videoconvert", "v_convert"),
                ElementSpec::new("autovideosink", "v_sink"),
            ],
        }
    }
}

impl GraphBlueprint {
    /// Total number of elements, source included.
    pub fn element_count(&self) -> usize {
        1 + self.audio.len() + self.video.len()
    }
}

/// Element construction and wiring primitives of a media framework.
pub trait GraphBackend {
    type Element;
    type Pipeline: Pipeline;

    /// # Errors
    ///
    /// [`Error::Construction`] if the factory is unknown or refuses.
    fn make_element(&self, spec: &ElementSpec) -> Result<Self::Element>;

    /// # Errors
    ///
    /// [`Error::Construction`] if the pipeline cannot be created.
    fn make_pipeline(&self, name: &str) -> Result<Self::Pipeline>;

    /// Adds `elements` to `pipeline`.
    fn add(&self, pipeline: &Self::Pipeline, elements: &[&Self::Element]) -> Result<()>;

    /// Links `chain` in order.
    ///
    /// # Errors
    ///
    /// [`Error::Link`] naming the first pair that failed.
    fn link_chain(&self, chain: &[&Self::Element]) -> Result<()>;
}

/// A constructed, partially linked graph.
///
/// Only [`assemble`] builds one, and it rejects empty branches, so both
/// branches always have a head.
pub struct Graph<E, P> {
    pub pipeline: P,
    pub source: E,
    audio: Vec<E>,
    video: Vec<E>,
}

impl<E, P> Graph<E, P> {
    /// Audio branch elements, in link order.
    pub fn audio(&self) -> &[E] {
        &self.audio
    }

    /// Video branch elements, in link order.
    pub fn video(&self) -> &[E] {
        &self.video
    }

    /// Head of the audio branch, where audio pads are linked.
    pub fn audio_head(&self) -> &E {
        &self.audio[0]
    }

    /// Head of the video branch, where video pads are linked.
    pub fn video_head(&self) -> &E {
        &self.video[0]
    }
}

/// Builds the graph described by `blueprint`.
///
/// Elements are all created first, then the pipeline, then the branches are
/// added and linked. The source stays unlinked and no state is requested.
///
/// # Errors
///
/// [`Error::Construction`] for the first element that could not be created,
/// [`Error::Link`] if a branch could not be linked.
pub fn assemble<B: GraphBackend>(
    backend: &B,
    blueprint: &GraphBlueprint,
) -> Result<Graph<B::Element, B::Pipeline>> {
    if blueprint.audio.is_empty() || blueprint.video.is_empty() {
        return Err(Error::Other(
            "both audio and video branches need at least one element".into(),
        ));
    }

    let source = backend.make_element(&blueprint.source)?;
    let audio = blueprint
        .audio
        .iter()
        .map(|spec| backend.make_element(spec))
        .collect::<Result<Vec<_>>>()?;
    let video = blueprint
        .video
        .iter()
        .map(|spec| backend.make_element(spec))
        .collect::<Result<Vec<_>>>()?;
    let pipeline = backend.make_pipeline(&blueprint.pipeline_name)?;

    let mut all = Vec::with_capacity(blueprint.element_count());
    all.push(&source);
    all.extend(audio.iter());
    all.extend(video.iter());
    backend.add(&pipeline, &all)?;

    backend.link_chain(&audio.iter().collect::<Vec<_>>())?;
    backend.link_chain(&video.iter().collect::<Vec<_>>())?;

    tracing::debug!(
        "Assembled '{}' with {} elements, source left unlinked",
        blueprint.pipeline_name,
        blueprint.element_count()
    );

    Ok(Graph {
        pipeline,
        source,
        audio,
        video,
    })
}
