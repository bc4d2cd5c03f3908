//! Element Construction and Branch Pads
//!
//! `GstBackend` implements `playctl::GraphBackend` with GStreamer element
//! factories, so `playctl::assemble` can build the dynamic playback graph:
//! - elements come from `gst::ElementFactory` by factory name
//! - the container is a named `gst::Pipeline`
//! - branches are linked element by element, so a failure names the pair
//!
//! `BranchPad` wraps the static sink pad at the head of a branch; the stream
//! router links discovered source pads to it.

// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use gst::prelude::*;
use gstreamer as gst;
use playctl::{BranchSink, ElementSpec, Error, GraphBackend, Result};

use crate::CAT;
use crate::backend::GstPipeline;

/// Graph construction through GStreamer element factories.
#[derive(Debug, Default, Clone, Copy)]
pub struct GstBackend;

impl GraphBackend for GstBackend {
    type Element = gst::Element;
    type Pipeline = GstPipeline;

    fn make_element(&self, spec: &ElementSpec) -> Result<gst::Element> {
        gst::ElementFactory::make(&spec.factory)
            .name(&spec.name)
            .build()
            .map_err(|err| {
                gst::error!(CAT, "Could not create '{}': {}", spec.factory, err);
                Error::Construction {
                    factory: spec.factory.clone(),
                    name: spec.name.clone(),
                }
            })
    }

    fn make_pipeline(&self, name: &str) -> Result<GstPipeline> {
        Ok(GstPipeline::new(gst::Pipeline::with_name(name)))
    }

    fn add(&self, pipeline: &GstPipeline, elements: &[&gst::Element]) -> Result<()> {
        let bin = pipeline
            .element()
            .downcast_ref::<gst::Bin>()
            .ok_or_else(|| Error::Other(format!("'{}' is not a bin", pipeline.element().name())))?;
        bin.add_many(elements.iter().copied())
            .map_err(|err| Error::Other(format!("Could not add elements: {err}")))
    }

    fn link_chain(&self, chain: &[&gst::Element]) -> Result<()> {
        for pair in chain.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            from.link(to).map_err(|_| Error::Link {
                from: from.name().to_string(),
                to: to.name().to_string(),
            })?;
            gst::debug!(CAT, obj = from, "Linked to {}", to.name());
        }
        Ok(())
    }
}

/// Name of the property carrying the media URI.
const URI_PROPERTY: &str = "uri";

/// Sets the `uri` property of `element`.
///
/// The URI is passed as a property value, never parsed as part of a
/// pipeline description.
///
/// # Errors
/// [`Error::MissingProperty`] if the element has no `uri` property.
pub fn set_uri(element: &gst::Element, uri: &str) -> Result<()> {
    if element.find_property(URI_PROPERTY).is_none() {
        return Err(Error::MissingProperty {
            element: element.name().to_string(),
            property: URI_PROPERTY.into(),
        });
    }
    element.set_property(URI_PROPERTY, uri);
    Ok(())
}

/// Sink pad at the head of an audio or video branch.
#[derive(Debug, Clone)]
pub struct BranchPad(gst::Pad);

impl BranchPad {
    /// Looks up the `sink` pad of a branch head.
    ///
    /// # Errors
    /// [`Error::MissingPad`] if the element has no static sink pad.
    pub fn of(element: &gst::Element) -> Result<Self> {
        element
            .static_pad("sink")
            .map(BranchPad)
            .ok_or_else(|| Error::MissingPad {
                element: element.name().to_string(),
                pad: "sink".into(),
            })
    }
}

impl BranchSink for BranchPad {
    type SrcPad = gst::Pad;

    fn is_linked(&self) -> bool {
        self.0.is_linked()
    }

    fn link_from(&self, pad: &gst::Pad) -> std::result::Result<(), String> {
        pad.link(&self.0)
            .map(|_| ())
            .map_err(|err| format!("{err:?}"))
    }
}
