// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use playctl::{
    BranchSink, Bus, ElementSpec, Error, GraphBackend, Message, MessageKind, Pipeline, Result,
    State, StateChange,
};

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes logging once (respects the RUST_LOG environment variable).
pub fn setup_logging() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_test_writer()
            .init();
    });
}

/// Pipeline that records every requested state.
///
/// Clones share the same record, so a test can keep a handle while a guard
/// or session owns another.
#[derive(Clone, Default)]
pub struct FakePipeline {
    requests: Arc<Mutex<Vec<State>>>,
    outcome: Arc<Mutex<Option<Result<StateChange>>>>,
}

impl FakePipeline {
    /// Every request succeeds with `change`.
    pub fn answering(change: StateChange) -> Self {
        let pipeline = Self::default();
        *pipeline.outcome.lock().unwrap() = Some(Ok(change));
        pipeline
    }

    /// Every request to PLAYING fails.
    pub fn refusing_playing() -> Self {
        let pipeline = Self::default();
        *pipeline.outcome.lock().unwrap() = Some(Err(Error::StateTransition {
            target: State::Playing,
        }));
        pipeline
    }

    pub fn requests(&self) -> Vec<State> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_state(&self) -> Option<State> {
        self.requests().last().copied()
    }
}

impl Pipeline for FakePipeline {
    fn name(&self) -> String {
        "fake-pipeline".into()
    }

    fn set_state(&self, state: State) -> Result<StateChange> {
        self.requests.lock().unwrap().push(state);
        match &*self.outcome.lock().unwrap() {
            Some(Err(_)) if state == State::Playing => Err(Error::StateTransition { target: state }),
            Some(Ok(change)) => Ok(*change),
            _ => Ok(StateChange::Success),
        }
    }
}

/// Bus replaying a fixed script of messages.
#[derive(Default)]
pub struct ScriptedBus {
    messages: Mutex<VecDeque<Message>>,
    polls: AtomicUsize,
}

impl ScriptedBus {
    pub fn new(messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            messages: Mutex::new(messages.into_iter().collect()),
            polls: AtomicUsize::new(0),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Bus for ScriptedBus {
    fn pop_filtered(&self, kinds: &[MessageKind], _timeout: Option<Duration>) -> Option<Message> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let mut messages = self.messages.lock().unwrap();
        while let Some(message) = messages.pop_front() {
            if kinds.contains(&message.kind()) {
                return Some(message);
            }
        }
        None
    }
}

/// Sink pad of a fake branch head. Clones share the link state.
#[derive(Clone, Default)]
pub struct FakeSinkPad {
    state: Arc<PadState>,
}

#[derive(Default)]
struct PadState {
    linked: AtomicBool,
    attempts: AtomicUsize,
}

impl FakeSinkPad {
    pub fn attempts(&self) -> usize {
        self.state.attempts.load(Ordering::SeqCst)
    }
}

impl BranchSink for FakeSinkPad {
    type SrcPad = String;

    fn is_linked(&self) -> bool {
        self.state.linked.load(Ordering::SeqCst)
    }

    fn link_from(&self, _pad: &String) -> std::result::Result<(), String> {
        self.state.attempts.fetch_add(1, Ordering::SeqCst);
        self.state.linked.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Element created by [`FakeBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeElement {
    pub spec: ElementSpec,
}

/// Graph backend recording construction and link calls.
#[derive(Default)]
pub struct FakeBackend {
    /// Factory name whose construction fails.
    pub broken_factory: Option<String>,
    pub pipeline: FakePipeline,
    pub created: Mutex<Vec<String>>,
    pub pipelines_created: AtomicUsize,
    pub added: Mutex<Vec<String>>,
    pub links: Mutex<Vec<Vec<String>>>,
}

impl FakeBackend {
    pub fn with_broken_factory(factory: &str) -> Self {
        Self {
            broken_factory: Some(factory.into()),
            ..Default::default()
        }
    }
}

impl GraphBackend for FakeBackend {
    type Element = FakeElement;
    type Pipeline = FakePipeline;

    fn make_element(&self, spec: &ElementSpec) -> Result<FakeElement> {
        if self.broken_factory.as_deref() == Some(spec.factory.as_str()) {
            return Err(Error::Construction {
                factory: spec.factory.clone(),
                name: spec.name.clone(),
            });
        }
        self.created.lock().unwrap().push(spec.name.clone());
        Ok(FakeElement { spec: spec.clone() })
    }

    fn make_pipeline(&self, _name: &str) -> Result<FakePipeline> {
        self.pipelines_created.fetch_add(1, Ordering::SeqCst);
        Ok(self.pipeline.clone())
    }

    fn add(&self, _pipeline: &FakePipeline, elements: &[&FakeElement]) -> Result<()> {
        self.added
            .lock()
            .unwrap()
            .extend(elements.iter().map(|e| e.spec.name.clone()));
        Ok(())
    }

    fn link_chain(&self, chain: &[&FakeElement]) -> Result<()> {
        self.links
            .lock()
            .unwrap()
            .push(chain.iter().map(|e| e.spec.name.clone()).collect());
        Ok(())
    }
}
