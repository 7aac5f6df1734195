//! View state for the interactive shell.
//!
//! The shell owns one [`ViewState`] and feeds it [`Event`]s through [`ViewState::update`].
//! Every lookup the state asks for carries a sequence number; only the result of the most
//! recently issued lookup may change the view, so a slow earlier request can never
//! overwrite a newer answer.

use crate::{error::LookupError, model::WeatherView};

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    Loading,
    Failed(String),
    Loaded(WeatherView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The shell came up; look up the initial query.
    Mount,
    /// The form text changed.
    Edit(String),
    /// The form was submitted with the current text.
    Submit,
    /// A lookup finished.
    Resolved {
        seq: u64,
        outcome: Result<WeatherView, LookupError>,
    },
}

/// What the owner of the state has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    Ignore,
    /// The view changed; render it.
    Redraw,
    /// The view switched to loading; render it and run a lookup for `city` tagged `seq`.
    Lookup { seq: u64, city: String },
}

#[derive(Debug, Clone)]
pub struct ViewState {
    query: String,
    view: View,
    latest_seq: u64,
}

impl ViewState {
    /// Fresh state with the form prefilled with `initial_query`.
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self { query: initial_query.into(), view: View::Idle, latest_seq: 0 }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Loading)
    }

    pub fn update(&mut self, event: Event) -> Effect {
        match event {
            Event::Mount => {
                if self.view != View::Idle {
                    return Effect::Ignore;
                }
                self.begin_lookup()
            }
            Event::Edit(text) => {
                self.query = text;
                Effect::Ignore
            }
            Event::Submit => self.begin_lookup(),
            Event::Resolved { seq, outcome } => {
                if seq != self.latest_seq {
                    tracing::debug!(seq, latest = self.latest_seq, "discarding superseded lookup");
                    return Effect::Ignore;
                }

                self.view = match outcome {
                    Ok(view) => View::Loaded(view),
                    Err(err) => View::Failed(err.to_string()),
                };
                Effect::Redraw
            }
        }
    }

    fn begin_lookup(&mut self) -> Effect {
        self.latest_seq += 1;
        self.view = View::Loading;

        Effect::Lookup { seq: self.latest_seq, city: self.query.clone() }
    }
}
