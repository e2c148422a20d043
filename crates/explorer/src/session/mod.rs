// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use discro::Subscriber;

use biomap_core::RecordStore;
use biomap_core_api::{
    Citation, Exclusion, Facet, FacetOptionLists, FacetState, Marker, Projection, Summary,
};
use biomap_usecases::{FilterResult, Params, recompute};

use crate::{Observable, ObservableRef};

/// Everything that is displayed to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub summary: Summary,
    pub options: FacetOptionLists,
    pub markers: Vec<Marker>,
    pub citations: Vec<Citation>,

    /// Incremented whenever the markers have been redrawn.
    pub marker_epoch: u64,
}

impl View {
    fn update_options(&mut self, summary: Summary, options: FacetOptionLists) -> bool {
        let mut changed = false;
        if self.summary != summary {
            self.summary = summary;
            changed = true;
        }
        if self.options != options {
            self.options = options;
            changed = true;
        }
        changed
    }

    fn redraw_markers(&mut self, markers: Vec<Marker>, citations: Vec<Citation>) {
        self.markers = markers;
        self.citations = citations;
        self.marker_epoch = self.marker_epoch.wrapping_add(1);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.citations.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redraw {
    /// Keep the current markers.
    Never,

    /// Redraw only if the markers have changed.
    OnChange,

    /// Clear all markers and redraw them.
    Always,
}

/// An exploration of a record store.
///
/// All transitions are synchronous and run a complete recompute
/// cycle before returning. They return `true` if the view has
/// changed.
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    params: Params,
    state: FacetState,
    view: View,
}

impl Session {
    /// Start a new session with an empty facet state.
    ///
    /// The initial view is computed immediately.
    #[must_use]
    pub fn new(store: RecordStore, params: Params) -> Self {
        let mut session = Self {
            store,
            params,
            state: FacetState::new(),
            view: View::default(),
        };
        session.update_view(Redraw::Always);
        session
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn state(&self) -> &FacetState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    fn update_view(&mut self, redraw: Redraw) -> bool {
        let FilterResult {
            records: _,
            options,
            projection:
                Projection {
                    summary,
                    markers,
                    citations,
                },
        } = recompute(&self.store, &self.state, &self.params);
        let mut changed = self.view.update_options(summary, options);
        match redraw {
            Redraw::Never => (),
            Redraw::OnChange => {
                if self.view.markers != markers || self.view.citations != citations {
                    self.view.redraw_markers(markers, citations);
                    changed = true;
                }
            }
            Redraw::Always => {
                self.view.clear_markers();
                self.view.redraw_markers(markers, citations);
                changed = true;
            }
        }
        log::debug!(
            "Updated view: {record_count} record(s), {num_markers} marker(s), epoch {marker_epoch}",
            record_count = self.view.summary.record_count,
            num_markers = self.view.markers.len(),
            marker_epoch = self.view.marker_epoch,
        );
        changed
    }

    /// Select a value of a facet.
    ///
    /// Selecting an empty value clears the facet.
    pub fn select_facet(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        log::debug!("Selecting {facet}: {value}");
        self.state.selections.select(facet, value);
        self.update_view(Redraw::OnChange)
    }

    /// Clear a single facet before choosing a new value.
    ///
    /// The options of the facet then show all remaining
    /// possibilities under the other selections.
    pub fn open_facet(&mut self, facet: Facet) -> bool {
        log::debug!("Opening {facet}");
        self.state.selections.clear(facet);
        self.update_view(Redraw::OnChange)
    }

    /// Change the free-text query.
    ///
    /// Only the options are narrowed. The markers are kept.
    pub fn change_text(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.state.query == query {
            return false;
        }
        log::debug!("Changing query: {query}");
        self.state.query = query;
        self.update_view(Redraw::Never)
    }

    pub fn toggle_exclusion(&mut self, exclusion: Exclusion) -> bool {
        self.state.exclusions.toggle(exclusion);
        log::debug!(
            "Toggled exclusion of {exclusion}: {enabled}",
            enabled = self.state.exclusions.is_enabled(exclusion)
        );
        self.update_view(Redraw::OnChange)
    }

    pub fn set_exclusion(&mut self, exclusion: Exclusion, enabled: bool) -> bool {
        if !self.state.exclusions.set(exclusion, enabled) {
            return false;
        }
        log::debug!("Exclusion of {exclusion}: {enabled}");
        self.update_view(Redraw::OnChange)
    }

    /// Clear all selections and the query.
    ///
    /// The exclusion toggles are preserved. The markers are always
    /// cleared and redrawn.
    pub fn reset(&mut self) -> bool {
        log::debug!("Resetting facet state");
        self.state.selections.clear_all();
        self.state.query.clear();
        self.update_view(Redraw::Always)
    }

    /// Recompute everything for the current state.
    ///
    /// Idempotent: a second invocation without any intervening
    /// transition leaves the view untouched and returns `false`.
    pub fn execute(&mut self) -> bool {
        self.update_view(Redraw::OnChange)
    }
}

/// Manages the observable session
#[derive(Debug)]
pub struct ObservableSession {
    session: Observable<Session>,
}

impl ObservableSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session: Observable::new(session),
        }
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, Session> {
        self.session.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<Session> {
        self.session.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify: impl FnOnce(&mut Session) -> bool) -> bool {
        self.session.modify(modify)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn select_facet(&self, facet: Facet, value: impl Into<String>) -> bool {
        self.modify(|session| session.select_facet(facet, value))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn open_facet(&self, facet: Facet) -> bool {
        self.modify(|session| session.open_facet(facet))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn change_text(&self, query: impl Into<String>) -> bool {
        self.modify(|session| session.change_text(query))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn toggle_exclusion(&self, exclusion: Exclusion) -> bool {
        self.modify(|session| session.toggle_exclusion(exclusion))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_exclusion(&self, exclusion: Exclusion, enabled: bool) -> bool {
        self.modify(|session| session.set_exclusion(exclusion, enabled))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn reset(&self) -> bool {
        self.modify(Session::reset)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn execute(&self) -> bool {
        self.modify(Session::execute)
    }
}

/// Listen for marker redraws.
///
/// Invokes the callback with the initial view immediately and then
/// again each time the markers have been redrawn. Changes of the
/// view that keep the markers are ignored.
pub fn on_markers_redrawn(
    mut subscriber: Subscriber<Session>,
    mut on_redrawn: impl FnMut(&View) + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    // Read the initial value immediately before spawning the async task
    let mut marker_epoch = {
        let session = subscriber.read_ack();
        on_redrawn(session.view());
        session.view().marker_epoch
    };
    async move {
        log::debug!("Starting on_markers_redrawn");
        loop {
            if subscriber.changed().await.is_err() {
                // Publisher has disappeared
                log::debug!("Aborting on_markers_redrawn");
                break;
            }
            let session = subscriber.read_ack();
            let view = session.view();
            if view.marker_epoch == marker_epoch {
                continue;
            }
            marker_epoch = view.marker_epoch;
            on_redrawn(view);
        }
    }
}

#[cfg(test)]
mod tests;
