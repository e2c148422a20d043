// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::testing::store;

fn new_session() -> Session {
    Session::new(store(), Params::default())
}

fn values(view: &View, facet: Facet) -> Vec<&str> {
    view.options.get(facet).values().collect()
}

#[test]
fn new_session_shows_all_records() {
    let session = new_session();
    let view = session.view();
    assert_eq!(4, view.summary.record_count);
    assert_eq!(3, view.summary.location_count);
    assert_eq!(4, view.markers.len());
    assert_eq!(
        vec!["Ryukyu herpetofauna", "Frogs of <i>Tokyo</i>"],
        view.citations
            .iter()
            .map(|citation| citation.label.as_str())
            .collect::<Vec<_>>()
    );
    assert_eq!(1, view.marker_epoch);
    assert_eq!("種を選択（3件）", view.options.get(Facet::Species).default_label);
}

#[test]
fn execute_is_idempotent() {
    let mut session = new_session();
    let initial_view = session.view().clone();
    assert!(!session.execute());
    assert_eq!(&initial_view, session.view());

    assert!(session.select_facet(Facet::Prefecture, "沖縄県"));
    let selected_view = session.view().clone();
    assert!(!session.execute());
    assert!(!session.execute());
    assert_eq!(&selected_view, session.view());
}

#[test]
fn select_facet_redraws_markers() {
    let mut session = new_session();
    assert!(session.select_facet(Facet::Genus, "Rana"));
    let view = session.view();
    assert_eq!(3, view.summary.record_count);
    assert_eq!(3, view.markers.len());
    assert_eq!(2, view.marker_epoch);
    assert_eq!(vec!["東京都", "沖縄県"], values(view, Facet::Prefecture));
    assert_eq!(vec!["Rana"], values(view, Facet::Genus));

    // Selecting the same value again has no effect
    assert!(!session.select_facet(Facet::Genus, "Rana"));
    assert_eq!(2, session.view().marker_epoch);
}

#[test]
fn select_empty_value_clears_facet() {
    let mut session = new_session();
    assert!(session.select_facet(Facet::Genus, "Bufo"));
    assert_eq!(1, session.view().summary.record_count);
    assert!(session.select_facet(Facet::Genus, ""));
    assert_eq!(None, session.state().selections.get(Facet::Genus));
    assert_eq!(4, session.view().summary.record_count);
}

#[test]
fn open_facet_shows_remaining_possibilities() {
    let mut session = new_session();
    session.select_facet(Facet::Genus, "Rana");
    session.select_facet(Facet::Prefecture, "沖縄県");
    assert_eq!(1, session.view().summary.record_count);
    assert_eq!(vec!["沖縄県"], values(session.view(), Facet::Prefecture));

    assert!(session.open_facet(Facet::Prefecture));
    assert_eq!(None, session.state().selections.get(Facet::Prefecture));
    assert_eq!(Some("Rana"), session.state().selections.get(Facet::Genus));
    assert_eq!(3, session.view().summary.record_count);
    assert_eq!(
        vec!["東京都", "沖縄県"],
        values(session.view(), Facet::Prefecture)
    );
}

#[test]
fn change_text_keeps_markers() {
    let mut session = new_session();
    let markers = session.view().markers.clone();
    assert!(session.change_text("ishikawa"));
    let view = session.view();
    assert_eq!(markers, view.markers);
    assert_eq!(1, view.marker_epoch);
    assert_eq!(4, view.summary.record_count);
    assert_eq!(
        vec!["Rana ishikawae / オキナワイシカワガエル"],
        values(view, Facet::Species)
    );
    assert_eq!("種を選択（1件）", view.options.get(Facet::Species).default_label);

    assert!(!session.change_text("ishikawa"));
}

#[test]
fn toggle_dubious_exclusion() {
    let mut session = new_session();
    assert!(session.toggle_exclusion(Exclusion::Dubious));
    assert!(session.state().exclusions.dubious);
    let view = session.view();
    assert_eq!(3, view.summary.record_count);
    assert_eq!(3, view.markers.len());
    assert!(
        view.markers
            .iter()
            .all(|marker| marker.style.border_color.is_none())
    );
    // The record is still available
    assert_eq!(4, session.store().len());

    assert!(session.toggle_exclusion(Exclusion::Dubious));
    assert_eq!(4, session.view().summary.record_count);
}

#[test]
fn set_exclusion_without_change() {
    let mut session = new_session();
    assert!(!session.set_exclusion(Exclusion::Unpublished, false));
    assert!(session.set_exclusion(Exclusion::Unpublished, true));
    assert_eq!(3, session.view().summary.record_count);
    assert!(!session.set_exclusion(Exclusion::Unpublished, true));
}

#[test]
fn reset_preserves_exclusions() {
    let mut session = new_session();
    session.set_exclusion(Exclusion::Unpublished, true);
    session.select_facet(Facet::Island, "石垣島");
    session.change_text("Rana");
    let marker_epoch = session.view().marker_epoch;

    assert!(session.reset());
    let state = session.state();
    assert!(state.selections.is_empty());
    assert!(state.query.is_empty());
    assert!(state.exclusions.unpublished);
    let view = session.view();
    assert_eq!(3, view.summary.record_count);
    assert_eq!(marker_epoch + 1, view.marker_epoch);
}

#[test]
fn reset_always_redraws_markers() {
    let mut session = new_session();
    let markers = session.view().markers.clone();
    assert!(session.reset());
    assert_eq!(2, session.view().marker_epoch);
    assert_eq!(markers, session.view().markers);
}

#[tokio::test]
async fn observable_session_notifies_subscribers() {
    let observable = ObservableSession::new(new_session());
    let mut subscriber = observable.subscribe_changed();
    assert!(observable.select_facet(Facet::Genus, "Bufo"));
    subscriber.changed().await.unwrap();
    assert_eq!(1, subscriber.read_ack().view().summary.record_count);
    assert!(!observable.execute());
    assert_eq!(1, observable.read().view().summary.record_count);
}

#[tokio::test]
async fn listen_for_marker_redraws() {
    let observable = ObservableSession::new(new_session());
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let listener = on_markers_redrawn(observable.subscribe_changed(), move |view| {
        tx.send(view.marker_epoch).unwrap();
    });
    let listener = tokio::spawn(listener);
    assert_eq!(Some(1), rx.recv().await);

    observable.change_text("Rana");
    observable.select_facet(Facet::Genus, "Bufo");
    assert_eq!(Some(2), rx.recv().await);

    drop(observable);
    listener.await.unwrap();
    assert_eq!(None, rx.recv().await);
}
