use leptos::prelude::GetUntracked;

use super::*;

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<Option<String>>>,
}

impl Recorder {
    fn seen(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().clone()
    }
}

impl SessionObserver for Recorder {
    fn on_session_changed(&self, user: Option<&UserRecord>) {
        self.seen
            .lock()
            .unwrap()
            .push(user.and_then(|u| u.display_name.clone()));
    }
}

fn user(name: &str) -> UserRecord {
    UserRecord::signed_in(Some(name.to_owned()), None)
}

#[test]
fn new_context_has_no_user() {
    assert_eq!(SessionContext::new().current_user(), None);
}

#[test]
fn publish_notifies_observers_in_emission_order() {
    let session = SessionContext::new();
    let recorder = Arc::new(Recorder::default());
    session.subscribe(recorder.clone());

    session.publish(Some(user("Lan")));
    session.publish(None);
    session.publish(Some(user("Minh")));

    assert_eq!(
        recorder.seen(),
        vec![Some("Lan".to_owned()), None, Some("Minh".to_owned())]
    );
    assert_eq!(session.current_user(), Some(user("Minh")));
}

#[test]
fn subscribe_before_first_publish_receives_nothing() {
    let session = SessionContext::new();
    let recorder = Arc::new(Recorder::default());
    session.subscribe(recorder.clone());
    assert!(recorder.seen().is_empty());
}

#[test]
fn late_subscriber_is_replayed_current_state() {
    let session = SessionContext::new();
    session.publish(Some(user("Lan")));

    let recorder = Arc::new(Recorder::default());
    session.subscribe(recorder.clone());
    assert_eq!(recorder.seen(), vec![Some("Lan".to_owned())]);
}

#[test]
fn late_subscriber_is_replayed_signed_out_state() {
    let session = SessionContext::new();
    session.publish(None);

    let recorder = Arc::new(Recorder::default());
    session.subscribe(recorder.clone());
    assert_eq!(recorder.seen(), vec![None]);
}

#[test]
fn every_observer_is_notified() {
    let session = SessionContext::new();
    let first = Arc::new(Recorder::default());
    let second = Arc::new(Recorder::default());
    session.subscribe(first.clone());
    session.subscribe(second.clone());

    session.publish(Some(user("Lan")));
    assert_eq!(first.seen().len(), 1);
    assert_eq!(second.seen().len(), 1);
}

#[test]
fn unsubscribed_observer_stops_receiving() {
    let session = SessionContext::new();
    let kept = Arc::new(Recorder::default());
    let dropped = Arc::new(Recorder::default());
    session.subscribe(kept.clone());
    let id = session.subscribe(dropped.clone());
    assert_ne!(session.subscribe(Arc::new(Recorder::default())), id);

    session.publish(Some(user("Lan")));
    session.unsubscribe(id);
    session.publish(None);

    assert_eq!(kept.seen(), vec![Some("Lan".to_owned()), None]);
    assert_eq!(dropped.seen(), vec![Some("Lan".to_owned())]);
}

#[test]
fn unauthenticated_record_is_not_current_user() {
    let session = SessionContext::new();
    session.publish(Some(UserRecord::default()));
    assert_eq!(session.current_user(), None);
}

struct Reentrant {
    session: SessionContext,
    names: Mutex<Vec<Option<String>>>,
}

impl SessionObserver for Reentrant {
    fn on_session_changed(&self, _user: Option<&UserRecord>) {
        let name = self.session.current_user().and_then(|u| u.display_name);
        self.names.lock().unwrap().push(name);
    }
}

#[test]
fn observer_may_read_context_during_notification() {
    let session = SessionContext::new();
    let observer = Arc::new(Reentrant {
        session: session.clone(),
        names: Mutex::new(Vec::new()),
    });
    session.subscribe(observer.clone());
    session.publish(Some(user("Lan")));
    session.publish(None);
    assert_eq!(*observer.names.lock().unwrap(), vec![Some("Lan".to_owned()), None]);
}

// =============================================================
// UserSignal
// =============================================================

#[test]
fn user_signal_tracks_published_user() {
    let session = SessionContext::new();
    let signal = RwSignal::new(None);
    session.subscribe(Arc::new(UserSignal::new(signal)));

    session.publish(Some(user("Lan")));
    assert_eq!(signal.get_untracked(), Some(user("Lan")));
    session.publish(None);
    assert_eq!(signal.get_untracked(), None);
}

#[test]
fn user_signal_ignores_unauthenticated_record() {
    let signal = RwSignal::new(Some(user("Lan")));
    UserSignal::new(signal).on_session_changed(Some(&UserRecord::default()));
    assert_eq!(signal.get_untracked(), None);
}

#[test]
fn user_signal_is_replayed_on_subscribe() {
    let session = SessionContext::new();
    session.publish(Some(user("Minh")));
    let signal = RwSignal::new(None);
    session.subscribe(Arc::new(UserSignal::new(signal)));
    assert_eq!(signal.get_untracked(), Some(user("Minh")));
}
