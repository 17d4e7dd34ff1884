//! Recording `PageEffects` double shared by adapter and auth-flow tests.

use std::sync::Mutex;

use super::page::PageEffects;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCall {
    Alert(String),
    Navigate(String),
    Reload,
}

#[derive(Default)]
pub struct RecordingPage {
    calls: Mutex<Vec<PageCall>>,
}

impl RecordingPage {
    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PageCall::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PageCall::Navigate(href) => Some(href),
                _ => None,
            })
            .collect()
    }
}

impl PageEffects for RecordingPage {
    fn alert(&self, message: &str) {
        self.calls.lock().unwrap().push(PageCall::Alert(message.to_owned()));
    }

    fn navigate(&self, href: &str) {
        self.calls.lock().unwrap().push(PageCall::Navigate(href.to_owned()));
    }

    fn reload(&self) {
        self.calls.lock().unwrap().push(PageCall::Reload);
    }
}
