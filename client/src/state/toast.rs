//! Transient notification state.
//!
//! DESIGN
//! ======
//! Toasts are identified by a monotonically increasing sequence number so a
//! delayed auto-dismiss can no-op when a newer toast has replaced the one it
//! was scheduled for.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<ToastMessage>,
    next_seq: u64,
}

impl ToastState {
    /// Show a toast, replacing any current one. Returns its sequence number.
    pub fn show(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(ToastMessage { kind, text: text.into(), seq });
        seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if the toast with `seq` is still the one showing.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.seq == seq) {
            self.current = None;
        }
    }
}
