//! Image viewer: a two-state machine (`Closed`, `Open`) for browsing one
//! product's images.
//!
//! While open, the viewer holds exactly one key-listener registration and
//! gives it back when it closes. Reopening always starts at the first image.

/// Keyboard input relevant to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

/// Where a click inside the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The area around the image.
    Backdrop,
    CloseButton,
    Image,
}

/// Identifies one registration in [`KeyListeners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Proof of an active key-listener registration.
///
/// Not `Clone`: it must be handed back to [`KeyListeners::release`] exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerHandle(ListenerId);

impl ListenerHandle {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.0
    }
}

/// Registry of global key listeners.
#[derive(Debug, Default)]
pub struct KeyListeners {
    next_id: u64,
    active: Vec<ListenerId>,
}

impl KeyListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> ListenerHandle {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push(id);
        ListenerHandle(id)
    }

    /// Returns `false` if the handle was not registered here.
    pub fn release(&mut self, handle: ListenerHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|id| *id != handle.0);
        self.active.len() != before
    }

    #[must_use]
    pub fn is_active(&self, id: ListenerId) -> bool {
        self.active.contains(&id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Image list and cursor of one open viewer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    images: Vec<String>,
    current_index: usize,
}

impl ModalState {
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current_index: 0,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    /// Advances cyclically. No-op without images.
    pub fn next(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    /// Retreats cyclically. No-op without images.
    pub fn prev(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }
}

#[derive(Debug)]
struct Session {
    modal: ModalState,
    listener: ListenerHandle,
}

/// What a viewer input did, so the caller knows whether to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    Ignored,
    Navigated,
    Closed,
}

#[derive(Debug, Default)]
pub struct ImageViewer {
    session: Option<Session>,
}

impl ImageViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalState> {
        self.session.as_ref().map(|session| &session.modal)
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.modal().and_then(ModalState::current_image)
    }

    /// Opens on `images` at index 0 and registers the navigation listener.
    ///
    /// Returns `false` and stays closed when `images` is empty. An already
    /// open session is closed first, so at most one listener is ever held.
    pub fn open(&mut self, images: Vec<String>, listeners: &mut KeyListeners) -> bool {
        if images.is_empty() {
            return false;
        }
        self.close(listeners);
        self.session = Some(Session {
            modal: ModalState::new(images),
            listener: listeners.register(),
        });
        true
    }

    /// Closes the session and releases its listener. Returns `false` if
    /// already closed.
    pub fn close(&mut self, listeners: &mut KeyListeners) -> bool {
        match self.session.take() {
            Some(session) => {
                listeners.release(session.listener);
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: &Key, listeners: &mut KeyListeners) -> ViewerOutcome {
        let Some(session) = self.session.as_mut() else {
            return ViewerOutcome::Ignored;
        };
        if !listeners.is_active(session.listener.id()) {
            return ViewerOutcome::Ignored;
        }

        match key {
            Key::Escape => {
                self.close(listeners);
                ViewerOutcome::Closed
            }
            Key::ArrowRight => {
                session.modal.next();
                ViewerOutcome::Navigated
            }
            Key::ArrowLeft => {
                session.modal.prev();
                ViewerOutcome::Navigated
            }
            Key::Other(_) => ViewerOutcome::Ignored,
        }
    }

    /// Backdrop and close-button clicks close; clicks on the image do nothing.
    pub fn handle_click(
        &mut self,
        target: ModalTarget,
        listeners: &mut KeyListeners,
    ) -> ViewerOutcome {
        match target {
            ModalTarget::Backdrop | ModalTarget::CloseButton if self.close(listeners) => {
                ViewerOutcome::Closed
            }
            _ => ViewerOutcome::Ignored,
        }
    }
}
