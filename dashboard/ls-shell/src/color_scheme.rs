use tokio::sync::watch;

/// Colour scheme the operating system asks applications to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Host-side source of the OS colour-scheme signal.
///
/// The host calls [`set`](Self::set) whenever the system preference changes;
/// the theme applier observes it through [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct SystemColorScheme {
    tx: watch::Sender<ColorScheme>,
}

impl SystemColorScheme {
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    /// Publish a new scheme. Unchanged values do not wake subscribers.
    pub fn set(&self, scheme: ColorScheme) {
        self.tx.send_if_modified(|current| {
            if *current == scheme {
                return false;
            }
            *current = scheme;
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.tx.subscribe()
    }
}

impl Default for SystemColorScheme {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
