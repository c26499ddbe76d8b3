use std::future::Future;
use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::app::Result;
use crate::domain::{ChapterRecord, Verse};
use crate::fetcher::{ChapterSource, LoadState};

/// A load running on a spawned task, polled from the UI thread.
///
/// The state starts at [`LoadState::Loading`] and changes at most once.
/// If the task never finishes, the state stays `Loading`.
pub struct Loader<T> {
    state: LoadState<T>,
    rx: Option<oneshot::Receiver<Result<T>>>,
}

impl<T: Send + 'static> Loader<T> {
    /// Spawn `fut` on the current tokio runtime.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // Receiver gone means the screen was left; nothing to report.
            let _ = tx.send(fut.await);
        });

        Self {
            state: LoadState::Loading,
            rx: Some(rx),
        }
    }

    /// Pick up the task's result if it has arrived. Returns `true` when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };

        let next = match rx.try_recv() {
            Ok(Ok(value)) => LoadState::Loaded(value),
            Ok(Err(e)) => {
                tracing::warn!("Load failed: {}", e);
                LoadState::Failed(e.to_string())
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => {
                tracing::error!("Load task ended without a result");
                LoadState::Failed("load task ended without a result".to_string())
            }
        };

        self.state = next;
        self.rx = None;
        true
    }
}

impl<T> Loader<T> {
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// A loader that is already settled, without spawning anything.
    pub fn settled(state: LoadState<T>) -> Self {
        Self { state, rx: None }
    }
}

pub fn load_chapters(source: Arc<dyn ChapterSource + Send + Sync>) -> Loader<Vec<ChapterRecord>> {
    Loader::spawn(async move { source.fetch_chapters().await })
}

pub fn load_verses(
    source: Arc<dyn ChapterSource + Send + Sync>,
    chapter: u16,
) -> Loader<Vec<Verse>> {
    Loader::spawn(async move { source.fetch_verses(chapter).await })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::app::NoorError;
    use crate::domain::RevelationPlace;

    struct GatedSource {
        gate: Arc<Notify>,
        fail: bool,
    }

    #[async_trait]
    impl ChapterSource for GatedSource {
        async fn fetch_chapters(&self) -> Result<Vec<ChapterRecord>> {
            self.gate.notified().await;
            if self.fail {
                return Err(NoorError::Api {
                    code: 503,
                    status: "Service Unavailable".into(),
                });
            }
            Ok(vec![ChapterRecord {
                number: 1,
                name: "الفاتحة".into(),
                english_name: "Al-Faatiha".into(),
                english_name_translation: "The Opening".into(),
                number_of_ayahs: 7,
                revelation_type: RevelationPlace::Meccan,
            }])
        }

        async fn fetch_verses(&self, chapter: u16) -> Result<Vec<Verse>> {
            Err(NoorError::ChapterNotFound(chapter))
        }
    }

    async fn poll_until_settled<T: Send + 'static>(loader: &mut Loader<T>) {
        for _ in 0..100 {
            if loader.poll() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("loader never settled");
    }

    #[tokio::test]
    async fn test_loading_then_loaded() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(GatedSource {
            gate: gate.clone(),
            fail: false,
        });
        let mut loader = load_chapters(source);

        assert!(!loader.poll());
        assert!(loader.state().is_loading());

        gate.notify_one();
        poll_until_settled(&mut loader).await;

        let chapters = loader.state().loaded().unwrap();
        assert_eq!(chapters.len(), 1);
        assert!(!loader.poll());
    }

    #[tokio::test]
    async fn test_failure_is_reported_once() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(GatedSource {
            gate: gate.clone(),
            fail: true,
        });
        let mut loader = load_chapters(source);
        gate.notify_one();
        poll_until_settled(&mut loader).await;

        assert_eq!(
            loader.state().error(),
            Some("API returned 503: Service Unavailable")
        );
    }

    #[tokio::test]
    async fn test_verse_error_surfaces_as_message() {
        let source = Arc::new(GatedSource {
            gate: Arc::new(Notify::new()),
            fail: false,
        });
        let mut loader = load_verses(source, 200);
        poll_until_settled(&mut loader).await;
        assert_eq!(loader.state().error(), Some("Chapter not found: 200"));
    }

    #[test]
    fn test_settled_loader_never_changes() {
        let mut loader: Loader<Vec<Verse>> = Loader::settled(LoadState::Failed("x".into()));
        assert!(!loader.poll());
        assert_eq!(loader.state().error(), Some("x"));
    }
}
