//! Background metadata loading.
//!
//! Probing shells out to ffprobe, which can take a while on large files, so
//! it runs on a worker thread. The result comes back over a channel that the
//! owning handle drains from the UI thread.

use crate::probe::MediaProbe;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::path::PathBuf;
use twinview_core::{Result, TwinViewError};

/// Outcome of polling a loader.
#[derive(Debug)]
pub enum LoadPoll {
    /// Still working.
    Pending,
    /// Finished, successfully or not.
    Done(Result<MediaProbe>),
}

/// Receiving end of a metadata load.
#[derive(Debug)]
pub struct MetadataLoader {
    rx: Receiver<Result<MediaProbe>>,
}

impl MetadataLoader {
    /// Probe `path` on a worker thread.
    pub fn spawn(path: PathBuf) -> Self {
        Self::spawn_with(move || MediaProbe::probe(&path))
    }

    /// Run an arbitrary metadata job on a worker thread.
    pub fn spawn_with<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<MediaProbe> + Send + 'static,
    {
        let (tx, loader) = Self::channel();
        let spawned = std::thread::Builder::new()
            .name("twinview-probe".to_string())
            .spawn(move || {
                // The handle may be gone by now; a closed channel is fine.
                let _ = tx.send(job());
            });

        if let Err(e) = spawned {
            let (tx, loader) = Self::channel();
            let _ = tx.send(Err(TwinViewError::Internal(format!(
                "Failed to start probe thread: {}",
                e
            ))));
            return loader;
        }
        loader
    }

    /// A loader fed by hand through the returned sender.
    pub fn channel() -> (Sender<Result<MediaProbe>>, Self) {
        let (tx, rx) = crossbeam_channel::bounded(1);
        (tx, Self { rx })
    }

    /// A loader that has already finished with `probe`.
    pub fn ready(probe: MediaProbe) -> Self {
        let (tx, loader) = Self::channel();
        let _ = tx.send(Ok(probe));
        loader
    }

    /// Non-blocking check for a result.
    pub fn poll(&self) -> LoadPoll {
        match self.rx.try_recv() {
            Ok(result) => LoadPoll::Done(result),
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Err(TryRecvError::Disconnected) => LoadPoll::Done(Err(TwinViewError::Internal(
                "metadata worker exited without a result".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ready_loader_completes_immediately() {
        let loader = MetadataLoader::ready(MediaProbe::synthetic("a.mp4", 3.0));
        match loader.poll() {
            LoadPoll::Done(Ok(probe)) => assert_eq!(probe.duration, 3.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_manual_loader_pending_until_sent() {
        let (tx, loader) = MetadataLoader::channel();
        assert!(matches!(loader.poll(), LoadPoll::Pending));
        tx.send(Ok(MediaProbe::synthetic("a.mp4", 1.0))).unwrap();
        assert!(matches!(loader.poll(), LoadPoll::Done(Ok(_))));
    }

    #[test]
    fn test_dropped_sender_reports_failure() {
        let (tx, loader) = MetadataLoader::channel();
        drop(tx);
        assert!(matches!(loader.poll(), LoadPoll::Done(Err(_))));
    }

    #[test]
    fn test_spawned_job_delivers_result() {
        let loader = MetadataLoader::spawn_with(|| Ok(MediaProbe::synthetic("b.mp4", 7.5)));
        let mut result = None;
        for _ in 0..200 {
            if let LoadPoll::Done(r) = loader.poll() {
                result = Some(r);
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(result.unwrap().unwrap().duration, 7.5);
    }
}
