use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use koli_core::GeoPoint;

/// A source of device position fixes.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Current position, or None while no fix is available.
    async fn current_position(&self) -> Option<GeoPoint>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between position polls.
    pub interval_secs: u64,

    /// Fixes closer than this to the last delivered fix are dropped.
    pub min_distance_m: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            min_distance_m: 25.0,
        }
    }
}

/// Periodic position subscription with an explicit stop.
///
/// The polling task lives until `stop` is called or the handle is dropped;
/// either way the task is released, never leaked.
pub struct LocationWatch {
    task: Option<JoinHandle<()>>,
    receiver: watch::Receiver<Option<GeoPoint>>,
}

impl LocationWatch {
    /// Start polling the source on the configured interval.
    pub fn start(source: Arc<dyn PositionSource>, config: WatchConfig) -> Self {
        let (sender, receiver) = watch::channel(None);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(config.interval_secs));
            let mut last_delivered: Option<GeoPoint> = None;
            loop {
                ticker.tick().await;
                let Some(fix) = source.current_position().await else {
                    continue;
                };
                let moved_enough = match last_delivered {
                    None => true,
                    Some(previous) => previous.distance_m(fix) >= config.min_distance_m,
                };
                if !moved_enough {
                    continue;
                }
                last_delivered = Some(fix);
                if sender.send(Some(fix)).is_err() {
                    break;
                }
            }
        });
        Self {
            task: Some(task),
            receiver,
        }
    }

    /// Most recently delivered fix, if any.
    pub fn last_fix(&self) -> Option<GeoPoint> {
        *self.receiver.borrow()
    }

    /// Wait for the next delivered fix. None once the watch is stopped.
    pub async fn next_fix(&mut self) -> Option<GeoPoint> {
        if self.receiver.changed().await.is_err() {
            return None;
        }
        *self.receiver.borrow()
    }

    /// Stop polling. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replays a fixed list of fixes, then repeats the last entry.
    struct ScriptedSource {
        fixes: Mutex<Vec<Option<GeoPoint>>>,
    }

    impl ScriptedSource {
        fn new(fixes: Vec<Option<GeoPoint>>) -> Self {
            Self {
                fixes: Mutex::new(fixes),
            }
        }
    }

    #[async_trait]
    impl PositionSource for ScriptedSource {
        async fn current_position(&self) -> Option<GeoPoint> {
            let mut fixes = self.fixes.lock().unwrap();
            if fixes.len() > 1 {
                fixes.remove(0)
            } else {
                fixes.first().copied().flatten()
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_small_moves_are_suppressed() {
        let plateau = GeoPoint::new(5.3198, -4.0127);
        let nearby = GeoPoint::new(5.3199, -4.0127); // about ten meters north
        let bouake = GeoPoint::new(7.6898, -5.0281);

        let source = ScriptedSource::new(vec![Some(plateau), Some(nearby), Some(bouake)]);
        let mut watch = LocationWatch::start(Arc::new(source), WatchConfig::default());

        assert_eq!(watch.next_fix().await, Some(plateau));
        // The ten-meter shuffle never surfaces; the next delivered fix is
        // the real move
        assert_eq!(watch.next_fix().await, Some(bouake));
        watch.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_gate_measures_unrounded_meters() {
        let start = GeoPoint::new(5.3198, -4.0127);
        // 4.4 meters north, which rounds to zero kilometers at two decimals
        let small_step = GeoPoint::new(5.31984, -4.0127);

        let source = ScriptedSource::new(vec![Some(start), Some(small_step)]);
        let config = WatchConfig {
            interval_secs: 5,
            min_distance_m: 3.0,
        };
        let mut watch = LocationWatch::start(Arc::new(source), config);

        assert_eq!(watch.next_fix().await, Some(start));
        assert_eq!(watch.next_fix().await, Some(small_step));
        watch.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fix_delivers_nothing() {
        let source = ScriptedSource::new(vec![None]);
        let mut watch = LocationWatch::start(Arc::new(source), WatchConfig::default());

        let waited =
            tokio::time::timeout(Duration::from_secs(30), watch.next_fix()).await;
        assert!(waited.is_err());
        assert_eq!(watch.last_fix(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_ends_delivery() {
        let plateau = GeoPoint::new(5.3198, -4.0127);
        let source = ScriptedSource::new(vec![Some(plateau)]);
        let mut watch = LocationWatch::start(Arc::new(source), WatchConfig::default());

        assert_eq!(watch.next_fix().await, Some(plateau));
        assert!(watch.is_running());

        watch.stop();
        watch.stop();
        assert!(!watch.is_running());
        assert_eq!(watch.next_fix().await, None);
        // The last delivered fix survives the stop
        assert_eq!(watch.last_fix(), Some(plateau));
    }
}
