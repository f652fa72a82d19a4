//! Log output of deck operations.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use decksim::Deck;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn short_deal_logs_a_warning() {
    let mut deck = Deck::new();
    let logs = capture_logs(|| {
        assert_eq!(deck.deal_hand(50).len(), 50);
        assert_eq!(deck.deal_hand(10).len(), 2);
    });

    let warnings: Vec<&str> = logs.lines().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "logs: {logs}");
    assert!(warnings[0].contains("not enough cards in the deck, dealing 2 cards instead"));
    assert!(warnings[0].contains("requested=10"));
    assert!(warnings[0].contains("available=2"));
}

#[test]
fn in_bounds_deal_logs_no_warning() {
    let mut deck = Deck::new();
    let logs = capture_logs(|| {
        assert_eq!(deck.deal_hand(52).len(), 52);
        assert!(deck.deal_hand(0).is_empty());
        assert!(deck.try_deal_hand(5).is_err());
    });

    assert!(!logs.contains("WARN"), "logs: {logs}");
}
