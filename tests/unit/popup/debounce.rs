use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn burst_yields_single_relayout_after_window() {
    let t0 = Instant::now();
    let mut d = ResizeDebouncer::default();
    assert_eq!(d.window(), ms(100));

    for step in [0, 10, 40, 90] {
        d.notify(t0 + ms(step));
    }
    assert!(d.is_pending());
    assert!(!d.poll(t0 + ms(99)));
    assert!(d.poll(t0 + ms(100)));
    assert!(!d.poll(t0 + ms(150)));
    assert!(!d.is_pending());
}

#[test]
fn notification_after_window_opens_new_window() {
    let t0 = Instant::now();
    let mut d = ResizeDebouncer::new(ms(50));
    d.notify(t0);
    assert!(d.poll(t0 + ms(60)));
    d.notify(t0 + ms(70));
    assert_eq!(d.remaining(t0 + ms(80)), Some(ms(40)));
    assert!(!d.poll(t0 + ms(110)));
    assert!(d.poll(t0 + ms(120)));
}

#[test]
fn cancel_drops_pending_relayout() {
    let t0 = Instant::now();
    let mut d = ResizeDebouncer::new(ms(10));
    d.notify(t0);
    d.cancel();
    assert!(!d.poll(t0 + ms(20)));
    assert_eq!(d.remaining(t0), None);
}
