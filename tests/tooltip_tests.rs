use perf_graphs::{DataPoint, GraphsConfig, Series, TooltipState, ViewState};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn view() -> ViewState {
    ViewState::new(
        GraphsConfig::default(),
        vec![Series::new(
            "A",
            vec![DataPoint::new(1.0, 1.0, "p1"), DataPoint::new(2.0, 2.0, "p2")],
        )],
    )
}

#[test]
fn test_hover_click_mouse_out_close() {
    let t0 = Instant::now();
    let p1 = DataPoint::new(1.0, 1.0, "p1");
    let p2 = DataPoint::new(2.0, 2.0, "p2");
    let mut view = view();
    assert_eq!(view.tooltip(), &TooltipState::Hidden);

    assert!(view.hover_point(p1.clone()));
    assert_eq!(view.tooltip(), &TooltipState::Preview(p1));

    assert!(view.click_point(p2.clone()));
    assert_eq!(view.tooltip(), &TooltipState::Locked(p2.clone()));

    view.mouse_out(t0);
    assert!(!view.advance(t0 + ms(250)));
    assert_eq!(view.tooltip(), &TooltipState::Locked(p2));
    assert!(view.tooltip().is_locked());

    assert!(view.close_tooltip());
    assert_eq!(view.tooltip(), &TooltipState::Hidden);
}

#[test]
fn test_preview_hides_after_delay() {
    let t0 = Instant::now();
    let mut view = view();
    view.hover_point(DataPoint::new(1.0, 1.0, "p1"));
    view.mouse_out(t0);
    assert_eq!(view.next_deadline(), Some(t0 + ms(250)));
    assert!(!view.advance(t0 + ms(200)));
    assert!(view.tooltip().is_visible());
    assert!(view.advance(t0 + ms(250)));
    assert!(!view.tooltip().is_visible());
}

#[test]
fn test_rehover_rearms_preview() {
    let t0 = Instant::now();
    let mut view = view();
    view.hover_point(DataPoint::new(1.0, 1.0, "p1"));
    view.mouse_out(t0);
    view.hover_point(DataPoint::new(2.0, 2.0, "p2"));
    assert!(!view.advance(t0 + ms(300)));
    assert_eq!(
        view.tooltip().target().map(|p| p.revision.as_str()),
        Some("p2")
    );
}
