//! Behavioral tests for the reveal animator

mod support;

use futures::stream;
use folio_core::{RevealAnimator, RevealConfig, RevealOutcome, VisibilityEvent};
use support::FakeElement;

fn elements(count: usize) -> Vec<FakeElement> {
    (0..count).map(|_| FakeElement::default()).collect()
}

// ============================================================================
// PREPARATION BEHAVIORS
// ============================================================================

#[test]
fn given_elements_when_preparing_then_each_starts_hidden_with_stagger() {
    let els = elements(3);
    let animator = RevealAnimator::prepare(els.clone(), &RevealConfig::default());

    assert_eq!(animator.len(), 3);
    assert_eq!(animator.remaining(), 3);

    let delays: Vec<Option<String>> = els.iter().map(|e| e.style("transition-delay")).collect();
    assert_eq!(
        delays,
        vec![
            Some("0ms".to_string()),
            Some("100ms".to_string()),
            Some("200ms".to_string())
        ]
    );
    for el in &els {
        assert_eq!(el.style("opacity").as_deref(), Some("0"));
        assert_eq!(el.style("transform").as_deref(), Some("translateY(20px)"));
        assert_eq!(
            el.style("transition").as_deref(),
            Some("opacity 600ms ease, transform 600ms ease")
        );
    }
}

#[test]
fn given_no_elements_when_preparing_then_animator_is_already_complete() {
    let animator = RevealAnimator::<FakeElement>::prepare(Vec::new(), &RevealConfig::default());
    assert!(animator.is_empty());
    assert!(animator.is_complete());
}

// ============================================================================
// VISIBILITY BEHAVIORS
// ============================================================================

#[test]
fn given_hidden_element_when_it_enters_view_then_it_is_revealed() {
    let els = elements(2);
    let mut animator = RevealAnimator::prepare(els.clone(), &RevealConfig::default());

    let outcome = animator.handle(VisibilityEvent::entered(1));

    assert_eq!(outcome, RevealOutcome::Revealed(1));
    assert!(animator.is_revealed(1));
    assert!(!animator.is_revealed(0));
    assert_eq!(animator.remaining(), 1);
    assert_eq!(els.get(1).and_then(|e| e.style("opacity")).as_deref(), Some("1"));
    assert_eq!(
        els.get(1).and_then(|e| e.style("transform")).as_deref(),
        Some("translateY(0)")
    );
    assert_eq!(els.first().and_then(|e| e.style("opacity")).as_deref(), Some("0"));
}

#[test]
fn given_revealed_element_when_event_repeats_then_nothing_changes() {
    let els = elements(1);
    let mut animator = RevealAnimator::prepare(els.clone(), &RevealConfig::default());
    let _ = animator.handle(VisibilityEvent::entered(0));
    let writes = els.first().map(FakeElement::writes);

    assert_eq!(
        animator.handle(VisibilityEvent::entered(0)),
        RevealOutcome::AlreadyRevealed(0)
    );
    assert_eq!(
        animator.handle(VisibilityEvent::left(0)),
        RevealOutcome::AlreadyRevealed(0)
    );
    assert_eq!(els.first().map(FakeElement::writes), writes);
    assert_eq!(els.first().and_then(|e| e.style("opacity")).as_deref(), Some("1"));
}

#[test]
fn given_non_intersecting_event_when_handling_then_element_stays_hidden() {
    let mut animator = RevealAnimator::prepare(elements(1), &RevealConfig::default());

    assert_eq!(
        animator.handle(VisibilityEvent::left(0)),
        RevealOutcome::Hidden(0)
    );
    assert_eq!(
        animator.handle(VisibilityEvent::entered(9)),
        RevealOutcome::Unknown(9)
    );
    assert_eq!(animator.remaining(), 1);
}

// ============================================================================
// SUBSCRIPTION BEHAVIORS
// ============================================================================

#[tokio::test]
async fn given_event_stream_when_running_then_stops_once_all_revealed() {
    let els = elements(3);
    let animator = RevealAnimator::prepare(els.clone(), &RevealConfig::default());
    let events = stream::iter(vec![
        VisibilityEvent::entered(2),
        VisibilityEvent::left(0),
        VisibilityEvent::entered(2),
        VisibilityEvent::entered(0),
        VisibilityEvent::entered(1),
        VisibilityEvent::entered(1),
    ]);
    let mut revealed = Vec::new();

    let animator = animator.run(events, |index, _| revealed.push(index)).await;

    assert!(animator.is_complete());
    assert_eq!(revealed, vec![2, 0, 1]);
    assert!(els.iter().all(|e| e.style("opacity").as_deref() == Some("1")));
}

#[tokio::test]
async fn given_stream_ends_early_when_running_then_unseen_elements_stay_hidden() {
    let els = elements(2);
    let animator = RevealAnimator::prepare(els.clone(), &RevealConfig::default());
    let events = stream::iter(vec![VisibilityEvent::entered(0)]);

    let animator = animator.run(events, |_, _| {}).await;

    assert_eq!(animator.remaining(), 1);
    assert_eq!(els.get(1).and_then(|e| e.style("opacity")).as_deref(), Some("0"));
}

#[test]
fn given_custom_timing_when_preparing_then_styles_follow_config() {
    let config = RevealConfig {
        stagger_ms: 250,
        duration_ms: 300,
        offset_px: 40,
        ..RevealConfig::default()
    };
    let els = elements(2);
    let _animator = RevealAnimator::prepare(els.clone(), &config);

    let second = els.get(1);
    assert_eq!(
        second.and_then(|e| e.style("transition-delay")).as_deref(),
        Some("250ms")
    );
    assert_eq!(
        second.and_then(|e| e.style("transform")).as_deref(),
        Some("translateY(40px)")
    );
    assert_eq!(
        second.and_then(|e| e.style("transition")).as_deref(),
        Some("opacity 300ms ease, transform 300ms ease")
    );
}
